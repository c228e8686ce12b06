//! CLI Pig example.
//!
//! ```text
//! cargo run --example cli_pig -- --player1 human --player2 computer --timed --seed 7
//! ```
//!
//! Set `RUST_LOG=pigrs=debug` to see the engine's diagnostic log on stderr.

#![allow(clippy::missing_docs_in_private_items)]

use core::time::Duration;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use pigrs::{
    DecisionRequest, Die, Match, MatchEvent, MatchOptions, Player, PlayerKind, Policy,
    SystemClock, TimedMatch,
};
use tracing_subscriber::EnvFilter;

/// Play Pig in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Who plays seat 1: `human` or `computer`.
    #[arg(long, default_value = "human")]
    player1: PlayerKind,
    /// Who plays seat 2: `human` or `computer`.
    #[arg(long, default_value = "human")]
    player2: PlayerKind,
    /// End the match when the clock runs out.
    #[arg(long)]
    timed: bool,
    /// Seed for the die; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Score needed to win.
    #[arg(long, default_value_t = pigrs::options::DEFAULT_TARGET_SCORE)]
    target: u32,
    /// Time limit in seconds for `--timed`.
    #[arg(long, default_value_t = pigrs::options::DEFAULT_TIME_LIMIT.as_secs())]
    time_limit_secs: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let options = MatchOptions::default()
        .with_target_score(args.target)
        .with_time_limit(Duration::from_secs(args.time_limit_secs));
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    println!("Pig: first to {} wins (seed {seed})", options.target_score);

    let policies = [
        Policy::from_kind(args.player1, &options, || prompt_decision),
        Policy::from_kind(args.player2, &options, || prompt_decision),
    ];
    let game = Match::new(
        options,
        [Player::new("Player 1"), Player::new("Player 2")],
        policies,
    );
    let mut die = Die::new(seed);
    let mut observer = print_event;

    let result = if args.timed {
        println!("Timed match: {:?} on the clock.", options.time_limit);
        TimedMatch::new(game, SystemClock::new()).play(&mut die, &mut observer)
    } else {
        let mut game = game;
        game.play(&mut die, &mut observer)
    };

    if result.winner.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_event(event: &MatchEvent<'_>) {
    if matches!(
        event,
        MatchEvent::TurnStarted { .. } | MatchEvent::TimeUp | MatchEvent::Won { .. }
    ) {
        println!();
    }
    println!("{event}");
}

fn prompt_decision(request: &DecisionRequest<'_>) -> String {
    if request.retry {
        println!("Please answer r or h.");
    }
    let context = &request.context;
    print!(
        "{} (turn total {}, opponent {}): roll(r) or hold(h)? ",
        context.player, context.turn_total, context.opponent_score
    );
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => {
            println!("\nGoodbye.");
            std::process::exit(0);
        }
        Ok(_) => input,
    }
}
