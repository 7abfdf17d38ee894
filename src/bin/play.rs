//! Console runner: plays one seeded game and prints every roll.

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snakes_ladders::board::presets;
use snakes_ladders::{
    Board, EngineConfig, GameBuilder, GameConfig, MoveOutcome, NoMovePolicy, OverflowPolicy,
    RuleChain, StartedPolicy,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// Snakes and ladders.
    Classic,
    /// Snakes, ladders, and coins.
    Coins,
    /// Snakes and coins, no ladders.
    NoLadders,
}

#[derive(Debug, Parser)]
#[command(name = "play", about = "Play a game of Snakes & Ladders")]
struct Args {
    /// Dice seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of players.
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Board layout.
    #[arg(long, value_enum, default_value_t = Preset::Classic)]
    board: Preset,

    /// Only an exact roll onto the final cell wins.
    #[arg(long)]
    exact_landing: bool,

    /// Pass the turn after a failed or successful start instead of rolling again.
    #[arg(long)]
    end_turn_on_start: bool,

    /// Give up after this many rolls (0 = never).
    #[arg(long, default_value_t = 10_000)]
    max_rolls: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let (board, rules): (Board, RuleChain) = match args.board {
        Preset::Classic => (presets::classic()?, RuleChain::classic()),
        Preset::Coins => (presets::with_coins()?, RuleChain::with_coins()),
        Preset::NoLadders => (presets::without_ladders()?, RuleChain::with_coins()),
    };

    let overflow = if args.exact_landing {
        OverflowPolicy::ExactLanding
    } else {
        OverflowPolicy::Clamp
    };
    let mut config = GameConfig::default().with_max_rolls(args.max_rolls);
    if args.end_turn_on_start {
        config = config
            .with_started_policy(StartedPolicy::EndTurn)
            .with_no_move_policy(NoMovePolicy::EndTurn);
    }

    let mut game = GameBuilder::new()
        .player_count(args.players)
        .board(board)
        .rules(rules)
        .engine_config(EngineConfig::default().with_overflow(overflow))
        .config(config)
        .build_seeded(args.seed)?;

    info!(seed = args.seed, players = args.players, board = ?args.board, "starting game");

    while !game.is_over() {
        if args.max_rolls != 0 && game.rolls() >= args.max_rolls {
            break;
        }
        let report = game.play_turn()?;
        let outcome = match report.outcome {
            Some(outcome) => outcome.to_string(),
            None => "overshot".to_string(),
        };
        println!(
            "#{:<4} {} rolled {} -> {} at {}",
            report.roll_number, report.player, report.roll, outcome, report.position
        );
        for effect in &report.effects {
            println!("      {}", effect);
        }
        if report.outcome == Some(MoveOutcome::Won) {
            break;
        }
    }

    let summary = game.summary();
    match summary.winner {
        Some(winner) => println!("{} wins after {} rolls", winner, summary.rolls),
        None => println!("no winner after {} rolls", summary.rolls),
    }
    for (player, position) in summary.positions {
        println!("  {}: {}", player, position);
    }
    Ok(())
}
