#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    cli::{run_interactive, TurnPacer},
    init_logging, GameConfig, GameEngine, PlacementMode, COMPUTER_TURN_DELAY_MS,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = PlacementMode::Footprint)]
        placement: PlacementMode,
        #[arg(long, default_value_t = COMPUTER_TURN_DELAY_MS, help = "Pause before each computer shot, in milliseconds")]
        delay_ms: u64,
    },
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let Commands::Play {
        seed,
        placement,
        delay_ms,
    } = cli.command.unwrap_or(Commands::Play {
        seed: None,
        placement: PlacementMode::Footprint,
        delay_ms: COMPUTER_TURN_DELAY_MS,
    });

    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut config = GameConfig::default().with_placement(placement);
    config.seed = seed;
    let engine = GameEngine::new(config)?;
    run_interactive(engine, TurnPacer::new(Duration::from_millis(delay_ms))).await
}
