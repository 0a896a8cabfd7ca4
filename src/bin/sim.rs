//! Plays full games with both sides automated and prints one JSON line per game.

use broadside::{ai, init_logging_with, GameConfig, GameEngine, Phase, Side};
use clap::Parser;
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[derive(Parser)]
#[command(about = "Random player against the computer")]
struct Args {
    /// Seed of the first game; game `i` uses `seed + i`.
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging_with(LevelFilter::Warn);
    let args = Args::parse();

    for i in 0..args.games {
        let seed = args.seed.wrapping_add(i);
        let mut engine = GameEngine::new(GameConfig::default().with_seed(seed))?;
        // The simulated human aims with its own stream so the computer's draws stay seed-stable.
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        engine.auto_place_human()?;

        let mut turns = 0usize;
        let final_shot = loop {
            let report = match engine.phase() {
                Phase::InProgress(Side::Human) => {
                    let (row, col) = ai::random_target(&mut rng, engine.board(Side::Computer))?;
                    engine.fire_at(row, col)?
                }
                Phase::InProgress(Side::Computer) => engine.computer_turn()?,
                phase => anyhow::bail!("no shot to take in phase {:?}", phase),
            };
            turns += 1;
            if report.game_over() {
                break report;
            }
        };
        let winner = final_shot.shooter;

        let human = engine.board(Side::Computer);
        let computer = engine.board(Side::Human);
        let result = json!({
            "seed": seed,
            "winner": winner,
            "turns": turns,
            "phase": engine.phase(),
            "final_shot": final_shot,
            "player": {
                "shots": human.targeted().count_ones(),
                "hits": human.hit_count(),
                "sunk": engine.sunk_ship_names(Side::Computer),
            },
            "computer": {
                "shots": computer.targeted().count_ones(),
                "hits": computer.hit_count(),
                "sunk": engine.sunk_ship_names(Side::Human),
            },
        });
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}
