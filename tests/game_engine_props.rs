use broadside::{ai, GameConfig, GameEngine, Phase, ShotOutcome, Side, FLEET, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Random games always finish, with turns alternating after every shot
    /// that does not end the game.
    #[test]
    fn random_games_alternate_and_finish(seed in any::<u64>()) {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(seed)).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        engine.auto_place_human().unwrap();
        prop_assert_eq!(engine.phase(), Phase::InProgress(Side::Human));

        let mut shots = 0;
        let winner = loop {
            let report = match engine.phase() {
                Phase::InProgress(Side::Human) => {
                    let (row, col) = ai::random_target(&mut rng, engine.board(Side::Computer)).unwrap();
                    engine.fire_at(row, col).unwrap()
                }
                Phase::InProgress(Side::Computer) => engine.computer_turn().unwrap(),
                other => return Err(TestCaseError::fail(format!("unexpected phase {:?}", other))),
            };
            shots += 1;
            prop_assert!(shots <= 200);

            match report.winner {
                Some(side) => {
                    prop_assert_eq!(side, report.shooter);
                    prop_assert_eq!(engine.phase(), Phase::Finished(side));
                    break side;
                }
                None => {
                    prop_assert_eq!(engine.phase(), Phase::InProgress(report.shooter.opponent()));
                }
            }
        };

        let loser = winner.opponent();
        prop_assert!(engine.all_sunk(loser));
        prop_assert!(!engine.all_sunk(winner));
        prop_assert_eq!(engine.board(loser).hit_count(), TOTAL_SHIP_CELLS);
        prop_assert_eq!(engine.sunk_ship_names(loser).len(), FLEET.len());
        prop_assert!(engine.fire_at(0, 0).is_err());
        prop_assert!(engine.computer_turn().is_err());
        prop_assert_eq!(engine.phase(), Phase::Finished(winner));
    }

    /// Every sunk report names a ship that is now sunk, and no ship takes
    /// more hits than it has cells.
    #[test]
    fn hits_never_exceed_ship_length(seed in any::<u64>(), shots in 1..80usize) {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(seed)).unwrap();
        let mut rng = SmallRng::seed_from_u64(!seed);
        engine.auto_place_human().unwrap();

        for _ in 0..shots {
            if engine.phase().is_finished() {
                break;
            }
            let (row, col) = ai::random_target(&mut rng, engine.board(Side::Computer)).unwrap();
            let report = engine.fire_at(row, col).unwrap();
            if let ShotOutcome::Sunk(name) = report.outcome {
                prop_assert!(engine.sunk_ship_names(Side::Computer).contains(&name));
            }
            if engine.phase() == Phase::InProgress(Side::Computer) {
                engine.computer_turn().unwrap();
            }
            for side in [Side::Human, Side::Computer] {
                for ship in engine.ships(side) {
                    prop_assert!(ship.hits() <= ship.length());
                }
            }
        }
    }
}
