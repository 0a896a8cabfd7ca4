use broadside::{
    ai, Board, GameError, Orientation, PlacementError, Player, Ship, ShipId, ShipType, FLEET,
    TOTAL_SHIP_CELLS,
};
use rand::{rngs::SmallRng, SeedableRng};
use std::collections::HashSet;

#[test]
fn test_random_fleet_always_fits() {
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut player = Player::new("Computer");
        ai::place_fleet_randomly(&mut rng, &mut player, &FLEET).unwrap();

        assert!(player.is_fleet_complete());
        assert_eq!(player.board().occupied().count_ones(), TOTAL_SHIP_CELLS);
        for (ship, def) in player.ships().iter().zip(FLEET.iter()) {
            assert_eq!(ship.name(), def.name());
            assert_eq!(ship.cells().len(), def.length());
        }
    }
}

#[test]
fn test_random_placement_is_reproducible() {
    let place = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut player = Player::new("Computer");
        ai::place_fleet_randomly(&mut rng, &mut player, &FLEET).unwrap();
        player
            .ships()
            .iter()
            .map(|s| s.cells().to_vec())
            .collect::<Vec<_>>()
    };
    assert_eq!(place(42), place(42));
}

#[test]
fn test_random_target_never_repeats() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new();
    let mut ships: Vec<Ship> = Vec::new();
    let mut seen = HashSet::new();

    for _ in 0..100 {
        let (row, col) = ai::random_target(&mut rng, &board).unwrap();
        assert!(seen.insert((row, col)), "({}, {}) drawn twice", row, col);
        board.shoot(row, col, &mut ships).unwrap();
    }
    assert_eq!(
        ai::random_target(&mut rng, &board).unwrap_err(),
        GameError::NoTargetsLeft
    );
}

#[test]
fn test_placement_fails_when_no_room() {
    let mut board = Board::new();
    let row_ship = ShipType::new("Row", 10);
    let mut ships: Vec<Ship> = (0..10).map(|_| Ship::new(row_ship)).collect();
    for (row, ship) in ships.iter_mut().enumerate() {
        let cells: Vec<_> = Orientation::Horizontal.footprint(row, 0, 10).collect();
        board.place(ShipId(row), ship, &cells).unwrap();
    }

    assert!(!ai::has_room(&board, 1));
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        ai::random_placement(&mut rng, &board, 1).unwrap_err(),
        GameError::InvalidPlacement(PlacementError::Overlaps)
    );
}
