use broadside::{
    Board, Cell, GameError, Orientation, PlacementError, Ship, ShipId, ShipType, ShotResult,
    BOARD_SIZE,
};

const N: usize = BOARD_SIZE as usize;

fn board_with_submarine() -> (Board, Vec<Ship>) {
    let mut board = Board::new();
    let mut ships = vec![Ship::new(ShipType::new("Sous-marin 1", 2))];
    let cells: Vec<_> = Orientation::Horizontal.footprint(0, 0, 2).collect();
    board.place(ShipId(0), &mut ships[0], &cells).unwrap();
    (board, ships)
}

#[test]
fn test_two_cell_ship_hit_then_sunk() {
    let (mut board, mut ships) = board_with_submarine();
    assert_eq!(board.cell(0, 0).unwrap(), Cell::Occupied(ShipId(0)));
    assert_eq!(board.cell(0, 1).unwrap(), Cell::Occupied(ShipId(0)));
    assert_eq!(ships[0].cells(), &[(0, 0), (0, 1)]);

    assert_eq!(board.shoot(0, 0, &mut ships).unwrap(), ShotResult::Hit(ShipId(0)));
    assert_eq!(ships[0].hits(), 1);
    assert!(!ships[0].is_sunk());

    assert_eq!(board.shoot(0, 1, &mut ships).unwrap(), ShotResult::Sunk(ShipId(0)));
    assert_eq!(ships[0].hits(), 2);
    assert!(ships[0].is_sunk());
    assert_eq!(board.cell(0, 1).unwrap(), Cell::Hit(ShipId(0)));
    assert_eq!(board.hit_count(), 2);
}

#[test]
fn test_place_touches_only_footprint() {
    let (board, _) = board_with_submarine();
    for r in 0..N {
        for c in 0..N {
            if (r, c) != (0, 0) && (r, c) != (0, 1) {
                assert_eq!(board.cell(r, c).unwrap(), Cell::Empty, "cell ({}, {})", r, c);
            }
        }
    }
    assert_eq!(board.occupied().count_ones(), 2);
}

#[test]
fn test_carrier_past_right_edge_rejected() {
    let board = Board::new();
    assert!(!board.can_place(5, 0, 6, Orientation::Horizontal));
    assert_eq!(
        board.check_placement(5, 0, 6, Orientation::Horizontal),
        Err(PlacementError::OutOfBounds)
    );
    assert!(board.can_place(5, 0, 5, Orientation::Horizontal));
    assert!(!board.can_place(5, 6, 0, Orientation::Vertical));
    assert_eq!(board, Board::new());
}

#[test]
fn test_overlap_rejected() {
    let mut board = Board::new();
    let mut destroyer = Ship::new(ShipType::new("Destroyer 1", 3));
    let cells: Vec<_> = Orientation::Vertical.footprint(2, 2, 3).collect();
    board.place(ShipId(0), &mut destroyer, &cells).unwrap();

    assert!(!board.can_place(4, 3, 0, Orientation::Horizontal));
    assert_eq!(
        board.check_placement(4, 3, 0, Orientation::Horizontal),
        Err(PlacementError::Overlaps)
    );
    assert!(board.can_place(4, 5, 0, Orientation::Horizontal));
}

#[test]
fn test_miss_marks_cell() {
    let mut board = Board::new();
    let mut ships: Vec<Ship> = Vec::new();
    assert_eq!(board.shoot(5, 5, &mut ships).unwrap(), ShotResult::Miss);
    assert_eq!(board.cell(5, 5).unwrap(), Cell::Miss);
    assert!(board.is_targeted(5, 5).unwrap());
    assert_eq!(board.miss_count(), 1);
    assert_eq!(board.hit_count(), 0);
}

#[test]
fn test_second_shot_at_same_cell_rejected() {
    let (mut board, mut ships) = board_with_submarine();
    board.shoot(0, 0, &mut ships).unwrap();
    board.shoot(4, 4, &mut ships).unwrap();
    let before = board.clone();

    assert_eq!(board.shoot(0, 0, &mut ships).unwrap_err(), GameError::AlreadyTargeted);
    assert_eq!(board.shoot(4, 4, &mut ships).unwrap_err(), GameError::AlreadyTargeted);
    assert_eq!(board, before);
    assert_eq!(ships[0].hits(), 1);
}

#[test]
fn test_coordinates_outside_grid() {
    let mut board = Board::new();
    let mut ships: Vec<Ship> = Vec::new();
    assert_eq!(
        board.shoot(10, 0, &mut ships).unwrap_err(),
        GameError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        board.cell(0, 10).unwrap_err(),
        GameError::OutOfBounds { row: 0, col: 10 }
    );
    assert_eq!(board.targeted().count_ones(), 0);
}

#[test]
fn test_zero_length_ship_never_fits() {
    let board = Board::new();
    assert!(!board.can_place(0, 3, 3, Orientation::Horizontal));
    assert_eq!(
        board.check_placement(0, 3, 3, Orientation::Vertical),
        Err(PlacementError::ZeroLength)
    );
    assert_eq!(
        Board::footprint(0, 0, 0, Orientation::Horizontal),
        Err(PlacementError::ZeroLength)
    );
}

#[test]
fn test_untargeted_shrinks_with_each_shot() {
    let (mut board, mut ships) = board_with_submarine();
    assert_eq!(board.untargeted().count_ones(), 100);
    board.shoot(0, 0, &mut ships).unwrap();
    board.shoot(9, 9, &mut ships).unwrap();
    assert_eq!(board.untargeted().count_ones(), 98);
    assert!(!board.untargeted().get(9, 9).unwrap());
}
