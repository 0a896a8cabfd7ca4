use broadside::{BitBoard, BitBoardError, GameError};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u128, 10>::try_new().is_ok());

    let err = BitBoard::<u64, 10>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 10, capacity: 64 })));
}

#[test]
fn test_get_set_and_bounds() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert!(bb.is_empty());

    bb.set(9, 9).unwrap();
    assert!(bb.get(9, 9).unwrap());
    assert!(!bb.get(0, 0).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(10, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 10, col: 0 }
    );
    assert!(bb.get(0, 10).is_err());
}

#[test]
fn test_from_cells_and_iteration_order() {
    let bb = BitBoard::<u128, 10>::from_cells([(3, 3), (0, 1)]).unwrap();
    let cells: Vec<_> = bb.cells().collect();
    assert_eq!(cells, vec![(0, 1), (3, 3)]);

    assert!(BitBoard::<u128, 10>::from_cells([(0, 0), (0, 10)]).is_err());
}

#[test]
fn test_complement_stays_inside_grid() {
    let full = BitBoard::<u128, 10>::full();
    assert_eq!(full.count_ones(), 100);
    assert!((!full).is_empty());

    let one = BitBoard::<u128, 10>::from_cells([(4, 4)]).unwrap();
    assert_eq!((!one).count_ones(), 99);
    assert_eq!((one | !one), full);
    assert!((one & !one).is_empty());
}

#[test]
fn test_bitboard_errors_convert_to_game_errors() {
    assert_eq!(
        GameError::from(BitBoardError::IndexOutOfBounds { row: 3, col: 12 }),
        GameError::OutOfBounds { row: 3, col: 12 }
    );
    let too_large = BitBoardError::SizeTooLarge { n: 10, capacity: 64 };
    assert_eq!(GameError::from(too_large), GameError::BitBoardError(too_large));
    // The game grid itself always fits.
    assert!(BitBoard::<u128, 10>::try_new().is_ok());
}
