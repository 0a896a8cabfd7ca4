use broadside::{Orientation, Ship, ShipType, FLEET};

#[test]
fn test_fleet_composition() {
    let lengths: Vec<_> = FLEET.iter().map(|s| s.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2, 2]);
    assert_eq!(FLEET[0].name(), "Porte-avions");
    assert_eq!(FLEET[5].name(), "Sous-marin 2");
}

#[test]
fn test_footprint_directions() {
    let h: Vec<_> = Orientation::Horizontal.footprint(2, 3, 3).collect();
    assert_eq!(h, vec![(2, 3), (2, 4), (2, 5)]);
    let v: Vec<_> = Orientation::Vertical.footprint(2, 3, 3).collect();
    assert_eq!(v, vec![(2, 3), (3, 3), (4, 3)]);
    assert_eq!(Orientation::Horizontal.flipped(), Orientation::Vertical);
}

#[test]
fn test_new_ship_is_unplaced_and_afloat() {
    let ship = Ship::new(ShipType::new("Croiseur", 4));
    assert_eq!(ship.name(), "Croiseur");
    assert_eq!(ship.length(), 4);
    assert_eq!(ship.hits(), 0);
    assert!(!ship.is_sunk());
    assert!(!ship.is_placed());
    assert!(ship.cells().is_empty());
}
