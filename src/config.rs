use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 6;

/// Fleet composition and placement order, identical for both sides.
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Porte-avions", 5),
    ShipType::new("Croiseur", 4),
    ShipType::new("Destroyer 1", 3),
    ShipType::new("Destroyer 2", 3),
    ShipType::new("Sous-marin 1", 2),
    ShipType::new("Sous-marin 2", 2),
];

/// Total number of ship segments in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2 + 2;

/// Pause a presentation layer should take before asking for the computer's shot.
pub const COMPUTER_TURN_DELAY_MS: u64 = 1000;

/// How the human enters ship placements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum PlacementMode {
    /// One cell per ship: the origin, extended along the selected orientation.
    #[default]
    Footprint,
    /// One cell at a time, each 4-adjacent to the previous one.
    Adjacent,
}

/// Runtime options for a [`crate::GameEngine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed RNG seed for reproducible games; drawn from the OS when `None`.
    pub seed: Option<u64>,
    pub placement: PlacementMode,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_placement(mut self, placement: PlacementMode) -> Self {
        self.placement = placement;
        self
    }
}
