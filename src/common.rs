//! Common types for the engine: errors, sides and shot results.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::ship::ShipId;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// The side facing this one.
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Outcome of a shot as seen by the board that received it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    Miss,
    /// Hit a ship that is still afloat.
    Hit(ShipId),
    /// Hit the last intact segment of a ship.
    Sunk(ShipId),
}

impl ShotResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }

    /// The ship that was struck, if any.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            ShotResult::Miss => None,
            ShotResult::Hit(id) | ShotResult::Sunk(id) => Some(id),
        }
    }
}

/// Result of a shot as reported to the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShotOutcome {
    Miss,
    Hit,
    /// The shot sank a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Why a placement request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Part of the footprint falls outside the grid.
    OutOfBounds,
    /// A target cell already holds a ship.
    Overlaps,
    /// The cell does not touch the previously chosen cell of the same ship.
    NotAdjacent,
    /// The cell was already chosen for the ship being placed.
    AlreadySelected,
    /// No chain of free cells long enough for the ship continues from the cell.
    Cornered,
    /// A ship needs at least one cell.
    ZeroLength,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship would extend past the edge of the board"),
            PlacementError::Overlaps => write!(f, "ship would overlap another ship"),
            PlacementError::NotAdjacent => write!(f, "cell must touch the previous cell"),
            PlacementError::AlreadySelected => write!(f, "cell is already part of this ship"),
            PlacementError::Cornered => {
                write!(f, "not enough free room to finish the ship from here")
            }
            PlacementError::ZeroLength => write!(f, "ship has no cells"),
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Mask error other than an index outside the grid. Only `SizeTooLarge`
    /// lands here, which the game grid rules out at compile time.
    BitBoardError(BitBoardError),
    /// Coordinates outside the 10×10 grid.
    OutOfBounds { row: usize, col: usize },
    /// Placement rejected; nothing changed.
    InvalidPlacement(PlacementError),
    /// A seventh ship was committed to a fleet.
    FleetFull,
    /// The cell was already fired upon.
    AlreadyTargeted,
    /// The caller's side is not the active side.
    OutOfTurn,
    /// Placement input arrived outside the placement phase.
    NotPlacing,
    /// The game has a winner; no more shots are accepted.
    GameOver,
    /// Every cell of the target board has been fired upon.
    NoTargetsLeft,
    /// A cell refers to a ship missing from the fleet.
    UnknownShip(ShipId),
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => GameError::OutOfBounds { row, col },
            other => GameError::BitBoardError(other),
        }
    }
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the board", row, col)
            }
            GameError::InvalidPlacement(e) => write!(f, "Invalid placement: {}", e),
            GameError::FleetFull => write!(f, "Fleet already holds every ship"),
            GameError::AlreadyTargeted => write!(f, "That cell was already fired upon"),
            GameError::OutOfTurn => write!(f, "It is not your turn"),
            GameError::NotPlacing => write!(f, "Ships can only be placed before the battle"),
            GameError::GameOver => write!(f, "The game is over"),
            GameError::NoTargetsLeft => write!(f, "No untargeted cells remain"),
            GameError::UnknownShip(id) => write!(f, "No ship with index {} in the fleet", id.index()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
