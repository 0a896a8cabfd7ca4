//! Commonly used types and utilities for ease of import.

pub use crate::{
    GameConfig, GameEngine, GameError, Orientation, Phase, PlacementMode, PlacementUpdate, Prompt,
    ShotOutcome, ShotReport, Side,
};

#[cfg(feature = "std")]
pub use crate::cli::{coord_to_string, parse_coord, TurnPacer};
