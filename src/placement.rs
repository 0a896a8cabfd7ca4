//! Human placement input protocols.
//!
//! Both strategies turn a stream of clicked cells into the cells of one ship.
//! The engine commits the ship when a strategy reports [`PlacementStep::Complete`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use crate::board::Board;
use crate::common::{GameError, PlacementError};
use crate::config::{PlacementMode, BOARD_SIZE};
use crate::ship::{Orientation, ShipType};

/// Progress after feeding one cell to a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementStep {
    /// Cell accepted; `selected` cells chosen so far for this ship.
    Selected { selected: usize },
    /// The ship's cells, validated and ready to commit.
    Complete(Vec<(usize, usize)>),
}

/// Turns placement clicks into ship cells.
pub trait PlacementStrategy {
    /// Feed the cell `(row, col)` for `ship`. A rejected cell leaves the strategy unchanged.
    fn select(
        &mut self,
        board: &Board,
        ship: ShipType,
        row: usize,
        col: usize,
    ) -> Result<PlacementStep, GameError>;

    /// Orientation for footprint-based placement; ignored by other strategies.
    fn set_orientation(&mut self, _orientation: Orientation) {}

    fn orientation(&self) -> Option<Orientation> {
        None
    }

    /// Cells chosen for the ship currently being placed.
    fn pending(&self) -> &[(usize, usize)] {
        &[]
    }

    /// Drop any partial selection.
    fn reset(&mut self) {}
}

impl PlacementMode {
    pub fn strategy(self) -> Box<dyn PlacementStrategy> {
        match self {
            PlacementMode::Footprint => Box::new(FootprintPlacement::default()),
            PlacementMode::Adjacent => Box::new(AdjacentPlacement::default()),
        }
    }
}

/// One click per ship: the origin of a straight footprint.
#[derive(Debug, Default)]
pub struct FootprintPlacement {
    orientation: Orientation,
}

impl PlacementStrategy for FootprintPlacement {
    fn select(
        &mut self,
        board: &Board,
        ship: ShipType,
        row: usize,
        col: usize,
    ) -> Result<PlacementStep, GameError> {
        board.check_placement(ship.length(), row, col, self.orientation)?;
        let cells = self.orientation.footprint(row, col, ship.length()).collect();
        Ok(PlacementStep::Complete(cells))
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    fn orientation(&self) -> Option<Orientation> {
        Some(self.orientation)
    }
}

/// One click per cell, each touching the previous one on a side.
///
/// Turns are allowed: a ship only has to be a 4-connected chain of free cells.
/// A cell is refused when the chain could no longer reach the ship's length from it.
#[derive(Debug, Default)]
pub struct AdjacentPlacement {
    pending: Vec<(usize, usize)>,
}

fn touches(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1
}

fn neighbours((row, col): (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    let grid = BOARD_SIZE as usize;
    [
        row.checked_sub(1).map(|r| (r, col)),
        (row + 1 < grid).then_some((row + 1, col)),
        col.checked_sub(1).map(|c| (row, c)),
        (col + 1 < grid).then_some((row, col + 1)),
    ]
    .into_iter()
    .flatten()
}

/// Whether `chain` can grow by `needed` more free cells, each touching the
/// one before. Depth is bounded by the longest ship.
fn can_extend(board: &Board, chain: &mut Vec<(usize, usize)>, needed: usize) -> bool {
    if needed == 0 {
        return true;
    }
    let Some(&last) = chain.last() else {
        return false;
    };
    for next in neighbours(last) {
        let free = matches!(board.cell(next.0, next.1), Ok(cell) if cell.ship().is_none());
        if !free || chain.contains(&next) {
            continue;
        }
        chain.push(next);
        let found = can_extend(board, chain, needed - 1);
        chain.pop();
        if found {
            return true;
        }
    }
    false
}

impl PlacementStrategy for AdjacentPlacement {
    fn select(
        &mut self,
        board: &Board,
        ship: ShipType,
        row: usize,
        col: usize,
    ) -> Result<PlacementStep, GameError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(PlacementError::OutOfBounds.into());
        }
        if board.cell(row, col)?.ship().is_some() {
            return Err(PlacementError::Overlaps.into());
        }
        if self.pending.contains(&(row, col)) {
            return Err(PlacementError::AlreadySelected.into());
        }
        if let Some(&last) = self.pending.last() {
            if !touches(last, (row, col)) {
                return Err(PlacementError::NotAdjacent.into());
            }
        }
        self.pending.push((row, col));
        let needed = ship.length().saturating_sub(self.pending.len());
        if !can_extend(board, &mut self.pending, needed) {
            self.pending.pop();
            return Err(PlacementError::Cornered.into());
        }
        if self.pending.len() == ship.length() {
            Ok(PlacementStep::Complete(mem::take(&mut self.pending)))
        } else {
            Ok(PlacementStep::Selected {
                selected: self.pending.len(),
            })
        }
    }

    fn pending(&self) -> &[(usize, usize)] {
        &self.pending
    }

    fn reset(&mut self) {
        self.pending.clear();
    }
}
