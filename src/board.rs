//! The 10×10 grid owned by one side: placement checks and shot resolution.

use crate::bitboard::BitBoard;
use crate::common::{GameError, PlacementError, ShotResult};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Ship, ShipId};
use core::fmt;

/// Cell mask sized for the game grid.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

const GRID: usize = BOARD_SIZE as usize;

const _: () = assert!(GRID * GRID <= u128::BITS as usize, "grid does not fit the cell mask");

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    /// Holds an intact segment of a ship.
    Occupied(ShipId),
    /// Held a ship segment that has been fired upon.
    Hit(ShipId),
    /// Fired upon, no ship.
    Miss,
}

impl Cell {
    /// Whether a shot already landed here.
    pub fn is_targeted(&self) -> bool {
        matches!(self, Cell::Hit(_) | Cell::Miss)
    }

    /// The ship occupying this cell, hit or not.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            Cell::Occupied(id) | Cell::Hit(id) => Some(id),
            Cell::Empty | Cell::Miss => None,
        }
    }
}

/// One side's grid. Ships are referenced by [`ShipId`]; the owning
/// [`crate::Player`] holds the ships themselves.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; GRID]; GRID],
    occupied: BB,
    targeted: BB,
}

impl Board {
    /// An empty board: no ships, no shots.
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; GRID]; GRID],
            occupied: BB::new(),
            targeted: BB::new(),
        }
    }

    /// Cells a ship of `length` would cover from `(row, col)` along `orientation`.
    pub fn footprint(
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<BB, PlacementError> {
        if length == 0 {
            return Err(PlacementError::ZeroLength);
        }
        BB::from_cells(orientation.footprint(row, col, length))
            .map_err(|_| PlacementError::OutOfBounds)
    }

    /// Validates a footprint against the bounds and the ships already placed.
    pub fn check_placement(
        &self,
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<BB, PlacementError> {
        let mask = Self::footprint(length, row, col, orientation)?;
        if !(self.occupied & mask).is_empty() {
            return Err(PlacementError::Overlaps);
        }
        Ok(mask)
    }

    /// `true` when the footprint stays on the board and touches no other ship.
    pub fn can_place(&self, length: usize, row: usize, col: usize, orientation: Orientation) -> bool {
        self.check_placement(length, row, col, orientation).is_ok()
    }

    /// Marks `cells` as occupied by ship `id` and records them on the ship.
    ///
    /// The caller must have validated the cells (see [`Board::can_place`]);
    /// only the grid bounds are checked here.
    pub fn place(
        &mut self,
        id: ShipId,
        ship: &mut Ship,
        cells: &[(usize, usize)],
    ) -> Result<(), GameError> {
        let mask = BB::from_cells(cells.iter().copied())?;
        debug_assert!(
            (self.occupied & mask).is_empty(),
            "{} placed over another ship",
            ship.name()
        );
        for &(r, c) in cells {
            self.cells[r][c] = Cell::Occupied(id);
        }
        self.occupied |= mask;
        ship.assign_cells(cells);
        Ok(())
    }

    /// Resolves a shot at `(row, col)`. `ships` is the owner's fleet, indexed by [`ShipId`].
    pub fn shoot(
        &mut self,
        row: usize,
        col: usize,
        ships: &mut [Ship],
    ) -> Result<ShotResult, GameError> {
        if self.targeted.get(row, col)? {
            return Err(GameError::AlreadyTargeted);
        }
        let result = match self.cells[row][col] {
            Cell::Occupied(id) => {
                let ship = ships
                    .get_mut(id.index())
                    .ok_or(GameError::UnknownShip(id))?;
                self.cells[row][col] = Cell::Hit(id);
                if ship.register_hit() {
                    ShotResult::Sunk(id)
                } else {
                    ShotResult::Hit(id)
                }
            }
            Cell::Empty => {
                self.cells[row][col] = Cell::Miss;
                ShotResult::Miss
            }
            Cell::Hit(_) | Cell::Miss => return Err(GameError::AlreadyTargeted),
        };
        self.targeted.set(row, col)?;
        Ok(result)
    }

    /// State of the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if row >= GRID || col >= GRID {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(self.cells[row][col])
    }

    pub fn is_targeted(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.targeted.get(row, col)?)
    }

    /// Every cell holding a ship segment, hit or not.
    pub fn occupied(&self) -> BB {
        self.occupied
    }

    /// Every cell fired upon so far.
    pub fn targeted(&self) -> BB {
        self.targeted
    }

    /// Cells not yet fired upon.
    pub fn untargeted(&self) -> BB {
        !self.targeted
    }

    pub fn hit_count(&self) -> usize {
        (self.targeted & self.occupied).count_ones()
    }

    pub fn miss_count(&self) -> usize {
        self.targeted.count_ones() - self.hit_count()
    }

    /// Row-major view of the grid, for rendering.
    pub fn rows(&self) -> &[[Cell; GRID]; GRID] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(_) => 'S',
                    Cell::Hit(_) => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
