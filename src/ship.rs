//! Ship identity, orientation and hit tracking.

use alloc::vec::Vec;
use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the row: `(row, col + i)`.
    #[default]
    Horizontal,
    /// Extends down the column: `(row + i, col)`.
    Vertical,
}

impl Orientation {
    /// Cell `i` of a ship of this orientation starting at `(row, col)`.
    #[inline]
    pub fn step(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }

    /// The `length` cells of a ship starting at `(row, col)`.
    pub fn footprint(
        self,
        row: usize,
        col: usize,
        length: usize,
    ) -> impl Iterator<Item = (usize, usize)> {
        (0..length).map(move |i| self.step(row, col, i))
    }

    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// Index of a ship in its owner's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipId(pub usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A ship of the fleet. Cells are assigned once, when the ship is placed.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    cells: Vec<(usize, usize)>,
    hits: usize,
}

impl Ship {
    /// An unplaced, undamaged ship.
    pub fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            cells: Vec::new(),
            hits: 0,
        }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Occupied cells in placement order; empty until placed.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length()
    }

    pub(crate) fn assign_cells(&mut self, cells: &[(usize, usize)]) {
        debug_assert!(self.cells.is_empty(), "{} placed twice", self.name());
        debug_assert_eq!(cells.len(), self.length());
        self.cells = cells.to_vec();
    }

    /// Records a hit. Returns `true` when this hit sank the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.is_sunk() {
            return false;
        }
        self.hits += 1;
        self.is_sunk()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, hits: {}, cells: {:?} }}",
            self.name(),
            self.length(),
            self.hits,
            self.cells,
        )
    }
}
