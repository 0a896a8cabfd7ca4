//! A participant's fleet and the board it sits on.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{GameError, ShotResult};
use crate::config::NUM_SHIPS;
use crate::ship::{Ship, ShipId, ShipType};

/// Owns one board and the ships placed on it, in placement order.
#[derive(Debug, Clone)]
pub struct Player {
    name: &'static str,
    board: Board,
    ships: Vec<Ship>,
}

impl Player {
    pub fn new(name: &'static str) -> Self {
        Player {
            name,
            board: Board::new(),
            ships: Vec::with_capacity(NUM_SHIPS),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.index())
    }

    /// Appends a ship to the fleet. Fails with `FleetFull` once six are present.
    pub fn add_ship(&mut self, ship: Ship) -> Result<ShipId, GameError> {
        if self.ships.len() >= NUM_SHIPS {
            return Err(GameError::FleetFull);
        }
        self.ships.push(ship);
        Ok(ShipId(self.ships.len() - 1))
    }

    /// Adds a ship of `ship_type` and puts it on `cells`, which the caller has validated.
    pub fn place_ship(
        &mut self,
        ship_type: ShipType,
        cells: &[(usize, usize)],
    ) -> Result<ShipId, GameError> {
        let id = self.add_ship(Ship::new(ship_type))?;
        let ship = &mut self.ships[id.index()];
        if let Err(e) = self.board.place(id, ship, cells) {
            self.ships.pop();
            return Err(e);
        }
        Ok(id)
    }

    /// Resolves an opponent's shot against this player's board.
    pub fn receive_shot(&mut self, row: usize, col: usize) -> Result<ShotResult, GameError> {
        self.board.shoot(row, col, &mut self.ships)
    }

    /// `true` once all six ships are on the board.
    pub fn is_fleet_complete(&self) -> bool {
        self.ships.len() == NUM_SHIPS
    }

    /// `true` when the fleet is non-empty and every ship is sunk.
    ///
    /// Only meaningful after placement: a partial fleet can be "all sunk".
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// Names of sunk ships, in placement order.
    pub fn sunk_ship_names(&self) -> Vec<&'static str> {
        self.ships
            .iter()
            .filter(|s| s.is_sunk())
            .map(Ship::name)
            .collect()
    }
}
