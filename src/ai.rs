// Random placement and targeting for the computer side.
// Both are rejection samplers: draw uniformly, keep the first valid draw.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::{
    board::Board,
    common::{GameError, PlacementError},
    config::BOARD_SIZE,
    player::Player,
    ship::{Orientation, ShipType},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Whether a ship of `length` still fits anywhere on `board`.
pub fn has_room(board: &Board, length: usize) -> bool {
    (0..GRID_SIZE).any(|row| {
        (0..GRID_SIZE).any(|col| {
            board.can_place(length, row, col, Orientation::Horizontal)
                || board.can_place(length, row, col, Orientation::Vertical)
        })
    })
}

/// Draw an origin uniformly over the whole grid and a fair orientation until
/// the footprint fits. Origins near the edge are drawn and rejected like any
/// other, so there is no fixed bound on the number of draws; the up-front
/// room check guarantees the loop ends.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    length: usize,
) -> Result<(usize, usize, Orientation), GameError> {
    if !has_room(board, length) {
        return Err(PlacementError::Overlaps.into());
    }
    loop {
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        let orient = random_orientation(rng);
        if board.can_place(length, row, col, orient) {
            return Ok((row, col, orient));
        }
    }
}

/// Place each of `ships`, in order, at random positions on `player`'s board.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    player: &mut Player,
    ships: &[ShipType],
) -> Result<(), GameError> {
    for &def in ships {
        let (row, col, orient) = random_placement(rng, player.board(), def.length())?;
        let cells: Vec<_> = orient.footprint(row, col, def.length()).collect();
        player.place_ship(def, &cells)?;
        debug!(
            "{}: {} placed at ({}, {}) {:?}",
            player.name(),
            def.name(),
            row,
            col,
            orient
        );
    }
    Ok(())
}

/// Draw cells uniformly until one that has not been fired upon comes up.
pub fn random_target<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
) -> Result<(usize, usize), GameError> {
    if board.untargeted().is_empty() {
        return Err(GameError::NoTargetsLeft);
    }
    loop {
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        if !board.is_targeted(row, col)? {
            return Ok((row, col));
        }
    }
}
