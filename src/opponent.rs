use crate::{
    ai,
    board::Board,
    common::{GameError, ShotOutcome},
    config::FLEET,
    player::Player,
};
use rand::rngs::SmallRng;

/// Strategy driving the computer side.
pub trait Opponent {
    /// Place the whole fleet onto `player`'s board.
    fn place_fleet(&mut self, rng: &mut SmallRng, player: &mut Player) -> Result<(), GameError>;

    /// Choose the next cell to fire at on `enemy`. Must be untargeted.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        enemy: &Board,
    ) -> Result<(usize, usize), GameError>;

    /// Inform the opponent of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: (usize, usize), _outcome: ShotOutcome) {}
}

/// Places ships at random and fires uniformly at untargeted cells.
/// Keeps no memory of earlier hits.
#[derive(Debug, Default)]
pub struct RandomOpponent;

impl RandomOpponent {
    pub fn new() -> Self {
        Self
    }
}

impl Opponent for RandomOpponent {
    fn place_fleet(&mut self, rng: &mut SmallRng, player: &mut Player) -> Result<(), GameError> {
        ai::place_fleet_randomly(rng, player, &FLEET)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        enemy: &Board,
    ) -> Result<(usize, usize), GameError> {
        ai::random_target(rng, enemy)
    }
}
