use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    ai,
    board::{Board, Cell},
    common::{GameError, ShotOutcome, ShotResult, Side},
    config::{GameConfig, FLEET, NUM_SHIPS},
    opponent::{Opponent, RandomOpponent},
    placement::{PlacementStep, PlacementStrategy},
    player::Player,
    ship::{Orientation, Ship, ShipType},
};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum Phase {
    /// The human is placing `FLEET[next_ship..]`; the computer fleet is already down.
    PlacingHuman { next_ship: usize },
    /// Battle; the side holds the next shot.
    InProgress(Side),
    /// Terminal; the side won.
    Finished(Side),
}

impl Phase {
    pub fn active_side(&self) -> Option<Side> {
        match *self {
            Phase::InProgress(side) => Some(side),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match *self {
            Phase::Finished(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Finished(_))
    }
}

/// Status line for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    PlaceShip(ShipType),
    Turn(Side),
    Won(Side),
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::PlaceShip(def) => {
                write!(f, "Place your {} ({} cells)", def.name(), def.length())
            }
            Prompt::Turn(Side::Human) => write!(f, "Your turn"),
            Prompt::Turn(Side::Computer) => write!(f, "Computer's turn"),
            Prompt::Won(Side::Human) => write!(f, "You won!"),
            Prompt::Won(Side::Computer) => write!(f, "The computer won!"),
        }
    }
}

/// Result of a placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementUpdate {
    /// A cell was accepted; `ship` still needs more cells.
    Selected { ship: ShipType, selected: usize },
    /// `ship` was committed; `next` is the one to place now.
    Placed { ship: ShipType, next: ShipType },
    /// `ship` was the last one. Targeting the computer board may begin.
    FleetReady { ship: ShipType },
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotReport {
    pub shooter: Side,
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
    /// Set when this shot ended the game.
    pub winner: Option<Side>,
}

impl ShotReport {
    pub fn hit(&self) -> bool {
        self.outcome.is_hit()
    }

    pub fn sunk_ship(&self) -> Option<&'static str> {
        match self.outcome {
            ShotOutcome::Sunk(name) => Some(name),
            _ => None,
        }
    }

    pub fn game_over(&self) -> bool {
        self.winner.is_some()
    }
}

impl fmt::Display for ShotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.shooter, self.outcome) {
            (Side::Human, ShotOutcome::Miss) => write!(f, "Miss."),
            (Side::Human, ShotOutcome::Hit) => write!(f, "Hit!"),
            (Side::Human, ShotOutcome::Sunk(name)) => write!(f, "You sank the {}!", name),
            (Side::Computer, ShotOutcome::Miss) => write!(f, "The computer missed."),
            (Side::Computer, ShotOutcome::Hit) => write!(f, "The computer hit one of your ships."),
            (Side::Computer, ShotOutcome::Sunk(name)) => {
                write!(f, "The computer sank your {}!", name)
            }
        }
    }
}

/// Owns both sides and runs placement, turns and win detection.
///
/// The engine never waits: a presentation layer feeds it placement clicks
/// and shots, and calls [`GameEngine::computer_turn`] whenever it is the
/// computer's move, after whatever pause it likes.
pub struct GameEngine {
    human: Player,
    computer: Player,
    phase: Phase,
    placement: Box<dyn PlacementStrategy>,
    opponent: Box<dyn Opponent>,
    rng: SmallRng,
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        #[cfg(feature = "std")]
        None => SmallRng::from_rng(&mut rand::rng()),
        // No entropy source without std; callers should pass a seed.
        #[cfg(not(feature = "std"))]
        None => SmallRng::seed_from_u64(0),
    }
}

impl GameEngine {
    /// Engine with the random computer opponent, already at the start of a new game.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_opponent(config, Box::new(RandomOpponent::new()))
    }

    /// Engine driven by a custom computer strategy.
    pub fn with_opponent(
        config: GameConfig,
        opponent: Box<dyn Opponent>,
    ) -> Result<Self, GameError> {
        let mut engine = GameEngine {
            human: Player::new("Player"),
            computer: Player::new("Computer"),
            phase: Phase::PlacingHuman { next_ship: 0 },
            placement: config.placement.strategy(),
            opponent,
            rng: seeded_rng(config.seed),
        };
        engine.new_game()?;
        Ok(engine)
    }

    /// Discards all state, places the computer fleet and restarts human placement.
    pub fn new_game(&mut self) -> Result<Prompt, GameError> {
        self.human = Player::new("Player");
        self.computer = Player::new("Computer");
        self.placement.reset();
        self.phase = Phase::PlacingHuman { next_ship: 0 };
        self.opponent.place_fleet(&mut self.rng, &mut self.computer)?;
        info!("new game: computer fleet placed, waiting for player placement");
        Ok(self.prompt())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// What the user should be told right now.
    pub fn prompt(&self) -> Prompt {
        match self.phase {
            Phase::PlacingHuman { next_ship } => Prompt::PlaceShip(FLEET[next_ship]),
            Phase::InProgress(side) => Prompt::Turn(side),
            Phase::Finished(winner) => Prompt::Won(winner),
        }
    }

    /// Ships the human still has to place, in order.
    pub fn remaining_ships(&self) -> &[ShipType] {
        match self.phase {
            Phase::PlacingHuman { next_ship } => &FLEET[next_ship..],
            _ => &[],
        }
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.placement.set_orientation(orientation);
    }

    /// Orientation used by footprint placement; `None` for cell-by-cell placement.
    pub fn orientation(&self) -> Option<Orientation> {
        self.placement.orientation()
    }

    /// Cells already chosen for the ship being placed.
    pub fn pending_cells(&self) -> &[(usize, usize)] {
        self.placement.pending()
    }

    fn placing_index(&self) -> Result<usize, GameError> {
        match self.phase {
            Phase::PlacingHuman { next_ship } => Ok(next_ship),
            _ => Err(GameError::NotPlacing),
        }
    }

    /// Human placement input for the current ship.
    pub fn request_placement(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<PlacementUpdate, GameError> {
        let index = self.placing_index()?;
        let ship = FLEET[index];
        let step = match self.placement.select(self.human.board(), ship, row, col) {
            Ok(step) => step,
            Err(e) => {
                warn!("placement of {} at ({}, {}) rejected: {}", ship.name(), row, col, e);
                return Err(e);
            }
        };
        match step {
            PlacementStep::Selected { selected } => Ok(PlacementUpdate::Selected { ship, selected }),
            PlacementStep::Complete(cells) => self.commit_human_ship(index, &cells),
        }
    }

    /// Places every remaining human ship at random.
    pub fn auto_place_human(&mut self) -> Result<PlacementUpdate, GameError> {
        let mut index = self.placing_index()?;
        self.placement.reset();
        loop {
            let ship = FLEET[index];
            let (row, col, orient) =
                ai::random_placement(&mut self.rng, self.human.board(), ship.length())?;
            let cells: Vec<_> = orient.footprint(row, col, ship.length()).collect();
            let update = self.commit_human_ship(index, &cells)?;
            if let PlacementUpdate::FleetReady { .. } = update {
                return Ok(update);
            }
            index += 1;
        }
    }

    fn commit_human_ship(
        &mut self,
        index: usize,
        cells: &[(usize, usize)],
    ) -> Result<PlacementUpdate, GameError> {
        let ship = FLEET[index];
        if let Err(e) = self.human.place_ship(ship, cells) {
            debug_assert!(e != GameError::FleetFull, "seventh ship committed");
            return Err(e);
        }
        debug!("player placed {} on {:?}", ship.name(), cells);
        let next = index + 1;
        if next < NUM_SHIPS {
            self.phase = Phase::PlacingHuman { next_ship: next };
            Ok(PlacementUpdate::Placed {
                ship,
                next: FLEET[next],
            })
        } else {
            self.phase = Phase::InProgress(Side::Human);
            info!("fleets complete, player fires first");
            Ok(PlacementUpdate::FleetReady { ship })
        }
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        match self.phase {
            Phase::InProgress(active) if active == side => Ok(()),
            Phase::Finished(_) => Err(GameError::GameOver),
            _ => Err(GameError::OutOfTurn),
        }
    }

    /// Resolves a shot by `shooter` at `(row, col)` on the other side's board.
    pub fn fire(&mut self, shooter: Side, row: usize, col: usize) -> Result<ShotReport, GameError> {
        if let Err(e) = self.ensure_turn(shooter) {
            warn!("{} fired at ({}, {}) out of turn: {}", shooter, row, col, e);
            return Err(e);
        }
        let defender = self.player_mut(shooter.opponent());
        let outcome = match defender.receive_shot(row, col)? {
            ShotResult::Miss => ShotOutcome::Miss,
            ShotResult::Hit(_) => ShotOutcome::Hit,
            ShotResult::Sunk(id) => {
                let ship = defender.ship(id).ok_or(GameError::UnknownShip(id))?;
                ShotOutcome::Sunk(ship.name())
            }
        };
        let winner = defender.all_sunk().then_some(shooter);
        debug!("{} fired at ({}, {}): {:?}", shooter, row, col, outcome);

        self.phase = match winner {
            Some(side) => {
                info!("game over, {} wins", side);
                Phase::Finished(side)
            }
            None => Phase::InProgress(shooter.opponent()),
        };
        Ok(ShotReport {
            shooter,
            row,
            col,
            outcome,
            winner,
        })
    }

    /// Human shot at the computer board.
    pub fn fire_at(&mut self, row: usize, col: usize) -> Result<ShotReport, GameError> {
        self.fire(Side::Human, row, col)
    }

    /// Computes and resolves exactly one computer shot at the human board.
    pub fn computer_turn(&mut self) -> Result<ShotReport, GameError> {
        self.ensure_turn(Side::Computer)?;
        let (row, col) = self
            .opponent
            .select_target(&mut self.rng, self.human.board())?;
        let report = self.fire(Side::Computer, row, col)?;
        self.opponent.handle_shot_result((row, col), report.outcome);
        Ok(report)
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }

    pub fn board(&self, side: Side) -> &Board {
        self.player(side).board()
    }

    /// State of one cell on `side`'s board.
    pub fn cell(&self, side: Side, row: usize, col: usize) -> Result<Cell, GameError> {
        self.board(side).cell(row, col)
    }

    /// Names of `side`'s ships that have been sunk.
    pub fn sunk_ship_names(&self, side: Side) -> Vec<&'static str> {
        self.player(side).sunk_ship_names()
    }

    /// Whether `side` has lost its whole fleet.
    pub fn all_sunk(&self, side: Side) -> bool {
        self.player(side).all_sunk()
    }

    pub fn ships(&self, side: Side) -> &[Ship] {
        self.player(side).ships()
    }

    pub fn winner(&self) -> Option<Side> {
        self.phase.winner()
    }
}
