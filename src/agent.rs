//! Players that can be seated in a game

use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

use crate::{
    board::{Board, Player},
    config::Configuration,
    error::SwarmError,
    negamax::Negamax,
    swarm::Swarm,
};

/// Anything that picks a column for a side to move
pub trait Agent: Send {
    fn name(&self) -> &str;

    /// Returns the column to play; the board is never modified
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, SwarmError>;
}

/// The cell swarm heuristic
#[derive(Clone)]
pub struct SwarmAgent {
    config: Configuration,
}

impl SwarmAgent {
    /// Validates the configuration once, ahead of the first move
    pub fn new(config: Configuration) -> Result<Self, SwarmError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Agent for SwarmAgent {
    fn name(&self) -> &str {
        "swarm"
    }

    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, SwarmError> {
        if *board.config() != self.config {
            return Err(SwarmError::InvalidConfiguration(format!(
                "agent was set up for {:?}, board uses {:?}",
                self.config,
                board.config()
            )));
        }
        Swarm::new(board, player).select_move()
    }
}

/// Plays a uniformly random legal column
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&mut self, board: &Board, _player: Player) -> Result<usize, SwarmError> {
        board
            .legal_columns()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SwarmError::NoLegalMove)
    }
}

/// Plays the best column of a shallow tree search
pub struct NegamaxAgent {
    solver: Negamax,
}

impl NegamaxAgent {
    pub fn new(depth: usize) -> Self {
        Self {
            solver: Negamax::new(depth),
        }
    }
}

impl Agent for NegamaxAgent {
    fn name(&self) -> &str {
        "negamax"
    }

    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, SwarmError> {
        self.solver.solve(board, player).map(|(_, column)| column)
    }
}
