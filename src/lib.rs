//! A heuristic agent for the board game 'ConnectX'
//!
//! ConnectX is Connect 4 on a grid of any size, won by the first player to
//! align `inarow` pieces. This agent looks one move deep: it scores the
//! landing cell of every playable column, and the cells stacked above it,
//! by the lines they complete or nearly complete for either side, then picks
//! the column with the best score.
//!
//! # Basic Usage
//!
//! ```
//! use cell_swarm::{select_move, Configuration, Observation};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let configuration = Configuration::default();
//! let observation = Observation {
//!     board: vec![0; configuration.rows * configuration.columns],
//!     mark: 1,
//! };
//!
//! assert_eq!(select_move(&observation, &configuration)?, 3);
//!# Ok(())
//!# }
//! ```

pub use anyhow;

pub mod config;

pub mod error;

pub mod board;

pub mod swarm;

pub mod negamax;

pub mod agent;

pub mod arena;


pub use agent::{Agent, NegamaxAgent, RandomAgent, SwarmAgent};
pub use arena::{Arena, MatchSummary};
pub use board::{Board, Cell, GameState, Observation, Player};
pub use config::Configuration;
pub use error::SwarmError;
pub use swarm::{select_move, Swarm};
