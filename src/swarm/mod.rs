//! The cell swarm move scorer
//!
//! Every playable column is represented by its landing cell. A cell is
//! scored by counting, along the four axes through it, the lines a piece
//! there would complete or nearly complete for either side. The cells
//! stacked above the landing cell are scored the same way and folded in,
//! since dropping a piece also decides who gets to use them. The resulting
//! point vectors are compared lexicographically.

pub mod pattern;
pub mod points;

use crate::{
    board::{Board, Observation, Player},
    config::Configuration,
    error::SwarmError,
};

use pattern::axis_points;
use points::{CellPoints, NearPair, PointVector};

/// A scored landing cell
#[derive(Clone, Debug)]
pub struct Candidate {
    pub column: usize,
    pub row: usize,
    /// Manhattan distance to the board's center cell
    pub distance_to_center: usize,
    pub points: PointVector,
    /// The flattened `points`, computed once
    pub key: Vec<i32>,
}

impl Candidate {
    /// Checks whether this candidate should replace `best`
    ///
    /// The first differing feature decides. While features tie, the first
    /// positive one hands the decision to the distance from the center,
    /// closer winning; ties at zero or below never do. A full tie keeps `best`.
    pub fn outranks(&self, best: &Candidate) -> bool {
        for (&held, &challenger) in best.key.iter().zip(self.key.iter()) {
            if held < challenger {
                return true;
            }
            if held > challenger {
                return false;
            }
            if held > 0 {
                if best.distance_to_center > self.distance_to_center {
                    return true;
                }
                if best.distance_to_center < self.distance_to_center {
                    return false;
                }
            }
        }
        false
    }
}

/// Keeps the better of the best candidate so far and a new one
pub fn choose_best_cell(best: Option<Candidate>, current: Candidate) -> Candidate {
    match best {
        Some(best) if !current.outranks(&best) => best,
        _ => current,
    }
}

/// Scores the moves of one player on one board
pub struct Swarm<'a> {
    board: &'a Board,
    player: Player,
}

impl<'a> Swarm<'a> {
    pub fn new(board: &'a Board, player: Player) -> Self {
        Self { board, player }
    }

    /// Immediate and near-line points of the cell at (column, row)
    pub fn cell_points(&self, column: usize, row: usize) -> CellPoints {
        let inarow = self.board.config().inarow;
        let thresholds = inarow.saturating_sub(2).max(1);

        let mut points = CellPoints::default();
        for i in 0..thresholds {
            let needed = inarow - i;
            let own = axis_points(self.board, column, row, self.player, needed);
            let opp = axis_points(self.board, column, row, self.player.opponent(), needed);
            if i == 0 {
                points.own_immediate = own;
                points.opp_immediate = opp;
            } else {
                points.near.push(NearPair::ordered(own, opp));
            }
        }
        points
    }

    /// Scores a landing cell together with every cell stacked above it
    pub fn evaluate_cell(&self, column: usize, row: usize) -> Candidate {
        let config = self.board.config();

        let mut above = None;
        let mut stack = Vec::with_capacity(config.rows.saturating_sub(2));
        for level in 1..config.rows {
            let points = if row >= level {
                self.cell_points(column, row - level)
            } else {
                CellPoints::zeroed(config.inarow)
            };
            if level == 1 {
                above = Some(points);
            } else {
                stack.push(points);
            }
        }

        let points = PointVector {
            cell: self.cell_points(column, row),
            above,
            stack,
        };
        let key = points.comparison_key();
        Candidate {
            column,
            row,
            distance_to_center: distance_to_center(config, column, row),
            points,
            key,
        }
    }

    /// The landing cell of every playable column, scored, center first
    pub fn candidates(&self) -> Vec<Candidate> {
        self.board
            .config()
            .move_order()
            .into_iter()
            .filter_map(|column| {
                self.board
                    .landing_row(column)
                    .map(|row| self.evaluate_cell(column, row))
            })
            .collect()
    }

    /// Picks the column of the best scoring candidate
    pub fn select_move(&self) -> Result<usize, SwarmError> {
        self.candidates()
            .into_iter()
            .fold(None, |best, current| Some(choose_best_cell(best, current)))
            .map(|best| best.column)
            .ok_or(SwarmError::NoLegalMove)
    }
}

fn distance_to_center(config: &Configuration, column: usize, row: usize) -> usize {
    let dx = (column as isize - config.center_column() as isize).abs();
    let dy = (row as isize - config.center_row() as isize).abs();
    (dx + dy) as usize
}

/// Chooses a column for the player to move, straight from harness input
pub fn select_move(
    observation: &Observation,
    configuration: &Configuration,
) -> Result<usize, SwarmError> {
    let board = Board::from_marks(*configuration, &observation.board)?;
    let player = Player::from_mark(observation.mark)?;
    Swarm::new(&board, player).select_move()
}
