//! A depth-limited game tree search, used as a sparring opponent

use crate::{
    board::{Board, Player},
    error::SwarmError,
};

/// Searches a fixed number of plies with alpha-beta pruning
///
/// # Position Scoring
/// A position is scored from the point of view of the player to move. A win
/// with the next piece scores half the number of cells left after it (rounded
/// up), so earlier wins score further from 0. Draws and positions where the
/// depth runs out score 0.
#[derive(Clone)]
pub struct Negamax {
    depth: usize,
}

impl Negamax {
    pub fn new(depth: usize) -> Self {
        Self { depth }
    }

    fn win_score(board: &Board) -> i32 {
        ((board.config().cells() + 1 - board.num_moves()) / 2) as i32
    }

    fn negamax(&mut self, board: &Board, player: Player, depth: usize, mut alpha: i32, mut beta: i32) -> i32 {
        let order = board.config().move_order();

        // check for next-move win for current player
        for &column in order.iter() {
            if board.playable(column) && board.check_winning_move(column, player) {
                return Self::win_score(board);
            }
        }

        if board.is_full() || depth == 0 {
            return 0;
        }

        // upper bound of score, the earliest win left is two plies away
        let max = ((board.config().cells() - 1 - board.num_moves()) / 2) as i32;
        if beta > max {
            beta = max;
            if alpha >= beta {
                return beta;
            }
        }

        for &column in order.iter() {
            if !board.playable(column) {
                continue;
            }
            let mut next = board.clone();
            if next.play(column, player).is_err() {
                continue;
            }
            // the search window is flipped for the other player
            let score = -self.negamax(&next, player.opponent(), depth - 1, -beta, -alpha);
            // a perfect opponent will not allow this branch
            if score >= beta {
                return score;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }

    /// Returns the score of the position and the best column for `player`
    pub fn solve(&mut self, board: &Board, player: Player) -> Result<(i32, usize), SwarmError> {
        let order = board.config().move_order();
        let bound = board.config().cells() as i32;

        for &column in order.iter() {
            if board.playable(column) && board.check_winning_move(column, player) {
                return Ok((Self::win_score(board), column));
            }
        }

        let mut alpha = -bound;
        let mut best: Option<(i32, usize)> = None;
        for &column in order.iter() {
            if !board.playable(column) {
                continue;
            }
            let mut next = board.clone();
            next.play(column, player)?;
            let score = -self.negamax(
                &next,
                player.opponent(),
                self.depth.saturating_sub(1),
                -bound,
                -alpha,
            );
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, column));
            }
            if score > alpha {
                alpha = score;
            }
        }
        best.ok_or(SwarmError::NoLegalMove)
    }
}
