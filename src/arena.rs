//! Series of games between two agents

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use std::fmt;

use crate::{
    agent::Agent,
    board::{Board, GameState, Player},
    config::Configuration,
    error::SwarmError,
};

/// Builds a fresh agent for one episode from a seed
pub type AgentFactory<'a> = dyn Fn(u64) -> Box<dyn Agent> + Sync + 'a;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won(Player),
    Draw,
}

/// The course of a single game
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub outcome: Outcome,
    /// Columns played, in order
    pub moves: Vec<usize>,
    /// Set when the game ended because the loser failed to produce a legal move
    pub forfeit: bool,
}

/// Plays one game to the end, `first` moving as player one
///
/// An agent that errors or names an unplayable column loses on the spot.
pub fn play_game(
    config: Configuration,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
) -> Result<GameRecord, SwarmError> {
    let mut board = Board::new(config)?;
    let mut player = Player::One;
    let mut moves = Vec::new();

    loop {
        let selected = match player {
            Player::One => first.select_move(&board, player),
            Player::Two => second.select_move(&board, player),
        };
        let column = match selected {
            Ok(column) if board.playable(column) => column,
            _ => {
                return Ok(GameRecord {
                    outcome: Outcome::Won(player.opponent()),
                    moves,
                    forfeit: true,
                })
            }
        };

        let state = board.play_checked(column, player)?;
        moves.push(column);
        match state {
            GameState::Playing => player = player.opponent(),
            GameState::Won(winner) => {
                return Ok(GameRecord {
                    outcome: Outcome::Won(winner),
                    moves,
                    forfeit: false,
                })
            }
            GameState::Draw => {
                return Ok(GameRecord {
                    outcome: Outcome::Draw,
                    moves,
                    forfeit: false,
                })
            }
        }
    }
}

/// Results of a series, counted for the first agent
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSummary {
    /// `Agent::name` of both sides, challenger first
    pub challenger: String,
    pub opponent: String,
    pub episodes: usize,
    pub won: usize,
    pub lost: usize,
    pub draw: usize,
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}, {} episodes: won {}, lost {}, draw {}",
            self.challenger, self.opponent, self.episodes, self.won, self.lost, self.draw
        )
    }
}

/// Runs independent episodes in parallel, alternating who moves first
pub struct Arena {
    config: Configuration,
    episodes: usize,
    seed: u64,
    show_progress: bool,
}

impl Arena {
    pub fn new(config: Configuration, episodes: usize) -> Self {
        Self {
            config,
            episodes,
            seed: 0,
            show_progress: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Plays the series; `challenger` moves first in even-numbered episodes
    pub fn run(
        &self,
        challenger: &AgentFactory,
        opponent: &AgentFactory,
    ) -> Result<MatchSummary, SwarmError> {
        self.config.validate()?;

        let progress = if self.show_progress {
            ProgressBar::new(self.episodes as u64)
        } else {
            ProgressBar::hidden()
        };
        progress.set_style(
            ProgressStyle::default_bar()
                .template("Playing episodes: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
                .progress_chars("█▓▒░  "),
        );

        let outcomes = (0..self.episodes)
            .into_par_iter()
            .map_with(progress.clone(), |progress, episode| {
                let seed = self.seed.wrapping_add(2 * episode as u64);
                let mut challenger_agent = challenger(seed);
                let mut opponent_agent = opponent(seed.wrapping_add(1));

                let (record, seat) = if episode % 2 == 0 {
                    let record = play_game(self.config, challenger_agent.as_mut(), opponent_agent.as_mut())?;
                    (record, Player::One)
                } else {
                    let record = play_game(self.config, opponent_agent.as_mut(), challenger_agent.as_mut())?;
                    (record, Player::Two)
                };
                progress.inc(1);
                Ok::<_, SwarmError>((record.outcome, seat))
            })
            .collect::<Result<Vec<_>, SwarmError>>()?;

        progress.finish();

        let mut summary = MatchSummary {
            challenger: challenger(self.seed).name().to_string(),
            opponent: opponent(self.seed).name().to_string(),
            episodes: outcomes.len(),
            ..MatchSummary::default()
        };
        for (outcome, seat) in outcomes {
            match outcome {
                Outcome::Won(winner) if winner == seat => summary.won += 1,
                Outcome::Won(_) => summary.lost += 1,
                Outcome::Draw => summary.draw += 1,
            }
        }
        Ok(summary)
    }
}
