use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use serde::{Deserialize, Serialize};

use std::io::{stdout, Write};

use crate::{config::Configuration, error::SwarmError};

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Parses a harness mark (1 or 2)
    pub fn from_mark(mark: u8) -> Result<Self, SwarmError> {
        match mark {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(SwarmError::InvalidMark(mark)),
        }
    }

    pub fn mark(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn cell(&self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn from_mark(index: usize, value: u8) -> Result<Self, SwarmError> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::PlayerOne),
            2 => Ok(Cell::PlayerTwo),
            _ => Err(SwarmError::InvalidCellValue { index, value }),
        }
    }

    pub fn mark(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerOne => 1,
            Cell::PlayerTwo => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn swapped(&self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
        }
    }
}

/// The per-turn observation handed over by the harness
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Flat row-major marks, row 0 on top
    pub board: Vec<u8>,
    /// The mark of the player to move
    pub mark: u8,
}

#[derive(Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

/// A ConnectX grid of any validated size
///
/// Cells are stored row-major with row 0 at the top of the board, matching
/// the harness's flat board layout, so pieces fall towards higher rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    config: Configuration,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board
    pub fn new(config: Configuration) -> Result<Self, SwarmError> {
        config.validate()?;
        Ok(Self {
            config,
            cells: vec![Cell::Empty; config.cells()],
        })
    }

    /// Creates a board from the harness's flat mark array
    pub fn from_marks(config: Configuration, marks: &[u8]) -> Result<Self, SwarmError> {
        config.validate()?;
        if marks.len() != config.cells() {
            return Err(SwarmError::InvalidBoardLength {
                expected: config.cells(),
                actual: marks.len(),
            });
        }
        let cells = marks
            .iter()
            .enumerate()
            .map(|(index, &value)| Cell::from_mark(index, value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { config, cells })
    }

    /// Plays a sequence of one-indexed column digits, player one first
    pub fn from_moves<S: AsRef<str>>(config: Configuration, moves: S) -> Result<Self> {
        let mut board = Self::new(config)?;
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 && column <= config.columns => {
                    board.play(column - 1, player)?;
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[column + self.config.columns * row]
    }

    /// Like `get`, for signed coordinates that may fall off the grid
    pub fn get_checked(&self, column: isize, row: isize) -> Option<Cell> {
        if column < 0
            || row < 0
            || column >= self.config.columns as isize
            || row >= self.config.rows as isize
        {
            return None;
        }
        Some(self.get(column as usize, row as usize))
    }

    /// The flat harness representation of the board
    pub fn marks(&self) -> Vec<u8> {
        self.cells.iter().map(Cell::mark).collect()
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// The row a piece dropped into `column` comes to rest on, scanning
    /// from the bottom row upwards
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        (0..self.config.rows)
            .rev()
            .find(|&row| self.get(column, row).is_empty())
    }

    pub fn playable(&self, column: usize) -> bool {
        column < self.config.columns && self.get(column, 0).is_empty()
    }

    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.config.columns)
            .filter(|&column| self.playable(column))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        (0..self.config.columns).all(|column| !self.playable(column))
    }

    /// Drops a piece of `player` into `column`, returning the row it landed on
    pub fn play(&mut self, column: usize, player: Player) -> Result<usize, SwarmError> {
        if column >= self.config.columns {
            return Err(SwarmError::ColumnOutOfRange {
                column,
                columns: self.config.columns,
            });
        }
        let row = self
            .landing_row(column)
            .ok_or(SwarmError::ColumnFull(column))?;
        self.cells[column + self.config.columns * row] = player.cell();
        Ok(row)
    }

    /// Plays a move and reports whether it ended the game
    pub fn play_checked(&mut self, column: usize, player: Player) -> Result<GameState, SwarmError> {
        let winning = self.playable(column) && self.check_winning_move(column, player);
        self.play(column, player)?;
        Ok(if winning {
            GameState::Won(player)
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        })
    }

    /// Checks whether dropping a piece of `player` into a playable `column`
    /// completes `inarow` aligned pieces
    pub fn check_winning_move(&self, column: usize, player: Player) -> bool {
        let row = match self.landing_row(column) {
            Some(row) => row,
            None => return false,
        };
        let cell = player.cell();

        // horizontal, both diagonals and vertical
        for &(dx, dy) in [(1isize, 0isize), (1, -1), (1, 1), (0, 1)].iter() {
            let mut run = 1;
            for &sign in [-1isize, 1].iter() {
                let mut x = column as isize + sign * dx;
                let mut y = row as isize + sign * dy;
                while self.get_checked(x, y) == Some(cell) {
                    run += 1;
                    x += sign * dx;
                    y += sign * dy;
                }
            }
            if run >= self.config.inarow {
                return true;
            }
        }
        false
    }

    /// The same position reflected left to right
    pub fn mirrored(&self) -> Self {
        let mut cells = self.cells.clone();
        for row in cells.chunks_mut(self.config.columns) {
            row.reverse();
        }
        Self {
            config: self.config,
            cells,
        }
    }

    /// The same position with the two players' pieces exchanged
    pub fn swapped(&self) -> Self {
        Self {
            config: self.config,
            cells: self.cells.iter().map(Cell::swapped).collect(),
        }
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=self.config.columns)
            .map(|x| (x % 10).to_string())
            .collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in self.cells.chunks(self.config.columns) {
            for cell in row {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
