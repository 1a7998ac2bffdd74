use thiserror::Error;

/// Errors raised while validating harness input or selecting a move
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwarmError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("board has {actual} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, actual: usize },

    #[error("cell {index} holds {value}, expected 0, 1 or 2")]
    InvalidCellValue { index: usize, value: u8 },

    #[error("mark {0} is not a player mark, expected 1 or 2")]
    InvalidMark(u8),

    #[error("column {column} out of range for a board with {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("no legal move, every column is full")]
    NoLegalMove,
}
