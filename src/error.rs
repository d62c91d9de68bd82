//! Error types for the queen's game

use crate::board::Pos;

/// Invalid game parameters or board generation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {size} is out of range ({min}..={max})")]
    BoardSize { size: u8, min: u8, max: u8 },

    #[error("initial score must be at least 1")]
    ZeroInitialScore,

    #[error("{requested} obstacles requested but only {capacity} cells can hold one")]
    TooManyObstacles { requested: usize, capacity: usize },

    #[error("placed {placed} of {requested} obstacles before giving up after {attempts} draws")]
    PlacementExhausted {
        placed: usize,
        requested: usize,
        attempts: usize,
    },
}

/// Reasons a move is rejected. None of them change game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("the queen is not at {at}")]
    NotQueen { at: Pos },

    #[error("({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: u8 },

    #[error("{from} to {to} is not a straight or diagonal line")]
    NotQueenLine { from: Pos, to: Pos },

    #[error("path is blocked at {at}")]
    Blocked { at: Pos },
}

/// Malformed text input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),
}

/// Failures of the text game loop.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
