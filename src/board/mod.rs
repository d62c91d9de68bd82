//! Board representation for the queen's game

pub mod board;
pub mod obstacles;


// Re-exports
pub use board::Board;
pub use obstacles::{place_obstacles, protected_cells};

use std::fmt;

/// Default board size (8x8)
pub const DEFAULT_BOARD_SIZE: u8 = 8;
/// Smallest board that keeps queen start and goal apart
pub const MIN_BOARD_SIZE: u8 = 2;
pub const MAX_BOARD_SIZE: u8 = 32;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Obstacle,
    Queen,
    Goal,
}

impl Cell {
    /// Text marker used by the console renderer
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Obstacle => '#',
            Cell::Queen => 'Q',
            Cell::Goal => 'G',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: u8) -> Self {
        Self {
            row: (idx / size as usize) as u8,
            col: (idx % size as usize) as u8,
        }
    }

    /// Check signed coordinates against a board of the given size
    #[inline]
    pub fn is_valid(row: i32, col: i32, size: u8) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Build a position from signed coordinates if they are on the board
    #[inline]
    pub fn checked(row: i32, col: i32, size: u8) -> Option<Self> {
        if Self::is_valid(row, col, size) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Signed (row, col) delta from `self` to `other`
    #[inline]
    pub fn delta(self, other: Pos) -> (i32, i32) {
        (
            other.row as i32 - self.row as i32,
            other.col as i32 - self.col as i32,
        )
    }

    /// Chebyshev distance, the cost of a queen move
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u32 {
        let (dr, dc) = self.delta(other);
        dr.unsigned_abs().max(dc.unsigned_abs())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
