//! Board structure with queen and goal tracking

use std::collections::HashSet;

use super::{Cell, Pos};

/// Square game board
///
/// The queen starts in the top-left corner and the goal sits in the
/// bottom-right corner. Obstacles are fixed once the board is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    /// Row-major cells
    cells: Vec<Cell>,
    queen: Pos,
    goal: Pos,
    obstacle_count: usize,
}

impl Board {
    /// Empty board of the given size with queen at (0, 0) and goal at (N-1, N-1)
    ///
    /// The size is clamped to `MIN_BOARD_SIZE..=MAX_BOARD_SIZE` so the queen
    /// and goal never share a cell.
    pub fn new(size: u8) -> Self {
        let size = size.clamp(super::MIN_BOARD_SIZE, super::MAX_BOARD_SIZE);
        let queen = Pos::new(0, 0);
        let goal = Pos::new(size - 1, size - 1);

        let mut cells = vec![Cell::Empty; size as usize * size as usize];
        cells[goal.to_index(size)] = Cell::Goal;
        cells[queen.to_index(size)] = Cell::Queen;

        Self {
            size,
            cells,
            queen,
            goal,
            obstacle_count: 0,
        }
    }

    /// Board with the given obstacles placed
    ///
    /// Positions off the board or on the queen/goal cells are skipped.
    pub fn with_obstacles<I>(size: u8, obstacles: I) -> Self
    where
        I: IntoIterator<Item = Pos>,
    {
        let mut board = Self::new(size);
        for pos in obstacles {
            board.set_obstacle(pos);
        }
        board
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn queen(&self) -> Pos {
        self.queen
    }

    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacle_count
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get cell at position
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board; check with [`Board::contains`].
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index(self.size)]
    }

    #[inline]
    pub fn is_obstacle(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Obstacle
    }

    /// Place an obstacle; returns false if the cell cannot hold one
    pub fn set_obstacle(&mut self, pos: Pos) -> bool {
        if !self.contains(pos) || pos == self.queen || pos == self.goal {
            return false;
        }
        let idx = pos.to_index(self.size);
        if self.cells[idx] == Cell::Obstacle {
            return false;
        }
        self.cells[idx] = Cell::Obstacle;
        self.obstacle_count += 1;
        true
    }

    /// Move the queen marker without any legality check
    ///
    /// Use `rules::move_queen` for game moves. The origin goes back to the
    /// goal marker if the queen was standing on the goal.
    pub(crate) fn relocate_queen(&mut self, to: Pos) {
        let from = self.queen;
        self.cells[from.to_index(self.size)] = if from == self.goal {
            Cell::Goal
        } else {
            Cell::Empty
        };
        self.cells[to.to_index(self.size)] = Cell::Queen;
        self.queen = to;
    }

    /// Set of obstacle positions
    pub fn obstacles(&self) -> HashSet<Pos> {
        self.iter()
            .filter(|&(_, cell)| cell == Cell::Obstacle)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Iterate all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Pos::from_index(idx, size), cell))
    }

    /// Cells of one row
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.size()`.
    pub fn row(&self, row: u8) -> &[Cell] {
        let start = row as usize * self.size as usize;
        &self.cells[start..start + self.size as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_BOARD_SIZE)
    }
}
