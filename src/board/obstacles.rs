//! Random obstacle placement
//!
//! Obstacles are placed by rejection sampling: draw a uniform cell, reject it
//! when it is protected or already taken, repeat until enough obstacles are
//! down. The number of draws is bounded so dense layouts fail with an error
//! instead of spinning.

use std::collections::HashSet;

use rand::Rng;

use super::{Board, Pos};
use crate::error::ConfigError;

/// Draws allowed per board cell before placement gives up
pub const ATTEMPTS_PER_CELL: usize = 64;

/// Cells that never receive an obstacle
///
/// The queen start, its neighbours and the goal.
pub fn protected_cells(size: u8) -> HashSet<Pos> {
    let mut cells = HashSet::new();
    for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        if let Some(pos) = Pos::checked(row, col, size) {
            cells.insert(pos);
        }
    }
    cells.insert(Pos::new(size - 1, size - 1));
    cells
}

/// Number of cells that may hold an obstacle
pub fn capacity(size: u8) -> usize {
    size as usize * size as usize - protected_cells(size).len()
}

/// Default draw bound for a board of the given size
pub fn default_max_attempts(size: u8) -> usize {
    size as usize * size as usize * ATTEMPTS_PER_CELL
}

/// Sample `count` distinct obstacle positions
pub fn place_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    size: u8,
    count: usize,
    max_attempts: usize,
) -> Result<HashSet<Pos>, ConfigError> {
    let available = capacity(size);
    if count > available {
        return Err(ConfigError::TooManyObstacles {
            requested: count,
            capacity: available,
        });
    }

    let protected = protected_cells(size);
    let mut placed = HashSet::with_capacity(count);
    let mut attempts = 0;

    while placed.len() < count {
        if attempts >= max_attempts {
            log::warn!(
                "obstacle placement gave up after {} draws ({}/{} placed)",
                attempts,
                placed.len(),
                count
            );
            return Err(ConfigError::PlacementExhausted {
                placed: placed.len(),
                requested: count,
                attempts,
            });
        }
        attempts += 1;

        let pos = Pos::new(rng.random_range(0..size), rng.random_range(0..size));
        if protected.contains(&pos) {
            continue;
        }
        placed.insert(pos);
    }

    log::debug!("placed {} obstacles in {} draws", count, attempts);
    Ok(placed)
}

impl Board {
    /// Build a board with `count` randomly placed obstacles
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        size: u8,
        count: usize,
    ) -> Result<Self, ConfigError> {
        let obstacles = place_obstacles(rng, size, count, default_max_attempts(size))?;
        Ok(Self::with_obstacles(size, obstacles))
    }
}
