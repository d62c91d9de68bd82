//! Movement rules for the queen's game
//!
//! - Path validation (straight and diagonal lines, obstacle blocking)
//! - Move execution on the board

pub mod movement;
pub mod path;

// Re-exports for convenient access
pub use movement::{move_queen, try_move_queen};
pub use path::{check_path, is_valid_path, line_step, reachable_from};
