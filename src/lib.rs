//! Queen's Game
//!
//! A puzzle board game: move a queen from the top-left corner to the goal in
//! the bottom-right corner, around randomly placed obstacles. Every move
//! costs its Chebyshev distance in points; run out of points and the game is
//! lost.
//!
//! # Architecture
//!
//! - [`board`]: Board, cells, positions and obstacle placement
//! - [`rules`]: Path validation and move execution
//! - [`session`]: Score tracking, game status and the input-event transition
//! - [`config`]: Game parameters (command line)
//! - [`console`]: Text front end
//! - [`ui`]: Graphical front end (egui)
//!
//! # Quick Start
//!
//! ```
//! use queens::{Board, GameStatus, Pos, Session};
//!
//! let board = Board::with_obstacles(8, [Pos::new(3, 3)]);
//! let mut session = Session::with_board(board, 100).unwrap();
//!
//! // Blocked by the obstacle on the long diagonal
//! assert!(session.try_move(7, 7).is_err());
//!
//! session.try_move(0, 7).unwrap();
//! let report = session.try_move(7, 7).unwrap();
//! assert_eq!(report.score, 86);
//! assert_eq!(report.status, GameStatus::Won);
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod error;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, DEFAULT_BOARD_SIZE};
pub use config::GameConfig;
pub use error::{ConfigError, InputError, MoveError, PlayError};
pub use rules::{is_valid_path, move_queen};
pub use session::{EventOutcome, GameStatus, InputEvent, MoveReport, ScoreTracker, Session};
