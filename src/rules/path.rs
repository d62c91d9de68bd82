//! Queen path validation
//!
//! A queen moves along a rank, a file or a diagonal. Every cell from the
//! start (exclusive) to the destination (inclusive) must be on the board and
//! free of obstacles.

use crate::board::{Board, Pos};
use crate::error::MoveError;

/// Unit step along a queen line, or None if `start -> end` is not one
///
/// A zero-length move yields `Some((0, 0))`.
#[inline]
pub fn line_step(start: Pos, end: Pos) -> Option<(i32, i32)> {
    let (dr, dc) = start.delta(end);
    if dr == 0 || dc == 0 || dr.abs() == dc.abs() {
        Some((dr.signum(), dc.signum()))
    } else {
        None
    }
}

/// Check the path from `start` to `end`, reporting why it fails
pub fn check_path(board: &Board, start: Pos, end: Pos) -> Result<(), MoveError> {
    let (step_r, step_c) =
        line_step(start, end).ok_or(MoveError::NotQueenLine { from: start, to: end })?;

    let size = board.size();
    let (mut r, mut c) = (start.row as i32, start.col as i32);
    while (r, c) != (end.row as i32, end.col as i32) {
        r += step_r;
        c += step_c;
        let pos = Pos::checked(r, c, size).ok_or(MoveError::OutOfBounds { row: r, col: c, size })?;
        if board.is_obstacle(pos) {
            return Err(MoveError::Blocked { at: pos });
        }
    }

    Ok(())
}

/// Check if the queen may travel from `start` to `end`
#[inline]
pub fn is_valid_path(board: &Board, start: Pos, end: Pos) -> bool {
    check_path(board, start, end).is_ok()
}

/// All destinations reachable in one move from `from`
pub fn reachable_from(board: &Board, from: Pos) -> Vec<Pos> {
    const DIRECTIONS: [(i32, i32); 8] = [
        (-1, -1), (-1, 0), (-1, 1),
        (0, -1),           (0, 1),
        (1, -1),  (1, 0),  (1, 1),
    ];

    let size = board.size();
    let mut targets = Vec::new();
    for (dr, dc) in DIRECTIONS {
        let (mut r, mut c) = (from.row as i32 + dr, from.col as i32 + dc);
        while let Some(pos) = Pos::checked(r, c, size) {
            if board.is_obstacle(pos) {
                break;
            }
            targets.push(pos);
            r += dr;
            c += dc;
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_queen_lines() {
        let board = Board::new(8);
        for r in 0..8u8 {
            for c in 0..8u8 {
                let end = Pos::new(r, c);
                let straight = r == 0 || c == 0 || r == c;
                assert_eq!(is_valid_path(&board, Pos::new(0, 0), end), straight, "{end}");
            }
        }
    }

    #[test]
    fn test_knight_jump_invalid() {
        let board = Board::new(8);
        assert_eq!(
            check_path(&board, Pos::new(0, 0), Pos::new(1, 2)),
            Err(MoveError::NotQueenLine {
                from: Pos::new(0, 0),
                to: Pos::new(1, 2),
            })
        );
    }

    #[test]
    fn test_open_lines_from_center() {
        let board = Board::new(8);
        let center = Pos::new(4, 3);
        for target in [
            Pos::new(0, 3),
            Pos::new(7, 3),
            Pos::new(4, 0),
            Pos::new(4, 7),
            Pos::new(1, 0),
            Pos::new(0, 7),
            Pos::new(7, 0),
            Pos::new(7, 6),
        ] {
            assert!(is_valid_path(&board, center, target), "{center} -> {target}");
        }
    }

    #[test]
    fn test_full_diagonal() {
        let board = Board::new(8);
        assert!(is_valid_path(&board, Pos::new(0, 0), Pos::new(7, 7)));
        assert!(is_valid_path(&board, Pos::new(7, 7), Pos::new(0, 0)));
    }

    #[test]
    fn test_obstacle_midway_blocks() {
        let board = Board::with_obstacles(8, [Pos::new(3, 3)]);
        assert_eq!(
            check_path(&board, Pos::new(0, 0), Pos::new(7, 7)),
            Err(MoveError::Blocked { at: Pos::new(3, 3) })
        );
        // Stopping short of the obstacle is fine
        assert!(is_valid_path(&board, Pos::new(0, 0), Pos::new(2, 2)));
    }

    #[test]
    fn test_obstacle_destination_blocks() {
        let board = Board::with_obstacles(8, [Pos::new(0, 5)]);
        assert!(!is_valid_path(&board, Pos::new(0, 0), Pos::new(0, 5)));
        assert!(!is_valid_path(&board, Pos::new(0, 0), Pos::new(0, 6)));
        assert!(is_valid_path(&board, Pos::new(0, 0), Pos::new(0, 4)));
    }

    #[test]
    fn test_obstacle_off_line_ignored() {
        let board = Board::with_obstacles(8, [Pos::new(2, 3), Pos::new(3, 2)]);
        assert!(is_valid_path(&board, Pos::new(0, 0), Pos::new(7, 7)));
    }

    #[test]
    fn test_zero_length_move() {
        let board = Board::new(8);
        assert!(is_valid_path(&board, Pos::new(0, 0), Pos::new(0, 0)));
    }

    #[test]
    fn test_destination_off_board() {
        let board = Board::new(4);
        assert_eq!(
            check_path(&board, Pos::new(0, 0), Pos::new(0, 4)),
            Err(MoveError::OutOfBounds { row: 0, col: 4, size: 4 })
        );
    }

    #[test]
    fn test_reachable_from_corner() {
        let board = Board::with_obstacles(4, [Pos::new(0, 2), Pos::new(2, 2)]);
        let mut targets = reachable_from(&board, Pos::new(0, 0));
        targets.sort_by_key(|p| p.to_index(4));
        assert_eq!(
            targets,
            vec![
                Pos::new(0, 1),
                Pos::new(1, 0),
                Pos::new(1, 1),
                Pos::new(2, 0),
                Pos::new(3, 0),
            ]
        );
        for target in targets {
            assert!(is_valid_path(&board, Pos::new(0, 0), target));
        }
    }
}
