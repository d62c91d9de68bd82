//! Move execution

use crate::board::{Board, Pos};
use crate::error::MoveError;

use super::path::check_path;

/// Move the queen, reporting why the move was refused
///
/// On success the origin is cleared, the queen marker is written at `to`
/// and `to` is returned. On failure the board is untouched. `from` must be
/// the queen's current cell.
pub fn try_move_queen(board: &mut Board, from: Pos, to: Pos) -> Result<Pos, MoveError> {
    if from != board.queen() {
        return Err(MoveError::NotQueen { at: from });
    }
    if !board.contains(to) {
        return Err(MoveError::OutOfBounds {
            row: to.row as i32,
            col: to.col as i32,
            size: board.size(),
        });
    }
    check_path(board, from, to)?;
    board.relocate_queen(to);
    Ok(to)
}

/// Move the queen if the path is valid
///
/// Returns the queen's position after the attempt and whether it moved.
pub fn move_queen(board: &mut Board, from: Pos, to: Pos) -> (Pos, bool) {
    match try_move_queen(board, from, to) {
        Ok(pos) => (pos, true),
        Err(_) => (from, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_move_updates_grid() {
        let mut board = Board::new(8);
        let (pos, moved) = move_queen(&mut board, Pos::new(0, 0), Pos::new(0, 6));
        assert!(moved);
        assert_eq!(pos, Pos::new(0, 6));
        assert_eq!(board.queen(), Pos::new(0, 6));
        assert_eq!(board.get(Pos::new(0, 0)), Cell::Empty);
        assert_eq!(board.get(Pos::new(0, 6)), Cell::Queen);
    }

    #[test]
    fn test_failed_move_leaves_board() {
        let mut board = Board::with_obstacles(8, [Pos::new(3, 3)]);
        let before = board.clone();
        let (pos, moved) = move_queen(&mut board, Pos::new(0, 0), Pos::new(7, 7));
        assert!(!moved);
        assert_eq!(pos, Pos::new(0, 0));
        assert_eq!(board, before);
    }

    #[test]
    fn test_try_move_reports_reason() {
        let mut board = Board::new(8);
        assert_eq!(
            try_move_queen(&mut board, Pos::new(0, 0), Pos::new(1, 2)),
            Err(MoveError::NotQueenLine {
                from: Pos::new(0, 0),
                to: Pos::new(1, 2),
            })
        );
        assert_eq!(board.queen(), Pos::new(0, 0));
    }

    #[test]
    fn test_move_onto_goal() {
        let mut board = Board::new(8);
        let (pos, moved) = move_queen(&mut board, Pos::new(0, 0), Pos::new(7, 7));
        assert!(moved);
        assert_eq!(pos, board.goal());
        assert_eq!(board.get(pos), Cell::Queen);
    }

    #[test]
    fn test_move_from_empty_cell_refused() {
        let mut board = Board::new(8);
        let before = board.clone();
        assert_eq!(
            try_move_queen(&mut board, Pos::new(5, 5), Pos::new(5, 6)),
            Err(MoveError::NotQueen { at: Pos::new(5, 5) })
        );
        let (pos, moved) = move_queen(&mut board, Pos::new(5, 5), Pos::new(5, 6));
        assert!(!moved);
        assert_eq!(pos, Pos::new(5, 5));
        assert_eq!(board, before);
        assert_eq!(board.queen(), Pos::new(0, 0));
    }

    #[test]
    fn test_zero_length_move_off_board_refused() {
        let mut board = Board::new(8);
        let before = board.clone();
        let (_, moved) = move_queen(&mut board, Pos::new(9, 9), Pos::new(9, 9));
        assert!(!moved);
        assert_eq!(board, before);
    }

    #[test]
    fn test_destination_off_board_refused() {
        let mut board = Board::new(4);
        assert_eq!(
            try_move_queen(&mut board, Pos::new(0, 0), Pos::new(0, 9)),
            Err(MoveError::OutOfBounds { row: 0, col: 9, size: 4 })
        );
        assert_eq!(board.queen(), Pos::new(0, 0));
    }

    #[test]
    fn test_zero_length_move_in_place() {
        let mut board = Board::new(8);
        let (pos, moved) = move_queen(&mut board, Pos::new(0, 0), Pos::new(0, 0));
        assert!(moved);
        assert_eq!(pos, Pos::new(0, 0));
        assert_eq!(board.get(pos), Cell::Queen);
    }
}
