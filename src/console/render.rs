//! Text rendering of the board

use crate::board::Board;

/// Render the board with column indices on top and row indices on the left
///
/// ```
/// use queens::{console::render_board, Board, Pos};
///
/// let board = Board::with_obstacles(3, [Pos::new(1, 1)]);
/// assert_eq!(render_board(&board), "   0 1 2\n 0 Q . .\n 1 . # .\n 2 . . G\n");
/// ```
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    // Two columns minimum for the row label, wider once indices need it
    let label_width = digits(size.saturating_sub(1)).max(2);
    let cell_width = digits(size.saturating_sub(1));

    let mut out = String::new();
    let header: Vec<String> = (0..size).map(|c| format!("{:>cell_width$}", c)).collect();
    out.push_str(&format!("{:label_width$} {}\n", "", header.join(" ")));

    for row in 0..size {
        let cells: Vec<String> = board
            .row(row)
            .iter()
            .map(|cell| format!("{:>cell_width$}", cell.symbol()))
            .collect();
        out.push_str(&format!("{:>label_width$} {}\n", row, cells.join(" ")));
    }
    out
}

fn digits(n: u8) -> usize {
    n.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_render_default_board() {
        let board = Board::with_obstacles(8, [Pos::new(2, 5)]);
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], " 0 Q . . . . . . .");
        assert_eq!(lines[3], " 2 . . . . . # . .");
        assert_eq!(lines[8], " 7 . . . . . . . G");
    }

    #[test]
    fn test_render_wide_board_aligns() {
        let board = Board::new(12);
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "    0  1  2  3  4  5  6  7  8  9 10 11");
        assert_eq!(lines[1], " 0  Q  .  .  .  .  .  .  .  .  .  .  .");
        assert_eq!(lines[12], "11  .  .  .  .  .  .  .  .  .  .  .  G");
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }
}
