//! Blocking prompt loop for the text game

use std::io::{BufRead, Write};

use super::input::{is_yes, parse_coordinate, parse_or_default};
use super::render::render_board;
use crate::config::GameConfig;
use crate::error::{MoveError, PlayError};
use crate::session::{EventOutcome, GameStatus, InputEvent, Session};

/// Text front end over any line reader and writer
///
/// End of input is treated as the player quitting.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` and read one line; None at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>, PlayError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Ask for a number until one parses; None at end of input
    fn prompt_number<T>(&mut self, message: &str, default: T) -> Result<Option<T>, PlayError>
    where
        T: std::str::FromStr + Copy,
    {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match parse_or_default(&line, default) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "Invalid number: {}. Try again.", err)?,
            }
        }
    }

    /// Ask whether to keep the defaults, otherwise ask for each parameter
    ///
    /// Returns None if input ended before the parameters were complete.
    pub fn ask_config(&mut self, defaults: &GameConfig) -> Result<Option<GameConfig>, PlayError> {
        writeln!(self.output, "Welcome to the Queen's Game!")?;
        loop {
            let Some(answer) =
                self.prompt("Do you want to play with default parameters? (yes/no) [yes]: ")?
            else {
                return Ok(None);
            };
            if !answer.trim().eq_ignore_ascii_case("no") {
                return Ok(Some(defaults.clone()));
            }

            let message = format!("Enter board size (default {}): ", defaults.board_size);
            let Some(board_size) = self.prompt_number(&message, defaults.board_size)? else {
                return Ok(None);
            };
            let message = format!("Enter number of obstacles (default {}): ", defaults.obstacles);
            let Some(obstacles) = self.prompt_number(&message, defaults.obstacles)? else {
                return Ok(None);
            };
            let message = format!("Enter initial score (default {}): ", defaults.initial_score);
            let Some(initial_score) = self.prompt_number(&message, defaults.initial_score)? else {
                return Ok(None);
            };

            let config = GameConfig {
                board_size,
                obstacles,
                initial_score,
                seed: defaults.seed,
            };
            match config.validate() {
                Ok(()) => return Ok(Some(config)),
                Err(err) => writeln!(self.output, "Invalid parameters: {}", err)?,
            }
        }
    }

    /// Play one game to its end; None if the player quit
    pub fn play_session(&mut self, session: &mut Session) -> Result<Option<GameStatus>, PlayError> {
        writeln!(self.output, "Reach the goal with the highest score possible!")?;
        write!(self.output, "{}", render_board(session.board()))?;

        let last = session.board().size() - 1;
        let row_prompt = format!("Enter destination row (0-{}): ", last);
        let col_prompt = format!("Enter destination column (0-{}): ", last);

        while !session.status().is_terminal() {
            writeln!(self.output, "Queen's position: {}", session.queen())?;
            writeln!(self.output, "Score: {}", session.score())?;

            let Some(row) = self.prompt(&row_prompt)? else {
                return Ok(None);
            };
            let row = match parse_coordinate(&row) {
                Ok(row) => row,
                Err(err) => {
                    log::debug!("bad row input: {}", err);
                    writeln!(
                        self.output,
                        "Invalid input! Coordinates must be integers between 0 and {}.",
                        last
                    )?;
                    continue;
                }
            };
            let Some(col) = self.prompt(&col_prompt)? else {
                return Ok(None);
            };
            let col = match parse_coordinate(&col) {
                Ok(col) => col,
                Err(err) => {
                    log::debug!("bad column input: {}", err);
                    writeln!(
                        self.output,
                        "Invalid input! Coordinates must be integers between 0 and {}.",
                        last
                    )?;
                    continue;
                }
            };

            match session.handle_event(InputEvent::Destination { row, col })? {
                EventOutcome::Moved(_) => write!(self.output, "{}", render_board(session.board()))?,
                EventOutcome::Rejected(MoveError::OutOfBounds { .. }) => {
                    writeln!(self.output, "Invalid coordinates! Out of bounds.")?
                }
                EventOutcome::Rejected(_) => {
                    writeln!(self.output, "Invalid move! Path is blocked or invalid.")?
                }
                _ => {}
            }
        }

        match session.status() {
            GameStatus::Lost => writeln!(self.output, "Game over! You ran out of points.")?,
            GameStatus::Won => writeln!(
                self.output,
                "Congratulations! You've reached the goal with a score of {}.",
                session.score()
            )?,
            GameStatus::InProgress => {}
        }
        Ok(Some(session.status()))
    }

    /// Play games until the player declines a new one
    pub fn run(&mut self, session: &mut Session) -> Result<(), PlayError> {
        loop {
            if self.play_session(session)?.is_none() {
                break;
            }
            let Some(answer) = self.prompt("Do you want to start a new game? (yes/no): ")? else {
                break;
            };
            if !is_yes(&answer) {
                break;
            }
            session.handle_event(InputEvent::Restart)?;
        }
        writeln!(self.output, "Thank you for playing the Queen's Game! Goodbye!")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos};
    use std::io::Cursor;

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        Console::new(Cursor::new(script.to_string()), &mut out)
            .run(session)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_straight_to_goal() {
        let mut session = Session::with_board(Board::new(8), 100).unwrap();
        let out = run_script(&mut session, "7\n7\nno\n");
        assert!(out.contains("Queen's position: (0, 0)"));
        assert!(out.contains("Score: 100"));
        assert!(out.contains("Enter destination row (0-7): "));
        assert!(out.contains("Congratulations! You've reached the goal with a score of 93."));
        assert!(out.ends_with("Thank you for playing the Queen's Game! Goodbye!\n"));
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn test_malformed_input_reprompts() {
        let mut session = Session::with_board(Board::new(8), 100).unwrap();
        let out = run_script(&mut session, "x\n3\nabc\n7\n7\nno\n");
        assert_eq!(
            out.matches("Invalid input! Coordinates must be integers between 0 and 7.")
                .count(),
            2
        );
        assert!(out.contains("score of 93."));
    }

    #[test]
    fn test_out_of_bounds_reported() {
        let mut session = Session::with_board(Board::new(8), 100).unwrap();
        let out = run_script(&mut session, "9\n0\n-1\n0\n");
        assert_eq!(out.matches("Invalid coordinates! Out of bounds.").count(), 2);
        assert_eq!(session.queen(), Pos::new(0, 0));
        assert_eq!(session.score(), 100);
    }

    #[test]
    fn test_blocked_and_crooked_moves_reported() {
        let board = Board::with_obstacles(8, [Pos::new(3, 3)]);
        let mut session = Session::with_board(board, 100).unwrap();
        let out = run_script(&mut session, "7\n7\n1\n2\n");
        assert_eq!(out.matches("Invalid move! Path is blocked or invalid.").count(), 2);
        assert_eq!(session.queen(), Pos::new(0, 0));
        assert_eq!(session.score(), 100);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_running_out_of_points() {
        let mut session = Session::with_board(Board::new(8), 7).unwrap();
        let out = run_script(&mut session, "7\n7\nno\n");
        assert!(out.contains("Game over! You ran out of points."));
        assert!(!out.contains("Congratulations"));
    }

    #[test]
    fn test_board_printed_after_move() {
        let mut session = Session::with_board(Board::new(8), 100).unwrap();
        let out = run_script(&mut session, "0\n3\n");
        assert!(out.contains(" 0 . . . Q . . . ."));
        assert!(out.contains("Queen's position: (0, 3)"));
        assert!(out.contains("Score: 97"));
    }

    #[test]
    fn test_replay_restarts() {
        let mut session = Session::with_board(Board::new(8), 100).unwrap();
        let out = run_script(&mut session, "7\n7\nyes\n7\n7\nno\n");
        assert_eq!(out.matches("score of 93.").count(), 2);
        assert_eq!(out.matches("Reach the goal").count(), 2);
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut session = Session::with_board(Board::new(8), 100).unwrap();
        let out = run_script(&mut session, "2\n");
        assert!(out.ends_with("Goodbye!\n"));
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_ask_config_defaults() {
        let mut out = Vec::new();
        let defaults = GameConfig::default();
        let config = Console::new(Cursor::new("\n"), &mut out)
            .ask_config(&defaults)
            .unwrap();
        assert_eq!(config, Some(defaults));
    }

    #[test]
    fn test_ask_config_custom() {
        let mut out = Vec::new();
        let defaults = GameConfig {
            seed: Some(4),
            ..Default::default()
        };
        let config = Console::new(Cursor::new("no\n10\nmany\n\n50\n"), &mut out)
            .ask_config(&defaults)
            .unwrap()
            .unwrap();
        assert_eq!(config.board_size, 10);
        assert_eq!(config.obstacles, 20);
        assert_eq!(config.initial_score, 50);
        assert_eq!(config.seed, Some(4));

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Enter board size (default 8): "));
        assert_eq!(out.matches("Invalid number").count(), 1);
    }

    #[test]
    fn test_ask_config_rejects_invalid_parameters() {
        let mut out = Vec::new();
        let script = "no\n3\n9\n\nno\n4\n2\n10\n";
        let config = Console::new(Cursor::new(script), &mut out)
            .ask_config(&GameConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!((config.board_size, config.obstacles, config.initial_score), (4, 2, 10));

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Invalid parameters: 9 obstacles requested but only 4 cells can hold one"));
    }

    #[test]
    fn test_ask_config_end_of_input() {
        let mut out = Vec::new();
        let config = Console::new(Cursor::new("no\n10\n"), &mut out)
            .ask_config(&GameConfig::default())
            .unwrap();
        assert_eq!(config, None);
    }
}
