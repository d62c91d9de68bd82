//! Game session: board, score and status for one play-through
//!
//! A [`Session`] owns everything a game needs and is rebuilt from its
//! [`GameConfig`] on restart. Front ends feed it [`InputEvent`]s through
//! [`Session::handle_event`] and render whatever state it exposes, so the
//! text game and the GUI share one transition function.
//!
//! # Status transitions
//!
//! - A valid move costs its Chebyshev distance.
//! - Score at or below zero after a move ends the game as [`GameStatus::Lost`].
//! - Otherwise reaching the goal ends it as [`GameStatus::Won`].
//!
//! Loss is checked first, so a move that lands on the goal while spending the
//! last points is still a loss.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Pos};
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::rules;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Score bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTracker {
    initial: u32,
    current: i64,
}

impl ScoreTracker {
    pub fn new(initial: u32) -> Self {
        Self {
            initial,
            current: initial as i64,
        }
    }

    #[inline]
    pub fn initial(&self) -> u32 {
        self.initial
    }

    #[inline]
    pub fn current(&self) -> i64 {
        self.current
    }

    /// Deduct the cost of a move
    #[inline]
    pub fn charge(&mut self, distance: u32) {
        self.current -= distance as i64;
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current <= 0
    }

    /// Status after a move that left the queen at `queen`
    pub fn status_after_move(&self, queen: Pos, goal: Pos) -> GameStatus {
        if self.is_exhausted() {
            GameStatus::Lost
        } else if queen == goal {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

/// One executed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Pos,
    pub to: Pos,
    pub distance: u32,
}

/// Result of a valid move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub record: MoveRecord,
    pub score: i64,
    pub status: GameStatus,
}

/// Front-end input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Destination typed at the prompt; may be off the board
    Destination { row: i32, col: i32 },
    /// Cell clicked on the board
    Click(Pos),
    /// Start over with the current configuration
    Restart,
}

/// What an input event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Moved(MoveReport),
    Rejected(MoveError),
    Selected(Pos),
    Ignored,
    Restarted,
}

/// One game from board creation to a terminal status
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    board: Board,
    score: ScoreTracker,
    status: GameStatus,
    selected: Option<Pos>,
    history: Vec<MoveRecord>,
    rng: StdRng,
}

impl Session {
    /// Validate the configuration and build the first board
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let board = Board::random(&mut rng, config.board_size, config.obstacles)?;
        log::info!(
            "new game: {}x{} board, {} obstacles, score {}",
            config.board_size,
            config.board_size,
            config.obstacles,
            config.initial_score
        );

        Ok(Self {
            score: ScoreTracker::new(config.initial_score),
            config,
            board,
            status: GameStatus::InProgress,
            selected: None,
            history: Vec::new(),
            rng,
        })
    }

    /// Session on a prepared board
    ///
    /// Fails with [`ConfigError::ZeroInitialScore`] when `initial_score` is 0.
    pub fn with_board(board: Board, initial_score: u32) -> Result<Self, ConfigError> {
        if initial_score == 0 {
            return Err(ConfigError::ZeroInitialScore);
        }
        let config = GameConfig {
            board_size: board.size(),
            obstacles: board.obstacle_count(),
            initial_score,
            seed: None,
        };
        Ok(Self {
            config,
            board,
            score: ScoreTracker::new(initial_score),
            status: GameStatus::InProgress,
            selected: None,
            history: Vec::new(),
            rng: StdRng::from_os_rng(),
        })
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn queen(&self) -> Pos {
        self.board.queen()
    }

    #[inline]
    pub fn score(&self) -> i64 {
        self.score.current()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Attempt to move the queen to (row, col)
    pub fn try_move(&mut self, row: i32, col: i32) -> Result<MoveReport, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let size = self.board.size();
        let to = Pos::checked(row, col, size).ok_or(MoveError::OutOfBounds { row, col, size })?;
        let from = self.board.queen();

        if let Err(err) = rules::try_move_queen(&mut self.board, from, to) {
            log::debug!("rejected move {} -> {}: {}", from, to, err);
            return Err(err);
        }

        let distance = from.chebyshev(to);
        self.score.charge(distance);
        self.status = self.score.status_after_move(to, self.board.goal());

        let record = MoveRecord { from, to, distance };
        self.history.push(record);
        log::debug!(
            "queen {} -> {} (cost {}), score {}",
            from,
            to,
            distance,
            self.score.current()
        );

        match self.status {
            GameStatus::Won => log::info!("goal reached with score {}", self.score.current()),
            GameStatus::Lost => log::info!("out of points after {} moves", self.history.len()),
            GameStatus::InProgress => {}
        }

        Ok(MoveReport {
            record,
            score: self.score.current(),
            status: self.status,
        })
    }

    /// Apply one input event
    pub fn handle_event(&mut self, event: InputEvent) -> Result<EventOutcome, ConfigError> {
        let outcome = match event {
            InputEvent::Destination { row, col } => match self.try_move(row, col) {
                Ok(report) => EventOutcome::Moved(report),
                Err(err) => EventOutcome::Rejected(err),
            },
            InputEvent::Click(pos) => self.handle_click(pos),
            InputEvent::Restart => {
                self.restart()?;
                EventOutcome::Restarted
            }
        };
        Ok(outcome)
    }

    /// Click handling: select the queen, then click a destination
    fn handle_click(&mut self, pos: Pos) -> EventOutcome {
        if self.status.is_terminal() {
            return EventOutcome::Ignored;
        }

        match self.selected.take() {
            // Clicking the selected queen again drops the selection
            Some(from) if from == pos => EventOutcome::Ignored,
            Some(_) => match self.try_move(pos.row as i32, pos.col as i32) {
                Ok(report) => EventOutcome::Moved(report),
                Err(err) => EventOutcome::Rejected(err),
            },
            None if pos == self.board.queen() => {
                self.selected = Some(pos);
                EventOutcome::Selected(pos)
            }
            None => EventOutcome::Ignored,
        }
    }

    /// Rebuild board, score and status from the current configuration
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        let board = Board::random(
            &mut self.rng,
            self.config.board_size,
            self.config.obstacles,
        )?;
        self.board = board;
        self.score = ScoreTracker::new(self.config.initial_score);
        self.status = GameStatus::InProgress;
        self.selected = None;
        self.history.clear();
        log::info!("game restarted");
        Ok(())
    }

    /// Replace the configuration and restart
    ///
    /// A changed seed reseeds the generator. On error the previous
    /// configuration and board are kept.
    pub fn restart_with(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let previous = std::mem::replace(&mut self.config, config);
        if let Some(seed) = self.config.seed.filter(|&s| Some(s) != previous.seed) {
            self.rng = StdRng::seed_from_u64(seed);
        }
        if let Err(err) = self.restart() {
            self.config = previous;
            return Err(err);
        }
        Ok(())
    }
}
