//! Game session: turn order, move legality, captures and game end.
//!
//! A [`GameSession`] owns its [`Board`] and is the only thing that mutates
//! it. Every move goes through one protocol:
//!
//! 1. reject occupied points,
//! 2. place the stone tentatively,
//! 3. remove adjacent enemy groups left without liberties,
//! 4. reject (and roll back) the move if the placed group now has no
//!    liberties and nothing was captured.
//!
//! Captures are resolved before the suicide check, so filling the last
//! liberty of an enemy group is legal even when the new stone has no other
//! liberty.
//!
//! In this variant a suicide attempt costs the mover their turn. Occupied
//! and off-board points are refused without any state change.

use tracing::{debug, info};

use crate::board::{Board, BoardError, Cell, Color, Point};
use crate::config::{ConfigError, GameConfig};
use crate::constants::PASSES_TO_END;

/// Reasons a move is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: {0}")]
    OutOfRange(#[from] BoardError),
    #[error("illegal move: point not empty")]
    Occupied,
    #[error("illegal move: suicide")]
    Suicide,
    #[error("game is over")]
    GameOver,
}

/// A successfully played stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: Color,
    pub point: Point,
    /// Opponent stones removed by this move.
    pub captured: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    ConsecutivePasses,
    /// The contained color resigned.
    Resignation(Color),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Winner(Color),
    Tie,
}

/// Capture tallies and the decided result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub black: u32,
    pub white: u32,
    pub reason: EndReason,
    pub verdict: Verdict,
}

impl FinalScore {
    pub fn winner(&self) -> Option<Color> {
        match self.verdict {
            Verdict::Winner(color) => Some(color),
            Verdict::Tie => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    pub game_ended: bool,
    /// Set once the game has ended.
    pub final_score: Option<FinalScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Ended(FinalScore),
}

/// Read-only copy of the session state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub to_move: Color,
    pub black_score: u32,
    pub white_score: u32,
    pub pass_count: u32,
    pub ended: bool,
}

/// One game of capture Go.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    to_move: Color,
    black_captures: u32,
    white_captures: u32,
    consecutive_passes: u32,
    status: GameStatus,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A new game on the default 19x19 board.
    pub fn new() -> Self {
        Self::on_board(Board::new(GameConfig::default().board_size))
    }

    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::on_board(Board::new(config.board_size)))
    }

    fn on_board(board: Board) -> Self {
        Self {
            board,
            to_move: Color::Black,
            black_captures: 0,
            white_captures: 0,
            consecutive_passes: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.status, GameStatus::Ended(_))
    }

    pub fn pass_count(&self) -> u32 {
        self.consecutive_passes
    }

    /// Stones captured so far by `color`.
    pub fn captures(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black_captures,
            Color::White => self.white_captures,
        }
    }

    /// Play a stone for the player to move at `(x, y)`.
    ///
    /// # Errors
    /// - [`MoveError::GameOver`] after the game has ended
    /// - [`MoveError::OutOfRange`] for a point off the board
    /// - [`MoveError::Occupied`] if the point holds a stone
    /// - [`MoveError::Suicide`] if the stone would have no liberties and
    ///   captures nothing; the board is restored and the turn passes to the
    ///   opponent
    pub fn attempt_move(&mut self, x: usize, y: usize) -> Result<Placement, MoveError> {
        if self.is_ended() {
            return Err(MoveError::GameOver);
        }
        let player = self.to_move;
        let opponent = player.opponent();

        if !self.board.get(x, y)?.is_empty() {
            debug!(?player, x, y, "rejected move on occupied point");
            return Err(MoveError::Occupied);
        }
        self.board.set(x, y, player.into())?;

        let mut captured = 0;
        for (nx, ny) in self.board.neighbors(x, y) {
            if self.board.get(nx, ny) != Ok(Cell::from(opponent)) {
                continue;
            }
            let (liberties, _) = self.board.count_liberties(nx, ny);
            if liberties == 0 {
                let removed = self.board.remove_group(nx, ny);
                debug!(?player, x = nx, y = ny, removed, "captured group");
                captured += removed;
            }
        }

        let (liberties, _) = self.board.count_liberties(x, y);
        if liberties == 0 && captured == 0 {
            self.board.set(x, y, Cell::Empty)?;
            self.to_move = opponent;
            debug!(?player, x, y, "rejected suicide, turn skipped");
            return Err(MoveError::Suicide);
        }

        match player {
            Color::Black => self.black_captures += captured as u32,
            Color::White => self.white_captures += captured as u32,
        }
        self.consecutive_passes = 0;
        self.to_move = opponent;
        Ok(Placement {
            player,
            point: (x, y),
            captured,
        })
    }

    /// Check whether the player to move may play at `(x, y)` without
    /// changing this session.
    pub fn check_move(&self, x: usize, y: usize) -> Result<(), MoveError> {
        let mut scratch = self.clone();
        scratch.attempt_move(x, y).map(|_| ())
    }

    /// Pass the turn. The second consecutive pass ends the game.
    pub fn pass(&mut self) -> PassOutcome {
        if let GameStatus::Ended(score) = self.status {
            return PassOutcome {
                game_ended: true,
                final_score: Some(score),
            };
        }
        self.consecutive_passes += 1;
        if self.consecutive_passes >= PASSES_TO_END {
            let score = self.finish(EndReason::ConsecutivePasses);
            return PassOutcome {
                game_ended: true,
                final_score: Some(score),
            };
        }
        self.to_move = self.to_move.opponent();
        PassOutcome {
            game_ended: false,
            final_score: None,
        }
    }

    /// Resign on behalf of the player to move. The opponent wins whatever
    /// the capture tally says.
    pub fn resign(&mut self) -> FinalScore {
        if let GameStatus::Ended(score) = self.status {
            return score;
        }
        self.finish(EndReason::Resignation(self.to_move))
    }

    /// Start over: empty board, Black to move, no captures, no passes.
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Color::Black;
        self.black_captures = 0;
        self.white_captures = 0;
        self.consecutive_passes = 0;
        self.status = GameStatus::InProgress;
        info!(size = self.board.size(), "game reset");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            to_move: self.to_move,
            black_score: self.black_captures,
            white_score: self.white_captures,
            pass_count: self.consecutive_passes,
            ended: self.is_ended(),
        }
    }

    /// The result the game would have if it were scored now.
    pub fn score(&self, reason: EndReason) -> FinalScore {
        let verdict = match reason {
            EndReason::Resignation(resigned) => Verdict::Winner(resigned.opponent()),
            EndReason::ConsecutivePasses => {
                match self.black_captures.cmp(&self.white_captures) {
                    std::cmp::Ordering::Greater => Verdict::Winner(Color::Black),
                    std::cmp::Ordering::Less => Verdict::Winner(Color::White),
                    std::cmp::Ordering::Equal => Verdict::Tie,
                }
            }
        };
        FinalScore {
            black: self.black_captures,
            white: self.white_captures,
            reason,
            verdict,
        }
    }

    fn finish(&mut self, reason: EndReason) -> FinalScore {
        let score = self.score(reason);
        self.status = GameStatus::Ended(score);
        info!(
            ?reason,
            verdict = ?score.verdict,
            black = score.black,
            white = score.white,
            "game over"
        );
        score
    }
}
