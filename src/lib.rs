//! Capture-Go: a rules engine for Go scored by captured stones.
//!
//! The engine referees a two-player game on a square grid: it checks move
//! legality, finds connected groups, removes groups that run out of
//! liberties and keeps the capture tally. There is no territory counting
//! and no ko rule; the game ends after two consecutive passes or a
//! resignation.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits and game-flow constants
//! - [`config`] - Session configuration (board size)
//! - [`board`] - Grid storage, liberty counting and group removal
//! - [`game`] - Move protocol, turn order, passes, resignation and scoring
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use capture_go::board::{Cell, Color};
//! use capture_go::game::GameSession;
//!
//! let mut game = GameSession::new();
//!
//! // Black surrounds the white stone at (3, 4); White plays elsewhere.
//! game.attempt_move(3, 3).unwrap();
//! game.attempt_move(3, 4).unwrap();
//! game.attempt_move(2, 4).unwrap();
//! game.attempt_move(10, 10).unwrap();
//! game.attempt_move(4, 4).unwrap();
//! game.attempt_move(12, 12).unwrap();
//! let placed = game.attempt_move(3, 5).unwrap();
//!
//! assert_eq!(placed.captured, 1);
//! assert_eq!(game.board().get(3, 4), Ok(Cell::Empty));
//! assert_eq!(game.captures(Color::Black), 1);
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod game;
pub mod gtp;
