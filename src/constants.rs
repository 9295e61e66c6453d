//! Board geometry and game-flow constants.
//!
//! The board side is chosen at session creation (see [`crate::config`]),
//! bounded by the limits below.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used when no other size is configured.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Smallest supported board side.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest supported board side. Vertex letters run A-Z without I.
pub const MAX_BOARD_SIZE: usize = 25;

/// Column letters used in vertex notation ('I' is skipped).
pub const COLUMN_LETTERS: &[u8; MAX_BOARD_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Game Flow
// =============================================================================

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u32 = 2;

/// Moves attempted by the random demo before it passes out the game.
pub const DEMO_MOVES: usize = 200;

/// Chance that the demo passes instead of picking a point.
pub const DEMO_PASS_PROB: f64 = 0.02;

// =============================================================================
// Rendering
// =============================================================================

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';

/// Empty star point (hoshi).
pub const STAR_POINT: char = '+';
