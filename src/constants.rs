//! Constants for board geometry, heuristic score tables, and search limits.
//!
//! Every score table and limit in this module is a tunable heuristic, not a
//! protocol constant. Changing them alters playing strength, never the
//! input/output format.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board19x19`: 19x19 board (standard Connect6)
//!
//! ```sh
//! cargo build                                                # 9x9 (default)
//! cargo build --no-default-features --features board19x19    # 19x19
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board19x19")]
pub const N: usize = 19;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board19x19"))]
compile_error!("Cannot enable both 'board9x9' and 'board19x19' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board19x19")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board19x19'");

/// Coordinate of the center cell on both axes.
pub const CENTER: usize = (N - 1) / 2;

/// Wire value marking "no stone" in a coordinate pair.
pub const SENTINEL: i32 = -1;

// =============================================================================
// Line Windows
// =============================================================================

/// Number of consecutive cells that win the game, and the evaluation window.
pub const WINDOW: usize = 6;

/// Cells walked in each direction from a point when collecting a line.
pub const LINE_REACH: i32 = 5;

/// Upper bound on the length of a collected line.
pub const MAX_LINE_LEN: usize = 2 * LINE_REACH as usize + 1;

// =============================================================================
// Static Preview Tables (candidate ordering)
// =============================================================================

/// Preview value of a window holding 1..=5 of our stones and nothing else.
pub const PREVIEW_SELF: [i32; 5] = [20, 45, 50, 1_000_000, 1_000_000];

/// Preview value of a window holding 1..=5 opponent stones and nothing else.
/// Blocking a near-six is nearly as urgent as completing one.
pub const PREVIEW_OPPONENT: [i32; 5] = [1, 15, 30, 900_000, 900_000];

// =============================================================================
// Delta Tables (leaf evaluation)
// =============================================================================

/// Delta-mode value of a window holding 1..=6 of our stones.
pub const DELTA_SELF: [i32; 6] = [1, 20, 40, 2_000, 2_000, 100_000];

/// Delta-mode value of a window holding 1..=6 opponent stones.
pub const DELTA_OPPONENT: [i32; 6] = [1, 15, 30, 150, 5_000, 90_000];

// =============================================================================
// Search Parameters
// =============================================================================

/// Candidates tried per stone of a ply, taken from the top of the ordering.
pub const CANDIDATE_CAP: usize = 12;

/// Search depth in turns. Two means our turn then the opponent's reply.
pub const SEARCH_DEPTH: u32 = 2;

/// Wall-clock budget for one search, in milliseconds.
pub const TIME_BUDGET_MS: u64 = 2000;

/// Score bound used for the root alpha-beta window. Negation stays in range.
pub const INFINITY: i32 = i32::MAX - 1;

// =============================================================================
// Search Window
// =============================================================================

/// Margin added around the stones for our first turn as White.
pub const FIRST_REPLY_MARGIN: usize = 1;

/// Margin added around the stones on every later turn.
pub const MARGIN: usize = 2;
