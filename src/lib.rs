//! Connect6: a move-selection engine for six-in-a-row with two stones per turn.
//!
//! Given the board and the side to move, the engine returns the next one or
//! two stones within a fixed wall-clock budget.
//!
//! ## Modules
//!
//! - [`constants`] - Board size, score tables, and search limits
//! - [`board`] - Grid, coordinates, plays, and the bounding box of stones
//! - [`line`] - Window scoring along one axis through a point
//! - [`scorer`] - Static ordering of candidate cells
//! - [`eval`] - Incremental evaluation of simulated stones
//! - [`search`] - Time-boxed alpha-beta over pairs of stones
//! - [`policy`] - Opening rule, search window, and fallback
//! - [`transcript`] - Move-history input and move output
//! - [`selfplay`] - Engine-vs-engine games
//!
//! ## Example
//!
//! ```
//! use connect6::policy::{EngineConfig, decide};
//! use connect6::transcript::parse;
//!
//! // We play White; Black opened at the center.
//! let game = parse("1\n4 4 -1 -1\n").unwrap();
//! let play = decide(&game, &EngineConfig::default()).unwrap();
//! println!("{play}");
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod line;
pub mod policy;
pub mod scorer;
pub mod search;
pub mod selfplay;
pub mod transcript;
