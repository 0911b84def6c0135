//! Static Move Scorer: ranks empty cells by a single-stone preview.
//!
//! The ranking is computed once per decision and only orders the search.
//! Its scores are never compared against search scores.

use crate::board::{Board, BoundingBox, Color, Point};
use crate::line::{Axis, ScoreMode, collect_line, score_line};

/// A candidate cell with its preview score.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub point: Point,
    pub score: i32,
}

/// Preview score of playing `player` at `p`: the sum over all four axes.
pub fn preview(board: &Board, p: Point, player: Color) -> i32 {
    Axis::ALL
        .into_iter()
        .map(|axis| score_line(&collect_line(board, p, axis), player, ScoreMode::Preview))
        .sum()
}

/// Every empty cell of `window`, best first.
///
/// Ties keep row-major scan order (top row first, left to right).
pub fn order_candidates(board: &Board, window: BoundingBox, player: Color) -> Vec<ScoredMove> {
    let mut moves: Vec<ScoredMove> = window
        .points()
        .filter(|&p| board.is_empty(p))
        .map(|point| ScoredMove {
            point,
            score: preview(board, point, player),
        })
        .collect();
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves
}
