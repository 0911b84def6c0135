//! Line Evaluator: scores the cells along one axis through a point.
//!
//! A line is at most [`MAX_LINE_LEN`] cells: the point plus up to
//! [`LINE_REACH`] cells on either side, clipped at the board edge. Scores are
//! sums over every run of [`WINDOW`] consecutive cells, the only span in which
//! six-in-a-row can be made. Every window of a collected line contains the
//! center point.

use crate::board::{Board, Color, Point};
use crate::constants::{
    DELTA_OPPONENT, DELTA_SELF, LINE_REACH, MAX_LINE_LEN, PREVIEW_OPPONENT, PREVIEW_SELF, WINDOW,
};

/// The four directions a line can run in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
    /// Top-left to bottom-right
    Diagonal,
    /// Bottom-left to top-right
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Step `(dx, dy)` along this axis.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Vertical => (0, 1),
            Axis::Horizontal => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// How [`score_line`] values its windows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScoreMode {
    /// One-shot heuristic for ordering candidates before search.
    Preview,
    /// Marginal value of the most recent stone, for leaf evaluation.
    Delta,
}

/// Cells from `LINE_REACH` steps behind `p` to `LINE_REACH` steps ahead,
/// skipping positions off the board.
pub fn collect_line(board: &Board, p: Point, axis: Axis) -> Vec<Option<Color>> {
    let (dx, dy) = axis.delta();
    let mut line = Vec::with_capacity(MAX_LINE_LEN);
    line.extend(
        (-LINE_REACH..=LINE_REACH)
            .filter_map(|step| p.offset(dx, dy, step))
            .map(|q| board.get(q)),
    );
    line
}

/// Sum of window scores along `line` from `player`'s point of view.
pub fn score_line(line: &[Option<Color>], player: Color, mode: ScoreMode) -> i32 {
    match mode {
        ScoreMode::Preview => preview_score(line, player),
        ScoreMode::Delta => delta_score(line, player),
    }
}

/// Stones of `player` and of the opponent in one window.
#[inline]
fn count_stones(window: &[Option<Color>], player: Color) -> (usize, usize) {
    window.iter().fold((0, 0), |(own, opp), cell| match cell {
        Some(c) if *c == player => (own + 1, opp),
        Some(_) => (own, opp + 1),
        None => (own, opp),
    })
}

fn preview_score(line: &[Option<Color>], player: Color) -> i32 {
    let window_score = |window: &[Option<Color>]| match count_stones(window, player) {
        (own, 0) if own > 0 => PREVIEW_SELF[own - 1],
        (0, opp) if opp > 0 => PREVIEW_OPPONENT[opp - 1],
        _ => 0,
    };

    // A line shorter than a window is scored as one window padded with
    // cells that hold no stone.
    if line.len() < WINDOW {
        return window_score(line);
    }
    line.windows(WINDOW).map(window_score).sum()
}

fn delta_score(line: &[Option<Color>], player: Color) -> i32 {
    let (mut own_pre, mut own_post) = (0, 0);
    let (mut opp_pre, mut opp_post) = (0, 0);

    for window in line.windows(WINDOW) {
        match count_stones(window, player) {
            (own, 0) => {
                if own > 0 {
                    own_post += DELTA_SELF[own - 1];
                }
                if own > 1 {
                    own_pre += DELTA_SELF[own - 2];
                }
            }
            (0, opp) => {
                opp_post += DELTA_OPPONENT[opp - 1];
                if opp > 1 {
                    opp_pre += DELTA_OPPONENT[opp - 2];
                }
            }
            _ => {}
        }
    }

    (own_post - own_pre) - (opp_post - opp_pre)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::N;

    fn line_of(cells: &str) -> Vec<Option<Color>> {
        cells
            .chars()
            .map(|c| match c {
                'X' => Some(Color::Black),
                'O' => Some(Color::White),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_collect_line_center_is_full_length() {
        let board = Board::new();
        let p = Point::new(N / 2, N / 2);
        for axis in Axis::ALL {
            let expected = 2 * (N / 2).min(LINE_REACH as usize) + 1;
            assert_eq!(collect_line(&board, p, axis).len(), expected);
        }
    }

    #[test]
    fn test_collect_line_clips_at_corner() {
        let board = Board::new();
        let corner = Point::new(0, 0);
        assert_eq!(collect_line(&board, corner, Axis::Horizontal).len(), 6);
        assert_eq!(collect_line(&board, corner, Axis::Diagonal).len(), 6);
        // Only the corner itself lies on this anti-diagonal.
        assert_eq!(collect_line(&board, corner, Axis::AntiDiagonal).len(), 1);
    }

    #[test]
    fn test_collect_line_never_exceeds_max() {
        let board = Board::new();
        for y in 0..N {
            for x in 0..N {
                for axis in Axis::ALL {
                    assert!(collect_line(&board, Point::new(x, y), axis).len() <= MAX_LINE_LEN);
                }
            }
        }
    }

    #[test]
    fn test_collect_line_reads_stones_in_order() {
        let mut board = Board::new();
        board.place((0, 0), (2, 0), Color::Black, false).unwrap();
        board.place((1, 0), (-1, -1), Color::White, false).unwrap();
        let line = collect_line(&board, Point::new(0, 0), Axis::Horizontal);
        assert_eq!(&line[..3], &line_of("XOX")[..]);
    }

    #[test]
    fn test_preview_empty_line_scores_zero() {
        assert_eq!(score_line(&line_of("..........."), Color::Black, ScoreMode::Preview), 0);
    }

    #[test]
    fn test_preview_counts_single_color_windows() {
        // One black stone at the start of a six-cell line: one window, one stone.
        let line = line_of("X.....");
        assert_eq!(score_line(&line, Color::Black, ScoreMode::Preview), PREVIEW_SELF[0]);
        assert_eq!(score_line(&line, Color::White, ScoreMode::Preview), PREVIEW_OPPONENT[0]);
    }

    #[test]
    fn test_preview_ignores_mixed_windows() {
        assert_eq!(score_line(&line_of("XO...."), Color::Black, ScoreMode::Preview), 0);
    }

    #[test]
    fn test_preview_pads_short_lines() {
        let line = line_of("XX");
        assert_eq!(score_line(&line, Color::Black, ScoreMode::Preview), PREVIEW_SELF[1]);
    }

    #[test]
    fn test_delta_skips_short_lines() {
        assert_eq!(score_line(&line_of("XX"), Color::Black, ScoreMode::Delta), 0);
    }

    #[test]
    fn test_delta_single_stone_credits_each_window() {
        // Stone in the middle of an 11-cell line sits in all six windows.
        let line = line_of(".....X.....");
        assert_eq!(score_line(&line, Color::Black, ScoreMode::Delta), 6 * DELTA_SELF[0]);
        assert_eq!(score_line(&line, Color::White, ScoreMode::Delta), -6 * DELTA_OPPONENT[0]);
    }

    #[test]
    fn test_delta_is_marginal() {
        // Window 0 holds only the center stone, windows 1..=5 hold both.
        let line = line_of(".....XX....");
        let expected = DELTA_SELF[0] + 5 * (DELTA_SELF[1] - DELTA_SELF[0]);
        assert_eq!(score_line(&line, Color::Black, ScoreMode::Delta), expected);
    }

    #[test]
    fn test_delta_mixed_windows_contribute_nothing() {
        assert_eq!(score_line(&line_of("XXXOOO"), Color::Black, ScoreMode::Delta), 0);
    }
}
