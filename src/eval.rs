//! Board Evaluator: scores a simulated position from the stones just placed.
//!
//! Only the lines through stones on the simulated path are read, and each is
//! scored in [`ScoreMode::Delta`], so every stone is credited with the
//! marginal value it adds to the windows around it.

use crate::board::{Board, Color, Point};
use crate::line::{Axis, ScoreMode, collect_line, score_line};

/// Delta score of one stone over its four axes.
pub fn evaluate_stone(board: &Board, p: Point, player: Color) -> i32 {
    Axis::ALL
        .into_iter()
        .map(|axis| score_line(&collect_line(board, p, axis), player, ScoreMode::Delta))
        .sum()
}

/// Sum of [`evaluate_stone`] over every stone of the simulated path.
pub fn evaluate_path(board: &Board, path: &[Point], player: Color) -> i32 {
    path.iter().map(|&p| evaluate_stone(board, p, player)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DELTA_OPPONENT, DELTA_SELF, WINDOW};

    /// Absolute window value of `color`'s stones on the lines through `p`,
    /// counting only windows free of the other color.
    fn absolute(board: &Board, p: Point, color: Color) -> i32 {
        let table = |own: usize| match own {
            0 => 0,
            n => DELTA_SELF[n - 1],
        };
        Axis::ALL
            .into_iter()
            .map(|axis| {
                collect_line(board, p, axis)
                    .windows(WINDOW)
                    .map(|w| {
                        let own = w.iter().filter(|c| **c == Some(color)).count();
                        let other = w.iter().filter(|c| **c == Some(color.opponent())).count();
                        if other == 0 { table(own) } else { 0 }
                    })
                    .sum::<i32>()
            })
            .sum()
    }

    #[test]
    fn test_empty_path_scores_zero() {
        let board = Board::new();
        assert_eq!(evaluate_path(&board, &[], Color::Black), 0);
    }

    #[test]
    fn test_opponent_stone_scores_negative() {
        let mut board = Board::new();
        board.place((4, 4), (-1, -1), Color::White, false).unwrap();
        let p = Point::new(4, 4);
        let black = evaluate_path(&board, &[p], Color::Black);
        let white = evaluate_path(&board, &[p], Color::White);
        assert!(black < 0);
        assert!(white > 0);
        assert_eq!(-black / DELTA_OPPONENT[0], white / DELTA_SELF[0]);
    }

    #[test]
    fn test_path_delta_matches_absolute_difference() {
        // Two stones with no line in common: each stone's delta equals the
        // absolute gain of its lines, and the path sums both.
        let stones = [Point::new(0, 0), Point::new(2, 7)];
        let mut board = Board::new();
        board.place((0, 1), (-1, -1), Color::Black, false).unwrap();

        let before: i32 = stones.iter().map(|&p| absolute(&board, p, Color::Black)).sum();
        for p in stones {
            board.place((p.x as i32, p.y as i32), (-1, -1), Color::Black, false).unwrap();
        }
        let after: i32 = stones.iter().map(|&p| absolute(&board, p, Color::Black)).sum();

        assert_eq!(evaluate_path(&board, &stones, Color::Black), after - before);
    }

    #[test]
    fn test_shared_window_counted_per_stone() {
        let stones = [Point::new(0, 0), Point::new(1, 0)];
        let mut board = Board::new();
        board.place((0, 0), (1, 0), Color::Black, false).unwrap();

        let first = evaluate_stone(&board, stones[0], Color::Black);
        let second = evaluate_stone(&board, stones[1], Color::Black);
        assert_eq!(first, (DELTA_SELF[1] - DELTA_SELF[0]) + 2 * DELTA_SELF[0]);
        assert_eq!(second, 2 * (DELTA_SELF[1] - DELTA_SELF[0]) + 2 * DELTA_SELF[0]);

        let path = evaluate_path(&board, &stones, Color::Black);
        assert_eq!(path, first + second);
        assert!(path > 2 * DELTA_SELF[1] + 4 * DELTA_SELF[0]);
    }
}
