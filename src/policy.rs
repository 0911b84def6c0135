//! Decision Policy: picks the engine's play for one turn.
//!
//! 1. Opening: as Black on the first turn, play the center stone alone.
//! 2. Otherwise widen the bounding box of the stones (by one cell on our
//!    first turn as White, two afterwards) and order its empty cells.
//! 3. Default to the two best-ordered cells.
//! 4. After our first turn, let the search replace the default.

use std::time::Duration;

use tracing::info;

use crate::board::{Board, BoundingBox, Color, Play, Point};
use crate::constants::{
    CANDIDATE_CAP, CENTER, FIRST_REPLY_MARGIN, MARGIN, SEARCH_DEPTH, TIME_BUDGET_MS,
};
use crate::scorer::order_candidates;
use crate::search::{SearchContext, SearchResult};

/// Runtime knobs of the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Wall-clock budget of one search
    pub time_budget: Duration,
    /// Candidates tried for each stone of a ply
    pub candidate_cap: usize,
    /// Search depth in turns
    pub depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_millis(TIME_BUDGET_MS),
            candidate_cap: CANDIDATE_CAP,
            depth: SEARCH_DEPTH,
        }
    }
}

/// Position handed to the policy: the committed board, our color, and the
/// 1-based number of the turn we are about to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub engine: Color,
    pub turn: usize,
}

impl Game {
    /// True on the very first turn of the game with us to open it.
    pub fn is_opening(&self) -> bool {
        self.turn == 1 && self.engine == Color::Black
    }
}

/// Which stage of the policy produced the play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionSource {
    /// Center stone on the opening turn
    Opening,
    /// Top of the static ordering, search skipped or found nothing
    Ordering,
    /// Pair recorded by the search
    Search,
}

/// A play together with how it was found.
#[derive(Debug, Clone)]
pub struct Decision {
    pub play: Play,
    pub source: DecisionSource,
    /// Candidates considered after widening
    pub candidates: usize,
    pub search: Option<SearchResult>,
}

/// The engine's play, or `None` when the board has no empty cell.
pub fn decide(game: &Game, config: &EngineConfig) -> Option<Play> {
    decide_with_stats(game, config).map(|d| d.play)
}

/// Like [`decide`], keeping the statistics of the decision.
pub fn decide_with_stats(game: &Game, config: &EngineConfig) -> Option<Decision> {
    if game.is_opening() {
        return Some(Decision {
            play: Play::single(Point::new(CENTER, CENTER)),
            source: DecisionSource::Opening,
            candidates: 0,
            search: None,
        });
    }

    let window = search_window(&game.board, game.turn);
    let mut candidates = order_candidates(&game.board, window, game.engine);
    if candidates.is_empty() {
        candidates = order_candidates(&game.board, BoundingBox::full(), game.engine);
    }

    let default = match candidates.as_slice() {
        [] => return None,
        [only] => Play::single(only.point),
        [first, second, ..] => Play::pair(first.point, second.point),
    };
    let count = candidates.len();

    let mut decision = Decision {
        play: default,
        source: DecisionSource::Ordering,
        candidates: count,
        search: None,
    };
    if game.turn > 1 && default.second.is_some() {
        let mut ctx = SearchContext::new(game.board.clone(), candidates, config);
        let result = ctx.run(game.engine);
        if let Some(best) = result.best {
            decision.play = best;
            decision.source = DecisionSource::Search;
        }
        decision.search = Some(result);
    }

    info!(
        turn = game.turn,
        color = %game.engine,
        play = %decision.play,
        source = ?decision.source,
        candidates = count,
        "decided"
    );
    Some(decision)
}

/// Bounding box of the committed stones grown by the turn's margin, or the
/// whole board when no stone has been committed.
pub fn search_window(board: &Board, turn: usize) -> BoundingBox {
    let margin = if turn == 1 { FIRST_REPLY_MARGIN } else { MARGIN };
    board
        .bounds()
        .map_or_else(BoundingBox::full, |bounds| bounds.widen(margin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::N;

    fn commit(board: &mut Board, points: &[(i32, i32)], color: Color) {
        for &(x, y) in points {
            board.place((x, y), (-1, -1), color, false).unwrap();
            board.extend_bounds(Point::new(x as usize, y as usize));
        }
    }

    #[test]
    fn test_opening_plays_center_alone() {
        let game = Game {
            board: Board::new(),
            engine: Color::Black,
            turn: 1,
        };
        let decision = decide_with_stats(&game, &EngineConfig::default()).unwrap();
        assert_eq!(decision.play, Play::single(Point::new(CENTER, CENTER)));
        assert_eq!(decision.source, DecisionSource::Opening);
    }

    #[test]
    fn test_first_reply_uses_narrow_window_without_search() {
        let mut board = Board::new();
        commit(&mut board, &[(CENTER as i32, CENTER as i32)], Color::Black);
        let game = Game {
            board,
            engine: Color::White,
            turn: 1,
        };
        let decision = decide_with_stats(&game, &EngineConfig::default()).unwrap();
        assert_eq!(decision.source, DecisionSource::Ordering);
        assert!(decision.search.is_none());
        assert_eq!(decision.candidates, 8);
    }

    #[test]
    fn test_window_margins() {
        let mut board = Board::new();
        commit(&mut board, &[(1, 1)], Color::Black);
        assert_eq!(
            search_window(&board, 1),
            BoundingBox {
                top: 0,
                bottom: 2,
                left: 0,
                right: 2
            }
        );
        assert_eq!(
            search_window(&board, 2),
            BoundingBox {
                top: 0,
                bottom: 3,
                left: 0,
                right: 3
            }
        );
        assert_eq!(search_window(&Board::new(), 5), BoundingBox::full());
    }

    #[test]
    fn test_full_window_falls_back_to_whole_board() {
        // Fill the widened window so only cells outside it remain.
        let mut board = Board::new();
        commit(&mut board, &[(0, 0)], Color::Black);
        let window = search_window(&board, 2);
        let mut color = Color::White;
        let empty: Vec<Point> = window.points().filter(|&p| board.is_empty(p)).collect();
        for p in empty {
            board.place((p.x as i32, p.y as i32), (-1, -1), color, false).unwrap();
            color = color.opponent();
        }
        let game = Game {
            board,
            engine: Color::Black,
            turn: 2,
        };
        let play = decide(&game, &EngineConfig::default()).unwrap();
        assert!(play.points().all(|p| !window.contains(p) && game.board.is_empty(p)));
    }

    #[test]
    fn test_full_board_has_no_play() {
        let mut board = Board::new();
        let mut color = Color::Black;
        for y in 0..N as i32 {
            for x in 0..N as i32 {
                board.place((x, y), (-1, -1), color, false).unwrap();
                color = color.opponent();
            }
        }
        let game = Game {
            board,
            engine: Color::White,
            turn: 40,
        };
        assert_eq!(decide(&game, &EngineConfig::default()), None);
    }

    #[test]
    fn test_zero_budget_keeps_ordering_default() {
        let mut board = Board::new();
        commit(&mut board, &[(4, 4), (3, 3), (5, 5)], Color::Black);
        commit(&mut board, &[(4, 5), (5, 4)], Color::White);
        let game = Game {
            board,
            engine: Color::White,
            turn: 2,
        };
        let config = EngineConfig {
            time_budget: Duration::ZERO,
            ..EngineConfig::default()
        };

        let decision = decide_with_stats(&game, &config).unwrap();
        let window = search_window(&game.board, game.turn);
        let ordered = order_candidates(&game.board, window, Color::White);

        assert_eq!(decision.source, DecisionSource::Ordering);
        assert_eq!(
            decision.play,
            Play::pair(ordered[0].point, ordered[1].point)
        );
        let search = decision.search.unwrap();
        assert!(search.timed_out);
        assert_eq!(search.score, 0);
    }
}
