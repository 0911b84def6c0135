//! Engine-vs-engine games.
//!
//! After Black's center opening, a seeded RNG scatters a few stones for each
//! side near the center so that repeated games do not all follow the same
//! line. Both sides then play with [`decide`] until one makes six in a row
//! or the board fills up.

use tracing::{info, warn};

use crate::board::{Board, BoundingBox, Color, Play, Point};
use crate::constants::MARGIN;
use crate::policy::{EngineConfig, Game, decide};

/// Result of one self-play game.
#[derive(Debug, Clone)]
pub struct GameSummary {
    /// Side that made six, `None` for a full board
    pub winner: Option<Color>,
    /// Engine turns played, both sides together
    pub turns: usize,
    /// Engine plays in order
    pub moves: Vec<(Color, Play)>,
    /// Board after each entry of `moves`, scattered opening stones included
    pub snapshots: Vec<Board>,
    pub board: Board,
}

/// Play one game from the given seed.
pub fn play_game(config: &EngineConfig, seed: u64, opening_stones: usize) -> GameSummary {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut snapshots = Vec::new();
    let mut played = [0usize; 2];

    let mut side = Color::Black;
    let mut winner = None;
    loop {
        let game = Game {
            board: board.clone(),
            engine: side,
            turn: played[side_index(side)] + 1,
        };
        let Some(play) = decide(&game, config) else {
            break;
        };
        if let Err(err) = commit(&mut board, play, side) {
            warn!(%play, %err, "engine produced an illegal play");
            break;
        }
        played[side_index(side)] += 1;
        moves.push((side, play));
        info!(color = %side, %play, "self-play move");

        if play.points().any(|p| board.six_in_a_row(p)) {
            winner = Some(side);
            snapshots.push(board.clone());
            break;
        }
        if moves.len() == 1 {
            scatter(&mut board, &mut rng, opening_stones);
        }
        snapshots.push(board.clone());
        side = side.opponent();
    }

    GameSummary {
        winner,
        turns: moves.len(),
        moves,
        snapshots,
        board,
    }
}

#[inline]
fn side_index(color: Color) -> usize {
    match color {
        Color::Black => 0,
        Color::White => 1,
    }
}

fn commit(board: &mut Board, play: Play, color: Color) -> Result<(), crate::board::IllegalMove> {
    let signed = |p: Option<Point>| p.map_or((-1, -1), |p| (p.x as i32, p.y as i32));
    board.place(signed(Some(play.first)), signed(play.second), color, false)?;
    for p in play.points() {
        board.extend_bounds(p);
    }
    Ok(())
}

/// Drop `per_side` random stones for each side near the existing stones,
/// White first.
fn scatter(board: &mut Board, rng: &mut fastrand::Rng, per_side: usize) {
    let mut color = Color::White;
    for _ in 0..2 * per_side {
        let window = board
            .bounds()
            .map_or_else(BoundingBox::full, |bounds| bounds.widen(MARGIN));
        let empty: Vec<Point> = window.points().filter(|&p| board.is_empty(p)).collect();
        if empty.is_empty() {
            return;
        }
        let p = empty[rng.usize(..empty.len())];
        if commit(board, Play::single(p), color).is_ok() {
            color = color.opponent();
        }
    }
}
