//! Move-history input: rebuilds the [`Game`] the engine has to answer.
//!
//! ## Format
//!
//! Whitespace-separated integers. First the number of the turn to play,
//! `T >= 1`. Then, for each turn `i` in `0..T`, the opponent's move
//! `x0 y0 x1 y1`, followed (when `i < T - 1`) by our own earlier move.
//!
//! - An opponent move starting with `-1` on the first turn means we open
//!   the game as Black; otherwise we play White.
//! - A move whose `x0` is negative places nothing.
//! - A `-1` in the second pair places a single stone.
//!
//! ```
//! use connect6::board::Color;
//! use connect6::transcript::parse;
//!
//! let game = parse("1\n4 4 -1 -1\n").unwrap();
//! assert_eq!(game.engine, Color::White);
//! assert_eq!(game.turn, 1);
//! ```

use std::fmt;
use std::num::ParseIntError;

use crate::board::{Board, Color, IllegalMove};
use crate::constants::N;
use crate::policy::Game;

/// Why a transcript could not be turned into a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    /// Input ended before the announced moves
    Truncated { turn: usize },
    /// A token is not an integer
    BadInteger { token: String, reason: ParseIntError },
    /// The turn count is zero
    NoTurns,
    /// A recorded move could not be placed
    IllegalMove {
        turn: usize,
        color: Color,
        reason: IllegalMove,
    },
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptError::Truncated { turn } => {
                write!(f, "transcript ends early in turn {turn}")
            }
            TranscriptError::BadInteger { token, reason } => {
                write!(f, "invalid integer {token:?}: {reason}")
            }
            TranscriptError::NoTurns => write!(f, "turn count must be at least 1"),
            TranscriptError::IllegalMove {
                turn,
                color,
                reason,
            } => write!(f, "{color} move in turn {turn}: {reason}"),
        }
    }
}

impl std::error::Error for TranscriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscriptError::BadInteger { reason, .. } => Some(reason),
            TranscriptError::IllegalMove { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl Tokens<'_> {
    fn next_int<T: std::str::FromStr<Err = ParseIntError>>(
        &mut self,
        turn: usize,
    ) -> Result<T, TranscriptError> {
        let token = self.inner.next().ok_or(TranscriptError::Truncated { turn })?;
        token.parse().map_err(|reason| TranscriptError::BadInteger {
            token: token.to_string(),
            reason,
        })
    }

    fn next_move(&mut self, turn: usize) -> Result<[i32; 4], TranscriptError> {
        Ok([
            self.next_int(turn)?,
            self.next_int(turn)?,
            self.next_int(turn)?,
            self.next_int(turn)?,
        ])
    }
}

/// Parse a transcript into the position we must answer.
pub fn parse(input: &str) -> Result<Game, TranscriptError> {
    let mut tokens = Tokens {
        inner: input.split_whitespace(),
    };
    let turns: usize = tokens.next_int(0)?;
    if turns == 0 {
        return Err(TranscriptError::NoTurns);
    }

    // The header count is unchecked; no real game runs past N * N turns.
    let mut opponent_moves = Vec::with_capacity(turns.min(N * N));
    let mut own_moves = Vec::with_capacity(turns.min(N * N));
    for turn in 0..turns {
        opponent_moves.push(tokens.next_move(turn)?);
        if turn + 1 < turns {
            own_moves.push(tokens.next_move(turn)?);
        }
    }

    let engine = if opponent_moves[0][0] == -1 {
        Color::Black
    } else {
        Color::White
    };

    let mut board = Board::new();
    for turn in 0..turns {
        commit(&mut board, opponent_moves[turn], engine.opponent(), turn)?;
        if let Some(&mv) = own_moves.get(turn) {
            commit(&mut board, mv, engine, turn)?;
        }
    }

    Ok(Game {
        board,
        engine,
        turn: turns,
    })
}

fn commit(
    board: &mut Board,
    mv: [i32; 4],
    color: Color,
    turn: usize,
) -> Result<(), TranscriptError> {
    let [x0, y0, x1, y1] = mv;
    if x0 < 0 {
        return Ok(());
    }
    let play = board
        .place((x0, y0), (x1, y1), color, false)
        .map_err(|reason| TranscriptError::IllegalMove {
            turn,
            color,
            reason,
        })?;
    for p in play.points() {
        board.extend_bounds(p);
    }
    Ok(())
}
