//! Search Engine: time-boxed negamax alpha-beta over pairs of stones.
//!
//! Each ply places two stones for the side to move, both drawn from the top
//! of the static ordering. Simulated stones live on the context's private
//! board and are placed through [`PlacedStone`] guards, which clear the cell
//! and pop the simulated path when dropped. Every exit path, including a
//! beta cutoff, therefore leaves the board as it found it.
//!
//! The clock is checked once on entry to every node. A node entered after
//! the budget has run out returns a neutral `0`, and its ancestors stop
//! exploring, keeping the last pair recorded before the timeout.

use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::board::{Board, Color, Play, Point};
use crate::constants::INFINITY;
use crate::eval::evaluate_path;
use crate::policy::EngineConfig;
use crate::scorer::ScoredMove;

/// Outcome of one top-level search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best pair found at the outermost ply, if any pair improved on alpha
    pub best: Option<Play>,
    /// Score of the root node
    pub score: i32,
    /// Nodes entered
    pub nodes: u64,
    /// Whether the time budget cut the search short
    pub timed_out: bool,
    pub elapsed: Duration,
}

/// Mutable state of one search, owned by a single decision.
pub struct SearchContext {
    board: Board,
    /// Stones simulated along the current recursion path
    path: Vec<Point>,
    candidates: Vec<ScoredMove>,
    candidate_cap: usize,
    depth: u32,
    budget: Duration,
    started: Instant,
    /// Depth of the outermost call; pairs are only recorded there
    root_depth: u32,
    best: Option<(Point, Point)>,
    nodes: u64,
    timed_out: bool,
}

/// A simulated stone. Dropping it empties the cell and pops the path.
pub struct PlacedStone<'a> {
    ctx: &'a mut SearchContext,
    point: Point,
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        let popped = self.ctx.path.pop();
        debug_assert_eq!(popped, Some(self.point));
        self.ctx.board.set(self.point, None);
    }
}

impl Deref for PlacedStone<'_> {
    type Target = SearchContext;

    fn deref(&self) -> &SearchContext {
        &*self.ctx
    }
}

impl DerefMut for PlacedStone<'_> {
    fn deref_mut(&mut self) -> &mut SearchContext {
        &mut *self.ctx
    }
}

impl SearchContext {
    /// Create a context over `board` with candidates already ordered best first.
    pub fn new(board: Board, candidates: Vec<ScoredMove>, config: &EngineConfig) -> Self {
        Self {
            board,
            path: Vec::with_capacity(2 * config.depth as usize),
            candidates,
            candidate_cap: config.candidate_cap,
            depth: config.depth,
            budget: config.time_budget,
            started: Instant::now(),
            root_depth: config.depth,
            best: None,
            nodes: 0,
            timed_out: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Stones simulated on the current path, oldest first.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Simulate a `color` stone at `p`. `None` if the cell is taken.
    pub fn place(&mut self, p: Point, color: Color) -> Option<PlacedStone<'_>> {
        if !self.board.is_empty(p) {
            return None;
        }
        self.board.set(p, Some(color));
        self.path.push(p);
        Some(PlacedStone {
            ctx: self,
            point: p,
        })
    }

    /// Search the configured depth with a full window for `player`.
    pub fn run(&mut self, player: Color) -> SearchResult {
        let score = self.search(-INFINITY, INFINITY, self.depth, player);
        let result = SearchResult {
            best: self.best.map(|(first, second)| Play::pair(first, second)),
            score,
            nodes: self.nodes,
            timed_out: self.timed_out,
            elapsed: self.started.elapsed(),
        };
        debug!(
            score = result.score,
            nodes = result.nodes,
            timed_out = result.timed_out,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "search finished"
        );
        result
    }

    /// Top-level negamax entry. Starts the clock and treats `depth` as the
    /// outermost ply, where improving pairs are recorded.
    pub fn search(&mut self, alpha: i32, beta: i32, depth: u32, player: Color) -> i32 {
        debug_assert!(self.path.is_empty());
        self.started = Instant::now();
        self.root_depth = depth;
        self.best = None;
        self.nodes = 0;
        self.timed_out = false;
        self.alpha_beta(alpha, beta, depth, player)
    }

    #[inline]
    fn time_up(&self) -> bool {
        self.started.elapsed() >= self.budget
    }

    fn alpha_beta(&mut self, mut alpha: i32, beta: i32, depth: u32, player: Color) -> i32 {
        if self.time_up() {
            self.timed_out = true;
            return 0;
        }
        self.nodes += 1;

        if depth == 0 {
            return evaluate_path(&self.board, &self.path, player);
        }

        // Occupied candidates still use up one of the capped slots.
        let width = self.candidate_cap.min(self.candidates.len());
        for i in 0..width {
            let first = self.candidates[i].point;
            let Some(mut first_stone) = self.place(first, player) else {
                continue;
            };
            for j in 0..width {
                let second = first_stone.candidates[j].point;
                let Some(mut second_stone) = first_stone.place(second, player) else {
                    continue;
                };
                let score = -second_stone.alpha_beta(-beta, -alpha, depth - 1, player.opponent());
                drop(second_stone);

                if first_stone.timed_out {
                    return alpha;
                }
                if score >= beta {
                    return beta;
                }
                if score > alpha {
                    alpha = score;
                    if depth == first_stone.root_depth {
                        trace!(%first, %second, score, "new best pair");
                        first_stone.best = Some((first, second));
                    }
                }
            }
        }
        alpha
    }
}
