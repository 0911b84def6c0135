//! Board state: the grid, coordinates, plays, and the bounding box of stones.
//!
//! Cells are `Option<Color>`; `None` is an empty cell. The bounding box is
//! maintained by whoever commits stones (see [`Board::extend_bounds`]),
//! never by [`Board::place`] itself, so simulated placements during search
//! leave it untouched.

use std::fmt;

use crate::constants::{N, SENTINEL};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Color::Black => "black",
            Color::White => "white",
        })
    }
}

/// True if `(x, y)` addresses a cell of the board.
#[inline]
pub fn within_bounds(x: i32, y: i32) -> bool {
    x >= 0 && (x as usize) < N && y >= 0 && (y as usize) < N
}

/// A cell coordinate, always on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        debug_assert!(x < N && y < N);
        Self { x, y }
    }

    /// Convert signed coordinates, rejecting anything off the board.
    #[inline]
    pub fn from_signed(x: i32, y: i32) -> Option<Point> {
        within_bounds(x, y).then(|| Point::new(x as usize, y as usize))
    }

    /// The point `steps` cells away along `(dx, dy)`, if still on the board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, steps: i32) -> Option<Point> {
        Point::from_signed(self.x as i32 + dx * steps, self.y as i32 + dy * steps)
    }

    #[inline]
    fn index(self) -> usize {
        self.y * N + self.x
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// One turn's placement: one stone on the opening turn, two afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Play {
    pub first: Point,
    pub second: Option<Point>,
}

impl Play {
    pub fn single(first: Point) -> Self {
        Self {
            first,
            second: None,
        }
    }

    pub fn pair(first: Point, second: Point) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }

    /// The stones of this play in placement order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.first).chain(self.second)
    }
}

/// Formats as the four-integer wire form, `x0 y0 x1 y1`.
impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.second {
            Some(second) => write!(f, "{} {}", self.first, second),
            None => write!(f, "{} {SENTINEL} {SENTINEL}", self.first),
        }
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// A target coordinate lies off the board
    OutOfBounds,
    /// A target cell already holds a stone
    Occupied,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::OutOfBounds => write!(f, "illegal move: point off the board"),
            IllegalMove::Occupied => write!(f, "illegal move: point not empty"),
        }
    }
}

impl std::error::Error for IllegalMove {}

/// Inclusive rectangle `[left, right] x [top, bottom]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl BoundingBox {
    /// The box holding just `p`.
    pub fn around(p: Point) -> Self {
        Self {
            top: p.y,
            bottom: p.y,
            left: p.x,
            right: p.x,
        }
    }

    /// The whole board.
    pub fn full() -> Self {
        Self {
            top: 0,
            bottom: N - 1,
            left: 0,
            right: N - 1,
        }
    }

    /// Grow to cover `p`. Never shrinks.
    pub fn include(&mut self, p: Point) {
        self.top = self.top.min(p.y);
        self.bottom = self.bottom.max(p.y);
        self.left = self.left.min(p.x);
        self.right = self.right.max(p.x);
    }

    /// Grow by up to `margin` cells per side, stopping at the board edge.
    pub fn widen(self, margin: usize) -> Self {
        Self {
            top: self.top.saturating_sub(margin),
            bottom: (self.bottom + margin).min(N - 1),
            left: self.left.saturating_sub(margin),
            right: (self.right + margin).min(N - 1),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.left..=self.right).contains(&p.x) && (self.top..=self.bottom).contains(&p.y)
    }

    /// Every cell of the box, row by row from the top.
    pub fn points(self) -> impl Iterator<Item = Point> {
        (self.top..=self.bottom)
            .flat_map(move |y| (self.left..=self.right).map(move |x| Point::new(x, y)))
    }
}

/// The grid plus the bounding box of committed stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Option<Color>>,
    bounds: Option<BoundingBox>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: vec![None; N * N],
            bounds: None,
        }
    }

    #[inline]
    pub fn get(&self, p: Point) -> Option<Color> {
        self.cells[p.index()]
    }

    #[inline]
    pub fn is_empty(&self, p: Point) -> bool {
        self.get(p).is_none()
    }

    /// Overwrite one cell. Used by the search to simulate and undo stones.
    #[inline]
    pub(crate) fn set(&mut self, p: Point, cell: Option<Color>) {
        self.cells[p.index()] = cell;
    }

    /// Validate and (unless `check_only`) place one turn's stones.
    ///
    /// A second coordinate pair containing the sentinel `-1` means a single
    /// stone. On failure nothing is written.
    pub fn place(
        &mut self,
        first: (i32, i32),
        second: (i32, i32),
        color: Color,
        check_only: bool,
    ) -> Result<Play, IllegalMove> {
        let first = Point::from_signed(first.0, first.1).ok_or(IllegalMove::OutOfBounds)?;
        let play = if second.0 == SENTINEL || second.1 == SENTINEL {
            Play::single(first)
        } else {
            let second =
                Point::from_signed(second.0, second.1).ok_or(IllegalMove::OutOfBounds)?;
            Play::pair(first, second)
        };

        if play.points().any(|p| !self.is_empty(p)) || play.second == Some(play.first) {
            return Err(IllegalMove::Occupied);
        }
        if !check_only {
            for p in play.points() {
                self.set(p, Some(color));
            }
        }
        Ok(play)
    }

    /// Fold a committed stone into the bounding box.
    pub fn extend_bounds(&mut self, p: Point) {
        match &mut self.bounds {
            Some(bounds) => bounds.include(p),
            None => self.bounds = Some(BoundingBox::around(p)),
        }
    }

    /// Bounding box of committed stones, `None` before the first one.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }

    /// All stones on the board with their colors.
    pub fn stones(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        BoundingBox::full()
            .points()
            .filter_map(move |p| self.get(p).map(|c| (p, c)))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// True if the stone at `p` belongs to a run of six or more of its color.
    pub fn six_in_a_row(&self, p: Point) -> bool {
        let Some(color) = self.get(p) else {
            return false;
        };
        let run = |dx: i32, dy: i32| {
            (1..)
                .map_while(|step| p.offset(dx, dy, step))
                .take_while(|&q| self.get(q) == Some(color))
                .count()
        };
        [(1, 0), (0, 1), (1, 1), (1, -1)]
            .into_iter()
            .any(|(dx, dy)| 1 + run(dx, dy) + run(-dx, -dy) >= 6)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..N {
            for x in 0..N {
                let ch = match self.get(Point::new(x, y)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
