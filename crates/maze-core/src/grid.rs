//! The maze cell grid.
//!
//! [`Grid`] stores one [`Cell`] per coordinate in a flat row-major buffer,
//! together with the `start` and `goal` points every solver works between.
//! Cells change only while a maze is being generated; solvers borrow the
//! grid immutably.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Smallest allowed side length: start `(1, 1)` and goal
/// `(rows - 2, cols - 2)` must both be interior cells.
pub const MIN_SIDE: i32 = 3;

/// A maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Open,
    #[default]
    Wall,
}

impl Cell {
    /// Whether the cell can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }
}

/// A rectangular maze with fixed dimensions.
///
/// Deserializing checks the same invariants as [`Grid::new`] plus the cell
/// count, so a decoded grid can be indexed like a constructed one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Create an all-wall grid with `start = (1, 1)` and
    /// `goal = (rows - 2, cols - 2)`.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        let len = Self::checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Wall; len],
            start: Point::at(1, 1),
            goal: Point::at(rows - 2, cols - 2),
        })
    }

    /// Cell count of a `rows`×`cols` grid, if those sides are allowed.
    fn checked_len(rows: i32, cols: i32) -> Result<usize, GridError> {
        if rows < MIN_SIDE || cols < MIN_SIDE {
            return Err(GridError::TooSmall { rows, cols });
        }
        rows.checked_mul(cols)
            .map(|n| n as usize)
            .ok_or(GridError::TooLarge { rows, cols })
    }

    /// Replace the start and goal points.
    ///
    /// The points are not validated: solvers apply their own guard and
    /// return an empty result for endpoints that are out of bounds or walls.
    pub fn with_endpoints(mut self, start: Point, goal: Point) -> Self {
        self.start = start;
        self.goal = goal;
        self
    }

    /// Build a grid from an ASCII picture.
    ///
    /// `#` is a wall, `.` is open, `S` and `G` are open cells marking the
    /// start and goal. Endpoints that are not drawn keep the defaults of
    /// [`Grid::new`]. Leading and trailing blank lines are ignored.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.chars().count() as i32;
        let rows = lines.len() as i32;
        let mut grid = Self::new(rows, cols)?;

        for (y, line) in lines.iter().enumerate() {
            let width = line.chars().count() as i32;
            if width != cols {
                return Err(GridError::Ragged {
                    line: y,
                    expected: cols,
                    found: width,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let cell = match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Open,
                    'S' => {
                        grid.start = p;
                        Cell::Open
                    }
                    'G' => {
                        grid.goal = p;
                        Cell::Open
                    }
                    _ => return Err(GridError::InvalidChar { ch, pos: p }),
                };
                grid.set(p, cell);
            }
        }
        Ok(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least `MIN_SIDE * MIN_SIDE` cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The full grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.rows, self.cols)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.cols && p.y >= 0 && p.y < self.rows
    }

    /// Whether `p` is inside the grid and not on its outermost ring.
    #[inline]
    pub fn is_interior(&self, p: Point) -> bool {
        p.x >= 1 && p.x < self.cols - 1 && p.y >= 1 && p.y < self.rows - 1
    }

    /// Convert a `Point` to a flat row-major index. Returns `None` if out
    /// of range.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.cols + p.x) as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols as usize;
        Point::new((idx % cols) as i32, (idx / cols) as i32)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = cell;
        }
    }

    /// Flat row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Append the in-bounds open neighbours of `p` to `buf`, in the order
    /// up, down, left, right. The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }

    /// Number of open cells among the four neighbours of `p`.
    pub fn count_open_neighbors(&self, p: Point) -> usize {
        p.neighbors_4().into_iter().filter(|&n| self.is_open(n)).count()
    }

    /// Force every border cell to [`Cell::Wall`].
    pub fn seal_outer_walls(&mut self) {
        let bounds = self.bounds();
        for p in bounds.iter().filter(|&p| bounds.on_border(p)) {
            self.set(p, Cell::Wall);
        }
    }

    /// A copy of the grid with its border sealed, for display or export.
    pub fn sealed(&self) -> Self {
        let mut g = self.clone();
        g.seal_outer_walls();
        g
    }

    /// Render the grid with `path` cells (other than the endpoints) drawn
    /// as `*`.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut marks = vec![false; self.len()];
        for &p in path {
            if let Some(i) = self.idx(p) {
                marks[i] = true;
            }
        }
        let mut out = String::with_capacity(self.len() + self.rows as usize);
        for p in self.bounds() {
            out.push(self.glyph(p, marks[(p.y * self.cols + p.x) as usize]));
            if p.x == self.cols - 1 {
                out.push('\n');
            }
        }
        out
    }

    fn glyph(&self, p: Point, on_path: bool) -> char {
        if p == self.start {
            'S'
        } else if p == self.goal {
            'G'
        } else if on_path {
            '*'
        } else if self.is_open(p) {
            '.'
        } else {
            '#'
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: Point,
    goal: Point,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let expected = Self::checked_len(raw.rows, raw.cols)?;
        if raw.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
            start: raw.start,
            goal: raw.goal,
        })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawGrid::deserialize(deserializer)?;
        Grid::try_from(raw).map_err(serde::de::Error::custom)
    }
}
