//! Flat row-major value and policy tables with 2D accessors.

use maze_core::{Grid, Point};

use crate::action::Action;

/// Value of walls and of cells that cannot reach the goal.
pub const UNREACHABLE_VALUE: f64 = f64::NEG_INFINITY;

/// One value per grid cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueTable {
    rows: i32,
    cols: i32,
    values: Vec<f64>,
}

impl ValueTable {
    /// A table with every cell set to [`UNREACHABLE_VALUE`].
    pub fn unreachable(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            values: vec![UNREACHABLE_VALUE; grid.len()],
        }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cells, equal to `rows * cols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.cols || p.y < 0 || p.y >= self.rows {
            return None;
        }
        Some((p.y * self.cols + p.x) as usize)
    }

    /// The value at `p`, or `None` for points outside the table and cells
    /// holding the unreachable sentinel.
    pub fn get(&self, p: Point) -> Option<f64> {
        self.idx(p)
            .map(|i| self.values[i])
            .filter(|v| v.is_finite())
    }

    /// Raw value at `p`, sentinel included. Out-of-range points read as
    /// [`UNREACHABLE_VALUE`].
    #[inline]
    pub fn raw(&self, p: Point) -> f64 {
        self.idx(p).map_or(UNREACHABLE_VALUE, |i| self.values[i])
    }

    /// Set the value at `p`. Does nothing if out of range.
    #[inline]
    pub fn set(&mut self, p: Point, v: f64) {
        if let Some(i) = self.idx(p) {
            self.values[i] = v;
        }
    }

    /// One row of the table.
    pub fn row(&self, r: i32) -> &[f64] {
        let start = (r * self.cols) as usize;
        &self.values[start..start + self.cols as usize]
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// One optional action per grid cell.
///
/// `None` marks walls, the goal and cells without an improving action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Policy {
    rows: i32,
    cols: i32,
    actions: Vec<Option<Action>>,
}

impl Policy {
    /// A policy with no action anywhere.
    pub fn empty(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            actions: vec![None; grid.len()],
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.cols || p.y < 0 || p.y >= self.rows {
            return None;
        }
        Some((p.y * self.cols + p.x) as usize)
    }

    /// The action at `p`, `None` if undefined or out of range.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Action> {
        self.idx(p).and_then(|i| self.actions[i])
    }

    /// Set the action at `p`. Does nothing if out of range.
    #[inline]
    pub fn set(&mut self, p: Point, a: Option<Action>) {
        if let Some(i) = self.idx(p) {
            self.actions[i] = a;
        }
    }

    /// Number of cells with a defined action.
    pub fn defined(&self) -> usize {
        self.actions.iter().filter(|a| a.is_some()).count()
    }

    /// Render as one line per row: action symbols, `.` where undefined.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.actions.len() + self.rows as usize);
        for row in self.actions.chunks(self.cols as usize) {
            out.extend(row.iter().map(|a| a.map_or('.', Action::symbol)));
            out.push('\n');
        }
        out
    }
}
