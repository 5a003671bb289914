//! Maze coordinates and rectangular cell ranges.
//!
//! A maze coordinate `(row, col)` is stored as `Point { x: col, y: row }`.
//! Iterating a [`Range`] walks rows top to bottom and each row left to
//! right, which is the order of the flat cell buffer in a
//! [`Grid`](crate::Grid).

use std::fmt;
use std::ops::Add;

/// A cell coordinate. `x` is the column, `y` the row (growing down).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Unit moves in the order every solver and planner scans them:
    /// up, down, left, right.
    pub const CARDINALS: [Point; 4] = [
        Point::new(0, -1),
        Point::new(0, 1),
        Point::new(-1, 0),
        Point::new(1, 0),
    ];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point for maze coordinate `(row, col)`.
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.x
    }

    /// Move by `dx` columns and `dy` rows.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours, in [`CARDINALS`](Self::CARDINALS) order.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl fmt::Display for Point {
    /// `(row, col)`, the way mazes are usually read.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.shift(rhs.x, rhs.y)
    }
}

/// Cells `min <= p < max` on both axes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// The range `(0, 0)..(rows, cols)`.
    #[inline]
    pub const fn with_size(rows: i32, cols: i32) -> Self {
        Self::new(Point::new(0, 0), Point::at(rows, cols))
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of cells, zero for an empty range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// The cells that are not on the outermost ring, or the empty range.
    #[inline]
    pub fn inner(self) -> Self {
        let r = Self::new(self.min.shift(1, 1), self.max.shift(-1, -1));
        if r.is_empty() { Self::default() } else { r }
    }

    /// Whether `p` is in the range but not in [`inner`](Self::inner).
    #[inline]
    pub fn on_border(self, p: Point) -> bool {
        self.contains(p) && !self.inner().contains(p)
    }

    /// Row-major iterator over the cells.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: if self.is_empty() { None } else { Some(self.min) },
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major iterator over a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: Option<Point>,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        let p = self.next?;
        let mut n = p.shift(1, 0);
        if n.x >= self.range.max.x {
            n = Point::new(self.range.min.x, n.y + 1);
        }
        self.next = (n.y < self.range.max.y).then_some(n);
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.next.map_or(0, |p| {
            let rows_below = (self.range.max.y - p.y - 1) as usize;
            (self.range.max.x - p.x) as usize + rows_below * self.range.width() as usize
        });
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_mapping() {
        let p = Point::at(2, 5);
        assert_eq!(p, Point::new(5, 2));
        assert_eq!((p.row(), p.col()), (2, 5));
        assert_eq!(p.to_string(), "(2, 5)");
    }

    #[test]
    fn neighbors_in_canonical_order() {
        let c = Point::at(3, 3);
        assert_eq!(
            c.neighbors_4(),
            [Point::at(2, 3), Point::at(4, 3), Point::at(3, 2), Point::at(3, 4)]
        );
        assert!(c.neighbors_4().iter().all(|&q| q.is_adjacent(c)));
        assert!(!c.is_adjacent(Point::at(4, 4)));
    }

    #[test]
    fn range_len_and_contains() {
        let r = Range::with_size(2, 3);
        assert_eq!((r.width(), r.height()), (3, 2));
        assert_eq!(r.len(), 6);
        assert!(r.contains(Point::at(1, 2)));
        assert!(!r.contains(Point::at(0, 3)));
        assert!(!r.contains(Point::at(-1, 0)));
        assert_eq!(Range::with_size(0, 4).len(), 0);
    }

    #[test]
    fn iteration_is_row_major_and_exact() {
        let r = Range::with_size(2, 3);
        let mut it = r.iter();
        assert_eq!(it.len(), 6);
        let pts: Vec<_> = it.by_ref().take(4).collect();
        assert_eq!(pts, vec![Point::at(0, 0), Point::at(0, 1), Point::at(0, 2), Point::at(1, 0)]);
        assert_eq!(it.len(), 2);
        assert_eq!(it.count(), 2);
        assert_eq!(Range::with_size(0, 3).iter().next(), None);
    }

    #[test]
    fn inner_and_border() {
        let r = Range::with_size(4, 5);
        assert_eq!(r.inner(), Range::new(Point::at(1, 1), Point::at(3, 4)));
        assert!(r.on_border(Point::at(2, 0)));
        assert!(r.on_border(Point::at(3, 4)));
        assert!(!r.on_border(Point::at(2, 2)));
        assert!(!r.on_border(Point::at(7, 7)));
        assert!(Range::with_size(2, 2).inner().is_empty());
    }
}
