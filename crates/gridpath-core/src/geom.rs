//! Geometry primitives: [`Point`] and [`Range`].

use std::fmt;

/// A 2D integer point. X grows right (east), Y grows down (south).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Unit steps in compass order: N, E, S, W.
    pub const ORTHOGONAL: [Point; 4] = [
        Point::new(0, -1),
        Point::new(1, 0),
        Point::new(0, 1),
        Point::new(-1, 0),
    ];

    /// Unit diagonal steps in compass order: NE, SE, SW, NW.
    pub const DIAGONAL: [Point; 4] = [
        Point::new(1, -1),
        Point::new(1, 1),
        Point::new(-1, 1),
        Point::new(-1, -1),
    ];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    // Wraps at the i32 edges. A wrapped point lands on the far side of the
    // coordinate space, which no half-open range can contain next to `self`.
    #[inline]
    fn step(self, d: Point) -> Point {
        Point::new(self.x.wrapping_add(d.x), self.y.wrapping_add(d.y))
    }

    /// The four orthogonal neighbours (N, E, S, W).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Self::ORTHOGONAL.map(|d| self.step(d))
    }

    /// The four diagonal neighbours (NE, SE, SW, NW).
    #[inline]
    pub fn diagonals(self) -> [Point; 4] {
        Self::DIAGONAL.map(|d| self.step(d))
    }

    /// All eight neighbours: orthogonals first, then diagonals.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        let o = self.neighbors_4();
        let d = self.diagonals();
        [o[0], o[1], o[2], o[3], d[0], d[1], d[2], d[3]]
    }

    /// Absolute per-axis distance to `other`, saturating at `i32::MAX`.
    #[inline]
    pub fn delta(self, other: Point) -> Point {
        let span = |a: i32, b: i32| i32::try_from(a.abs_diff(b)).unwrap_or(i32::MAX);
        Point::new(span(self.x, other.x), span(self.y, other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
///
/// Cells are numbered row by row from `min`, which gives every point inside
/// a flat index in `0..len()`. Index arithmetic is done in `usize`, so any
/// pair of `i32` corners is valid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Range spanned by two corners, in either order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Range `[0, width) × [0, height)`. Negative sizes are clamped to zero.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width.max(0), height.max(0))
    }

    /// Number of columns, saturating at `i32::MAX`.
    #[inline]
    pub fn width(self) -> i32 {
        i32::try_from(self.cols()).unwrap_or(i32::MAX)
    }

    /// Number of rows, saturating at `i32::MAX`.
    #[inline]
    pub fn height(self) -> i32 {
        i32::try_from(self.rows()).unwrap_or(i32::MAX)
    }

    #[inline]
    fn cols(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.max.x.abs_diff(self.min.x) as usize
    }

    #[inline]
    fn rows(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.max.y.abs_diff(self.min.y) as usize
    }

    /// Total number of cells. Saturates at `usize::MAX` on targets too narrow
    /// to count every cell of the range.
    #[inline]
    pub fn len(self) -> usize {
        self.cols().saturating_mul(self.rows())
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Flat index of `p`, or `None` if it lies outside.
    #[inline]
    pub fn index_of(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = p.x.abs_diff(self.min.x) as usize;
        let y = p.y.abs_diff(self.min.y) as usize;
        Some(y * self.cols() + x)
    }

    /// Inverse of [`index_of`](Self::index_of). `idx` must be below
    /// [`len`](Self::len).
    #[inline]
    pub fn point_at(self, idx: usize) -> Point {
        let w = self.cols().max(1);
        Point::new(
            self.min.x.wrapping_add_unsigned((idx % w) as u32),
            self.min.y.wrapping_add_unsigned((idx / w) as u32),
        )
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}
