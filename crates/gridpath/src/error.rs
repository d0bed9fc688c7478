use std::fmt;

use gridpath_core::{Point, Range};

/// A coordinate fell outside the grid it was used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsError {
    pub point: Point,
    pub bounds: Range,
}

impl BoundsError {
    pub fn new(point: Point, bounds: Range) -> Self {
        Self { point, bounds }
    }
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "point {} is outside grid bounds {}",
            self.point, self.bounds
        )
    }
}

impl std::error::Error for BoundsError {}

/// Errors that can occur when building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A matrix row does not have the width of the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The matrix is too large to be addressed with `i32` coordinates.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::TooLarge { width, height } => {
                write!(f, "grid: {width}x{height} does not fit i32 coordinates")
            }
        }
    }
}

impl std::error::Error for GridError {}
