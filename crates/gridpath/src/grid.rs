//! The [`Grid`] type — a fixed-size occupancy grid of free and blocked cells.

use std::fmt;

use gridpath_core::{Point, Range};

use crate::error::{BoundsError, GridError};
use crate::traits::GridMap;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    pub pos: Point,
    pub blocked: bool,
}

/// A 2D occupancy grid covering `[0, width) × [0, height)`.
///
/// The grid holds cell state only. Searches never write to it, so a shared
/// `&Grid` can serve several finders at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Range,
    blocked: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell free.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::with_size(width, height);
        Self {
            bounds,
            blocked: vec![false; bounds.len()],
        }
    }

    /// Build a grid from rows of cell values: `0` is free, anything else is
    /// blocked. Row `y` of the matrix becomes line `y` of the grid.
    pub fn from_matrix<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(GridError::TooLarge { width, height });
        }

        let mut blocked = Vec::with_capacity(width * height);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            blocked.extend(cells.iter().map(|&c| c != 0));
        }

        let bounds = if width == 0 {
            Range::default()
        } else {
            Range::with_size(width as i32, height as i32)
        };
        Ok(Self { bounds, blocked })
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Mark the cell at `p` free (`true`) or blocked (`false`).
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> Result<(), BoundsError> {
        let i = self
            .bounds
            .index_of(p)
            .ok_or_else(|| BoundsError::new(p, self.bounds))?;
        self.blocked[i] = !walkable;
        Ok(())
    }
}

impl GridMap for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        self.bounds.index_of(p).is_some_and(|i| !self.blocked[i])
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let c = if self.is_walkable(Point::new(x, y)) { '.' } else { '#' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiagonalMovement;

    #[test]
    fn new_grid_is_free() {
        let g = Grid::new(4, 3);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert!(g.is_walkable(Point::new(0, 0)));
        assert!(g.is_walkable(Point::new(3, 2)));
        assert!(!g.is_walkable(Point::new(4, 2)));
        assert!(!g.is_walkable(Point::new(-1, 0)));
    }

    #[test]
    fn node_at_bounds() {
        let mut g = Grid::new(2, 2);
        g.set_walkable(Point::new(1, 0), false).unwrap();
        assert_eq!(
            g.node_at(Point::new(1, 0)),
            Ok(Node {
                pos: Point::new(1, 0),
                blocked: true
            })
        );
        assert!(!g.node_at(Point::new(0, 1)).unwrap().blocked);
        let err = g.node_at(Point::new(2, 0)).unwrap_err();
        assert_eq!(err.point, Point::new(2, 0));
        assert_eq!(err.bounds, Range::new(0, 0, 2, 2));
    }

    #[test]
    fn set_walkable_out_of_bounds() {
        let mut g = Grid::new(2, 2);
        let before = g.clone();
        assert!(g.set_walkable(Point::new(0, 5), false).is_err());
        assert_eq!(g, before);
    }

    #[test]
    fn from_matrix_rows_are_lines() {
        let rows: [[u8; 3]; 2] = [[0, 1, 0], [0, 0, 1]];
        let g = Grid::from_matrix(&rows).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert!(!g.is_walkable(Point::new(1, 0)));
        assert!(!g.is_walkable(Point::new(2, 1)));
        assert!(g.is_walkable(Point::new(0, 1)));
        assert_eq!(g.to_string(), ".#.\n..#\n");
    }

    #[test]
    fn from_matrix_ragged() {
        let rows = vec![vec![0u8, 0, 0], vec![0, 0]];
        assert_eq!(
            Grid::from_matrix(&rows),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn from_matrix_empty() {
        let rows: Vec<Vec<u8>> = Vec::new();
        let g = Grid::from_matrix(&rows).unwrap();
        assert!(g.bounds().is_empty());
        assert!(g.node_at(Point::ZERO).is_err());
    }

    #[test]
    fn neighbors_skip_blocked_and_outside() {
        let rows: [[u8; 3]; 3] = [[0, 1, 0], [0, 0, 0], [0, 0, 0]];
        let g = Grid::from_matrix(&rows).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), DiagonalMovement::Never, &mut buf);
        assert_eq!(
            buf,
            vec![Point::new(2, 1), Point::new(1, 2), Point::new(0, 1)]
        );
    }
}
