use gridpath_core::{Point, Range};

use crate::diagonal::DiagonalMovement;
use crate::error::BoundsError;
use crate::grid::Node;

/// Read-only view of an occupancy grid, as consumed by the finder.
pub trait GridMap {
    /// Fixed bounds of the grid. Every point inside has exactly one cell.
    ///
    /// The finder keeps a few words of scratch state per cell, so it
    /// allocates in proportion to `bounds().len()`. Any `i32` corners are
    /// accepted, but the range should be no larger than the area searched.
    fn bounds(&self) -> Range;

    /// Whether `p` is a free cell. Must return `false` outside
    /// [`bounds`](Self::bounds).
    fn is_walkable(&self, p: Point) -> bool;

    /// The cell at `p`, or a [`BoundsError`] if `p` is outside the grid.
    ///
    /// Overrides must reject exactly the points outside
    /// [`bounds`](Self::bounds).
    fn node_at(&self, p: Point) -> Result<Node, BoundsError> {
        let bounds = self.bounds();
        if !bounds.contains(p) {
            return Err(BoundsError::new(p, bounds));
        }
        Ok(Node {
            pos: p,
            blocked: !self.is_walkable(p),
        })
    }

    /// Append the neighbours of `p` reachable in one step under `policy`
    /// into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, policy: DiagonalMovement, buf: &mut Vec<Point>) {
        policy.expand(p, |q| self.is_walkable(q), buf);
    }
}

impl<G: GridMap + ?Sized> GridMap for &G {
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    fn is_walkable(&self, p: Point) -> bool {
        (**self).is_walkable(p)
    }

    fn node_at(&self, p: Point) -> Result<Node, BoundsError> {
        (**self).node_at(p)
    }

    fn neighbors(&self, p: Point, policy: DiagonalMovement, buf: &mut Vec<Point>) {
        (**self).neighbors(p, policy, buf)
    }
}
