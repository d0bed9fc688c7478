//! Diagonal movement policy.

use gridpath_core::Point;

/// Which diagonal steps are legal, judged by the two orthogonal cells that
/// flank each diagonal.
///
/// For the step from `p` to its north-east neighbour the flanking cells are
/// north and east of `p`; the other diagonals work the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagonalMovement {
    /// Orthogonal steps only.
    #[default]
    Never,
    /// Diagonal allowed when at most one flanking cell is blocked.
    IfAtMostOneObstacle,
    /// Diagonal allowed only when both flanking cells are free.
    OnlyWhenNoObstacles,
    /// Diagonal allowed whatever the flanking cells hold.
    Always,
}

impl DiagonalMovement {
    /// Policy selected by the older pair of boolean options.
    pub fn from_legacy(allow_diagonal: bool, dont_cross_corners: bool) -> Self {
        match (allow_diagonal, dont_cross_corners) {
            (false, _) => Self::Never,
            (true, true) => Self::OnlyWhenNoObstacles,
            (true, false) => Self::IfAtMostOneObstacle,
        }
    }

    /// Whether any diagonal step can ever be taken under this policy.
    #[inline]
    pub fn allows_diagonals(self) -> bool {
        self != Self::Never
    }

    /// Whether a diagonal with the given flanking cells may be taken.
    #[inline]
    pub fn permits(self, flank_a_free: bool, flank_b_free: bool) -> bool {
        match self {
            Self::Never => false,
            Self::IfAtMostOneObstacle => flank_a_free || flank_b_free,
            Self::OnlyWhenNoObstacles => flank_a_free && flank_b_free,
            Self::Always => true,
        }
    }

    /// Append the neighbours of `p` reachable in one step into `buf`.
    ///
    /// `walkable` must return `false` for blocked and out-of-bounds cells.
    /// The order is N, E, S, W, then NE, SE, SW, NW.
    pub fn expand(self, p: Point, walkable: impl Fn(Point) -> bool, buf: &mut Vec<Point>) {
        let orth = p.neighbors_4();
        let mut free = [false; 4];
        for (i, n) in orth.into_iter().enumerate() {
            if walkable(n) {
                free[i] = true;
                buf.push(n);
            }
        }
        if self == Self::Never {
            return;
        }
        // Diagonal i sits between orthogonal i and orthogonal (i + 1) % 4.
        for (i, n) in p.diagonals().into_iter().enumerate() {
            if self.permits(free[i], free[(i + 1) % 4]) && walkable(n) {
                buf.push(n);
            }
        }
    }
}
