use std::f64::consts::SQRT_2;
use std::fmt;

use gridpath_core::Point;

/// Estimate of the remaining distance given the absolute per-axis deltas.
///
/// The finder never needs a heuristic to be correct; it only uses one to
/// choose which neighbour to try first.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    Manhattan,
    Euclidean,
    /// Diagonal steps cost √2, orthogonal steps cost 1.
    Octile,
    Chebyshev,
    /// Caller-supplied estimate. Cannot be serialized.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(i32, i32) -> f64),
}

impl Heuristic {
    /// Default heuristic for a movement policy: Manhattan when only
    /// orthogonal steps exist, octile otherwise.
    pub fn for_diagonals(allow_diagonals: bool) -> Self {
        if allow_diagonals {
            Self::Octile
        } else {
            Self::Manhattan
        }
    }

    /// Estimate for absolute deltas `dx`, `dy`.
    pub fn estimate(self, dx: i32, dy: i32) -> f64 {
        let (fx, fy) = (f64::from(dx), f64::from(dy));
        match self {
            Self::Manhattan => fx + fy,
            Self::Euclidean => fx.hypot(fy),
            Self::Octile => {
                let f = SQRT_2 - 1.0;
                if fx < fy { f * fx + fy } else { f * fy + fx }
            }
            Self::Chebyshev => fx.max(fy),
            Self::Custom(h) => h(dx, dy),
        }
    }

    /// Estimate between two points.
    #[inline]
    pub fn between(self, a: Point, b: Point) -> f64 {
        let d = a.delta(b);
        self.estimate(d.x, d.y)
    }
}

impl fmt::Debug for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => f.write_str("Manhattan"),
            Self::Euclidean => f.write_str("Euclidean"),
            Self::Octile => f.write_str("Octile"),
            Self::Chebyshev => f.write_str("Chebyshev"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
