use crate::diagonal::DiagonalMovement;
use crate::heuristic::Heuristic;

/// Configuration for an [`IddfsFinder`](crate::IddfsFinder).
///
/// When `diagonal_movement` is `None` the policy is derived from the legacy
/// `allow_diagonal` / `dont_cross_corners` flags. When `heuristic` is `None`
/// it is chosen from the resolved policy.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FinderOptions {
    pub diagonal_movement: Option<DiagonalMovement>,
    pub allow_diagonal: bool,
    pub dont_cross_corners: bool,
    pub heuristic: Option<Heuristic>,
    /// Multiplier applied to the heuristic.
    pub weight: f64,
    /// Try neighbours closest to the target first.
    pub order_by_heuristic: bool,
    /// Deepest pass [`find_path`](crate::IddfsFinder::find_path) will run.
    pub max_depth: Option<usize>,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            diagonal_movement: None,
            allow_diagonal: false,
            dont_cross_corners: false,
            heuristic: None,
            weight: 1.0,
            order_by_heuristic: false,
            max_depth: None,
        }
    }
}

impl FinderOptions {
    /// Options with an explicit movement policy and defaults elsewhere.
    pub fn new(diagonal_movement: DiagonalMovement) -> Self {
        Self {
            diagonal_movement: Some(diagonal_movement),
            ..Self::default()
        }
    }

    /// Options built from the legacy boolean flags.
    pub fn legacy(allow_diagonal: bool, dont_cross_corners: bool) -> Self {
        Self {
            allow_diagonal,
            dont_cross_corners,
            ..Self::default()
        }
    }

    /// Set the heuristic (builder).
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// Set the heuristic weight (builder).
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Enable or disable heuristic neighbour ordering (builder).
    pub fn with_heuristic_ordering(mut self, enabled: bool) -> Self {
        self.order_by_heuristic = enabled;
        self
    }

    /// Set the default depth ceiling (builder).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// The movement policy after applying the legacy flags.
    pub fn resolved_diagonal_movement(&self) -> DiagonalMovement {
        self.diagonal_movement.unwrap_or_else(|| {
            DiagonalMovement::from_legacy(self.allow_diagonal, self.dont_cross_corners)
        })
    }

    /// The heuristic after applying the policy-based default.
    pub fn resolved_heuristic(&self) -> Heuristic {
        self.heuristic.unwrap_or_else(|| {
            Heuristic::for_diagonals(self.resolved_diagonal_movement().allows_diagonals())
        })
    }
}
