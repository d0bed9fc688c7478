//! Iterative-deepening pathfinding on 2D occupancy grids.
//!
//! The crate is built around [`IddfsFinder`], which repeatedly runs a
//! depth-limited depth-first search with a growing depth bound until the
//! target is reached or a pass discovers no new cells. Memory use stays
//! proportional to the grid: no open list of frontier nodes is kept.
//!
//! - [`Grid`] is a fixed-size occupancy grid of free and blocked cells.
//! - [`DiagonalMovement`] decides which diagonal steps are legal next to
//!   blocked corners.
//! - [`Heuristic`] is an optional distance estimate used only to order
//!   neighbours.
//!
//! Search markers (visited, opened, closed, predecessor) never live on the
//! grid. They belong to the finder, so one [`Grid`] can be shared read-only
//! by any number of finders.
//!
//! ```
//! use gridpath::{DiagonalMovement, FinderOptions, Grid, IddfsFinder};
//! use gridpath_core::Point;
//!
//! let rows: [[u8; 3]; 3] = [[0, 0, 0], [1, 1, 0], [0, 0, 0]];
//! let grid = Grid::from_matrix(&rows).unwrap();
//! let mut finder = IddfsFinder::new(FinderOptions::new(DiagonalMovement::Never));
//! let path = finder
//!     .find_path(Point::new(0, 0), Point::new(0, 2), &grid)
//!     .unwrap();
//! assert_eq!(path.len(), 7);
//! ```
//!
//! # Trait seams
//!
//! | Trait | Role |
//! |---|---|
//! | [`GridMap`] | cell lookup and neighbour enumeration consumed by the finder |
//! | [`SearchObserver`] | receives opened/closed markers and per-pass progress |

mod diagonal;
mod error;
mod grid;
mod heuristic;
mod iddfs;
mod observer;
mod options;
mod traits;

pub use diagonal::DiagonalMovement;
pub use error::{BoundsError, GridError};
pub use grid::{Grid, Node};
pub use heuristic::Heuristic;
pub use iddfs::{IddfsFinder, SearchOutcome, SearchStats};
pub use observer::{NoObserver, SearchObserver};
pub use options::FinderOptions;
pub use traits::GridMap;
