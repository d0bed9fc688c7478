//! **gridpath-core** — geometry primitives shared by the *gridpath* crates.
//!
//! This crate provides [`Point`] and [`Range`]: integer coordinates and the
//! half-open rectangles that bound an occupancy grid.

pub mod geom;

pub use geom::{Point, Range};
