#![allow(dead_code)]

use std::collections::VecDeque;

use gridpath::{DiagonalMovement, Grid, GridMap};
use gridpath_core::Point;

/// Parse rows of `.` (free) and `#` (blocked).
pub fn grid(rows: &[&str]) -> Grid {
    let rows: Vec<Vec<u8>> = rows
        .iter()
        .map(|r| r.bytes().map(|b| u8::from(b == b'#')).collect())
        .collect();
    Grid::from_matrix(&rows).unwrap()
}

/// Breadth-first step distances from `start`, indexed like the grid bounds.
pub fn bfs_distances(grid: &Grid, start: Point, policy: DiagonalMovement) -> Vec<Option<usize>> {
    let bounds = grid.bounds();
    let mut dist = vec![None; bounds.len()];
    if !grid.is_walkable(start) {
        return dist;
    }
    let Some(si) = bounds.index_of(start) else {
        return dist;
    };
    dist[si] = Some(0);
    let mut queue = VecDeque::from([start]);
    let mut buf = Vec::new();
    while let Some(p) = queue.pop_front() {
        let d = dist[bounds.index_of(p).unwrap()].unwrap();
        buf.clear();
        grid.neighbors(p, policy, &mut buf);
        for &n in &buf {
            let ni = bounds.index_of(n).unwrap();
            if dist[ni].is_none() {
                dist[ni] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

/// Number of cells reachable from `start`, `start` included.
pub fn reachable(grid: &Grid, start: Point, policy: DiagonalMovement) -> usize {
    bfs_distances(grid, start, policy)
        .iter()
        .filter(|d| d.is_some())
        .count()
}

/// Panics unless `path` is a legal walk from `start` to `end`.
pub fn assert_valid_path(
    grid: &Grid,
    policy: DiagonalMovement,
    start: Point,
    end: Point,
    path: &[Point],
) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    let mut buf = Vec::new();
    for p in path {
        assert!(grid.is_walkable(*p), "blocked cell {p} in path");
    }
    for w in path.windows(2) {
        buf.clear();
        grid.neighbors(w[0], policy, &mut buf);
        assert!(
            buf.contains(&w[1]),
            "illegal step {} -> {} under {policy:?}",
            w[0],
            w[1]
        );
    }
}
