//! Iterative-deepening depth-first search (IDDFS).
//!
//! Each pass is a depth-limited search from the start with a fresh
//! visited-set. The pass walks an explicit stack of frames kept in the
//! finder, so the thread stack stays flat however long the path is. The depth bound grows by one per pass until the target is
//! entered, or until a pass visits no more distinct nodes than the one
//! before it, which means the region reachable from the start is exhausted.

use gridpath_core::{Point, Range};

use crate::diagonal::DiagonalMovement;
use crate::error::BoundsError;
use crate::heuristic::Heuristic;
use crate::observer::{NoObserver, SearchObserver};
use crate::options::FinderOptions;
use crate::traits::GridMap;

const NO_PARENT: usize = usize::MAX;

/// Result of a depth-bounded search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Path from start to end, both included.
    Found(Vec<Point>),
    /// The end is blocked or cannot be reached from the start.
    NoPath,
    /// The depth ceiling was hit before the search could decide.
    DepthLimitReached { depth: usize },
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    /// The path, or an empty vector when none was found.
    pub fn into_path(self) -> Vec<Point> {
        match self {
            Self::Found(path) => path,
            _ => Vec::new(),
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Instrumentation for the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of depth-limited passes run.
    pub passes: usize,
    /// Depth bound of the last pass.
    pub depth: usize,
    /// Distinct nodes visited by the last pass.
    pub visited: usize,
}

/// Per-pass bookkeeping for one cell. Entries whose `generation` differs
/// from the finder's current one belong to an earlier pass and are ignored.
#[derive(Clone, Copy)]
struct Mark {
    generation: u32,
    /// Largest remaining depth budget the cell was entered with.
    budget: usize,
    parent: usize,
}

impl Default for Mark {
    fn default() -> Self {
        Self {
            generation: 0,
            budget: 0,
            parent: NO_PARENT,
        }
    }
}

/// A cell on the current search branch.
struct Frame {
    p: Point,
    idx: usize,
    budget: usize,
    /// Next entry of this level's neighbour buffer to try.
    next: usize,
}

struct Pass<'a, G: ?Sized, O: ?Sized> {
    grid: &'a G,
    observer: &'a mut O,
    target: Point,
    target_idx: usize,
}

/// Iterative-deepening depth-first path finder.
///
/// The finder owns its scratch arena and reuses it between calls, so it needs
/// `&mut self`; the grid is only borrowed immutably. Use one finder per
/// thread to search a shared grid concurrently.
pub struct IddfsFinder {
    options: FinderOptions,
    diagonal: DiagonalMovement,
    heuristic: Heuristic,
    rng: Range,
    marks: Vec<Mark>,
    generation: u32,
    visited: usize,
    frames: Vec<Frame>,
    // nbufs[i] holds the neighbours of frames[i]
    nbufs: Vec<Vec<Point>>,
    stats: SearchStats,
}

impl Default for IddfsFinder {
    fn default() -> Self {
        Self::new(FinderOptions::default())
    }
}

impl IddfsFinder {
    /// Create a finder with the given options.
    pub fn new(options: FinderOptions) -> Self {
        Self {
            diagonal: options.resolved_diagonal_movement(),
            heuristic: options.resolved_heuristic(),
            options,
            rng: Range::default(),
            marks: Vec::new(),
            generation: 0,
            visited: 0,
            frames: Vec::new(),
            nbufs: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// The options the finder was built with.
    #[inline]
    pub fn options(&self) -> &FinderOptions {
        &self.options
    }

    /// The movement policy in effect.
    #[inline]
    pub fn diagonal_movement(&self) -> DiagonalMovement {
        self.diagonal
    }

    /// The heuristic in effect.
    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Statistics of the most recent search.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Find a path from `start` to `end`.
    ///
    /// Returns the path with both endpoints, or an empty vector if either
    /// endpoint is blocked, the end is unreachable, or the configured
    /// [`max_depth`](FinderOptions::max_depth) was exceeded. Fails only when
    /// an endpoint lies outside the grid.
    pub fn find_path<G: GridMap + ?Sized>(
        &mut self,
        start: impl Into<Point>,
        end: impl Into<Point>,
        grid: &G,
    ) -> Result<Vec<Point>, BoundsError> {
        let max_depth = self.options.max_depth;
        let outcome = self.find_path_observed(start, end, grid, max_depth, &mut NoObserver)?;
        Ok(outcome.into_path())
    }

    /// Like [`find_path`](Self::find_path), but stops after the pass with
    /// depth `max_depth` and reports that separately from "no path".
    pub fn find_path_within<G: GridMap + ?Sized>(
        &mut self,
        start: impl Into<Point>,
        end: impl Into<Point>,
        grid: &G,
        max_depth: usize,
    ) -> Result<SearchOutcome, BoundsError> {
        self.find_path_observed(start, end, grid, Some(max_depth), &mut NoObserver)
    }

    /// Run the search, reporting opened/closed nodes and pass boundaries to
    /// `observer`.
    pub fn find_path_observed<G, O>(
        &mut self,
        start: impl Into<Point>,
        end: impl Into<Point>,
        grid: &G,
        max_depth: Option<usize>,
        observer: &mut O,
    ) -> Result<SearchOutcome, BoundsError>
    where
        G: GridMap + ?Sized,
        O: SearchObserver + ?Sized,
    {
        let (start, end) = (start.into(), end.into());
        let start_node = grid.node_at(start)?;
        let end_node = grid.node_at(end)?;
        self.stats = SearchStats::default();

        if start_node.blocked || end_node.blocked {
            log::debug!("iddfs {start} -> {end}: blocked endpoint");
            return Ok(SearchOutcome::NoPath);
        }

        // `node_at` may be overridden, but the arena is laid out by `bounds()`.
        let bounds = grid.bounds();
        let start_idx = bounds
            .index_of(start)
            .ok_or_else(|| BoundsError::new(start, bounds))?;
        let end_idx = bounds
            .index_of(end)
            .ok_or_else(|| BoundsError::new(end, bounds))?;
        self.prepare(bounds);

        let mut pass = Pass {
            grid,
            observer,
            target: end,
            target_idx: end_idx,
        };
        let mut previous = 0;
        let mut depth = 0;

        loop {
            self.begin_pass();
            pass.observer.pass_started(depth);
            let found = self.search(&mut pass, start, start_idx, depth);
            let visited = self.visited;
            pass.observer.pass_finished(depth, visited);
            self.stats = SearchStats {
                passes: depth + 1,
                depth,
                visited,
            };
            log::trace!("iddfs pass {depth}: {visited} nodes visited");

            if found {
                let path = self.reconstruct(end_idx);
                log::debug!(
                    "iddfs {start} -> {end}: {} steps, depth {depth}",
                    path.len() - 1
                );
                return Ok(SearchOutcome::Found(path));
            }
            if visited == previous {
                log::debug!(
                    "iddfs {start} -> {end}: no path, {visited} reachable cells exhausted at depth {depth}"
                );
                return Ok(SearchOutcome::NoPath);
            }
            if max_depth.is_some_and(|m| depth >= m) {
                log::debug!("iddfs {start} -> {end}: depth ceiling {depth} reached");
                return Ok(SearchOutcome::DepthLimitReached { depth });
            }
            previous = visited;
            depth += 1;
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Size the arena for `bounds`. Stale entries are ignored via the
    /// generation stamp, so a smaller grid keeps the existing allocation.
    fn prepare(&mut self, bounds: Range) {
        self.rng = bounds;
        let len = bounds.len();
        if self.marks.len() < len {
            self.marks.resize(len, Mark::default());
        }
    }

    /// Start a pass with an empty visited-set.
    fn begin_pass(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.marks.fill(Mark::default());
            self.generation = 1;
        }
        self.visited = 0;
    }

    /// Depth-limited search from `start` with `depth` edges allowed. Returns
    /// `true` as soon as the target is entered.
    ///
    /// Markers nest like the call tree of a recursive search: a cell is
    /// closed once its neighbours are exhausted, and on success every open
    /// cell is closed from the target back to the start.
    fn search<G, O>(
        &mut self,
        pass: &mut Pass<'_, G, O>,
        start: Point,
        start_idx: usize,
        depth: usize,
    ) -> bool
    where
        G: GridMap + ?Sized,
        O: SearchObserver + ?Sized,
    {
        self.frames.clear();
        if self.enter(pass, start, start_idx, NO_PARENT, depth) {
            pass.observer.closed(start);
            return true;
        }

        while let Some(level) = self.frames.len().checked_sub(1) {
            let top = &mut self.frames[level];
            let Some(&np) = self.nbufs[level].get(top.next) else {
                let p = top.p;
                self.frames.pop();
                pass.observer.closed(p);
                continue;
            };
            top.next += 1;
            let (idx, budget) = (top.idx, top.budget);
            let Some(ni) = self.rng.index_of(np) else {
                continue;
            };
            if self.enter(pass, np, ni, idx, budget - 1) {
                pass.observer.closed(np);
                while let Some(frame) = self.frames.pop() {
                    pass.observer.closed(frame.p);
                }
                return true;
            }
        }
        false
    }

    /// Enter `p` from `parent` with `budget` edges left and push its frame.
    /// Returns `true` if `p` is the target, which is left open and unpushed.
    ///
    /// A cell already entered in this pass is skipped unless it is reached
    /// again with a strictly larger budget, i.e. by a shorter route. Siblings
    /// reach it with the same budget, so the first discoverer keeps the
    /// parent edge among them.
    fn enter<G, O>(
        &mut self,
        pass: &mut Pass<'_, G, O>,
        p: Point,
        idx: usize,
        parent: usize,
        budget: usize,
    ) -> bool
    where
        G: GridMap + ?Sized,
        O: SearchObserver + ?Sized,
    {
        let mark = &mut self.marks[idx];
        if mark.generation == self.generation {
            if budget <= mark.budget {
                return false;
            }
        } else {
            mark.generation = self.generation;
            self.visited += 1;
        }
        mark.budget = budget;
        mark.parent = parent;

        pass.observer.opened(p);
        if idx == pass.target_idx {
            return true;
        }

        let level = self.frames.len();
        if self.nbufs.len() <= level {
            self.nbufs.push(Vec::with_capacity(8));
        }
        let mut nbuf = std::mem::take(&mut self.nbufs[level]);
        nbuf.clear();
        if budget > 0 {
            pass.grid.neighbors(p, self.diagonal, &mut nbuf);
            if self.options.order_by_heuristic {
                self.order_neighbors(&mut nbuf, pass.target);
            }
        }
        self.nbufs[level] = nbuf;
        self.frames.push(Frame {
            p,
            idx,
            budget,
            next: 0,
        });
        false
    }

    /// Stable sort by weighted estimate to `target`; ties keep compass order.
    fn order_neighbors(&self, nbuf: &mut [Point], target: Point) {
        let (h, w) = (self.heuristic, self.options.weight);
        nbuf.sort_by(|a, b| {
            let ea = w * h.between(*a, target);
            let eb = w * h.between(*b, target);
            ea.total_cmp(&eb)
        });
    }

    fn reconstruct(&self, target_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = target_idx;
        while ci != NO_PARENT {
            path.push(self.rng.point_at(ci));
            ci = self.marks[ci].parent;
        }
        path.reverse();
        path
    }
}
