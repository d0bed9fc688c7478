use gridpath_core::Point;

/// Receives search progress from [`IddfsFinder`](crate::IddfsFinder).
///
/// Within one pass every `opened(p)` is matched by a later `closed(p)`, and
/// all nodes are closed before `pass_finished` is called. Nothing carries
/// over from one pass to the next. All methods default to no-ops.
pub trait SearchObserver {
    /// A depth-limited pass with the given bound is starting.
    fn pass_started(&mut self, _depth: usize) {}

    /// The search entered `p`.
    fn opened(&mut self, _p: Point) {}

    /// The search left `p`, having explored its neighbours within budget.
    fn closed(&mut self, _p: Point) {}

    /// A pass ended after visiting `visited` distinct nodes.
    fn pass_finished(&mut self, _depth: usize, _visited: usize) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl SearchObserver for NoObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn pass_started(&mut self, depth: usize) {
        (**self).pass_started(depth)
    }

    fn opened(&mut self, p: Point) {
        (**self).opened(p)
    }

    fn closed(&mut self, p: Point) {
        (**self).closed(p)
    }

    fn pass_finished(&mut self, depth: usize, visited: usize) {
        (**self).pass_finished(depth, visited)
    }
}
