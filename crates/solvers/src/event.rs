use rootbrack_core::Point;

/// Iteration event emitted by the bracketing solvers.
///
/// One event is emitted with `iter == 0` once both bracket endpoints are
/// evaluated, then one after every evaluation inside the loop. `bracket` is
/// the pair of points in force when `latest` was evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Name of the emitting solver.
    pub solver: &'static str,
    /// Iteration counter (1-based within the loop).
    pub iter: usize,
    /// Calls made to `f` so far.
    pub calls: usize,
    /// The most recent evaluation.
    pub latest: Point,
    /// Current bracket endpoints.
    pub bracket: [Point; 2],
}

impl Event {
    /// Returns the signed bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1].x - self.bracket[0].x
    }
}
