use rootbrack_core::Observer;
use rootbrack_solvers::Event;

/// Observer that traces each iteration at `debug` level.
///
/// Lines look like
///
/// ```text
/// Bisect: iter:   3; fcall:   5; x=[ 1.2500000000,  1.5000000000]; dx= 0.2500000000; f=[-0.2968750000, +0.8750000000]
/// ```
///
/// # Example
///
/// ```
/// use rootbrack_observers::LogObserver;
/// use rootbrack_solvers::{Ridder, RootSolver};
///
/// let mut observer = LogObserver::new(6);
/// let solution = Ridder::default()
///     .solve_observed(|x| x * x - 2.0, 0.0, 2.0, &mut observer)
///     .unwrap();
/// assert!(solution.converged);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    precision: usize,
}

impl LogObserver {
    /// Creates a log observer printing floats with `precision` decimals.
    #[must_use]
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Returns the number of decimals printed for each float.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Renders `event` as a single trace line.
    #[must_use]
    pub fn line(&self, event: &Event) -> String {
        let [lower, upper] = event.bracket;
        let p = self.precision;
        format!(
            "{}: iter: {:>3}; fcall: {:>3}; x=[{}, {}]; dx={}; f=[{:+.p$}, {:+.p$}]",
            event.solver,
            event.iter,
            event.calls,
            space_signed(lower.x, p),
            space_signed(upper.x, p),
            space_signed(event.width(), p),
            lower.fx,
            upper.fx,
        )
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Observer<Event> for LogObserver {
    fn observe(&mut self, event: &Event) {
        log::debug!("{}", self.line(event));
    }
}

/// Formats `value` with a leading space in place of a `+` sign.
fn space_signed(value: f64, precision: usize) -> String {
    let text = format!("{value:+.precision$}");
    match text.strip_prefix('+') {
        Some(rest) => format!(" {rest}"),
        None => text,
    }
}
