//! Ridder's method for a bracketed root.
//!
//! Each iteration evaluates the midpoint, applies an exponential correction
//! built from the three known values, and re-brackets the root as tightly as
//! the four points allow. Two calls are made to `f` per iteration.

use rootbrack_core::{Observer, Point};

use crate::{Condition, Config, EvalContext, Event, Opening, Outcome, RootSolver};

/// Ridder solver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ridder {
    config: Config,
}

impl Ridder {
    /// Creates a Ridder solver.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl From<Config> for Ridder {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}

impl RootSolver for Ridder {
    const NAME: &'static str = "Ridder";

    fn config(&self) -> &Config {
        &self.config
    }

    fn iterate<F, Obs>(&self, ctx: &mut EvalContext<'_, F, Obs>, xa: f64, xb: f64) -> Outcome
    where
        F: FnMut(f64) -> f64,
        Obs: Observer<Event>,
    {
        let config = &self.config;
        let xtol = config.xtol();
        let (mut lower, mut upper) = match ctx.open(config, xa, xb) {
            Opening::Continue { lower, upper } => (lower, upper),
            Opening::Finished(outcome) => return outcome,
        };
        let (start_lower, start_upper) = (lower, upper);

        let mut last = None;
        let mut previous: Option<(f64, f64)> = None;
        for iter in 1..=config.max_iter() {
            let xm = 0.5 * (lower.x + upper.x);
            let mid = Point::new(xm, ctx.call(xm));
            last = Some(mid);
            ctx.trace(iter, mid, [lower, upper]);
            if config.is_root(mid.fx) {
                return Outcome::new(Condition::Converged, Some(mid), iter);
            }

            // The radicand stays positive while the bracket holds a sign change.
            let t = (mid.fx * mid.fx - lower.fx * upper.fx).sqrt();
            let sign = if lower.fx < upper.fx { -1.0 } else { 1.0 };
            let xs = xm + (xm - lower.x) * sign * mid.fx / t;
            let step = Point::new(xs, ctx.call(xs));
            ctx.trace(iter, step, [lower, upper]);
            if config.is_root(step.fx) {
                return Outcome::new(Condition::Converged, Some(step), iter);
            }

            if let Some((xm_prev, xs_prev)) = previous
                && (xs - xs_prev).abs() < xtol
                && (xm - xm_prev).abs() < xtol
            {
                return Outcome::new(Condition::StagnantIteration, Some(step), iter);
            }

            (lower, upper) = rebracket(lower, upper, mid, step);
            if config.is_small_bracket(lower.x, upper.x) {
                return Outcome::new(Condition::SmallBracket, Some(step), iter);
            }

            previous = Some((xm, xs));
        }

        Outcome::exhausted(last, start_lower, start_upper, config.max_iter())
    }
}

/// Returns the tightest ordered bracket among the endpoints, midpoint and step.
fn rebracket(lower: Point, upper: Point, mid: Point, step: Point) -> (Point, Point) {
    let (a, b) = if mid.fx * step.fx > 0.0 {
        if lower.fx * step.fx < 0.0 {
            (lower, step)
        } else {
            (step, upper)
        }
    } else {
        (mid, step)
    };

    if a.x > b.x { (b, a) } else { (a, b) }
}
