//! Bisection for a bracketed root.
//!
//! Each iteration halves the bracket and keeps the half whose endpoints still
//! differ in sign. Convergence is linear but guaranteed for a continuous `f`.

use rootbrack_core::{Observer, Point};

use crate::{Condition, Config, EvalContext, Event, Opening, Outcome, RootSolver};

/// Bisection solver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bisection {
    config: Config,
}

impl Bisection {
    /// Creates a bisection solver.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl From<Config> for Bisection {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}

impl RootSolver for Bisection {
    const NAME: &'static str = "Bisect";

    fn config(&self) -> &Config {
        &self.config
    }

    fn iterate<F, Obs>(&self, ctx: &mut EvalContext<'_, F, Obs>, xa: f64, xb: f64) -> Outcome
    where
        F: FnMut(f64) -> f64,
        Obs: Observer<Event>,
    {
        let config = &self.config;
        let (mut lower, mut upper) = match ctx.open(config, xa, xb) {
            Opening::Continue { lower, upper } => (lower, upper),
            Opening::Finished(outcome) => return outcome,
        };
        let (start_lower, start_upper) = (lower, upper);

        let mut last = None;
        for iter in 1..=config.max_iter() {
            let xm = 0.5 * (lower.x + upper.x);
            let mid = Point::new(xm, ctx.call(xm));
            last = Some(mid);

            // Sign bits decide the side, so a zero residual closes consistently.
            if mid.fx.is_sign_negative() == lower.fx.is_sign_negative() {
                lower = mid;
            } else {
                upper = mid;
            }
            ctx.trace(iter, mid, [lower, upper]);

            if config.is_root(mid.fx) {
                return Outcome::new(Condition::Converged, Some(mid), iter);
            }
            if config.is_small_bracket(lower.x, upper.x) {
                return Outcome::new(Condition::SmallBracket, Some(mid), iter);
            }
        }

        Outcome::exhausted(last, start_lower, start_upper, config.max_iter())
    }
}
