//! Brent's method for a bracketed root.
//!
//! # Algorithm
//!
//! Brent's method keeps three points: the current best estimate `xcur`, the
//! previous estimate `xpre`, and the contrapoint `xblk` on the other side of
//! the root. Each iteration tries a short step by interpolation (secant
//! through `xpre` and `xcur`) or extrapolation (through all three points) and
//! accepts it only when it shrinks fast enough; otherwise it bisects.
//!
//! Two extrapolation formulas are provided:
//!
//! - [`Brentq`]: inverse quadratic extrapolation
//! - [`Brenth`]: hyperbolic extrapolation
//!
//! Every iteration moves `xcur` by at least `xtol`, so the bracket always
//! shrinks and the loop ends on a small bracket if no root is hit first.

mod extrapolation;
mod state;

pub use extrapolation::{Extrapolation, Hyperbolic, InverseQuadratic};

use std::marker::PhantomData;

use rootbrack_core::Observer;

use crate::{Condition, Config, EvalContext, Event, Opening, Outcome, RootSolver};

use state::State;

/// Brent solver, generic over the extrapolation formula.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Brent<S> {
    config: Config,
    extrapolation: PhantomData<S>,
}

/// Brent's method with inverse quadratic extrapolation.
pub type Brentq = Brent<InverseQuadratic>;

/// Brent's method with hyperbolic extrapolation.
pub type Brenth = Brent<Hyperbolic>;

impl<S> Brent<S> {
    /// Creates a Brent solver.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            extrapolation: PhantomData,
        }
    }
}

impl<S> From<Config> for Brent<S> {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}

impl<S: Extrapolation> RootSolver for Brent<S> {
    const NAME: &'static str = S::NAME;

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
        let (lower, upper) = match ctx.open(config, xa, xb) {
            Opening::Continue { lower, upper } => (lower, upper),
            Opening::Finished(outcome) => return outcome,
        };

        let mut state = State::new(lower, upper);
        let mut last = None;
        for iter in 1..=config.max_iter() {
            state.align();

            let sbis = state.bisection_step();
            if sbis.abs() < xtol {
                return Outcome::new(Condition::SmallBracket, Some(state.current()), iter);
            }

            state.select_step::<S>(sbis, xtol);
            let x = state.advance(sbis, xtol);
            state.evaluated(ctx.call(x));

            let current = state.current();
            last = Some(current);
            ctx.trace(iter, current, [state.previous(), current]);
            if config.is_root(current.fx) {
                return Outcome::new(Condition::Converged, Some(current), iter);
            }
        }

        Outcome::exhausted(last, lower, upper, config.max_iter())
    }
}
