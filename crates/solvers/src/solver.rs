use rootbrack_core::{Observer, Point};

use crate::{Condition, Config, ConvergenceError, EvalContext, Event, Solution};

/// How an algorithm's iteration ended.
///
/// Algorithms return an `Outcome`; the shared result step turns it into a
/// [`Solution`] and applies the raise-on-fail policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Why the iteration stopped.
    pub condition: Condition,
    /// Best estimate of the root, if any.
    pub estimate: Option<Point>,
    /// Loop passes executed.
    pub iterations: usize,
}

impl Outcome {
    /// Creates a new outcome.
    #[must_use]
    pub fn new(condition: Condition, estimate: Option<Point>, iterations: usize) -> Self {
        Self {
            condition,
            estimate,
            iterations,
        }
    }

    /// Outcome for a loop that ran out of iterations.
    ///
    /// With `max_iter == 0` nothing was iterated, so the endpoint closer to a
    /// root stands in for the estimate.
    #[must_use]
    pub fn exhausted(last: Option<Point>, lower: Point, upper: Point, iterations: usize) -> Self {
        let estimate = last.unwrap_or_else(|| lower.closer_to_root(upper));
        Self::new(Condition::MaxIterationsExceeded, Some(estimate), iterations)
    }
}

/// A bracketing root solver.
///
/// Implementors provide the algorithm in [`iterate`](RootSolver::iterate);
/// validation, call bookkeeping, tracing and result handling are shared.
pub trait RootSolver {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Returns the solver configuration.
    fn config(&self) -> &Config;

    /// Runs the algorithm on the bracket `[xa, xb]`.
    fn iterate<F, Obs>(&self, ctx: &mut EvalContext<'_, F, Obs>, xa: f64, xb: f64) -> Outcome
    where
        F: FnMut(f64) -> f64,
        Obs: Observer<Event>;

    /// Finds a root of `f` in `[xa, xb]`, reporting each iteration to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvergenceError`] if the solve does not converge and the
    /// config has `raise_on_fail` set. Otherwise a non-converged
    /// [`Solution`] is returned as `Ok`.
    fn solve_observed<F, Obs>(
        &self,
        f: F,
        xa: f64,
        xb: f64,
        observer: &mut Obs,
    ) -> Result<Solution, ConvergenceError>
    where
        F: FnMut(f64) -> f64,
        Obs: Observer<Event>,
    {
        let mut ctx = EvalContext::new(Self::NAME, f, observer);
        let outcome = self.iterate(&mut ctx, xa, xb);
        ctx.finish(self.config(), outcome)
    }

    /// Finds a root of `f` in `[xa, xb]`.
    ///
    /// # Errors
    ///
    /// See [`solve_observed`](RootSolver::solve_observed).
    fn solve<F>(&self, f: F, xa: f64, xb: f64) -> Result<Solution, ConvergenceError>
    where
        F: FnMut(f64) -> f64,
    {
        self.solve_observed(f, xa, xb, &mut ())
    }

    /// Finds a root of `f(x, args)` in `[xa, xb]`.
    ///
    /// `args` is passed unchanged to every call of `f`.
    ///
    /// # Errors
    ///
    /// See [`solve_observed`](RootSolver::solve_observed).
    fn solve_with_args<A, F>(
        &self,
        f: F,
        xa: f64,
        xb: f64,
        args: &A,
    ) -> Result<Solution, ConvergenceError>
    where
        A: ?Sized,
        F: Fn(f64, &A) -> f64,
    {
        self.solve(|x| f(x, args), xa, xb)
    }
}
