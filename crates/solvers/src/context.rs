use rootbrack_core::{Observer, Point};

use crate::{Condition, Config, ConvergenceError, Event, Outcome, Solution};

/// Per-solve state shared by every algorithm.
///
/// Owns the function being solved, counts and records its evaluations, and
/// forwards trace events to the observer. A context lives for exactly one
/// solve and is never shared.
pub struct EvalContext<'ctx, F, Obs> {
    solver: &'static str,
    f: F,
    observer: &'ctx mut Obs,
    steps: Vec<Point>,
}

/// Result of the entry checks common to every algorithm.
pub enum Opening {
    /// Both endpoints are evaluated and bracket a root.
    Continue { lower: Point, upper: Point },
    /// The solve is already decided.
    Finished(Outcome),
}

impl<'ctx, F, Obs> EvalContext<'ctx, F, Obs>
where
    F: FnMut(f64) -> f64,
    Obs: Observer<Event>,
{
    pub(crate) fn new(solver: &'static str, f: F, observer: &'ctx mut Obs) -> Self {
        Self {
            solver,
            f,
            observer,
            steps: Vec::new(),
        }
    }

    /// Evaluates `f` at `x` and records the call.
    pub fn call(&mut self, x: f64) -> f64 {
        let fx = (self.f)(x);
        self.steps.push(Point::new(x, fx));
        fx
    }

    /// Returns the number of calls made to `f` so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.steps.len()
    }

    /// Emits a trace event to the observer.
    pub fn trace(&mut self, iter: usize, latest: Point, bracket: [Point; 2]) {
        let event = Event {
            solver: self.solver,
            iter,
            calls: self.calls(),
            latest,
            bracket,
        };
        self.observer.observe(&event);
    }

    /// Runs the checks every algorithm performs before iterating.
    ///
    /// In order: bracket width (no calls), lower endpoint is a root (one call),
    /// upper endpoint is a root (two calls), and a sign change across the
    /// bracket. The first event is emitted once both endpoints are known.
    pub fn open(&mut self, config: &Config, xa: f64, xb: f64) -> Opening {
        if config.is_small_bracket(xa, xb) {
            return Opening::Finished(Outcome::new(Condition::SmallBracket, None, 0));
        }

        let lower = Point::new(xa, self.call(xa));
        if config.is_root(lower.fx) {
            return Opening::Finished(Outcome::new(Condition::LowerBracketIsRoot, Some(lower), 0));
        }

        let upper = Point::new(xb, self.call(xb));
        self.trace(0, upper, [lower, upper]);
        if config.is_root(upper.fx) {
            return Opening::Finished(Outcome::new(Condition::UpperBracketIsRoot, Some(upper), 0));
        }

        if lower.fx * upper.fx > 0.0 {
            return Opening::Finished(Outcome::new(Condition::NotBracketed, None, 0));
        }

        Opening::Continue { lower, upper }
    }

    /// Builds the final solution and applies the raise-on-fail policy.
    ///
    /// Every solve ends here.
    ///
    /// # Errors
    ///
    /// Returns [`ConvergenceError`] if the outcome did not converge and the
    /// config asks for failures to be raised.
    pub(crate) fn finish(
        self,
        config: &Config,
        outcome: Outcome,
    ) -> Result<Solution, ConvergenceError> {
        let Outcome {
            condition,
            estimate,
            iterations,
        } = outcome;

        let solution = Solution {
            x0: estimate.map(|p| p.x),
            fx0: estimate.map(|p| p.fx),
            iterations,
            func_calls: self.steps.len(),
            converged: condition.is_converged(),
            xtol: config.xtol(),
            epsilon: config.epsilon(),
            condition,
            steps: self.steps,
        };

        if solution.converged {
            log::debug!(
                "{}: {} (iterations={}, calls={})",
                self.solver,
                condition,
                solution.iterations,
                solution.func_calls,
            );
            return Ok(solution);
        }

        log::info!(
            "{}: solution did not converge: {} (iterations={}, calls={})",
            self.solver,
            condition,
            solution.iterations,
            solution.func_calls,
        );
        if config.raise_on_fail() {
            Err(ConvergenceError {
                solution: Box::new(solution),
            })
        } else {
            Ok(solution)
        }
    }
}
