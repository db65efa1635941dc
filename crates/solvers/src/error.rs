use thiserror::Error;

use crate::Solution;

/// A solve attempt that did not converge while `raise_on_fail` was set.
///
/// The full [`Solution`] is kept so callers can still inspect the last
/// estimate and the evaluation history.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", .solution.condition)]
pub struct ConvergenceError {
    pub solution: Box<Solution>,
}

impl ConvergenceError {
    /// Returns the failed solution.
    #[must_use]
    pub fn into_solution(self) -> Solution {
        *self.solution
    }
}
