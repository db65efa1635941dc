use std::fmt;

use rootbrack_core::Point;

use crate::Condition;

/// The result of a solve attempt.
///
/// A `Solution` is built once at the end of a solve and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Estimated root, absent when no estimate could be produced.
    pub x0: Option<f64>,

    /// Function value at `x0`.
    pub fx0: Option<f64>,

    /// Loop passes executed.
    pub iterations: usize,

    /// Calls made to `f`.
    pub func_calls: usize,

    /// True if a root was found.
    pub converged: bool,

    /// Bracket-width tolerance used.
    pub xtol: f64,

    /// Root tolerance used.
    pub epsilon: f64,

    /// Why the solver stopped.
    pub condition: Condition,

    /// Every evaluation of `f`, in call order.
    pub steps: Vec<Point>,
}

impl Solution {
    /// Returns the fixed message for the stop condition.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.condition.message()
    }

    /// Returns the root estimate as a point, if there is one.
    #[must_use]
    pub fn estimate(&self) -> Option<Point> {
        self.x0.zip(self.fx0).map(Point::from)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " converged : {}", self.converged)?;
        writeln!(f, "   message : {}", self.message())?;
        writeln!(f, "iterations : {:3}", self.iterations)?;
        writeln!(f, "func calls : {:3}", self.func_calls)?;
        match self.estimate() {
            Some(Point { x, fx }) => {
                writeln!(f, "        x0 : {x:22.16}")?;
                writeln!(f, "      xtol : {:22.16}", self.xtol)?;
                writeln!(f, "     f(x0) : {fx:22.16}")?;
            }
            None => {
                writeln!(f, "        x0 : None")?;
                writeln!(f, "      xtol : {:22.16}", self.xtol)?;
                writeln!(f, "     f(x0) : None")?;
            }
        }
        write!(f, "   epsilon : {:22.16}", self.epsilon)
    }
}
