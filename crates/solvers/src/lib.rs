//! Bracketing root solvers for continuous scalar functions.
//!
//! Given `f` and an interval `[xa, xb]` over which `f` changes sign, each
//! solver returns a [`Solution`] describing the root estimate, how many
//! iterations and calls to `f` it took, and why it stopped.
//!
//! # Solvers
//!
//! - [`Bisection`]: halves the bracket each iteration
//! - [`Ridder`]: exponential correction of the midpoint, tight re-bracketing
//! - [`Brentq`]: Brent's method with inverse quadratic extrapolation
//! - [`Brenth`]: Brent's method with hyperbolic extrapolation
//!
//! All four share a validated [`Config`] and the [`RootSolver`] contract. A
//! solve that does not converge is returned as an error when
//! [`Config::raise_on_fail`] is set, and as a non-converged [`Solution`]
//! otherwise.
//!
//! # Example
//!
//! ```
//! use rootbrack_solvers::{Brentq, Config, RootSolver};
//!
//! let config = Config::new(1e-10, 1e-12, 100, true).unwrap();
//! let solution = Brentq::new(config)
//!     .solve(|x: f64| x * x * x - x - 2.0, 1.0, 2.0)
//!     .unwrap();
//!
//! assert!(solution.converged);
//! assert!((solution.x0.unwrap() - 1.521_379_706_8).abs() < 1e-9);
//! ```

mod condition;
mod config;
mod context;
mod error;
mod event;
mod solution;
mod solver;

pub mod bisection;
pub mod brent;
pub mod ridder;

#[cfg(test)]
mod tests;

pub use bisection::Bisection;
pub use brent::{Brenth, Brentq};
pub use condition::Condition;
pub use config::{Config, ConfigError, Options};
pub use context::{EvalContext, Opening};
pub use error::ConvergenceError;
pub use event::Event;
pub use ridder::Ridder;
pub use solution::Solution;
pub use solver::{Outcome, RootSolver};

pub use rootbrack_core::{MACHINE_EPSILON, Observer, Point, nearly_equal};
