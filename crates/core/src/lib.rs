//! Core types shared by the rootbrack solvers and observers.
//!
//! - [`nearly_equal`]: tolerance-aware float comparison used for root and
//!   bracket-width tests
//! - [`Point`]: an evaluated `(x, f(x))` pair
//! - [`Observer`]: receives solver events without steering the solver

mod float;
mod observer;
mod point;

pub use float::{MACHINE_EPSILON, nearly_equal};
pub use observer::Observer;
pub use point::Point;
