//! Reusable observers for the rootbrack solvers.
//!
//! Every solver accepts an [`Observer<Event>`] through
//! [`RootSolver::solve_observed`]. This crate provides two ready-made ones:
//!
//! - [`LogObserver`]: writes one `debug` line per event through the `log` facade
//! - [`History`]: keeps every event for later inspection
//!
//! [`Observer<Event>`]: rootbrack_core::Observer
//! [`RootSolver::solve_observed`]: rootbrack_solvers::RootSolver::solve_observed
//! [`Event`]: rootbrack_solvers::Event

mod history;
mod logger;

pub use history::History;
pub use logger::LogObserver;
