//! Random-tour baseline.
//!
//! Draws uniformly random permutations until one forms a cycle with
//! finite cost, within a wall-clock budget. Not a serious solver — it is
//! the yardstick the greedy bootstrap and the branch-and-bound engine are
//! measured against, and a last-resort incumbent source on instances
//! where nothing else fits the budget.

mod runner;

pub use runner::{RandomConfig, RandomTourRunner};
