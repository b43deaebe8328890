//! Greedy bootstrap: best-first descent to the first feasible tour.
//!
//! Runs the same expand/bound machinery as the branch-and-bound engine but
//! stops at the first complete tour with finite cost instead of searching
//! for improvements. Cheap enough to seed the engine's incumbent, so the
//! main search can prune aggressively from its very first iteration; also
//! usable as a standalone solver.

mod runner;

pub use runner::{GreedyConfig, GreedyRunner};

pub(crate) use runner::first_tour;
