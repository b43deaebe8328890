//! Shared domain types: scenarios, tours, and run results.
//!
//! A [`TspScenario`] is the collaborator that supplies city data and cost
//! lookups to every solver in this crate. Costs may be asymmetric, and
//! `f64::INFINITY` means "unreachable". [`TspSolution`] is a completed
//! tour (cycle implied); [`SolveResult`] is the record every runner
//! returns, designed for consumption by an external reporting layer.

mod solution;
mod types;

pub use solution::{SolveResult, TspSolution};
pub use types::{MatrixScenario, TspScenario};
