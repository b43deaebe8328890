//! Anytime branch-and-bound solver for the Traveling Salesperson Problem.
//!
//! Given a set of cities with pairwise (possibly asymmetric, possibly
//! infinite) travel costs, find a low-cost Hamiltonian cycle within a
//! wall-clock budget and report the best solution found along with search
//! statistics. The search can be stopped at any time and still yields a
//! usable result.
//!
//! # Components
//!
//! - **Scenario layer** ([`scenario`]): the [`scenario::TspScenario`] trait
//!   supplies city data and cost lookups; [`scenario::TspSolution`] and
//!   [`scenario::SolveResult`] are the output records consumed by callers.
//! - **Branch and Bound** ([`bnb`]): priority-ordered state-space search
//!   with reduced-cost-matrix lower bounds. Pops the most promising partial
//!   tour, prunes anything that cannot beat the incumbent, expands the rest.
//! - **Greedy bootstrap** ([`greedy`]): best-first descent to the first
//!   complete feasible tour. Seeds the branch-and-bound incumbent so pruning
//!   bites from the very first iteration; also usable standalone.
//! - **Random baseline** ([`random`]): draws random permutations until one
//!   has finite cycle cost. The yardstick everything else is measured
//!   against.
//!
//! # Architecture
//!
//! The solver is single-threaded and synchronous: the search loop polls
//! elapsed time each iteration and exits promptly once the budget is
//! exceeded. Every expansion deep-copies its state, so sibling states in
//! the search tree never share mutable data. All entry points accept an
//! optional cancellation token for cooperative early termination.

pub mod bnb;
pub mod greedy;
pub mod random;
pub mod scenario;
