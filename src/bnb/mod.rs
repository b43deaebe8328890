//! Branch and Bound (B&B) for the Traveling Salesperson Problem.
//!
//! A priority-ordered state-space search over partial tours. Each state
//! carries a reduced cost matrix whose accumulated reduction is a valid
//! lower bound on any tour completing that state; any state whose bound
//! cannot beat the best complete tour found so far is discarded without
//! expansion. The search is anytime: it respects a wall-clock budget and
//! returns the incumbent whenever it stops.
//!
//! # References
//!
//! - Little, J. D. C., Murty, K. G., Sweeney, D. W., & Karel, C. (1963).
//!   "An Algorithm for the Traveling Salesman Problem", *Operations
//!   Research* 11(6), 972-989.
//! - Lawler, Lenstra, Rinnooy Kan & Shmoys (eds., 1985), *The Traveling
//!   Salesman Problem*, Wiley.

mod config;
mod frontier;
mod runner;
mod state;

pub use config::BnbConfig;
pub use frontier::PriorityFrontier;
pub use runner::BnbRunner;
pub use state::CostMatrix;
