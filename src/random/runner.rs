//! Random-tour sampling loop.

use crate::scenario::{SolveResult, TspScenario, TspSolution};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Configuration for the random-tour baseline.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomConfig {
    /// Wall-clock budget in milliseconds. 0 expires immediately.
    pub time_limit_ms: u64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
            seed: None,
        }
    }
}

impl RandomConfig {
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Executes the random-tour baseline.
pub struct RandomTourRunner;

impl RandomTourRunner {
    /// Shuffles permutations until one has finite cycle cost or the
    /// budget elapses, and returns the first hit (not the best of many:
    /// this is the pure baseline, so `solution_count` stays 0).
    pub fn run<S: TspScenario>(scenario: &S, config: &RandomConfig) -> SolveResult<S::City> {
        Self::run_with_cancel(scenario, config, None)
    }

    /// Runs the baseline with an optional cancellation token, checked
    /// once per drawn permutation.
    pub fn run_with_cancel<S: TspScenario>(
        scenario: &S,
        config: &RandomConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult<S::City> {
        let start = Instant::now();
        let budget = Duration::from_millis(config.time_limit_ms);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = scenario.len();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut found: Option<TspSolution> = None;
        let mut cancelled = false;

        while n > 0 && start.elapsed() < budget {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            perm.shuffle(&mut rng);
            let candidate = TspSolution::from_tour(scenario, perm.clone());
            if candidate.is_feasible() {
                found = Some(candidate);
                break;
            }
        }

        let time = start.elapsed().as_secs_f64();
        match found {
            Some(solution) => SolveResult {
                cost: solution.cost,
                time,
                solution_count: 0,
                best_tour: Some(solution.route(scenario)),
                max_frontier_size: None,
                total_states_created: None,
                pruned_count: None,
                cancelled,
                cost_history: vec![solution.cost],
            },
            None => SolveResult {
                cost: f64::INFINITY,
                time,
                solution_count: 0,
                best_tour: None,
                max_frontier_size: None,
                total_states_created: None,
                pruned_count: None,
                cancelled,
                cost_history: Vec::new(),
            },
        }
    }
}
