//! Greedy bootstrap execution loop.

use crate::bnb::{CostMatrix, PriorityFrontier};
use crate::scenario::{SolveResult, TspScenario, TspSolution};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Configuration for the greedy bootstrap.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Wall-clock budget in milliseconds. 0 expires immediately.
    pub time_limit_ms: u64,

    /// Index of the city every tour starts from. Must be a valid index
    /// into the scenario.
    pub start_city: usize,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
            start_city: 0,
        }
    }
}

impl GreedyConfig {
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_start_city(mut self, city: usize) -> Self {
        self.start_city = city;
        self
    }
}

/// Executes the greedy bootstrap as a standalone solver.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs the bootstrap. Returns the first complete feasible tour found,
    /// or an infeasible-style result if the budget elapses (or the search
    /// space is exhausted) without one.
    pub fn run<S: TspScenario>(scenario: &S, config: &GreedyConfig) -> SolveResult<S::City> {
        Self::run_with_cancel(scenario, config, None)
    }

    /// Runs the bootstrap with an optional cancellation token, checked
    /// once per frontier pop.
    pub fn run_with_cancel<S: TspScenario>(
        scenario: &S,
        config: &GreedyConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult<S::City> {
        let start = Instant::now();
        let budget = Duration::from_millis(config.time_limit_ms);

        let found = first_tour(scenario, config.start_city, start, budget, cancel.as_deref());
        let cancelled = cancel
            .as_deref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed));
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

/// Best-first descent to the first complete feasible tour, against a
/// deadline measured from `start`. Shared with the branch-and-bound
/// runner so bootstrap time counts against the engine's budget.
pub(crate) fn first_tour<S: TspScenario>(
    scenario: &S,
    start_city: usize,
    start: Instant,
    budget: Duration,
    cancel: Option<&AtomicBool>,
) -> Option<TspSolution> {
    let n = scenario.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        // No travel occurs; the lone city is its own tour.
        return Some(TspSolution {
            tour: vec![start_city],
            cost: 0.0,
        });
    }

    let mut frontier = PriorityFrontier::new();
    frontier.push(CostMatrix::root(scenario, start_city));

    while !frontier.is_empty() && start.elapsed() < budget {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return None;
        }
        let Some(node) = frontier.pop() else { break };
        let successors: Vec<usize> = node.successors().collect();
        for city in successors {
            let child = node.extend(city);
            if child.is_complete() {
                let solution = TspSolution::from_tour(scenario, child.path().to_vec());
                if solution.is_feasible() {
                    return Some(solution);
                }
                // Complete but the closing edge is unreachable: dead end.
            } else {
                frontier.push(child);
            }
        }
    }
    None
}
