//! Branch-and-bound search loop.
//!
//! [`BnbRunner`] orchestrates the full search: build the root state, seed
//! the incumbent via the greedy bootstrap, then repeatedly pop the
//! lowest-bound state from the frontier, prune it or expand it, and record
//! any improving complete tour. The loop is anytime — it polls the
//! wall-clock budget every iteration and returns the incumbent whenever it
//! stops, whether or not optimality was proven.

use super::config::BnbConfig;
use super::frontier::PriorityFrontier;
use super::state::CostMatrix;
use crate::greedy::first_tour;
use crate::scenario::{SolveResult, TspScenario, TspSolution};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Executes the branch-and-bound search.
///
/// # Usage
///
/// ```
/// use u_tsp::bnb::{BnbConfig, BnbRunner};
/// use u_tsp::scenario::MatrixScenario;
///
/// let inf = f64::INFINITY;
/// let scenario = MatrixScenario::from_rows(vec![
///     vec![inf, 1.0, 5.0, 1.0],
///     vec![1.0, inf, 2.0, 5.0],
///     vec![5.0, 2.0, inf, 1.0],
///     vec![1.0, 5.0, 1.0, inf],
/// ])
/// .unwrap();
///
/// let result = BnbRunner::run(&scenario, &BnbConfig::default());
/// assert_eq!(result.cost, 5.0);
/// ```
pub struct BnbRunner;

impl BnbRunner {
    /// Runs the search until the frontier empties or the time budget
    /// elapses, returning the best solution found and search statistics.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `config.start_city` is out of range for
    /// the scenario.
    pub fn run<S: TspScenario>(scenario: &S, config: &BnbConfig) -> SolveResult<S::City> {
        Self::run_with_cancel(scenario, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The token is checked once per iteration, alongside the elapsed-time
    /// check; when set, the loop stops and the incumbent is returned.
    pub fn run_with_cancel<S: TspScenario>(
        scenario: &S,
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SolveResult<S::City> {
        let start = Instant::now();
        let budget = Duration::from_millis(config.time_limit_ms);
        let n = scenario.len();
        let is_cancelled =
            || cancel.as_deref().is_some_and(|flag| flag.load(Ordering::Relaxed));

        if n < 2 {
            return trivial_result(scenario, config.start_city, start, is_cancelled());
        }

        let root = CostMatrix::root(scenario, config.start_city);

        // Bookkeeping. The root counts as one created state; the invariant
        // states_created == solutions + pruned + internal + frontier.len()
        // holds at the end of every iteration.
        let mut states_created = 1usize;
        let mut pruned = 0usize;
        let mut internal_nodes = 0usize;
        let mut solution_count = 0usize;
        let mut max_frontier_size = 0usize;
        let mut cancelled = false;

        // Seed the incumbent. The bootstrap shares this run's clock, so
        // its time spends down the same budget.
        let mut incumbent = first_tour(
            scenario,
            config.start_city,
            start,
            budget,
            cancel.as_deref(),
        );
        let mut cost_history = Vec::new();

        let mut frontier = PriorityFrontier::new();
        if let Some(ref seed) = incumbent {
            cost_history.push(seed.cost);
            frontier.push(root);
        }
        // Without a bootstrap tour there is no valid incumbent to prune
        // against; the frontier stays empty and the run reports the
        // infeasible-style result below.

        while !frontier.is_empty() && start.elapsed() < budget {
            if is_cancelled() {
                cancelled = true;
                break;
            }
            max_frontier_size = max_frontier_size.max(frontier.len());

            let Some(node) = frontier.pop() else { break };
            let incumbent_cost = incumbent.as_ref().map_or(f64::INFINITY, |s| s.cost);

            if node.bound() < incumbent_cost {
                internal_nodes += 1;
                let successors: Vec<usize> = node.successors().collect();
                for city in successors {
                    let child = node.extend(city);
                    states_created += 1;

                    let best = incumbent.as_ref().map_or(f64::INFINITY, |s| s.cost);
                    if child.is_complete() {
                        let candidate = TspSolution::from_tour(scenario, child.path().to_vec());
                        if candidate.cost < best {
                            cost_history.push(candidate.cost);
                            incumbent = Some(candidate);
                            solution_count += 1;
                        } else {
                            pruned += 1;
                        }
                    } else if child.bound() < best {
                        frontier.push(child);
                    } else {
                        pruned += 1;
                    }
                }
            } else {
                pruned += 1;
            }

            debug_assert_eq!(
                states_created,
                solution_count + pruned + internal_nodes + frontier.len(),
                "state bookkeeping out of sync"
            );
        }
        cancelled = cancelled || is_cancelled();

        // Whatever is still queued and cannot beat the final incumbent
        // counts as pruned for reporting.
        let final_cost = incumbent.as_ref().map_or(f64::INFINITY, |s| s.cost);
        pruned += frontier.bounds().filter(|&b| b >= final_cost).count();

        let time = start.elapsed().as_secs_f64();
        SolveResult {
            cost: final_cost,
            time,
            solution_count,
            best_tour: incumbent
                .filter(|s| s.is_feasible())
                .map(|s| s.route(scenario)),
            max_frontier_size: Some(max_frontier_size),
            total_states_created: Some(states_created),
            pruned_count: Some(pruned),
            cancelled,
            cost_history,
        }
    }
}

/// Results for the degenerate instances the search loop never touches:
/// zero cities (infeasible) or a single city (a zero-cost tour of itself).
fn trivial_result<S: TspScenario>(
    scenario: &S,
    start_city: usize,
    start: Instant,
    cancelled: bool,
) -> SolveResult<S::City> {
    let (cost, best_tour, cost_history) = if scenario.is_empty() {
        (f64::INFINITY, None, Vec::new())
    } else {
        let solution = TspSolution {
            tour: vec![start_city],
            cost: 0.0,
        };
        (0.0, Some(solution.route(scenario)), vec![0.0])
    };
    SolveResult {
        cost,
        time: start.elapsed().as_secs_f64(),
        solution_count: 0,
        best_tour,
        max_frontier_size: Some(0),
        total_states_created: Some(if scenario.is_empty() { 0 } else { 1 }),
        pruned_count: Some(0),
        cancelled,
        cost_history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::MatrixScenario;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// The symmetric 4-city instance with optimal cycle cost 5.
    fn four_cities() -> MatrixScenario {
        let inf = f64::INFINITY;
        MatrixScenario::from_rows(vec![
            vec![inf, 1.0, 5.0, 1.0],
            vec![1.0, inf, 2.0, 5.0],
            vec![5.0, 2.0, inf, 1.0],
            vec![1.0, 5.0, 1.0, inf],
        ])
        .unwrap()
    }

    /// Dense random instance, reproducible from the seed.
    fn random_scenario(n: usize, seed: u64) -> MatrixScenario {
        let mut rng = StdRng::seed_from_u64(seed);
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i == j {
                            f64::INFINITY
                        } else {
                            rng.random_range(1.0..50.0)
                        }
                    })
                    .collect()
            })
            .collect();
        MatrixScenario::from_rows(rows).unwrap()
    }

    /// Exhaustive optimum by enumerating all tours from city 0.
    fn brute_force(s: &MatrixScenario) -> f64 {
        fn recurse(s: &MatrixScenario, tour: &mut Vec<usize>, best: &mut f64) {
            if tour.len() == s.len() {
                let cost = TspSolution::from_tour(s, tour.clone()).cost;
                if cost < *best {
                    *best = cost;
                }
                return;
            }
            for city in 1..s.len() {
                if !tour.contains(&city) {
                    tour.push(city);
                    recurse(s, tour, best);
                    tour.pop();
                }
            }
        }
        let mut best = f64::INFINITY;
        recurse(s, &mut vec![0], &mut best);
        best
    }

    #[test]
    fn test_four_city_optimum() {
        let result = BnbRunner::run(&four_cities(), &BnbConfig::default());

        assert_eq!(result.cost, 5.0);
        let tour = result.best_tour.unwrap();
        assert_eq!(tour.len(), 4);
        let mut sorted = tour.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["0", "1", "2", "3"]);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_matches_brute_force() {
        for seed in [7, 21, 1999] {
            let s = random_scenario(7, seed);
            let result = BnbRunner::run(&s, &BnbConfig::default());
            let optimum = brute_force(&s);
            assert_eq!(
                result.cost, optimum,
                "seed {seed}: expected optimum {optimum}, got {}",
                result.cost
            );
        }
    }

    #[test]
    fn test_infeasible_scenario() {
        let inf = f64::INFINITY;
        // City 2 cannot reach or be reached by anything.
        let s = MatrixScenario::from_rows(vec![
            vec![inf, 1.0, inf],
            vec![1.0, inf, inf],
            vec![inf, inf, inf],
        ])
        .unwrap();
        let result = BnbRunner::run(&s, &BnbConfig::default());

        assert!(result.cost.is_infinite());
        assert!(result.best_tour.is_none());
        assert_eq!(result.solution_count, 0);
        assert!(result.cost_history.is_empty());
    }

    #[test]
    fn test_zero_budget_returns_promptly() {
        let s = random_scenario(10, 3);
        let config = BnbConfig::default().with_time_limit_ms(0);
        let result = BnbRunner::run(&s, &config);

        // No time for the bootstrap either, so no incumbent exists.
        assert!(result.cost.is_infinite());
        assert!(result.best_tour.is_none());
        assert!(result.time < 5.0);
    }

    #[test]
    fn test_incumbent_monotone() {
        let s = random_scenario(9, 11);
        let result = BnbRunner::run(&s, &BnbConfig::default());

        assert!(!result.cost_history.is_empty());
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] < window[0],
                "incumbent must strictly improve: {} -> {}",
                window[0],
                window[1]
            );
        }
        assert_eq!(*result.cost_history.last().unwrap(), result.cost);
    }

    #[test]
    fn test_deterministic_runs() {
        let s = random_scenario(8, 42);
        let a = BnbRunner::run(&s, &BnbConfig::default());
        let b = BnbRunner::run(&s, &BnbConfig::default());

        assert_eq!(a.cost, b.cost);
        assert_eq!(a.best_tour, b.best_tour);
        assert_eq!(a.solution_count, b.solution_count);
        assert_eq!(a.total_states_created, b.total_states_created);
        assert_eq!(a.pruned_count, b.pruned_count);
        assert_eq!(a.max_frontier_size, b.max_frontier_size);
    }

    #[test]
    fn test_statistics_tracked() {
        let s = random_scenario(8, 5);
        let result = BnbRunner::run(&s, &BnbConfig::default());

        // The root always exists, and a full run on a dense instance
        // creates more states than it keeps.
        assert!(result.total_states_created.unwrap() >= 1);
        assert!(result.max_frontier_size.unwrap() >= 1);
        assert!(result.pruned_count.unwrap() > 0);
    }

    #[test]
    fn test_exhaustion_reconciles_counters() {
        // Small enough to exhaust the frontier; the per-iteration
        // debug_assert inside the loop does the heavy checking, this
        // verifies the end state: everything created was accounted for.
        let s = four_cities();
        let result = BnbRunner::run(&s, &BnbConfig::default());

        let total = result.total_states_created.unwrap();
        let pruned = result.pruned_count.unwrap();
        assert!(pruned < total);
        assert!(result.solution_count <= total);
    }

    #[test]
    fn test_cancellation() {
        let s = random_scenario(12, 9);
        let cancel = Arc::new(AtomicBool::new(true));
        let result = BnbRunner::run_with_cancel(&s, &BnbConfig::default(), Some(cancel));

        assert!(result.cancelled);
    }

    #[test]
    fn test_alternate_start_city() {
        let s = four_cities();
        let config = BnbConfig::default().with_start_city(2);
        let result = BnbRunner::run(&s, &config);

        assert_eq!(result.cost, 5.0);
        assert_eq!(result.best_tour.unwrap()[0], "2");
    }

    #[test]
    fn test_empty_scenario() {
        let s = MatrixScenario::from_rows(vec![]).unwrap();
        let result = BnbRunner::run(&s, &BnbConfig::default());

        assert!(result.cost.is_infinite());
        assert!(result.best_tour.is_none());
        assert_eq!(result.total_states_created, Some(0));
    }

    #[test]
    fn test_single_city_scenario() {
        let s = MatrixScenario::from_rows(vec![vec![f64::INFINITY]]).unwrap();
        let result = BnbRunner::run(&s, &BnbConfig::default());

        assert_eq!(result.cost, 0.0);
        assert_eq!(result.best_tour.unwrap(), vec!["0"]);
    }

    #[test]
    fn test_asymmetric_optimum() {
        let inf = f64::INFINITY;
        let s = MatrixScenario::from_rows(vec![
            vec![inf, 2.0, 9.0, 9.0],
            vec![9.0, inf, 2.0, 9.0],
            vec![9.0, 9.0, inf, 2.0],
            vec![2.0, 9.0, 9.0, inf],
        ])
        .unwrap();
        let result = BnbRunner::run(&s, &BnbConfig::default());

        // The directed ring 0 -> 1 -> 2 -> 3 -> 0 is the only cheap cycle.
        assert_eq!(result.cost, 8.0);
        assert_eq!(
            result.best_tour.unwrap(),
            vec!["0", "1", "2", "3"]
        );
    }
}
