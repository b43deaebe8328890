//! Completed tours and the result record shared by all runners.

use super::types::TspScenario;

/// A completed tour: a permutation of all city indices plus its cycle cost.
///
/// The closing edge back to the first city is implied, and its cost is
/// included in [`cost`](TspSolution::cost). A tour with any unreachable
/// hop (including the closing edge) has infinite cost. Immutable once
/// built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspSolution {
    /// Visit order, as city indices into the scenario.
    pub tour: Vec<usize>,
    /// Total cycle cost, `f64::INFINITY` if any hop is unreachable.
    pub cost: f64,
}

impl TspSolution {
    /// Builds a solution from a visit order, summing every hop plus the
    /// closing edge.
    ///
    /// A single-city tour has cost 0 (no travel occurs).
    pub fn from_tour<S: TspScenario>(scenario: &S, tour: Vec<usize>) -> Self {
        let mut cost = 0.0;
        for hop in tour.windows(2) {
            cost += scenario.cost(hop[0], hop[1]);
        }
        if tour.len() > 1 {
            cost += scenario.cost(tour[tour.len() - 1], tour[0]);
        }
        Self { tour, cost }
    }

    /// Maps the tour indices back to the scenario's city objects.
    pub fn route<S: TspScenario>(&self, scenario: &S) -> Vec<S::City> {
        self.tour
            .iter()
            .map(|&i| scenario.cities()[i].clone())
            .collect()
    }

    /// Whether every hop of the cycle is reachable.
    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Result of a solver run.
///
/// Every runner in this crate returns this record; statistics a runner
/// does not track are `None`. Infeasibility is reported as
/// `cost == f64::INFINITY` with `best_tour == None`, never as an error.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult<C> {
    /// Cost of the best tour found, `f64::INFINITY` if none.
    pub cost: f64,

    /// Elapsed wall-clock time in seconds.
    pub time: f64,

    /// Number of improving solutions found during the search. 0 for the
    /// random-tour baseline and the greedy bootstrap, which stop at their
    /// first feasible tour.
    pub solution_count: usize,

    /// The best tour found, as city objects in visit order (cycle implied).
    pub best_tour: Option<Vec<C>>,

    /// Largest frontier size observed, where tracked.
    pub max_frontier_size: Option<usize>,

    /// Total search states created (the root counts as one), where tracked.
    pub total_states_created: Option<usize>,

    /// States discarded without expansion, where tracked.
    pub pruned_count: Option<usize>,

    /// Whether the run stopped because the cancellation token was set.
    pub cancelled: bool,

    /// Best cost after each improvement, starting from the initial
    /// incumbent. Non-increasing.
    pub cost_history: Vec<f64>,
}
