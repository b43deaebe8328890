//! Reduced-cost-matrix search state.
//!
//! Each state owns a square matrix of reduced costs, the partial tour that
//! produced it, and a scalar lower bound on the cost of any completed tour
//! extending that partial tour. The bound comes from the classic reduction
//! argument: every tour must leave each city exactly once and enter each
//! city exactly once, so the sum of row minima plus the sum of column
//! minima (after row reduction) is a valid lower bound.
//!
//! States are derived by deep copy, never mutated in place: siblings in
//! the search tree must not observe each other's reductions.
//!
//! # References
//!
//! Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//! Salesman Problem", *Operations Research* 11(6), 972-989.

use crate::scenario::TspScenario;

/// A partial-tour search state with a reduced cost matrix and lower bound.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    /// Row-major `n x n` reduced costs. Visited rows/columns are blanked
    /// to infinity.
    matrix: Vec<f64>,
    n: usize,
    /// Visited city indices in order; the first element is the start city.
    path: Vec<usize>,
    /// Accumulated lower bound. Never decreases along a derivation chain.
    bound: f64,
}

impl CostMatrix {
    /// Builds the root state for a scenario: raw pairwise costs with the
    /// diagonal forced to infinity, then fully reduced.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `start` is out of range.
    pub fn root<S: TspScenario>(scenario: &S, start: usize) -> Self {
        let n = scenario.len();
        debug_assert!(start < n, "start city {start} out of range for {n} cities");

        let mut matrix = vec![f64::INFINITY; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i * n + j] = scenario.cost(i, j);
                }
            }
        }

        let mut state = Self {
            matrix,
            n,
            path: vec![start],
            bound: 0.0,
        };
        state.reduce();
        state
    }

    /// Derives a new state with `city` appended to the path.
    ///
    /// Deep-copies the matrix, charges the reduced edge cost into the
    /// bound, blanks the departed row and the arrival column, forbids the
    /// immediate return edge, and re-reduces. Callers must only pass
    /// cities yielded by [`successors`](Self::successors).
    pub fn extend(&self, city: usize) -> Self {
        let n = self.n;
        let last = self.last();
        debug_assert!(!self.path.contains(&city), "city {city} already visited");
        debug_assert!(
            self.matrix[last * n + city].is_finite(),
            "city {city} unreachable from {last}"
        );

        let mut next = self.clone();
        next.bound += self.matrix[last * n + city];
        for j in 0..n {
            next.matrix[last * n + j] = f64::INFINITY;
        }
        for i in 0..n {
            next.matrix[i * n + city] = f64::INFINITY;
        }
        next.matrix[city * n + last] = f64::INFINITY;
        next.path.push(city);
        next.reduce();
        next
    }

    /// Cities reachable at finite cost from the last visited city and not
    /// yet on the path. These are the expansion candidates.
    pub fn successors(&self) -> impl Iterator<Item = usize> + '_ {
        let last = self.last();
        (0..self.n).filter(move |&j| {
            self.matrix[last * self.n + j].is_finite() && !self.path.contains(&j)
        })
    }

    /// Whether the path visits every city.
    pub fn is_complete(&self) -> bool {
        self.path.len() == self.n
    }

    /// The accumulated lower bound for any tour extending this path.
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// The visited city indices, in order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    fn last(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// Subtracts each row's minimum from its finite entries, then each
    /// column's, accumulating the subtracted amounts into the bound. Rows
    /// and columns whose minimum is infinite contribute nothing.
    fn reduce(&mut self) {
        let n = self.n;
        for r in 0..n {
            let row = &mut self.matrix[r * n..(r + 1) * n];
            let min = row.iter().copied().fold(f64::INFINITY, f64::min);
            if min.is_finite() && min > 0.0 {
                for v in row.iter_mut() {
                    if v.is_finite() {
                        *v -= min;
                    }
                }
                self.bound += min;
            }
        }
        for c in 0..n {
            let mut min = f64::INFINITY;
            for r in 0..n {
                min = min.min(self.matrix[r * n + c]);
            }
            if min.is_finite() && min > 0.0 {
                for r in 0..n {
                    let v = &mut self.matrix[r * n + c];
                    if v.is_finite() {
                        *v -= min;
                    }
                }
                self.bound += min;
            }
        }
    }

    /// Test-only state with a given bound and no matrix, for exercising
    /// frontier ordering in isolation.
    #[cfg(test)]
    pub(crate) fn stub(bound: f64) -> Self {
        Self::stub_tagged(bound, 0)
    }

    #[cfg(test)]
    pub(crate) fn stub_tagged(bound: f64, tag: usize) -> Self {
        Self {
            matrix: Vec::new(),
            n: 0,
            path: vec![tag],
            bound,
        }
    }
}
