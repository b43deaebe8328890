//! Scenario trait and the dense-matrix reference implementation.

/// Supplies city data and pairwise travel costs to the solvers.
///
/// Cities are addressed by their index in [`cities`](TspScenario::cities);
/// the ordering is fixed for the lifetime of the scenario. Costs may be
/// asymmetric (`cost(a, b) != cost(b, a)`) and `f64::INFINITY` marks an
/// unreachable hop. The solvers never consult `cost(i, i)`.
///
/// # Examples
///
/// ```
/// use u_tsp::scenario::{MatrixScenario, TspScenario};
///
/// let inf = f64::INFINITY;
/// let scenario = MatrixScenario::from_rows(vec![
///     vec![inf, 1.0, 2.0],
///     vec![1.0, inf, 3.0],
///     vec![2.0, 3.0, inf],
/// ])
/// .unwrap();
///
/// assert_eq!(scenario.len(), 3);
/// assert_eq!(scenario.cost(0, 2), 2.0);
/// ```
pub trait TspScenario: Send + Sync {
    /// The city representation handed back to callers in routes.
    type City: Clone + Send;

    /// The cities of this scenario, in index order.
    fn cities(&self) -> &[Self::City];

    /// Travel cost from city `from` to city `to`. `f64::INFINITY` if
    /// unreachable.
    fn cost(&self, from: usize, to: usize) -> f64;

    /// Number of cities.
    fn len(&self) -> usize {
        self.cities().len()
    }

    /// Whether the scenario has no cities at all.
    fn is_empty(&self) -> bool {
        self.cities().is_empty()
    }
}

/// Dense cost-matrix scenario with string labels.
///
/// The obvious adapter for callers that already hold an explicit cost
/// matrix; also what the tests and benchmarks in this crate use.
#[derive(Debug, Clone)]
pub struct MatrixScenario {
    labels: Vec<String>,
    costs: Vec<f64>,
    n: usize,
}

impl MatrixScenario {
    /// Creates a scenario from labels and a row-major `n x n` cost matrix.
    ///
    /// Returns an error if `costs.len() != labels.len()^2`.
    pub fn new(labels: Vec<String>, costs: Vec<f64>) -> Result<Self, String> {
        let n = labels.len();
        if costs.len() != n * n {
            return Err(format!(
                "cost matrix must be {n}x{n} = {} entries, got {}",
                n * n,
                costs.len()
            ));
        }
        Ok(Self { labels, costs, n })
    }

    /// Creates a scenario from a square matrix of rows, labeling cities
    /// `"0"`, `"1"`, ... by index.
    ///
    /// Returns an error if any row length differs from the row count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, String> {
        let n = rows.len();
        let mut costs = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(format!("row {i} has {} entries, expected {n}", row.len()));
            }
            costs.extend_from_slice(row);
        }
        let labels = (0..n).map(|i| i.to_string()).collect();
        Ok(Self { labels, costs, n })
    }
}

impl TspScenario for MatrixScenario {
    type City = String;

    fn cities(&self) -> &[String] {
        &self.labels
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        self.costs[from * self.n + to]
    }
}
