//! Branch-and-bound configuration.

/// Configuration for the branch-and-bound solver.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::BnbConfig;
///
/// let config = BnbConfig::default().with_time_limit_ms(5_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbConfig {
    /// Wall-clock budget in milliseconds. 0 expires immediately (the run
    /// still returns a well-formed result).
    pub time_limit_ms: u64,

    /// Index of the city every tour starts from. Must be a valid index
    /// into the scenario.
    pub start_city: usize,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
            start_city: 0,
        }
    }
}

impl BnbConfig {
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_start_city(mut self, city: usize) -> Self {
        self.start_city = city;
        self
    }
}
