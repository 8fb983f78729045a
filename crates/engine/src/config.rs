//! Configuration for milestone computations.

use carpe_calendar::YearRange;

/// Options for an [`Engine`](crate::Engine).
///
/// # Example
///
/// ```
/// use carpe_calendar::YearRange;
/// use carpe_engine::EngineConfig;
///
/// let config = EngineConfig::new()
///     .with_parallel(true)
///     .with_year_range(YearRange::new(1901, 2026).unwrap());
/// assert!(config.parallel());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Evaluate generators on the rayon thread pool.
    parallel: bool,
    /// Accepted reference-date years; `None` accepts any date.
    year_range: Option<YearRange>,
}

impl EngineConfig {
    /// Sequential evaluation, any reference year.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Restricts reference dates to `range`.
    pub fn with_year_range(mut self, range: YearRange) -> Self {
        self.year_range = Some(range);
        self
    }

    /// Whether generators run in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Accepted reference years, if restricted.
    pub fn year_range(&self) -> Option<YearRange> {
        self.year_range
    }
}
