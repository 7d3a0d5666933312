/// Rendering configuration for failure reports.
///
/// Use the builder pattern to customize, or use [`Default`] for the
/// standard report layout.
///
/// # Examples
///
/// ```rust
/// use mimicry::ReportConfig;
///
/// let config = ReportConfig::default()
///     .with_max_listed_invocations(10);   // Longer invocation lists
/// assert_eq!(config.max_listed_invocations(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportConfig {
    /// How many invocations a report lists before truncating with `...`.
    /// The remaining invocations are dropped, not summarized.
    /// Default: 5
    max_listed_invocations: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            max_listed_invocations: Self::DEFAULT_MAX_LISTED_INVOCATIONS,
        }
    }
}

impl ReportConfig {
    pub const DEFAULT_MAX_LISTED_INVOCATIONS: usize = 5;

    /// Set how many invocations a report lists before truncating.
    ///
    /// With `0`, a non-empty list renders as a lone `...` line.
    pub fn with_max_listed_invocations(mut self, limit: usize) -> Self {
        self.max_listed_invocations = limit;
        self
    }

    /// Returns how many invocations a report lists before truncating.
    pub fn max_listed_invocations(&self) -> usize {
        self.max_listed_invocations
    }
}
