//! Configuration for nearest-neighbor search queries.

/// Base offset applied to returned reference indices.
///
/// The search itself always tracks 0-based positions within the reference
/// set; the base is applied once when writing the output. Hosts with 1-based
/// array conventions (MATLAB, R, Fortran) should use [`IndexBase::One`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexBase {
    /// Indices are 0-based positions within the reference set.
    #[default]
    Zero,
    /// Indices are 1-based positions within the reference set.
    One,
}

impl IndexBase {
    /// Returns the offset added to each 0-based position.
    pub(crate) fn offset(self) -> usize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

/// Configuration for a nearest-neighbor search.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use pdist2::{IndexBase, SearchConfig};
///
/// let config = SearchConfig::new()
///     .with_index_base(IndexBase::One)
///     .with_parallel(true);
///
/// assert_eq!(config.index_base(), IndexBase::One);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Base offset for returned indices.
    index_base: IndexBase,
    /// Whether to distribute query points across a rayon pool.
    parallel: bool,
}

impl SearchConfig {
    /// Creates a new configuration.
    ///
    /// Defaults: `index_base = Zero`, `parallel = false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the index base for returned indices.
    pub fn with_index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }

    /// Enables or disables parallel execution over query points.
    ///
    /// Each query point is independent, so parallel results are bit-identical
    /// to sequential results (tie-breaking and summation order within a query
    /// are unchanged).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the index base.
    pub fn index_base(&self) -> IndexBase {
        self.index_base
    }

    /// Returns whether parallel execution is enabled.
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}
