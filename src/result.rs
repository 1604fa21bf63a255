//! Output type for nearest-neighbor search queries.

/// Result of a nearest-neighbor search.
///
/// Contains, for each query point in input order, the minimum Euclidean
/// distance to the reference set and the index of the winning reference
/// point (offset per the configured [`IndexBase`](crate::IndexBase)).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Minimum Euclidean distance per query point (length = num_points_y).
    distances: Vec<f64>,
    /// Index of the nearest reference point per query point (length = num_points_y).
    indices: Vec<usize>,
}

impl SearchResult {
    /// Creates a new `SearchResult`.
    pub(crate) fn new(distances: Vec<f64>, indices: Vec<usize>) -> Self {
        Self { distances, indices }
    }

    /// Returns the minimum distance for each query point.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Returns the nearest reference index for each query point.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of query points.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if the query set was empty.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Consumes the result, returning `(distances, indices)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<usize>) {
        (self.distances, self.indices)
    }
}
