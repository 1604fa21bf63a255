//! Brute-force nearest-neighbor search.
//!
//! For every point in a query set Y, finds the closest point (by Euclidean
//! distance) in a reference set X, returning both the minimum distance and
//! the index of the winning reference point. The search is intentionally
//! exhaustive — `O(numPointsX × numPointsY × numCoords)` with no spatial
//! index — which makes it exact, allocation-light, and bit-reproducible.
//!
//! # Quick start
//!
//! ```
//! use pdist2::{PointSet, SearchConfig, nearest_neighbors};
//!
//! // Three reference points and two query points in 2D, row-major.
//! let x = PointSet::new(&[0.0, 0.0, 3.0, 4.0, 6.0, 8.0], 2).unwrap();
//! let y = PointSet::new(&[3.0, 4.0, 0.1, 0.0], 2).unwrap();
//!
//! let result = nearest_neighbors(&x, &y, &SearchConfig::new()).unwrap();
//! assert_eq!(result.indices(), &[1, 0]);
//! assert_eq!(result.distances()[0], 0.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! nearest_neighbors()
//!   ├─ validate inputs      (search.rs)
//!   ├─ min_sq_distance()    (distance.rs)  one scan per query point
//!   └─ SearchResult         (result.rs)
//! ```
//!
//! # Guarantees
//!
//! - **Tie-break**: strict `<` comparison, so the first reference point (in
//!   input order) achieving the minimum wins. Later equidistant candidates
//!   never overwrite it, sequentially or in parallel.
//! - **Summation order**: squared differences accumulate in coordinate order
//!   `0..num_coords`, with one `sqrt` per query point at the end.
//! - **Fail-fast**: dimensionality mismatches, an empty reference set, and
//!   non-finite coordinates are rejected before any computation; no partial
//!   results are produced.
//!
//! For hot loops, use [`nearest_neighbors_into`] with reusable output
//! buffers to avoid per-call heap allocation. For large query sets,
//! [`SearchConfig::with_parallel`] distributes queries across a rayon pool
//! with bit-identical results.

pub mod config;
pub mod error;
pub mod points;
pub mod result;
pub mod search;

pub(crate) mod distance;

pub use config::{IndexBase, SearchConfig};
pub use error::SearchError;
pub use points::PointSet;
pub use result::SearchResult;
pub use search::{nearest_neighbors, nearest_neighbors_into};
