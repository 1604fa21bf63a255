//! Search entry points and input validation.

use rayon::prelude::*;
use tracing::debug;

use crate::config::SearchConfig;
use crate::distance::min_sq_distance;
use crate::error::SearchError;
use crate::points::PointSet;
use crate::result::SearchResult;

/// Validates the reference and query sets.
///
/// All failure conditions are detected here, before any distance is computed:
/// no partial results are ever produced.
fn validate_inputs(x: &PointSet, y: &PointSet) -> Result<(), SearchError> {
    if x.num_coords() != y.num_coords() {
        return Err(SearchError::ShapeMismatch {
            x_coords: x.num_coords(),
            y_coords: y.num_coords(),
        });
    }
    if x.is_empty() {
        return Err(SearchError::EmptyReferenceSet);
    }
    // NaN guards: a NaN coordinate would silently lose every strict-<
    // comparison and corrupt the minimum.
    if x.data().iter().any(|v| !v.is_finite()) {
        return Err(SearchError::NonFiniteInput {
            set: "reference set",
        });
    }
    if y.data().iter().any(|v| !v.is_finite()) {
        return Err(SearchError::NonFiniteInput { set: "query set" });
    }
    Ok(())
}

/// Internal implementation that assumes all inputs are validated and the
/// output slices are sized to `y.num_points()`.
fn search_inner(
    x: &PointSet,
    y: &PointSet,
    config: &SearchConfig,
    distances: &mut [f64],
    indices: &mut [usize],
) {
    let num_coords = x.num_coords();
    let refs = x.data();
    let base = config.index_base().offset();

    if config.parallel() {
        // Each query point owns one slot in each output slice, so the
        // workers never contend and results match the sequential path.
        y.data()
            .par_chunks_exact(num_coords)
            .zip(distances.par_iter_mut())
            .zip(indices.par_iter_mut())
            .for_each(|((query, dist), idx)| {
                let (min_sq, best) = min_sq_distance(refs, num_coords, query);
                *dist = min_sq.sqrt();
                *idx = best + base;
            });
    } else {
        for ((query, dist), idx) in y
            .iter()
            .zip(distances.iter_mut())
            .zip(indices.iter_mut())
        {
            let (min_sq, best) = min_sq_distance(refs, num_coords, query);
            *dist = min_sq.sqrt();
            *idx = best + base;
        }
    }
}

/// Finds the nearest reference point for every query point.
///
/// For each point in `y`, in input order, scans all of `x` and returns the
/// minimum Euclidean distance together with the index of the reference point
/// achieving it. Ties go to the earlier reference point. The square root is
/// taken once per query, after the minimum squared distance is known.
///
/// This is the simple entry point, allocating the output vectors internally.
/// For hot loops, use [`nearest_neighbors_into`] to reuse allocations.
///
/// # Arguments
///
/// * `x` — reference set (the points searched)
/// * `y` — query set (the points to find neighbors for)
/// * `config` — search configuration (index base, parallelism)
///
/// # Errors
///
/// Returns [`SearchError`] if the sets differ in dimensionality, the
/// reference set is empty, or either set contains a non-finite value.
#[tracing::instrument(skip(x, y, config), fields(
    num_points_x = x.num_points(),
    num_points_y = y.num_points(),
    num_coords = x.num_coords(),
))]
pub fn nearest_neighbors(
    x: &PointSet,
    y: &PointSet,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    validate_inputs(x, y)?;
    debug!(parallel = config.parallel(), "running brute-force scan");

    let n = y.num_points();
    let mut distances = vec![0.0; n];
    let mut indices = vec![0usize; n];
    search_inner(x, y, config, &mut distances, &mut indices);
    Ok(SearchResult::new(distances, indices))
}

/// Finds nearest neighbors, writing into caller-provided buffers.
///
/// Identical to [`nearest_neighbors`] but populates `distances` and `indices`
/// in place. Both buffers are cleared and resized to `y.num_points()`; they
/// grow as needed and never shrink, making this ideal for hot loops where
/// query counts vary.
///
/// # Errors
///
/// Returns [`SearchError`] if inputs are invalid; the buffers are left
/// untouched in that case.
pub fn nearest_neighbors_into(
    x: &PointSet,
    y: &PointSet,
    config: &SearchConfig,
    distances: &mut Vec<f64>,
    indices: &mut Vec<usize>,
) -> Result<(), SearchError> {
    validate_inputs(x, y)?;

    let n = y.num_points();
    distances.clear();
    distances.resize(n, 0.0);
    indices.clear();
    indices.resize(n, 0);
    search_inner(x, y, config, distances, indices);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexBase;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_three_four_five() {
        let x = PointSet::new(&[0.0, 0.0], 2).unwrap();
        let y = PointSet::new(&[3.0, 4.0], 2).unwrap();
        let result = nearest_neighbors(&x, &y, &SearchConfig::new()).unwrap();
        assert_eq!(result.len(), 1);
        assert_abs_diff_eq!(result.distances()[0], 5.0, epsilon = 1e-12);
        assert_eq!(result.indices()[0], 0);
    }

    #[test]
    fn test_one_based_indices() {
        let x = PointSet::new(&[0.0, 0.0], 2).unwrap();
        let y = PointSet::new(&[3.0, 4.0], 2).unwrap();
        let config = SearchConfig::new().with_index_base(IndexBase::One);
        let result = nearest_neighbors(&x, &y, &config).unwrap();
        assert_eq!(result.indices()[0], 1);
    }

    #[test]
    fn test_empty_query_set() {
        let x = PointSet::new(&[1.0, 2.0], 2).unwrap();
        let y = PointSet::new(&[], 2).unwrap();
        let result = nearest_neighbors(&x, &y, &SearchConfig::new()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_error_shape_mismatch() {
        let x = PointSet::new(&[1.0, 2.0, 3.0], 3).unwrap();
        let y = PointSet::new(&[1.0, 2.0], 2).unwrap();
        let result = nearest_neighbors(&x, &y, &SearchConfig::new());
        assert!(matches!(
            result,
            Err(SearchError::ShapeMismatch {
                x_coords: 3,
                y_coords: 2
            })
        ));
    }

    #[test]
    fn test_error_empty_reference_set() {
        let x = PointSet::new(&[], 2).unwrap();
        let y = PointSet::new(&[1.0, 2.0], 2).unwrap();
        let result = nearest_neighbors(&x, &y, &SearchConfig::new());
        assert!(matches!(result, Err(SearchError::EmptyReferenceSet)));
    }

    #[test]
    fn test_error_nan_in_reference() {
        let x = PointSet::new(&[f64::NAN, 0.0], 2).unwrap();
        let y = PointSet::new(&[1.0, 2.0], 2).unwrap();
        let result = nearest_neighbors(&x, &y, &SearchConfig::new());
        assert!(matches!(
            result,
            Err(SearchError::NonFiniteInput {
                set: "reference set"
            })
        ));
    }

    #[test]
    fn test_error_inf_in_query() {
        let x = PointSet::new(&[0.0, 0.0], 2).unwrap();
        let y = PointSet::new(&[f64::INFINITY, 2.0], 2).unwrap();
        let result = nearest_neighbors(&x, &y, &SearchConfig::new());
        assert!(matches!(
            result,
            Err(SearchError::NonFiniteInput { set: "query set" })
        ));
    }

    #[test]
    fn test_into_matches_allocating() {
        let x = PointSet::new(&[0.0, 1.0, 5.0, 9.0], 1).unwrap();
        let y = PointSet::new(&[2.0, 8.0], 1).unwrap();
        let config = SearchConfig::new();

        let r1 = nearest_neighbors(&x, &y, &config).unwrap();

        let mut distances = Vec::new();
        let mut indices = Vec::new();
        nearest_neighbors_into(&x, &y, &config, &mut distances, &mut indices).unwrap();

        assert_eq!(r1.distances(), distances.as_slice());
        assert_eq!(r1.indices(), indices.as_slice());
    }

    #[test]
    fn test_into_leaves_buffers_on_error() {
        let x = PointSet::new(&[], 2).unwrap();
        let y = PointSet::new(&[1.0, 2.0], 2).unwrap();
        let mut distances = vec![42.0];
        let mut indices = vec![7];
        let result =
            nearest_neighbors_into(&x, &y, &SearchConfig::new(), &mut distances, &mut indices);
        assert!(result.is_err());
        assert_eq!(distances, vec![42.0]);
        assert_eq!(indices, vec![7]);
    }
}
