//! Squared-Euclidean minimum-distance scan over the reference set.

/// Finds the reference point closest to `query` by squared Euclidean distance.
///
/// Returns `(min_sq_dist, index)` where `index` is the 0-based position of the
/// winning reference point. Strict `<` comparison keeps the first reference
/// point (in input order) on ties. Squared differences accumulate in
/// coordinate order `0..num_coords`, so results are bit-reproducible.
///
/// Dispatches to specialised implementations for 1D and 2D cases.
///
/// # Panics
///
/// Debug-asserts that `refs` is non-empty, `refs.len() % num_coords == 0`,
/// and `query.len() == num_coords`. Callers validate these upfront.
pub(crate) fn min_sq_distance(refs: &[f64], num_coords: usize, query: &[f64]) -> (f64, usize) {
    debug_assert!(!refs.is_empty());
    debug_assert_eq!(refs.len() % num_coords, 0);
    debug_assert_eq!(query.len(), num_coords);

    match num_coords {
        1 => min_sq_dist_1d(refs, query[0]),
        2 => min_sq_dist_2d(refs, query),
        _ => min_sq_dist_nd(refs, num_coords, query),
    }
}

#[inline]
fn min_sq_dist_1d(refs: &[f64], query: f64) -> (f64, usize) {
    let mut min_sq = f64::INFINITY;
    let mut best = 0;
    for (i, &r) in refs.iter().enumerate() {
        let d = query - r;
        let sq = d * d;
        if sq < min_sq {
            min_sq = sq;
            best = i;
        }
    }
    (min_sq, best)
}

#[inline]
fn min_sq_dist_2d(refs: &[f64], query: &[f64]) -> (f64, usize) {
    let q0 = query[0];
    let q1 = query[1];
    let mut min_sq = f64::INFINITY;
    let mut best = 0;
    for (i, r) in refs.chunks_exact(2).enumerate() {
        let d0 = q0 - r[0];
        let d1 = q1 - r[1];
        let sq = d0 * d0 + d1 * d1;
        if sq < min_sq {
            min_sq = sq;
            best = i;
        }
    }
    (min_sq, best)
}

#[inline]
fn min_sq_dist_nd(refs: &[f64], num_coords: usize, query: &[f64]) -> (f64, usize) {
    let mut min_sq = f64::INFINITY;
    let mut best = 0;
    for (i, r) in refs.chunks_exact(num_coords).enumerate() {
        let mut acc = 0.0;
        for j in 0..num_coords {
            let d = query[j] - r[j];
            acc += d * d;
        }
        if acc < min_sq {
            min_sq = acc;
            best = i;
        }
    }
    (min_sq, best)
}
