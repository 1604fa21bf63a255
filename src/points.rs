//! Fixed-dimensionality point-set view over a flat coordinate buffer.

use crate::error::SearchError;

/// Borrowed view of an ordered point set.
///
/// Wraps a flat row-major buffer (`point 0` coords, then `point 1` coords, …)
/// together with its dimensionality, so callers never do pointer arithmetic
/// by hand. Construction validates the shape once; every row accessed
/// afterwards is a well-formed `&[f64]` of length `num_coords`.
///
/// # Example
///
/// ```
/// use pdist2::PointSet;
///
/// // Two points in 3D: (1,2,3) and (4,5,6)
/// let set = PointSet::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
/// assert_eq!(set.num_points(), 2);
/// assert_eq!(set.point(1), &[4.0, 5.0, 6.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PointSet<'a> {
    /// Flat row-major coordinate buffer, length = num_points × num_coords.
    data: &'a [f64],
    /// Number of coordinates per point.
    num_coords: usize,
}

impl<'a> PointSet<'a> {
    /// Creates a point-set view over `data` with `num_coords` coordinates per point.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidNumCoords`] if `num_coords` is zero, or
    /// [`SearchError::DataShapeMismatch`] if `data.len()` is not divisible by
    /// `num_coords`.
    pub fn new(data: &'a [f64], num_coords: usize) -> Result<Self, SearchError> {
        if num_coords == 0 {
            return Err(SearchError::InvalidNumCoords { num_coords });
        }
        if !data.len().is_multiple_of(num_coords) {
            return Err(SearchError::DataShapeMismatch {
                len: data.len(),
                num_coords,
            });
        }
        Ok(Self { data, num_coords })
    }

    /// Returns the number of points in the set.
    pub fn num_points(&self) -> usize {
        self.data.len() / self.num_coords
    }

    /// Returns the number of coordinates per point.
    pub fn num_coords(&self) -> usize {
        self.num_coords
    }

    /// Returns true if the set contains no points.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the coordinates of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_points()`.
    pub fn point(&self, i: usize) -> &'a [f64] {
        &self.data[i * self.num_coords..(i + 1) * self.num_coords]
    }

    /// Iterates over the points in input order.
    pub fn iter(&self) -> impl Iterator<Item = &'a [f64]> {
        self.data.chunks_exact(self.num_coords)
    }

    /// Returns the underlying flat buffer.
    pub(crate) fn data(&self) -> &'a [f64] {
        self.data
    }
}
