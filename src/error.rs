//! Error types for the pdist2 crate.

/// Error type for all fallible operations in the pdist2 crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Returned when the reference and query sets have different dimensionality.
    #[error("dimensionality mismatch: reference set has {x_coords} coords, query set has {y_coords}")]
    ShapeMismatch {
        /// Dimensionality of the reference set.
        x_coords: usize,
        /// Dimensionality of the query set.
        y_coords: usize,
    },

    /// Returned when the reference set contains no points, so no nearest
    /// neighbor exists for any query.
    #[error("reference set is empty")]
    EmptyReferenceSet,

    /// Returned when a point set is constructed with zero coordinates per point.
    #[error("num_coords must be >= 1, got {num_coords}")]
    InvalidNumCoords {
        /// The invalid dimensionality.
        num_coords: usize,
    },

    /// Returned when a flat coordinate buffer is not divisible by num_coords.
    #[error("data length {len} is not divisible by num_coords {num_coords}")]
    DataShapeMismatch {
        /// Length of the flat coordinate buffer.
        len: usize,
        /// Expected number of coordinates per point.
        num_coords: usize,
    },

    /// Returned when an input set contains NaN or infinity.
    #[error("non-finite value in {set}")]
    NonFiniteInput {
        /// Name of the input set containing the non-finite value.
        set: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_shape_mismatch() {
        let e = SearchError::ShapeMismatch {
            x_coords: 3,
            y_coords: 2,
        };
        assert_eq!(
            e.to_string(),
            "dimensionality mismatch: reference set has 3 coords, query set has 2"
        );
    }

    #[test]
    fn error_empty_reference_set() {
        let e = SearchError::EmptyReferenceSet;
        assert_eq!(e.to_string(), "reference set is empty");
    }

    #[test]
    fn error_invalid_num_coords() {
        let e = SearchError::InvalidNumCoords { num_coords: 0 };
        assert_eq!(e.to_string(), "num_coords must be >= 1, got 0");
    }

    #[test]
    fn error_data_shape_mismatch() {
        let e = SearchError::DataShapeMismatch {
            len: 7,
            num_coords: 3,
        };
        assert_eq!(
            e.to_string(),
            "data length 7 is not divisible by num_coords 3"
        );
    }

    #[test]
    fn error_non_finite_input() {
        let e = SearchError::NonFiniteInput { set: "query set" };
        assert_eq!(e.to_string(), "non-finite value in query set");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SearchError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SearchError>();
    }
}
