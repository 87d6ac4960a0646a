use crate::math::Real;

/// Errors that can occur while decomposing a mesh into convex parts.
///
/// Configuration and input errors are detected before any geometric work is
/// done and before the decomposition backend is called. Backend errors are
/// fatal for the call: no partial result is returned and nothing is retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DecompositionError {
    /// A configuration field is outside of its admissible range.
    #[error("decomposition {field} is {value}, should be in [{min}, {max}].")]
    OutOfRangeConfig {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: Real,
        /// The smallest admissible value.
        min: Real,
        /// The largest admissible value.
        max: Real,
    },
    /// The input triangle soup has a length that is not a multiple of 3.
    #[error("the triangle soup has {len} points, which is not a multiple of 3.")]
    EmptyInput {
        /// The number of points of the rejected soup.
        len: usize,
    },
    /// The decomposition backend could not produce a result.
    #[error("convex decomposition failed: {0}")]
    DecompositionFailed(#[from] DecomposerError),
}

/// Errors reported by a [`ConvexDecomposer`](crate::decomposition::ConvexDecomposer) backend.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecomposerError {
    /// The backend rejected the mesh it was given.
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
    /// A parameter has a value the backend does not understand.
    #[error("unsupported parameter: {0}")]
    UnsupportedParameter(String),
    /// The backend hit a numerical degeneracy it could not recover from.
    #[error("numerical failure: {0}")]
    NumericalFailure(String),
    /// The backend panicked while computing the decomposition.
    #[error("the backend panicked: {0}")]
    Panicked(String),
}
