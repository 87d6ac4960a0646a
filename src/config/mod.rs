//! Parameters of a convex decomposition and their validation.

pub use self::decomposition_config::{
    ApproximationMode, DecompositionConfig, MaxConvexHulls, PreprocessMode,
};
pub use self::validation::{validate, PREPROCESS_RESOLUTION_RANGE, THRESHOLD_RANGE};

mod decomposition_config;
mod validation;
