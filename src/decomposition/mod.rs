//! Invocation of the convex decomposition backends.

pub use self::convex_hull_decomposer::ConvexHullDecomposer;
pub use self::decomposer::{ConvexDecomposer, ConvexPart};
pub use self::params::DecompositionParams;
pub use self::pipeline::ConvexDecomposition;
pub use self::vhacd_decomposer::{VhacdDecomposer, MAX_VHACD_CONVEX_HULLS};

mod convex_hull_decomposer;
mod decomposer;
pub mod hull_utils;
mod params;
mod pipeline;
mod vhacd_decomposer;
