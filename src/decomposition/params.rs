use crate::config::{DecompositionConfig, MaxConvexHulls};
use crate::math::Real;

/// The parameters handed to a [`ConvexDecomposer`](crate::decomposition::ConvexDecomposer).
///
/// This is the flat, backend-facing form of a [`DecompositionConfig`]:
/// enumerations are replaced by the string tokens the backends expect and the
/// hull limit uses `-1` for "unbounded".
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecompositionParams {
    /// Concavity threshold, in `[0.01, 1.0]`.
    pub threshold: Real,
    /// Maximum number of parts, `-1` for no limit.
    pub max_convex_hulls: i32,
    /// One of `"auto"`, `"on"`, `"off"`.
    pub preprocess_mode: &'static str,
    /// Voxel resolution of the pre-processing step.
    pub preprocess_resolution: u32,
    /// Number of surface samples used to evaluate concavity.
    pub sample_resolution: u32,
    /// Node budget of the cutting-plane tree search.
    pub mcts_nodes: u32,
    /// Iteration budget of the cutting-plane tree search.
    pub mcts_iterations: u32,
    /// Maximum depth of the cutting-plane tree search.
    pub mcts_max_depth: u32,
    /// Principal-axis alignment.
    pub pca: bool,
    /// Merge post-processing.
    pub merge: bool,
    /// Per-part vertex limit enforcement.
    pub decimate: bool,
    /// Maximum number of vertices per part.
    pub max_ch_vertex: u32,
    /// Extrusion of thin parts.
    pub extrude: bool,
    /// Extrusion distance.
    pub extrude_margin: Real,
    /// One of `"ch"`, `"box"`.
    pub approximate_mode: &'static str,
    /// Random seed.
    pub seed: u32,
}

impl DecompositionParams {
    /// Translates a configuration into backend parameters.
    ///
    /// The configuration is not validated here.
    pub fn from_config(config: &DecompositionConfig) -> Self {
        Self {
            threshold: config.threshold,
            max_convex_hulls: config.max_convex_hulls.to_raw(),
            preprocess_mode: config.preprocess_mode.token(),
            preprocess_resolution: config.preprocess_resolution,
            sample_resolution: config.sample_resolution,
            mcts_nodes: config.mcts_nodes,
            mcts_iterations: config.mcts_iterations,
            mcts_max_depth: config.mcts_max_depth,
            pca: config.pca,
            merge: config.merge_postprocessing,
            decimate: config.decimate,
            max_ch_vertex: config.max_convex_hull_vertices,
            extrude: config.extrude,
            extrude_margin: config.extrude_margin,
            approximate_mode: config.approximation_mode.token(),
            seed: config.seed,
        }
    }

    /// The part limit, read back from its signed representation.
    pub fn hull_limit(&self) -> MaxConvexHulls {
        MaxConvexHulls::from_raw(self.max_convex_hulls)
    }
}

impl From<&DecompositionConfig> for DecompositionParams {
    fn from(config: &DecompositionConfig) -> Self {
        Self::from_config(config)
    }
}
