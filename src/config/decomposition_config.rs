use crate::math::Real;

/// Controls the manifold pre-processing step of the decomposition backend.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum PreprocessMode {
    /// Let the backend decide whether the input mesh needs to be pre-processed.
    Auto,
    /// Always pre-process the input mesh.
    On,
    /// Never pre-process the input mesh.
    #[default]
    Off,
}

impl PreprocessMode {
    /// The token understood by the decomposition backend.
    pub fn token(self) -> &'static str {
        match self {
            PreprocessMode::Auto => "auto",
            PreprocessMode::On => "on",
            PreprocessMode::Off => "off",
        }
    }
}

/// The kind of convex volume emitted for each part of the decomposition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ApproximationMode {
    /// Each part is the convex hull of its piece of the input mesh.
    #[default]
    ConvexHull,
    /// Each part is the axis-aligned box bounding its piece of the input mesh.
    Box,
}

impl ApproximationMode {
    /// The token understood by the decomposition backend.
    pub fn token(self) -> &'static str {
        match self {
            ApproximationMode::ConvexHull => "ch",
            ApproximationMode::Box => "box",
        }
    }
}

/// The maximum number of convex parts the decomposition may produce.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MaxConvexHulls {
    /// No limit on the number of parts.
    #[default]
    Unbounded,
    /// At most this many parts.
    Limited(u32),
}

impl MaxConvexHulls {
    /// Reads the signed representation where any negative value means "unbounded".
    pub fn from_raw(raw: i32) -> Self {
        u32::try_from(raw).map_or(MaxConvexHulls::Unbounded, MaxConvexHulls::Limited)
    }

    /// The signed representation expected by the backend, `-1` standing for "unbounded".
    ///
    /// Limits that do not fit an `i32` saturate to `i32::MAX`.
    pub fn to_raw(self) -> i32 {
        match self {
            MaxConvexHulls::Unbounded => -1,
            MaxConvexHulls::Limited(n) => i32::try_from(n).unwrap_or(i32::MAX),
        }
    }

    /// The limit, if any.
    pub fn limit(self) -> Option<u32> {
        match self {
            MaxConvexHulls::Unbounded => None,
            MaxConvexHulls::Limited(n) => Some(n),
        }
    }
}

/// Parameters of a convex decomposition.
///
/// Only [`threshold`](Self::threshold) and
/// [`preprocess_resolution`](Self::preprocess_resolution) are range-checked
/// (see [`validate`](crate::config::validate)); every other field is passed to
/// the backend as-is.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct DecompositionConfig {
    /// Concavity threshold under which a part is no longer split.
    ///
    /// Must lie in `[0.01, 1.0]`. Lower values give more, tighter parts.
    pub threshold: Real,
    /// Maximum number of parts.
    pub max_convex_hulls: MaxConvexHulls,
    /// Manifold pre-processing mode.
    pub preprocess_mode: PreprocessMode,
    /// Voxel resolution of the pre-processing step. Must lie in `[5, 1000]`.
    pub preprocess_resolution: u32,
    /// Number of surface samples used to evaluate concavity.
    pub sample_resolution: u32,
    /// Node budget of the cutting-plane tree search.
    pub mcts_nodes: u32,
    /// Iteration budget of the cutting-plane tree search.
    pub mcts_iterations: u32,
    /// Maximum depth of the cutting-plane tree search.
    pub mcts_max_depth: u32,
    /// Align the mesh on its principal axes before cutting.
    pub pca: bool,
    /// Merge adjacent parts after the decomposition when possible.
    pub merge_postprocessing: bool,
    /// Limit the vertex count of each part to [`Self::max_convex_hull_vertices`].
    pub decimate: bool,
    /// Maximum number of vertices per part when [`Self::decimate`] is enabled.
    pub max_convex_hull_vertices: u32,
    /// Extrude thin parts by [`Self::extrude_margin`].
    pub extrude: bool,
    /// Extrusion distance applied when [`Self::extrude`] is enabled.
    pub extrude_margin: Real,
    /// Kind of convex volume emitted for each part.
    pub approximation_mode: ApproximationMode,
    /// Seed of the backend's random number generator.
    pub seed: u32,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            threshold: 0.05,
            max_convex_hulls: MaxConvexHulls::Unbounded,
            preprocess_mode: PreprocessMode::Off,
            preprocess_resolution: 50,
            sample_resolution: 2000,
            mcts_nodes: 20,
            mcts_iterations: 150,
            mcts_max_depth: 3,
            pca: false,
            merge_postprocessing: true,
            decimate: false,
            max_convex_hull_vertices: 256,
            extrude: false,
            extrude_margin: 0.01,
            approximation_mode: ApproximationMode::ConvexHull,
            seed: 0,
        }
    }
}
