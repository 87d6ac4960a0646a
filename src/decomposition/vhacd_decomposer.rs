use crate::decomposition::hull_utils::finish_part;
use crate::decomposition::{ConvexDecomposer, ConvexPart, DecompositionParams};
use crate::logging::LogSink;
use crate::mesh::IndexedMesh;
use crate::DecomposerError;
use parry3d::transformation::vhacd::{VHACDParameters, VHACD};

/// The largest part limit VHACD can be given.
///
/// VHACD doubles a `u32` part count until it reaches the limit, which must
/// therefore not exceed `2^31`.
pub const MAX_VHACD_CONVEX_HULLS: u32 = 1 << 31;

/// A decomposer based on parry's implementation of the VHACD algorithm.
///
/// The VHACD parameters are derived from [`DecompositionParams`] as follows:
/// - `threshold` is the maximum concavity of each part;
/// - `max_convex_hulls` limits the number of parts, capped to
///   [`MAX_VHACD_CONVEX_HULLS`]; when unbounded, the limit of the base
///   parameters is used;
/// - `preprocess_resolution` is the voxelization resolution when
///   `preprocess_mode` is `"on"` or `"auto"`; the base resolution is used
///   when it is `"off"`;
/// - `approximate_mode`, `decimate` and `max_ch_vertex` are applied to each
///   resulting hull.
///
/// Every other parameter has no VHACD equivalent and is ignored.
#[derive(Clone, Debug, Default)]
pub struct VhacdDecomposer {
    /// Parameters not derived from [`DecompositionParams`].
    pub base: VHACDParameters,
}

impl VhacdDecomposer {
    /// A decomposer using `base` for the VHACD settings that aren't derived
    /// from the decomposition parameters.
    pub fn new(base: VHACDParameters) -> Self {
        Self { base }
    }

    /// The VHACD parameters used for the given decomposition parameters.
    pub fn vhacd_parameters(
        &self,
        params: &DecompositionParams,
    ) -> Result<VHACDParameters, DecomposerError> {
        let resolution = match params.preprocess_mode {
            "on" | "auto" => params.preprocess_resolution,
            "off" => self.base.resolution,
            other => {
                return Err(DecomposerError::UnsupportedParameter(format!(
                    "pre-processing mode \"{}\"",
                    other
                )))
            }
        };

        Ok(VHACDParameters {
            concavity: params.threshold,
            resolution,
            max_convex_hulls: params
                .hull_limit()
                .limit()
                .unwrap_or(self.base.max_convex_hulls)
                .min(MAX_VHACD_CONVEX_HULLS),
            ..self.base.clone()
        })
    }
}

impl ConvexDecomposer for VhacdDecomposer {
    fn decompose(
        &self,
        mesh: &IndexedMesh,
        params: &DecompositionParams,
        log: &LogSink,
    ) -> Result<Vec<ConvexPart>, DecomposerError> {
        let vhacd_params = self.vhacd_parameters(params)?;

        if params.max_convex_hulls == 0 {
            return Ok(Vec::new());
        }

        if params.pca {
            log.warn("Principal-axis alignment is not supported by the VHACD backend.");
        }
        if params.extrude {
            log.warn("Extrusion of thin parts is not supported by the VHACD backend.");
        }
        log.debug(format!(
            "Ignored parameters: sample resolution {}, tree search {}/{}/{}, merge {}, seed {}.",
            params.sample_resolution,
            params.mcts_nodes,
            params.mcts_iterations,
            params.mcts_max_depth,
            params.merge,
            params.seed
        ));
        log.info(format!(
            "Decomposing {} triangles with concavity {} at resolution {}.",
            mesh.num_triangles(),
            vhacd_params.concavity,
            vhacd_params.resolution
        ));

        let decomposition = VHACD::decompose(&vhacd_params, mesh.vertices(), mesh.indices(), true);
        let hulls = decomposition.compute_exact_convex_hulls(mesh.vertices(), mesh.indices());

        let mut parts = Vec::with_capacity(hulls.len());
        for (vertices, indices) in hulls {
            if indices.is_empty() {
                log.debug("Skipping an empty hull.");
                continue;
            }

            let hull = ConvexPart::new(vertices, indices)?;
            parts.push(finish_part(hull, params, log)?);
        }

        log.info(format!("Decomposed into {} convex parts.", parts.len()));

        Ok(parts)
    }
}
