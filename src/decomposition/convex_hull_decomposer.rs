use crate::decomposition::hull_utils::{convex_hull_part, finish_part};
use crate::decomposition::{ConvexDecomposer, ConvexPart, DecompositionParams};
use crate::logging::LogSink;
use crate::mesh::IndexedMesh;
use crate::DecomposerError;

/// A trivial decomposer returning the convex hull of the whole mesh as a single part.
///
/// Only the approximation mode and the decimation parameters are taken into account.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConvexHullDecomposer;

impl ConvexDecomposer for ConvexHullDecomposer {
    fn decompose(
        &self,
        mesh: &IndexedMesh,
        params: &DecompositionParams,
        log: &LogSink,
    ) -> Result<Vec<ConvexPart>, DecomposerError> {
        if params.max_convex_hulls == 0 {
            return Ok(Vec::new());
        }

        log.info(format!(
            "Computing the convex hull of {} vertices.",
            mesh.vertices().len()
        ));

        let hull = convex_hull_part(mesh.vertices())?;
        Ok(vec![finish_part(hull, params, log)?])
    }
}
