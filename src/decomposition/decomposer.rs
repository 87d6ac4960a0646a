use crate::decomposition::DecompositionParams;
use crate::logging::LogSink;
use crate::mesh::IndexedMesh;
use crate::DecomposerError;

/// One convex piece of a decomposition.
pub type ConvexPart = IndexedMesh;

/// An approximate convex decomposition algorithm.
///
/// The input mesh has welded vertices and an outward-facing winding. The call
/// blocks until the decomposition completes and cannot be interrupted.
/// Implementations may log through `log` from any thread, as long as they
/// drop every clone of the sink before returning.
pub trait ConvexDecomposer {
    /// Splits `mesh` into convex parts.
    fn decompose(
        &self,
        mesh: &IndexedMesh,
        params: &DecompositionParams,
        log: &LogSink,
    ) -> Result<Vec<ConvexPart>, DecomposerError>;
}

impl<D: ConvexDecomposer + ?Sized> ConvexDecomposer for &D {
    fn decompose(
        &self,
        mesh: &IndexedMesh,
        params: &DecompositionParams,
        log: &LogSink,
    ) -> Result<Vec<ConvexPart>, DecomposerError> {
        (**self).decompose(mesh, params, log)
    }
}

impl<D: ConvexDecomposer + ?Sized> ConvexDecomposer for Box<D> {
    fn decompose(
        &self,
        mesh: &IndexedMesh,
        params: &DecompositionParams,
        log: &LogSink,
    ) -> Result<Vec<ConvexPart>, DecomposerError> {
        (**self).decompose(mesh, params, log)
    }
}
