use crate::math::{Point, Real};
use crate::mesh::IndexedMesh;
use crate::{DecomposerError, DecompositionError};

/// Tolerance under which two vertex coordinates are considered equal.
///
/// Coordinates with a magnitude greater than 1 use a proportionally larger
/// tolerance.
pub const WELD_EPSILON: Real = 1.0e-5;

/// Are `a` and `b` equal up to [`WELD_EPSILON`], component-wise?
#[inline]
pub fn approx_eq(a: &Point<Real>, b: &Point<Real>) -> bool {
    relative_eq!(*a, *b, epsilon = WELD_EPSILON, max_relative = WELD_EPSILON)
}

/// Merges the approximately-equal vertices of a triangle soup into an indexed mesh.
///
/// Every three consecutive points of `soup` form one triangle. Each point is
/// mapped to the first previously-seen vertex it is approximately equal to
/// (see [`approx_eq`]), or appended as a new vertex otherwise. The output has
/// exactly `soup.len() / 3` triangles, in the input order; degenerate
/// triangles are kept.
///
/// An empty soup gives an empty mesh. A soup whose length is not a multiple
/// of 3 is rejected.
///
/// Vertices are compared against every previously-kept vertex so this is
/// quadratic in the number of distinct vertices.
pub fn weld_vertices(soup: &[Point<Real>]) -> Result<IndexedMesh, DecompositionError> {
    if soup.len() % 3 != 0 {
        return Err(DecompositionError::EmptyInput { len: soup.len() });
    }

    let mut vertices: Vec<Point<Real>> = Vec::new();
    let mut indices = Vec::with_capacity(soup.len() / 3);

    let mut resolve_vertex_id = |pt: &Point<Real>| -> Result<u32, DecompositionError> {
        match vertices.iter().position(|v| approx_eq(v, pt)) {
            Some(id) => vertex_id(id),
            None => {
                let id = vertex_id(vertices.len())?;
                vertices.push(*pt);
                Ok(id)
            }
        }
    };

    for tri in soup.chunks_exact(3) {
        let va = resolve_vertex_id(&tri[0])?;
        let vb = resolve_vertex_id(&tri[1])?;
        let vc = resolve_vertex_id(&tri[2])?;
        indices.push([va, vb, vc]);
    }

    log::trace!("Welded {} points into {} vertices.", soup.len(), vertices.len());

    Ok(IndexedMesh::new_unchecked(vertices, indices))
}

fn vertex_id(id: usize) -> Result<u32, DecompositionError> {
    u32::try_from(id).map_err(|_| {
        DecomposerError::InvalidMesh(format!(
            "vertex {} cannot be addressed by a 32-bit index",
            id
        ))
        .into()
    })
}
