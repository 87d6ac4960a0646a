use crate::math::{Point, Real};
use crate::DecomposerError;
use parry3d::shape::TriMesh;

/// A triangle mesh made of a vertex buffer and an index buffer.
///
/// Every index is guaranteed to be smaller than the number of vertices.
/// Meshes produced by [`weld_vertices`](crate::mesh::weld_vertices)
/// additionally contain no two approximately-equal vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndexedMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Creates a mesh, checking that every index points to an existing vertex.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, DecomposerError> {
        for (tri_id, idx) in indices.iter().enumerate() {
            if idx.iter().any(|i| *i as usize >= vertices.len()) {
                return Err(DecomposerError::InvalidMesh(format!(
                    "triangle {} references {:?} but the mesh only has {} vertices",
                    tri_id,
                    idx,
                    vertices.len()
                )));
            }
        }

        Ok(Self { vertices, indices })
    }

    /// Creates a mesh whose indices are already known to be valid.
    pub(crate) fn new_unchecked(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Self {
        debug_assert!(indices
            .iter()
            .flatten()
            .all(|i| (*i as usize) < vertices.len()));
        Self { vertices, indices }
    }

    /// Copies the vertex and index buffers of a parry triangle mesh.
    pub fn from_trimesh(trimesh: &TriMesh) -> Self {
        Self::new_unchecked(trimesh.vertices().to_vec(), trimesh.indices().to_vec())
    }

    /// The vertex buffer.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Mutable access to the index buffer.
    ///
    /// Only the order of the indices may be changed through this.
    #[inline]
    pub(crate) fn indices_mut(&mut self) -> &mut [[u32; 3]] {
        &mut self.indices
    }

    /// Consumes the mesh, returning its vertex and index buffers.
    pub fn into_parts(self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        (self.vertices, self.indices)
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Does this mesh have no triangle?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The three corners of the `i`-th triangle.
    #[inline]
    pub fn triangle(&self, i: usize) -> [Point<Real>; 3] {
        let idx = self.indices[i];
        [
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        ]
    }

    /// Iterates through the corners of every triangle, in order.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [Point<Real>; 3]> + '_ {
        (0..self.indices.len()).map(move |i| self.triangle(i))
    }

    /// Expands the index buffer into a triangle soup of `3 * self.num_triangles()` points.
    pub fn flatten(&self) -> Vec<Point<Real>> {
        self.triangles().flatten().collect()
    }

    /// Reverse the orientation of every triangle.
    pub fn reverse(&mut self) {
        self.indices.iter_mut().for_each(|idx| idx.swap(0, 1));
    }

    /// The signed volume enclosed by this mesh.
    ///
    /// See [`signed_volume`](crate::mesh::signed_volume).
    pub fn signed_volume(&self) -> Real {
        crate::mesh::signed_volume(self)
    }
}
