use crate::math::{Point, Real};
use crate::mesh::IndexedMesh;
use num::Zero;
use parry3d::shape::Tetrahedron;

/// The outcome of [`correct_orientation`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// The mesh already had a non-negative volume and was left untouched.
    Kept,
    /// The mesh had a negative volume and all its triangles were reversed.
    Flipped,
}

/// Computes the signed volume enclosed by a triangle mesh.
///
/// This is the sum of the signed volumes of the tetrahedra joining the origin
/// to each triangle. It is negative if the triangles are mostly wound inward.
pub fn signed_volume(mesh: &IndexedMesh) -> Real {
    mesh.triangles()
        .map(|[a, b, c]| Tetrahedron::new(Point::origin(), a, b, c).signed_volume())
        .sum()
}

/// Makes the winding of `mesh` outward-facing.
///
/// If the signed volume of `mesh` is negative, the first two indices of every
/// triangle are swapped. Vertices are never moved. A mesh with a zero volume
/// is left untouched.
pub fn correct_orientation(mesh: &mut IndexedMesh) -> Orientation {
    let volume = signed_volume(mesh);

    if volume < Real::zero() {
        log::debug!("Mesh volume is {}, reversing its triangles.", volume);
        mesh.indices_mut().iter_mut().for_each(|idx| idx.swap(0, 1));
        Orientation::Flipped
    } else {
        Orientation::Kept
    }
}
