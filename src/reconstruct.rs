//! Conversion of the decomposition output into convex collision shapes.

use crate::decomposition::ConvexPart;
use crate::math::{Isometry, Point, Real};
use parry3d::shape::{ConvexPolyhedron, SharedShape};

/// A convex collision shape described by a point cloud.
///
/// The points are the corners of the triangles of a convex part, three per
/// triangle, in order. They are not deduplicated: the convex hull is only
/// computed when a parry shape is built from them.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexShape {
    points: Vec<Point<Real>>,
}

impl ConvexShape {
    /// A convex shape with the given points.
    pub fn new(points: Vec<Point<Real>>) -> Self {
        Self { points }
    }

    /// The points of this shape.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Consumes this shape, returning its points.
    pub fn into_points(self) -> Vec<Point<Real>> {
        self.points
    }

    /// The triangles of the part this shape was built from.
    pub fn triangles(&self) -> impl Iterator<Item = &[Point<Real>]> {
        self.points.chunks_exact(3)
    }

    /// Builds the convex polyhedron enclosing the points of this shape.
    ///
    /// Returns `None` if the points are all coplanar or otherwise degenerate.
    pub fn to_polyhedron(&self) -> Option<ConvexPolyhedron> {
        ConvexPolyhedron::from_convex_hull(&self.points)
    }

    /// Builds a shared convex shape enclosing the points of this shape.
    pub fn to_shared_shape(&self) -> Option<SharedShape> {
        SharedShape::convex_hull(&self.points)
    }
}

/// Expands the triangles of `part` into a list of `3 * part.num_triangles()` points.
pub fn flatten_part(part: &ConvexPart) -> Vec<Point<Real>> {
    part.flatten()
}

/// Converts every part into a convex shape, preserving their order.
pub fn reconstruct(parts: Vec<ConvexPart>) -> Vec<ConvexShape> {
    parts
        .iter()
        .map(|part| ConvexShape::new(flatten_part(part)))
        .collect()
}

/// Builds a compound shape from all the non-degenerate shapes of `shapes`.
///
/// Returns `None` if none of them is a valid convex polyhedron.
pub fn compound(shapes: &[ConvexShape]) -> Option<SharedShape> {
    let parts: Vec<_> = shapes
        .iter()
        .filter_map(|shape| shape.to_shared_shape())
        .map(|shape| (Isometry::identity(), shape))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(SharedShape::compound(parts))
    }
}
