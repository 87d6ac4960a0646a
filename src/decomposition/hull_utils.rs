//! Post-processing shared by the built-in backends.

use crate::decomposition::{ConvexPart, DecompositionParams};
use crate::logging::LogSink;
use crate::math::{Point, Real, Vector};
use crate::DecomposerError;
use parry3d::shape::Cuboid;
use parry3d::transformation::try_convex_hull;

/// Computes the convex hull of `points` as a convex part.
pub fn convex_hull_part(points: &[Point<Real>]) -> Result<ConvexPart, DecomposerError> {
    let (vertices, indices) = try_convex_hull(points)
        .map_err(|e| DecomposerError::NumericalFailure(e.to_string()))?;
    ConvexPart::new(vertices, indices)
}

/// Computes the axis-aligned box bounding `points`, as a convex part.
pub fn box_part(points: &[Point<Real>]) -> Result<ConvexPart, DecomposerError> {
    let Some((first, rest)) = points.split_first() else {
        return Err(DecomposerError::InvalidMesh(
            "cannot compute the bounding box of an empty part".to_string(),
        ));
    };
    let (mins, maxs) = rest
        .iter()
        .fold((*first, *first), |(mins, maxs), pt| (mins.inf(pt), maxs.sup(pt)));

    let center = na::center(&mins, &maxs);
    let half_extents: Vector<Real> = (maxs - mins) * 0.5;
    let (mut vertices, indices) = Cuboid::new(half_extents).to_trimesh();
    vertices.iter_mut().for_each(|pt| *pt += center.coords);

    ConvexPart::new(vertices, indices)
}

/// Selects up to `count` points of `points`, greedily maximizing their spread.
///
/// The first selected point is the farthest from the centroid; each following
/// one is the farthest from all the points selected so far.
pub fn farthest_point_subset(points: &[Point<Real>], count: usize) -> Vec<Point<Real>> {
    if points.len() <= count {
        return points.to_vec();
    }

    let centroid = parry3d::utils::center(points);
    let mut min_sq_dist: Vec<Real> = points
        .iter()
        .map(|pt| na::distance_squared(pt, &centroid))
        .collect();
    let mut result = Vec::with_capacity(count);

    while result.len() < count {
        let Some((best, _)) = min_sq_dist
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
        else {
            break;
        };
        let selected = points[best];
        result.push(selected);

        for (d, pt) in min_sq_dist.iter_mut().zip(points.iter()) {
            *d = d.min(na::distance_squared(pt, &selected));
        }
    }

    result
}

/// Applies the approximation mode and the vertex limit of `params` to a raw hull.
pub fn finish_part(
    part: ConvexPart,
    params: &DecompositionParams,
    log: &LogSink,
) -> Result<ConvexPart, DecomposerError> {
    match params.approximate_mode {
        "box" => box_part(part.vertices()),
        "ch" => {
            let limit = params.max_ch_vertex as usize;

            if params.decimate && limit >= 4 && part.vertices().len() > limit {
                log.debug(format!(
                    "Decimating a part from {} to {} vertices.",
                    part.vertices().len(),
                    limit
                ));
                convex_hull_part(&farthest_point_subset(part.vertices(), limit))
            } else {
                Ok(part)
            }
        }
        other => Err(DecomposerError::UnsupportedParameter(format!(
            "approximation mode \"{}\"",
            other
        ))),
    }
}
