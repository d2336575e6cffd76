use crate::math::{Isometry, Real};
use crate::query::gjk::{self, GjkOptions, GjkResult};
use crate::shape::SupportMap;

/// Computes the closest points between two shapes.
///
/// If the shapes intersect, both points are equal and `hit` is set.
pub fn closest_points<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    gjk::closest_points(pos1, g1, pos2, g2, &GjkOptions::default())
}

/// Computes the minimum distance separating two shapes.
///
/// Returns `0.0` if the objects are touching or penetrating. The distance between rounded
/// shapes is measured between their closest points, which are offset along an approximately
/// normalized direction.
pub fn distance<G1, G2>(pos1: &Isometry<Real>, g1: &G1, pos2: &Isometry<Real>, g2: &G2) -> Real
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let result = closest_points(pos1, g1, pos2, g2);

    if result.hit {
        0.0
    } else {
        na::distance(&result.point1, &result.point2)
    }
}

/// Tests whether two shapes are intersecting.
pub fn intersection_test<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    gjk::intersection_test(pos1, g1, pos2, g2, &GjkOptions::default())
}
