use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Error indicating that a point cloud cannot be used as a convex shape.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointCloudError {
    /// A point cloud must contain at least one point.
    #[error("a point cloud must contain at least one point.")]
    Empty,
    /// One of the points has a NaN or infinite coordinate.
    #[error("the point {0} has a non-finite coordinate.")]
    NonFinitePoint(usize),
    /// Point identifiers are stored as `u32`.
    #[error("a point cloud cannot contain more than u32::MAX points.")]
    TooManyPoints,
}

/// The convex hull of a set of points, described by its points only.
///
/// Points that are not vertices of the convex hull are allowed: they are simply never selected
/// by the support function. The identifier of a support point is its index in the cloud.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct PointCloud {
    points: Vec<Point<Real>>,
}

impl PointCloud {
    /// Creates the convex hull of the given points.
    pub fn new(points: Vec<Point<Real>>) -> Result<Self, PointCloudError> {
        if points.is_empty() {
            return Err(PointCloudError::Empty);
        }

        if u32::try_from(points.len()).is_err() {
            return Err(PointCloudError::TooManyPoints);
        }

        if let Some(i) = points
            .iter()
            .position(|pt| pt.iter().any(|x| !x.is_finite()))
        {
            return Err(PointCloudError::NonFinitePoint(i));
        }

        Ok(PointCloud { points })
    }

    /// The points of this cloud.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points[..]
    }
}

impl SupportMap for PointCloud {
    #[inline]
    fn local_support_point_id(&self, dir: &Vector<Real>) -> (u32, Point<Real>) {
        let id = utils::point_cloud_support_point_id(dir, &self.points);
        (id as u32, self.points[id])
    }
}
