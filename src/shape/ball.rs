//! Support mapping based Ball shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A Ball shape, i.e., a single point swept by a sphere of radius `radius`.
///
/// The support function of a ball is the one of its center: the radius is applied to the
/// closest points once GJK converged on the centers.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball from its radius and centered at the origin.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point_id(&self, _: &Vector<Real>) -> (u32, Point<Real>) {
        (0, Point::origin())
    }

    #[inline]
    fn border_radius(&self) -> Real {
        self.radius
    }
}
