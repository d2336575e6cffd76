use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;
use core::ops::Sub;

/// A point of a Configuration-Space Obstacle.
///
/// A Configuration-Space Obstacle (CSO) is the result of the
/// Minkowski Difference of two solids. In other words, each of its
/// points correspond to the difference of two point, each belonging
/// to a different solid.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CSOPoint {
    /// The point on the CSO. This is equal to `self.orig1 - self.orig2`.
    pub point: Point<Real>,
    /// The original point on the first shape used to compute `self.point`.
    pub orig1: Point<Real>,
    /// The original point on the second shape used to compute `self.point`.
    pub orig2: Point<Real>,
    /// The identifier of `self.orig1` on the first shape.
    pub id1: u32,
    /// The identifier of `self.orig2` on the second shape.
    pub id2: u32,
}

impl CSOPoint {
    /// Initializes a CSO point with `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, id1: u32, orig2: Point<Real>, id2: u32) -> Self {
        let point = Point::from(orig1 - orig2);
        Self::new_with_point(point, orig1, id1, orig2, id2)
    }

    /// Initializes a CSO point with all information provided.
    ///
    /// It is assumed, but not checked, that `point == orig1 - orig2`.
    pub fn new_with_point(
        point: Point<Real>,
        orig1: Point<Real>,
        id1: u32,
        orig2: Point<Real>,
        id2: u32,
    ) -> Self {
        CSOPoint {
            point,
            orig1,
            orig2,
            id1,
            id2,
        }
    }

    /// Computes the support point of the CSO of `g1` and `g2` toward the direction `dir`.
    ///
    /// The first shape is sampled along `dir` and the second one along `-dir`, so that the
    /// resulting CSO point has the largest projection on `dir`.
    pub fn from_shapes<G1: ?Sized, G2: ?Sized>(
        pos1: &Isometry<Real>,
        g1: &G1,
        pos2: &Isometry<Real>,
        g2: &G2,
        dir: &Vector<Real>,
    ) -> Self
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        let (id1, sp1) = g1.support_point_id(pos1, dir);
        let (id2, sp2) = g2.support_point_id(pos2, &-*dir);

        CSOPoint::new(sp1, id1, sp2, id2)
    }

    /// Do `self` and `other` originate from the same pair of shape features?
    #[inline]
    pub fn same_features(&self, other: &CSOPoint) -> bool {
        self.id1 == other.id1 && self.id2 == other.id2
    }
}

impl Sub<CSOPoint> for CSOPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: CSOPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}
