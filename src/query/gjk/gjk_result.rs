use crate::math::{Point, Real, GJK_EPSILON};
use crate::utils::inv_sqrt;
use approx::{AbsDiffEq, RelativeEq};
use na::ComplexField;

/// The closest points between two shapes, as computed by GJK.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkResult {
    /// The point of the first shape closest to the second shape.
    pub point1: Point<Real>,
    /// The point of the second shape closest to the first shape.
    pub point2: Point<Real>,
    /// The squared distance between `point1` and `point2`. Zero if `hit` is `true`.
    pub dist_sq: Real,
    /// Do the shapes intersect or touch?
    pub hit: bool,
    /// The number of support points accepted by GJK.
    pub niter: usize,
}

impl GjkResult {
    /// The distance between the two shapes.
    #[inline]
    pub fn dist(&self) -> Real {
        ComplexField::sqrt(self.dist_sq)
    }

    /// Accounts for a sphere of radius `radius1` swept along the first shape and of radius
    /// `radius2` swept along the second shape.
    ///
    /// If the swept shapes are still separated, the closest points are moved toward each other
    /// by their shape's radius. Otherwise the swept shapes touch or overlap: both points are
    /// replaced by their midpoint and the result is marked as a hit.
    ///
    /// Note that the squared distance is reduced by the squared sum of the radii. It is a
    /// quantity that decreases with the actual distance, but not the squared distance between
    /// the new closest points.
    pub fn apply_radii(&mut self, radius1: Real, radius2: Real) {
        let radius = radius1 + radius2;
        let radius_sq = radius * radius;

        if self.dist_sq > GJK_EPSILON && self.dist_sq > radius_sq {
            self.dist_sq -= radius_sq;

            let mut normal = self.point2 - self.point1;
            let len_sq = normal.norm_squared();
            if len_sq != 0.0 {
                normal *= inv_sqrt(len_sq);
            }

            self.point1 += normal * radius1;
            self.point2 -= normal * radius2;
        } else {
            self.collapse_to_contact();
        }
    }

    /// Marks this result as a contact located at the midpoint of the closest points.
    pub(crate) fn collapse_to_contact(&mut self) {
        self.point1 = na::center(&self.point1, &self.point2);
        self.point2 = self.point1;
        self.dist_sq = 0.0;
        self.hit = true;
    }
}

impl AbsDiffEq for GjkResult {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.hit == other.hit
            && self.point1.abs_diff_eq(&other.point1, epsilon)
            && self.point2.abs_diff_eq(&other.point2, epsilon)
            && self.dist_sq.abs_diff_eq(&other.dist_sq, epsilon)
    }
}

impl RelativeEq for GjkResult {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.hit == other.hit
            && self.point1.relative_eq(&other.point1, epsilon, max_relative)
            && self.point2.relative_eq(&other.point2, epsilon, max_relative)
            && self.dist_sq.relative_eq(&other.dist_sq, epsilon, max_relative)
    }
}
