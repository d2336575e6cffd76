//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};

/// Trait implemented by convex shapes representable by a support mapping function.
///
/// A support function associates a direction to the point of the shape with the largest
/// projection along that direction. Each returned point comes with an identifier: the same point
/// must always be reported with the same identifier, and distinct points with distinct
/// identifiers. GJK relies on these identifiers to detect that a support point is selected twice.
pub trait SupportMap {
    /// Evaluates the support function of this shape and returns the identifier of the selected
    /// point along with the point itself.
    ///
    /// The direction does not need to be normalized.
    fn local_support_point_id(&self, dir: &Vector<Real>) -> (u32, Point<Real>);

    /// Evaluates the support function of this shape.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.local_support_point_id(dir).1
    }

    /// Evaluates the support function of this shape transformed by `transform`.
    ///
    /// Both the direction and the returned point are expressed in the space `transform`
    /// maps to.
    fn support_point_id(
        &self,
        transform: &Isometry<Real>,
        dir: &Vector<Real>,
    ) -> (u32, Point<Real>) {
        let local_dir = transform.inverse_transform_vector(dir);
        let (id, pt) = self.local_support_point_id(&local_dir);
        (id, transform * pt)
    }

    /// Evaluates the support function of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        self.support_point_id(transform, dir).1
    }

    /// The radius of the sphere swept along this shape.
    ///
    /// The support function describes the core shape only; the border radius is accounted for
    /// once the closest points of the cores are known.
    fn border_radius(&self) -> Real {
        0.0
    }
}

impl<S: ?Sized + SupportMap> SupportMap for &S {
    #[inline]
    fn local_support_point_id(&self, dir: &Vector<Real>) -> (u32, Point<Real>) {
        (**self).local_support_point_id(dir)
    }

    #[inline]
    fn border_radius(&self) -> Real {
        (**self).border_radius()
    }
}
