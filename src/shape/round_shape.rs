//! Rounded shapes are shapes with smoothed/rounded borders.
//!
//! A rounded shape is the Minkowski sum of an inner shape and a ball of radius
//! `border_radius`. GJK only ever samples the inner shape: the border radius is accounted for
//! by [`GjkResult::apply_radii`](crate::query::gjk::GjkResult::apply_radii).

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A shape with rounded borders.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct RoundShape<S> {
    /// The shape being rounded.
    pub inner_shape: S,
    /// The radius of the rounded border.
    pub border_radius: Real,
}

impl<S> RoundShape<S> {
    /// Sweeps a sphere of radius `border_radius` along `inner_shape`.
    pub fn new(inner_shape: S, border_radius: Real) -> Self {
        Self {
            inner_shape,
            border_radius,
        }
    }
}

impl<S: SupportMap> SupportMap for RoundShape<S> {
    #[inline]
    fn local_support_point_id(&self, dir: &Vector<Real>) -> (u32, Point<Real>) {
        self.inner_shape.local_support_point_id(dir)
    }

    /// The border radius of this shape, added to the one of the inner shape.
    #[inline]
    fn border_radius(&self) -> Real {
        self.inner_shape.border_radius() + self.border_radius
    }
}
