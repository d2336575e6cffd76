use crate::math::{Real, Vector};

/// The scalar triple product `(a × b) · c`.
///
/// This is six times the signed volume of the tetrahedron formed by the origin and the three
/// given points.
#[inline]
pub fn triple_product(a: &Vector<Real>, b: &Vector<Real>, c: &Vector<Real>) -> Real {
    a.cross(b).dot(c)
}
