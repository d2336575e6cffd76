//! The Gilbert-Johnson-Keerthi distance algorithm.
//!
//! GJK operates on the Minkowski difference (also called Configuration Space Obstacle or CSO)
//! of two convex shapes: the set of all the differences `a - b` between a point `a` of the first
//! shape and a point `b` of the second one. The shapes intersect iff. the origin belongs to the
//! CSO, and their distance is the distance between the origin and the CSO.
//!
//! The algorithm never builds the CSO. It iteratively samples it through the support functions
//! of both shapes and maintains a simplex (up to a tetrahedron) of CSO points that is reduced,
//! after each new sample, to its feature closest to the origin. See [`VoronoiSimplex`] for the
//! reduction step and [`closest_points`] for the complete query.

use crate::math::{Isometry, Real, Vector, DEFAULT_EPSILON, GJK_EPSILON};
use crate::query::gjk::{CSOPoint, GjkResult, GjkStatus, GjkStep, VoronoiSimplex};
use crate::shape::SupportMap;

// Relative error, in units of `DEFAULT_EPSILON`, accepted on the distance between the origin
// and a simplex passing through it.
const CONTACT_TOLERANCE: Real = 100.0;

/// Options controlling the termination of GJK.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkOptions {
    /// The maximum number of support points accepted before giving up.
    ///
    /// Zero selects [`DEFAULT_MAX_ITERATIONS`](crate::math::DEFAULT_MAX_ITERATIONS).
    pub max_iter: usize,
    /// The search stops once the search direction is shorter than this.
    pub eps: Real,
}

impl GjkOptions {
    /// Creates GJK options with the given maximum number of iterations.
    pub fn with_max_iter(max_iter: usize) -> Self {
        GjkOptions {
            max_iter,
            ..Default::default()
        }
    }
}

impl Default for GjkOptions {
    fn default() -> Self {
        GjkOptions {
            max_iter: crate::math::DEFAULT_MAX_ITERATIONS,
            eps: GJK_EPSILON,
        }
    }
}

/// Computes the closest points between two shapes using the GJK algorithm.
///
/// Shapes with a non-zero [`SupportMap::border_radius`] are handled by running GJK on their
/// cores and applying [`GjkResult::apply_radii`] afterward.
///
/// If the search ends with [`GjkStatus::Degenerate`] because the origin lies on the simplex (the
/// shapes touch, or overlap in a configuration symmetric enough for GJK to hit the origin before
/// enclosing it), the result is reported as a contact at the midpoint of the closest points.
/// Separated shapes are never reported as intersecting, however small their gap.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")]
/// use gjk3d::query::gjk::{self, GjkOptions};
/// # #[cfg(feature = "f64")]
/// # use gjk3d_f64::query::gjk::{self, GjkOptions};
/// # #[cfg(feature = "f32")]
/// use gjk3d::{math::{Isometry, Vector}, shape::Cuboid};
/// # #[cfg(feature = "f64")]
/// # use gjk3d_f64::{math::{Isometry, Vector}, shape::Cuboid};
///
/// let cube = Cuboid::new(Vector::new(0.5, 0.5, 0.5));
/// let pos1 = Isometry::identity();
/// let pos2 = Isometry::translation(3.0, 0.0, 0.0);
///
/// let result = gjk::closest_points(&pos1, &cube, &pos2, &cube, &GjkOptions::default());
/// assert!(!result.hit);
/// assert_eq!(result.dist_sq, 4.0);
/// ```
pub fn closest_points<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    options: &GjkOptions,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut simplex = VoronoiSimplex::with_options(options);
    closest_points_with_simplex(pos1, g1, pos2, g2, &mut simplex)
}

/// Same as [`closest_points`] but lets the caller provide (and later inspect) the simplex.
///
/// The simplex is reset before the query starts. Its maximum number of iterations and
/// tolerance are the ones it was created with.
pub fn closest_points_with_simplex<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    simplex: &mut VoronoiSimplex,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    simplex.reset();

    let mut dir = initial_direction(pos1, pos2);
    let mut support = CSOPoint::from_shapes(pos1, g1, pos2, g2, &dir);

    let status = loop {
        match simplex.add_point_and_reduce(support, &mut dir) {
            GjkStep::Continue => support = CSOPoint::from_shapes(pos1, g1, pos2, g2, &dir),
            GjkStep::Stop(status) => break status,
        }
    };

    log::debug!(
        "GJK stopped after {} iterations: {:?}.",
        simplex.niter(),
        status
    );

    let mut result = simplex.analyze();

    if status == GjkStatus::IterationLimitReached {
        log::debug!("GJK did not converge, the closest points are approximate.");
    }

    if status == GjkStatus::Degenerate && origin_on_simplex(simplex, &result) {
        result.collapse_to_contact();
    }

    let radius1 = g1.border_radius();
    let radius2 = g2.border_radius();

    if radius1 != 0.0 || radius2 != 0.0 {
        result.apply_radii(radius1, radius2);
    }

    result
}

/// Tests if two shapes intersect using the GJK algorithm.
///
/// Touching shapes are considered intersecting.
pub fn intersection_test<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    options: &GjkOptions,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    closest_points(pos1, g1, pos2, g2, options).hit
}

/// Is the distance between the origin and the simplex indistinguishable from zero?
///
/// The tolerance is relative to the magnitude of the simplex vertices: their rounding errors
/// are the only source of a non-zero distance when the origin lies on the simplex.
fn origin_on_simplex(simplex: &VoronoiSimplex, result: &GjkResult) -> bool {
    let scale_sq = simplex
        .points()
        .iter()
        .map(|pt| pt.point.coords.norm_squared())
        .fold(0.0, Real::max);
    let tolerance = CONTACT_TOLERANCE * DEFAULT_EPSILON;

    result.dist_sq <= tolerance * tolerance * scale_sq
}

/// The direction along which the first support point is sampled.
///
/// This points from the second shape toward the first one, so the first CSO point is already
/// close to the origin for separated shapes.
fn initial_direction(pos1: &Isometry<Real>, pos2: &Isometry<Real>) -> Vector<Real> {
    let dir = pos1.translation.vector - pos2.translation.vector;

    if dir.norm_squared() <= GJK_EPSILON * GJK_EPSILON {
        Vector::x()
    } else {
        dir
    }
}
