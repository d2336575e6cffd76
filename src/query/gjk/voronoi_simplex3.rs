use crate::math::{Point, Real, Vector, DEFAULT_MAX_ITERATIONS};
use crate::query::gjk::{CSOPoint, GjkOptions, GjkResult};
use crate::utils::triple_product;
use arrayvec::ArrayVec;

/// The reason why [`VoronoiSimplex::add_point_and_reduce`] stopped making progress.
///
/// None of these is an error: every one of them means "stop sampling and analyze the simplex".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GjkStatus {
    /// The maximum number of iterations has been reached.
    IterationLimitReached,
    /// The support point was already part of the simplex.
    Duplicate,
    /// The closest point of the reduced simplex is not closer to the origin than the previous one.
    Converged,
    /// The next search direction is too small to be meaningful: the origin lies on the simplex
    /// or the simplex is flat.
    Degenerate,
    /// The simplex is a tetrahedron enclosing the origin: the shapes intersect.
    Enclosed,
}

/// The outcome of one GJK iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GjkStep {
    /// The search direction has been updated and a new support point is expected.
    Continue,
    /// The simplex is terminal.
    Stop(GjkStatus),
}

impl GjkStep {
    /// Should the caller sample a new support point?
    #[inline]
    pub fn is_continue(self) -> bool {
        self == GjkStep::Continue
    }

    /// The reason why GJK stopped, if it did.
    #[inline]
    pub fn status(self) -> Option<GjkStatus> {
        match self {
            GjkStep::Continue => None,
            GjkStep::Stop(status) => Some(status),
        }
    }
}

/// A simplex of dimension up to 3 using Voronoï regions for computing point projections.
///
/// Each vertex is associated to an unnormalized barycentric coordinate. The vertices and their
/// coordinates are always reordered together.
#[derive(Clone, Debug, PartialEq)]
pub struct VoronoiSimplex {
    vertices: ArrayVec<CSOPoint, 4>,
    bcoords: [Real; 4],
    closest_dist_sq: Real,
    niter: usize,
    max_iter: usize,
    eps: Real,
    hit: bool,
}

impl Default for VoronoiSimplex {
    fn default() -> Self {
        Self::new()
    }
}

impl VoronoiSimplex {
    /// Creates a new empty simplex using the default GJK options.
    pub fn new() -> VoronoiSimplex {
        Self::with_options(&GjkOptions::default())
    }

    /// Creates a new empty simplex.
    ///
    /// A `max_iter` of zero selects [`DEFAULT_MAX_ITERATIONS`].
    pub fn with_options(options: &GjkOptions) -> VoronoiSimplex {
        VoronoiSimplex {
            vertices: ArrayVec::new(),
            bcoords: [0.0; 4],
            closest_dist_sq: Real::MAX,
            niter: 0,
            max_iter: if options.max_iter == 0 {
                DEFAULT_MAX_ITERATIONS
            } else {
                options.max_iter
            },
            eps: options.eps,
            hit: false,
        }
    }

    /// Empties this simplex so it can be reused for another query.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.bcoords = [0.0; 4];
        self.closest_dist_sq = Real::MAX;
        self.niter = 0;
        self.hit = false;
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Does this simplex have no vertex?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The dimension of the smallest subspace that can contain this simplex.
    ///
    /// # Panics
    ///
    /// Panics if the simplex is empty.
    #[inline]
    pub fn dimension(&self) -> usize {
        assert!(!self.is_empty(), "An empty simplex has no dimension.");
        self.len() - 1
    }

    /// The i-th point of this simplex.
    pub fn point(&self, i: usize) -> &CSOPoint {
        assert!(i < self.len(), "Index out of bounds.");
        &self.vertices[i]
    }

    /// The vertices of this simplex.
    #[inline]
    pub fn points(&self) -> &[CSOPoint] {
        &self.vertices
    }

    /// The unnormalized barycentric coordinate associated to the `i`-th point.
    pub fn bcoord(&self, i: usize) -> Real {
        assert!(i < self.len(), "Index out of bounds.");
        self.bcoords[i]
    }

    /// The smallest squared distance between the origin and the simplex found so far.
    #[inline]
    pub fn closest_dist_sq(&self) -> Real {
        self.closest_dist_sq
    }

    /// The number of support points accepted by this simplex.
    #[inline]
    pub fn niter(&self) -> usize {
        self.niter
    }

    /// The maximum number of support points this simplex accepts.
    #[inline]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Does this simplex enclose the origin?
    #[inline]
    pub fn hit(&self) -> bool {
        self.hit
    }

    /// Adds the support point `pt` to this simplex, reduces it to its feature closest to the
    /// origin, and computes the next search direction.
    ///
    /// If this returns [`GjkStep::Continue`], `dir` is set to the direction, pointing from the
    /// simplex toward the origin, along which the next support point should be sampled.
    /// Otherwise the simplex is terminal and should be analyzed. A duplicate support point leaves
    /// the simplex unchanged.
    pub fn add_point_and_reduce(&mut self, pt: CSOPoint, dir: &mut Vector<Real>) -> GjkStep {
        if self.hit {
            return GjkStep::Stop(GjkStatus::Enclosed);
        }

        if self.niter >= self.max_iter {
            return GjkStep::Stop(GjkStatus::IterationLimitReached);
        }

        if self.vertices.iter().any(|v| v.same_features(&pt)) {
            log::trace!("GJK support point ({}, {}) already selected.", pt.id1, pt.id2);
            return GjkStep::Stop(GjkStatus::Duplicate);
        }

        if self.vertices.is_empty() {
            self.closest_dist_sq = Real::MAX;
        }

        self.niter += 1;
        self.bcoords[self.vertices.len()] = 1.0;
        self.vertices.push(pt);

        match self.vertices.len() {
            1 => {}
            2 => self.reduce_segment(),
            3 => self.reduce_triangle(),
            4 => self.reduce_tetrahedron(),
            _ => unreachable!(),
        }

        log::trace!(
            "GJK iteration {}: closest feature {:?}.",
            self.niter,
            self.vertices
                .iter()
                .map(|v| (v.id1, v.id2))
                .collect::<ArrayVec<_, 4>>()
        );

        if self.vertices.len() == 4 {
            self.hit = true;
            return GjkStep::Stop(GjkStatus::Enclosed);
        }

        let Some(proj) = self.project_origin() else {
            return GjkStep::Stop(GjkStatus::Degenerate);
        };

        let dist_sq = proj.coords.norm_squared();
        if dist_sq >= self.closest_dist_sq {
            return GjkStep::Stop(GjkStatus::Converged);
        }
        self.closest_dist_sq = dist_sq;

        *dir = self.search_direction();

        if dir.norm_squared() < self.eps * self.eps {
            GjkStep::Stop(GjkStatus::Degenerate)
        } else {
            GjkStep::Continue
        }
    }

    /// Computes the closest points of both shapes from the final state of this simplex.
    ///
    /// # Panics
    ///
    /// Panics if the simplex is empty.
    pub fn analyze(&self) -> GjkResult {
        assert!(!self.is_empty(), "Cannot analyze an empty simplex.");

        let denom = 1.0 / self.bcoords[..self.len()].iter().sum::<Real>();
        let mut point1 = Point::origin();
        let mut point2 = Point::origin();

        for (vtx, bcoord) in self.vertices.iter().zip(self.bcoords.iter()) {
            let coord = denom * *bcoord;
            point1.coords += vtx.orig1.coords * coord;
            point2.coords += vtx.orig2.coords * coord;
        }

        if self.hit {
            GjkResult {
                point1,
                point2: point1,
                dist_sq: 0.0,
                hit: true,
                niter: self.niter,
            }
        } else {
            GjkResult {
                point1,
                point2,
                dist_sq: (point2 - point1).norm_squared(),
                hit: false,
                niter: self.niter,
            }
        }
    }

    /// Replaces the vertices of this simplex by the ones at the given indices, with the given
    /// barycentric coordinates.
    fn retain<const N: usize>(&mut self, ids: [usize; N], bcoords: [Real; N]) {
        let kept = ids.map(|i| self.vertices[i]);
        self.vertices.clear();
        self.vertices.extend(kept);
        self.bcoords[..N].copy_from_slice(&bcoords);
    }

    /// The point of the current simplex closest to the origin, or `None` if the barycentric
    /// coordinates cannot be normalized.
    fn project_origin(&self) -> Option<Point<Real>> {
        let sum: Real = self.bcoords[..self.len()].iter().sum();
        if sum <= 0.0 || !sum.is_finite() {
            log::debug!("GJK reached a simplex with degenerate barycentric coordinates.");
            return None;
        }

        let denom = 1.0 / sum;
        let mut res = Point::origin();

        for (vtx, bcoord) in self.vertices.iter().zip(self.bcoords.iter()) {
            res.coords += vtx.point.coords * (denom * *bcoord);
        }

        Some(res)
    }

    fn search_direction(&self) -> Vector<Real> {
        match self.vertices[..] {
            [a] => -a.point.coords,
            [a, b] => {
                // Component of the origin, seen from the segment, orthogonal to the segment.
                let ba = b - a;
                ba.cross(&-b.point.coords).cross(&ba)
            }
            [a, b, c] => {
                let n = (b - a).cross(&(c - a));
                if n.dot(&a.point.coords) <= 0.0 {
                    n
                } else {
                    -n
                }
            }
            _ => unreachable!(),
        }
    }

    fn reduce_segment(&mut self) {
        let a = self.vertices[0].point.coords;
        let b = self.vertices[1].point.coords;

        let u = b.dot(&(b - a));
        let v = a.dot(&(a - b));

        if v <= 0.0 {
            self.retain([0], [1.0]);
        } else if u <= 0.0 {
            self.retain([1], [1.0]);
        } else {
            self.retain([0, 1], [u, v]);
        }
    }

    fn reduce_triangle(&mut self) {
        let a = self.vertices[0].point.coords;
        let b = self.vertices[1].point.coords;
        let c = self.vertices[2].point.coords;

        let u_ab = b.dot(&(b - a));
        let v_ab = a.dot(&(a - b));
        let u_bc = c.dot(&(c - b));
        let v_bc = b.dot(&(b - c));
        let u_ca = a.dot(&(a - c));
        let v_ca = c.dot(&(c - a));

        // Vertex regions.
        if v_ab <= 0.0 && u_ca <= 0.0 {
            return self.retain([0], [1.0]);
        }
        if u_ab <= 0.0 && v_bc <= 0.0 {
            return self.retain([1], [1.0]);
        }
        if u_bc <= 0.0 && v_ca <= 0.0 {
            return self.retain([2], [1.0]);
        }

        // Edge regions.
        let [u_abc, v_abc, w_abc] = face_bcoords(&a, &b, &c);

        if u_ab > 0.0 && v_ab > 0.0 && w_abc <= 0.0 {
            return self.retain([0, 1], [u_ab, v_ab]);
        }
        if u_bc > 0.0 && v_bc > 0.0 && u_abc <= 0.0 {
            return self.retain([1, 2], [u_bc, v_bc]);
        }
        if u_ca > 0.0 && v_ca > 0.0 && v_abc <= 0.0 {
            return self.retain([2, 0], [u_ca, v_ca]);
        }

        self.retain([0, 1, 2], [u_abc, v_abc, w_abc]);
    }

    fn reduce_tetrahedron(&mut self) {
        let a = self.vertices[0].point.coords;
        let b = self.vertices[1].point.coords;
        let c = self.vertices[2].point.coords;
        let d = self.vertices[3].point.coords;

        let u_ab = b.dot(&(b - a));
        let v_ab = a.dot(&(a - b));
        let u_bc = c.dot(&(c - b));
        let v_bc = b.dot(&(b - c));
        let u_ca = a.dot(&(a - c));
        let v_ca = c.dot(&(c - a));
        let u_bd = d.dot(&(d - b));
        let v_bd = b.dot(&(b - d));
        let u_dc = c.dot(&(c - d));
        let v_dc = d.dot(&(d - c));
        let u_ad = d.dot(&(d - a));
        let v_ad = a.dot(&(a - d));

        // Vertex regions.
        if v_ab <= 0.0 && u_ca <= 0.0 && v_ad <= 0.0 {
            return self.retain([0], [1.0]);
        }
        if u_ab <= 0.0 && v_bc <= 0.0 && v_bd <= 0.0 {
            return self.retain([1], [1.0]);
        }
        if u_bc <= 0.0 && v_ca <= 0.0 && u_dc <= 0.0 {
            return self.retain([2], [1.0]);
        }
        if u_bd <= 0.0 && v_dc <= 0.0 && u_ad <= 0.0 {
            return self.retain([3], [1.0]);
        }

        // Edge regions.
        let [u_adb, v_adb, w_adb] = face_bcoords(&a, &d, &b);
        let [u_acd, v_acd, w_acd] = face_bcoords(&a, &c, &d);
        let [u_cbd, v_cbd, w_cbd] = face_bcoords(&c, &b, &d);
        let [u_abc, v_abc, w_abc] = face_bcoords(&a, &b, &c);

        if w_abc <= 0.0 && v_adb <= 0.0 && u_ab > 0.0 && v_ab > 0.0 {
            return self.retain([0, 1], [u_ab, v_ab]);
        }
        if u_abc <= 0.0 && w_cbd <= 0.0 && u_bc > 0.0 && v_bc > 0.0 {
            return self.retain([1, 2], [u_bc, v_bc]);
        }
        if v_abc <= 0.0 && w_acd <= 0.0 && u_ca > 0.0 && v_ca > 0.0 {
            return self.retain([2, 0], [u_ca, v_ca]);
        }
        if v_cbd <= 0.0 && u_acd <= 0.0 && u_dc > 0.0 && v_dc > 0.0 {
            return self.retain([3, 2], [u_dc, v_dc]);
        }
        if v_acd <= 0.0 && w_adb <= 0.0 && u_ad > 0.0 && v_ad > 0.0 {
            return self.retain([0, 3], [u_ad, v_ad]);
        }
        if u_cbd <= 0.0 && u_adb <= 0.0 && u_bd > 0.0 && v_bd > 0.0 {
            return self.retain([1, 3], [u_bd, v_bd]);
        }

        // Face regions. The signed volumes are normalized by the volume of the tetrahedron so
        // their sign does not depend on its orientation.
        let denom = triple_product(&(c - b), &(a - b), &(d - b));
        let volume = if denom == 0.0 { 1.0 } else { 1.0 / denom };
        let u_abcd = triple_product(&c, &d, &b) * volume;
        let v_abcd = triple_product(&c, &a, &d) * volume;
        let w_abcd = triple_product(&d, &a, &b) * volume;
        let x_abcd = triple_product(&b, &a, &c) * volume;

        if x_abcd <= 0.0 && u_abc > 0.0 && v_abc > 0.0 && w_abc > 0.0 {
            return self.retain([0, 1, 2], [u_abc, v_abc, w_abc]);
        }
        if u_abcd <= 0.0 && u_cbd > 0.0 && v_cbd > 0.0 && w_cbd > 0.0 {
            return self.retain([2, 1, 3], [u_cbd, v_cbd, w_cbd]);
        }
        if v_abcd <= 0.0 && u_acd > 0.0 && v_acd > 0.0 && w_acd > 0.0 {
            return self.retain([0, 2, 3], [u_acd, v_acd, w_acd]);
        }
        if w_abcd <= 0.0 && u_adb > 0.0 && v_adb > 0.0 && w_adb > 0.0 {
            return self.retain([0, 3, 1], [u_adb, v_adb, w_adb]);
        }

        // The origin is inside of the tetrahedron.
        self.bcoords = [u_abcd, v_abcd, w_abcd, x_abcd];
    }
}

/// The unnormalized barycentric coordinates of the projection of the origin on the plane of
/// the triangle `abc`.
///
/// Each coordinate is the area of the sub-triangle formed with the origin and the opposite
/// edge, scaled by the doubled area of `abc`.
fn face_bcoords(a: &Vector<Real>, b: &Vector<Real>, c: &Vector<Real>) -> [Real; 3] {
    let n = (b - a).cross(&(c - a));
    [b.cross(c).dot(&n), c.cross(a).dot(&n), a.cross(b).dot(&n)]
}
