//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::SupportMap;

/// Shape of a box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

// NOTE: the identifier of a cuboid vertex has its i-th bit set to 1 iff. the i-th component of
//       the vertex is negative.
impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The vertex of this cuboid identified by `id`.
    pub fn vertex(&self, id: u32) -> Point<Real> {
        let mut res = self.half_extents;

        for i in 0..DIM {
            if id & (1 << i) != 0 {
                res[i] = -res[i]
            }
        }

        Point::from(res)
    }

    /// The eight vertices of this cuboid, ordered by identifier.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        core::array::from_fn(|id| self.vertex(id as u32))
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point_id(&self, dir: &Vector<Real>) -> (u32, Point<Real>) {
        let mut id = 0;

        for i in 0..DIM {
            if dir[i] < 0.0 {
                id |= 1 << i;
            }
        }

        (id, self.vertex(id))
    }
}
