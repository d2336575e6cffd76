//! The GJK algorithm for distance computation.

pub use self::cso_point::CSOPoint;
pub use self::gjk_result::GjkResult;
pub use self::voronoi_simplex3::{GjkStatus, GjkStep, VoronoiSimplex};
pub use gjk::*;

mod cso_point;
mod gjk;
mod gjk_result;
mod voronoi_simplex3;
