//! Shapes supported by gjk3d.

pub use self::ball::Ball;
pub use self::cuboid::Cuboid;
#[cfg(feature = "alloc")]
pub use self::point_cloud::{PointCloud, PointCloudError};
pub use self::round_shape::RoundShape;
#[doc(inline)]
pub use self::support_map::SupportMap;

/// A cuboid dilated by a sphere (so it has round corners).
pub type RoundCuboid = RoundShape<Cuboid>;

mod ball;
mod cuboid;
#[cfg(feature = "alloc")]
mod point_cloud;
mod round_shape;
mod support_map;
