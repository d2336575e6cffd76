//! Various unsorted geometrical and numerical operators.

pub use self::inv_sqrt::inv_sqrt;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::triple_product::triple_product;

mod inv_sqrt;
mod point_cloud_support_point;
mod triple_product;
