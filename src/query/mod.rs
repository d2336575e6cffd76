//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`closest_points()`] to compute the closest points between two shapes.
//! * [`distance()`] to compute the distance between two shapes.
//! * [`intersection_test()`] to determine if two shapes intersect or not.
//!
//! All of them use the default [`GjkOptions`]. The [`gjk`] module exposes the algorithm itself,
//! one iteration at a time, for callers that drive it with their own support functions.

pub use self::distance::{closest_points, distance, intersection_test};
pub use self::gjk::GjkOptions;

mod distance;
pub mod gjk;
