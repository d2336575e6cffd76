/*!
gjk3d
=====

**gjk3d** computes the distance, the closest points, and the intersection
status of two 3-dimensional convex shapes using the Gilbert-Johnson-Keerthi
algorithm. Shapes only need to expose a support function (see
[`shape::SupportMap`]).

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Translation3, UnitVector3, Vector3};

    /// The relative precision of [`Real`].
    ///
    /// GJK scales it by the magnitude of the simplex vertices to decide whether the origin lies on
    /// the simplex.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The tolerance used by the GJK algorithm.
    ///
    /// This is the single-precision machine epsilon regardless of the width of [`Real`]: it
    /// bounds the squared length of a search direction and the squared distance under which two
    /// shapes are considered touching.
    pub const GJK_EPSILON: Real = 1.19209290e-07;

    /// The default maximum number of GJK iterations per query.
    pub const DEFAULT_MAX_ITERATIONS: usize = 20;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The translation type.
    pub use Translation3 as Translation;
}
