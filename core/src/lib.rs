//! Core functionality of the `tritri` project.
//!
//! Includes a small strongly typed math library with vectors, points,
//! and matrices; basic geometric primitives such as triangles, edges,
//! and planes; and a robust triangle-triangle overlap test.
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of `std`.
//!   If this feature is disabled, the crate only depends on `core`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! All features are disabled by default. Without any of them, a fallback
//! square root approximation is used.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate core;

pub mod geom;
pub mod math;

pub mod prelude {
    pub use crate::math::{
        ApproxEq, Mat4, Point2, Point3, Vec2, Vec3, pt2, pt3, vec2, vec3,
    };

    pub use crate::geom::{
        Edge, Plane3, Tri, Winding, isect::Intersect, isect::TriIsect,
        isect::tri_tri_overlap, tri,
    };
}
