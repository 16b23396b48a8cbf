//! Linear algebra and related utilities.
//!
//! Includes [vectors][self::vec], [points][point], a 4×4
//! [affine matrix][mat], and approximate equality comparisons.
//!
//! Vectors and points are tagged with a type that represents the *space*
//! they live in, so values from different spaces cannot be mixed without
//! an explicit conversion.

pub use {
    approx::ApproxEq,
    mat::Mat4,
    point::{Point, Point2, Point3, pt2, pt3},
    vec::{Real, Vec2, Vec3, Vector, vec2, vec3},
};

pub mod approx;
pub mod float;
pub mod mat;
pub mod point;
pub mod vec;
