//! Intersection tests of geometric primitives.
//!
//! The main item of this module is the triangle-triangle overlap test,
//! [`tri_tri_overlap`], which is also available through the [`Intersect`]
//! trait as `Tri<Point3>: Intersect<Tri<Point3>>`.
//!
//! All tests are boundary-inclusive: primitives that merely touch at a point
//! or along an edge are considered to intersect.

use core::array;
use core::fmt::{self, Display, Formatter};

use tracing::trace;

use crate::geom::{Edge, Plane3, Tri, orient};
use crate::math::{Point2, Point3, Vec3, pt3};

/// Relative tolerance used by the intersection tests.
///
/// Signed distances, orientations, and interval bounds that are within
/// this tolerance of zero, relative to the extent of the inputs, are
/// treated as exactly zero.
pub const EPSILON: f32 = 1e-5;

/// Trait for testing whether two geometric primitives intersect.
pub trait Intersect<T: ?Sized> {
    /// The type describing the intersection, if any.
    type Result;

    /// Computes the intersection of `self` and `other`.
    fn intersect(&self, other: &T) -> Self::Result;
}

/// How two triangles were found to overlap.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TriIsect {
    /// The triangles lie on distinct planes and cross or touch each other
    /// along a segment or at a point of the planes' intersection line.
    Crossing,
    /// The triangles lie on the same plane and their areas overlap or touch.
    Coplanar,
}

/// Returns whether two triangles intersect or touch.
///
/// This is a pure total function of its inputs: it never panics or fails
/// on finite input, and the result does not depend on the order of the
/// arguments. The result for non-finite input is unspecified.
///
/// Degenerate triangles, whose vertices are collinear or coincident, are
/// considered not to intersect anything.
///
/// Works at any scale and distance from the origin. Both triangles are
/// first mapped into the cube [-1, 1]³ spanned by their common bounding
/// box, so all tolerances are relative to the combined extent of the two
/// triangles. Scaling both inputs by the same power of two never changes
/// the result.
///
/// # Examples
/// ```
/// use tritri_core::geom::{tri, isect::tri_tri_overlap};
/// use tritri_core::math::{pt3, Point3};
///
/// let a = tri::<Point3>(pt3(0.0, 0.0, 0.0), pt3(2.0, 0.0, 0.0), pt3(0.0, 2.0, 0.0));
/// // Pierces `a` from below
/// let b = tri(pt3(0.5, 0.5, -1.0), pt3(0.5, 0.5, 1.0), pt3(3.0, 3.0, 0.0));
/// // Floats above `a`
/// let c = tri(pt3(0.5, 0.5, 1.0), pt3(0.5, 1.0, 1.0), pt3(3.0, 3.0, 2.0));
///
/// assert!(tri_tri_overlap(&a, &b));
/// assert!(!tri_tri_overlap(&a, &c));
/// ```
pub fn tri_tri_overlap<B>(a: &Tri<Point3<B>>, b: &Tri<Point3<B>>) -> bool {
    a.intersect(b).is_some()
}

impl<B> Intersect<Self> for Tri<Point3<B>> {
    type Result = Option<TriIsect>;

    /// Tests whether `self` and `other` overlap.
    ///
    /// Proceeds in four stages:
    /// 1. If all vertices of either triangle are strictly on the same side
    ///    of the other's plane, that plane separates the triangles.
    /// 2. If the triangles are coplanar, both are projected onto the
    ///    coordinate plane most parallel to them, and tested for overlap
    ///    in 2D.
    /// 3. If the planes are parallel but distinct, there is no overlap.
    /// 4. Otherwise, each triangle crosses the intersection line of the
    ///    planes in a single interval; the triangles overlap iff the
    ///    intervals do.
    ///
    /// Returns `None` if there is no overlap, or the kind of overlap
    /// found otherwise.
    fn intersect(&self, other: &Self) -> Self::Result {
        let Some((a, b)) = normalize(self, other) else {
            trace!("all vertices coincide, no overlap");
            return None;
        };
        if a.is_degenerate(EPSILON) || b.is_degenerate(EPSILON) {
            trace!("degenerate triangle, no overlap");
            return None;
        }

        let (p1, p2) = (a.plane(), b.plane());

        let d1 = snapped_dists(&p2, &a);
        if separated(d1) {
            trace!(?d1, "first triangle on one side of second");
            return None;
        }
        let d2 = snapped_dists(&p1, &b);
        if separated(d2) {
            trace!(?d2, "second triangle on one side of first");
            return None;
        }

        let (n1, n2) = (p1.normal(), p2.normal());

        if d1 == [0.0; 3] || d2 == [0.0; 3] {
            let res = coplanar_overlap(&a, &b, &n1, &n2);
            trace!(res, "coplanar triangles");
            return res.then_some(TriIsect::Coplanar);
        }

        let dir = n1.cross(&n2);
        let len = dir.len();
        if len <= EPSILON * n1.len() * n2.len() {
            trace!("distinct parallel planes");
            return None;
        }
        let dir = dir * len.recip();

        let i1 = line_interval(&a, d1, &dir);
        let i2 = line_interval(&b, d2, &dir);
        let res = intervals_overlap(i1, i2);
        trace!(?i1, ?i2, res, "intervals on intersection line");
        res.then_some(TriIsect::Crossing)
    }
}

/// Maps `a` and `b` into the cube [-1, 1]³ by moving the center of their
/// common bounding box to the origin and dividing by its largest
/// half-extent.
///
/// Returns `None` if all six vertices coincide.
fn normalize<B>(
    a: &Tri<Point3<B>>,
    b: &Tri<Point3<B>>,
) -> Option<(Tri<Point3<B>>, Tri<Point3<B>>)> {
    let coords = |i: usize| a.0.iter().chain(&b.0).map(move |p| p[i]);
    let lo: [f32; 3] = array::from_fn(|i| coords(i).fold(f32::INFINITY, f32::min));
    let hi: [f32; 3] = array::from_fn(|i| coords(i).fold(f32::NEG_INFINITY, f32::max));

    // Halve before adding or subtracting, so that huge inputs don't overflow
    let mid: [f32; 3] = array::from_fn(|i| 0.5 * lo[i] + 0.5 * hi[i]);
    let half = (0..3).map(|i| 0.5 * hi[i] - 0.5 * lo[i]).fold(0.0, f32::max);
    if half.is_nan() || half == 0.0 {
        return None;
    }
    let to_unit = |p: Point3<B>| {
        let [x, y, z] = array::from_fn(|i| (p[i] - mid[i]) / half);
        pt3(x, y, z)
    };
    Some((a.map(to_unit), b.map(to_unit)))
}

/// Returns the signed distances of the vertices of `tri` to `plane`,
/// with values within tolerance of zero replaced by exactly zero.
fn snapped_dists<B>(plane: &Plane3<B>, tri: &Tri<Point3<B>>) -> [f32; 3] {
    // The normal is not normalized, so neither are the distances
    let tol = EPSILON * plane.normal().len();
    tri.0.map(|v| {
        let d = plane.signed_dist(v);
        if d.abs() <= tol { 0.0 } else { d }
    })
}

/// Returns whether all distances are nonzero and have the same sign.
fn separated(d: [f32; 3]) -> bool {
    d.iter().all(|&d| d > 0.0) || d.iter().all(|&d| d < 0.0)
}

/// Returns the interval of the line with direction `dir` covered by `tri`,
/// in terms of the scalar projection `dir · p` of points `p` on the line.
///
/// `d` holds the signed distances of the vertices to the other plane;
/// they must not be all zero or all of the same sign.
fn line_interval<B>(
    tri: &Tri<Point3<B>>,
    d: [f32; 3],
    dir: &Vec3<B>,
) -> (f32, f32) {
    let p = tri.0.map(|v| dir.dot(&v.to_vec()));
    let [d0, d1, d2] = d;

    // Find the vertex that is alone on its side of the plane. The other two
    // are on the opposite side or on the plane. The divisions below cannot
    // be by zero, as the lone vertex and each of the others never have
    // equal distances.
    let k = if d0 * d1 > 0.0 {
        2
    } else if d0 * d2 > 0.0 {
        1
    } else if d1 * d2 > 0.0 || d0 != 0.0 {
        0
    } else if d1 != 0.0 {
        1
    } else {
        2
    };
    let cross = |i: usize| p[k] + (p[i] - p[k]) * (d[k] / (d[k] - d[i]));
    let (s, t) = (cross((k + 1) % 3), cross((k + 2) % 3));
    if s <= t { (s, t) } else { (t, s) }
}

/// Returns whether two closed intervals overlap, within tolerance.
///
/// The intervals are expected to be on a unit-length line through the
/// unit cube, so the tolerance is absolute.
fn intervals_overlap((a0, a1): (f32, f32), (b0, b1): (f32, f32)) -> bool {
    a0.max(b0) <= a1.min(b1) + EPSILON
}

/// Tests two coplanar triangles for overlap.
fn coplanar_overlap<B>(
    a: &Tri<Point3<B>>,
    b: &Tri<Point3<B>>,
    n1: &Vec3<B>,
    n2: &Vec3<B>,
) -> bool {
    // Combine the normals so that the projection axis does not depend on
    // the order of the triangles.
    let n = if n1.dot(n2) < 0.0 { *n1 - *n2 } else { *n1 + *n2 };
    let axis = n.dominant_axis();

    let a: Tri<Point2<B>> = a.drop_axis(axis);
    let b: Tri<Point2<B>> = b.drop_axis(axis);

    a.edges()
        .iter()
        .any(|ea| b.edges().iter().any(|eb| ea.intersect(eb).is_some()))
        || b.contains(&a.0[0], EPSILON)
        || a.contains(&b.0[0], EPSILON)
}

impl<B> Intersect<Self> for Edge<Point2<B>> {
    type Result = Option<Point2<B>>;

    /// Computes the intersection point of two 2D line segments, if any.
    ///
    /// If the segments are collinear and overlap, returns the first point
    /// of `self` or `other` that is on both segments.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::assert_approx_eq;
    /// use tritri_core::geom::{Edge, isect::Intersect};
    /// use tritri_core::math::{pt2, Point2};
    ///
    /// // O1
    /// //   \
    /// //    \
    /// // E1---X----E2
    /// //       \
    /// //        O2
    /// let edge: Edge<Point2> = Edge(pt2(0.0, 1.0), pt2(4.0, 1.0));
    /// let other = Edge(pt2(0.0, 3.0), pt2(3.0, 0.0));
    ///
    /// assert_approx_eq!(edge.intersect(&other), Some(pt2(2.0, 1.0)));
    /// ```
    fn intersect(&self, other: &Self) -> Self::Result {
        let (a, b) = (self, other);

        let scale = [a.0, a.1, b.0, b.1]
            .iter()
            .map(|p| p.max_abs())
            .fold(1.0, f32::max);
        let tol = EPSILON * scale * scale;
        let side = |o: f32| {
            if o > tol {
                1
            } else if o < -tol {
                -1
            } else {
                0
            }
        };

        // Sides of the endpoints of each segment relative to the other
        let (sb0, sb1) = (side(orient(a.0, a.1, b.0)), side(orient(a.0, a.1, b.1)));
        let (sa0, sa1) = (side(orient(b.0, b.1, a.0)), side(orient(b.0, b.1, a.1)));

        if sb0 * sb1 > 0 || sa0 * sa1 > 0 {
            // One segment is entirely on one side of the other's line
            return None;
        }

        // Given the parametric representation of a and b:
        //
        //   p = a0 + t (a1 - a0)
        //   q = b0 + u (b1 - b0)
        //
        // solve p = q for t using Cramer's rule, giving
        //
        //        (b0 - a0)⟂ · (b1 - b0)
        //   t = ------------------------ .
        //        (a1 - a0)⟂ · (b1 - b0)
        let d = (a.1 - a.0).perp_dot(&(b.1 - b.0));

        if (sb0 == 0 && sb1 == 0) || (sa0 == 0 && sa1 == 0) || d == 0.0 {
            return collinear_overlap(a, b, tol);
        }

        let t = (b.0 - a.0).perp_dot(&(b.1 - b.0)) / d;
        Some(a.0 + (a.1 - a.0) * t.clamp(0.0, 1.0))
    }
}

/// Intersects two segments known to lie on the same line.
///
/// Collinear segments overlap iff their bounding boxes do.
fn collinear_overlap<B>(
    a: &Edge<Point2<B>>,
    b: &Edge<Point2<B>>,
    tol: f32,
) -> Option<Point2<B>> {
    let in_bounds = |p: &Point2<B>, e: &Edge<Point2<B>>| {
        (0..2).all(|i| {
            let (lo, hi) = (e.0[i].min(e.1[i]), e.0[i].max(e.1[i]));
            lo - tol <= p[i] && p[i] <= hi + tol
        })
    };
    [(a.0, b), (b.0, a), (b.1, a), (a.1, b)]
        .into_iter()
        .find(|(p, e)| in_bounds(p, e))
        .map(|(p, _)| p)
}

impl Display for TriIsect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Crossing => "crossing",
            Self::Coplanar => "coplanar",
        })
    }
}
