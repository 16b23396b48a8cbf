//! Basic geometric primitives.

use crate::math::{
    Point2, Point3, Vec2, Vec3, Vector,
    vec::{Real, vec3},
};

pub mod isect;

/// Triangle, defined by three vertices.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Tri<V>(pub [V; 3]);

/// A line segment between two vertices.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Edge<T>(pub T, pub T);

/// Plane, defined by the four parameters of the plane equation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct Plane<V>(pub(crate) V);

/// Plane embedded in 3D space, splitting the space into two half-spaces.
///
/// The normal of the plane is *not* normalized; see [`Plane3::signed_dist`].
pub type Plane3<B = ()> = Plane<Vector<[f32; 4], Real<3, B>>>;

/// Polygon winding order.
///
/// The triangle *ABC* below has clockwise winding, while
/// the triangle *DEF* has counter-clockwise winding.
///
/// ```text
///     B            F
///    / \          / \
///   /   \        /   \
///  /     \      /     \
/// A-------C    D-------E
///    Cw           Ccw
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Winding {
    /// Clockwise winding.
    Cw,
    /// Counter-clockwise winding.
    #[default]
    Ccw,
}

/// Creates a `Tri` with the given vertices.
pub const fn tri<V>(a: V, b: V, c: V) -> Tri<V> {
    Tri([a, b, c])
}

impl<V> Tri<V> {
    /// Returns a triangle with `f` applied to each vertex of `self`.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::geom::tri;
    ///
    /// assert_eq!(tri(1, 2, 3).map(|v| v * 10), tri(10, 20, 30));
    /// ```
    #[inline]
    pub fn map<U>(self, f: impl FnMut(V) -> U) -> Tri<U> {
        Tri(self.0.map(f))
    }
}

impl<V: Copy> Tri<V> {
    /// Given a triangle ABC, returns the edges [AB, BC, CA].
    pub fn edges(&self) -> [Edge<V>; 3] {
        let [a, b, c] = self.0;
        [Edge(a, b), Edge(b, c), Edge(c, a)]
    }
}

impl<B> Tri<Point3<B>> {
    /// Given a triangle ABC, returns the vectors [AB, AC].
    pub fn tangents(&self) -> [Vec3<B>; 2] {
        let [a, b, c] = self.0;
        [b - a, c - a]
    }

    /// Returns the normal vector of `self`.
    ///
    /// The result is *not* normalized: its length is twice the area of the
    /// triangle. The normal of a degenerate triangle is the zero vector or
    /// close to it.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::geom::tri;
    /// use tritri_core::math::{pt3, vec3, Point3};
    ///
    /// let t = tri::<Point3>(
    ///     pt3(0.0, 0.0, 0.0),
    ///     pt3(2.0, 0.0, 0.0),
    ///     pt3(0.0, 2.0, 0.0),
    /// );
    /// assert_eq!(t.normal(), vec3(0.0, 0.0, 4.0));
    /// ```
    pub fn normal(&self) -> Vec3<B> {
        let [t, u] = self.tangents();
        t.cross(&u)
    }

    /// Returns the plane that `self` lies on.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::geom::{tri, Plane3};
    /// use tritri_core::math::{pt3, Point3};
    ///
    /// let t = tri::<Point3>(
    ///     pt3(0.0, 0.0, 2.0),
    ///     pt3(1.0, 0.0, 2.0),
    ///     pt3(0.0, 1.0, 2.0),
    /// );
    /// assert_eq!(t.plane(), Plane3::new(0.0, 0.0, 1.0, -2.0));
    /// ```
    pub fn plane(&self) -> Plane3<B> {
        Plane3::from_point_and_normal(self.0[0], self.normal())
    }

    /// Returns whether `self` is degenerate, that is, whether its vertices
    /// are collinear or coincident, within the relative tolerance `eps`.
    ///
    /// The test compares the length of the normal to the product of the
    /// lengths of the tangents, or in other words, checks whether the sine
    /// of the angle at vertex A is at most `eps`.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::geom::tri;
    /// use tritri_core::math::{pt3, Point3};
    ///
    /// let line = tri::<Point3>(
    ///     pt3(0.0, 0.0, 0.0),
    ///     pt3(1.0, 1.0, 1.0),
    ///     pt3(3.0, 3.0, 3.0),
    /// );
    /// assert!(line.is_degenerate(1e-5));
    ///
    /// let point = tri::<Point3>(pt3(1.0, 2.0, 3.0), pt3(1.0, 2.0, 3.0), pt3(1.0, 2.0, 3.0));
    /// assert!(point.is_degenerate(1e-5));
    /// ```
    pub fn is_degenerate(&self, eps: f32) -> bool {
        let [t, u] = self.tangents();
        let n = t.cross(&u);
        n.len_sqr() <= eps * eps * t.len_sqr() * u.len_sqr()
    }

    /// Projects `self` onto a coordinate plane by dropping the coordinate
    /// with index `axis` from each vertex.
    ///
    /// # Panics
    /// If `axis` is not 0, 1, or 2.
    pub fn drop_axis<C>(&self, axis: usize) -> Tri<Point2<C>> {
        Tri(self.0.map(|p| p.drop_axis(axis)))
    }
}

impl<B> Tri<Point2<B>> {
    /// Returns the signed area of `self`.
    ///
    /// The area is positive if `self` is wound counter-clockwise,
    /// negative if clockwise, and zero if `self` is degenerate.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::geom::tri;
    /// use tritri_core::math::{pt2, Point2};
    ///
    /// let t = tri::<Point2>(pt2(0.0, 0.0), pt2(4.0, 0.0), pt2(0.0, 2.0));
    /// assert_eq!(t.signed_area(), 4.0);
    ///
    /// let [a, b, c] = t.0;
    /// assert_eq!(tri(a, c, b).signed_area(), -4.0);
    /// ```
    pub fn signed_area(&self) -> f32 {
        let [a, b, c] = self.0;
        0.5 * (b - a).perp_dot(&(c - a))
    }

    /// Returns the area of `self`.
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Returns the winding order of `self`.
    pub fn winding(&self) -> Winding {
        if self.signed_area() < 0.0 {
            Winding::Cw
        } else {
            Winding::Ccw
        }
    }

    /// Returns whether `pt` lies inside `self` or on its boundary.
    ///
    /// Works for either winding. Boundary points are accepted within a
    /// tolerance of `eps` relative to the extent of the triangle.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::geom::tri;
    /// use tritri_core::math::{pt2, Point2};
    ///
    /// let t = tri::<Point2>(pt2(0.0, 0.0), pt2(0.0, 2.0), pt2(2.0, 0.0));
    ///
    /// assert!(t.contains(&pt2(0.5, 0.5), 1e-5));
    /// // On an edge
    /// assert!(t.contains(&pt2(1.0, 1.0), 1e-5));
    /// // At a vertex
    /// assert!(t.contains(&pt2(2.0, 0.0), 1e-5));
    /// // Outside
    /// assert!(!t.contains(&pt2(1.5, 1.5), 1e-5));
    /// ```
    pub fn contains(&self, pt: &Point2<B>, eps: f32) -> bool {
        let scale = self
            .0
            .iter()
            .chain([pt])
            .map(|p| p.max_abs())
            .fold(1.0, f32::max);
        let tol = eps * scale * scale;

        let [o0, o1, o2] = self.edges().map(|Edge(p, q)| orient(p, q, *pt));

        let any_pos = o0 > tol || o1 > tol || o2 > tol;
        let any_neg = o0 < -tol || o1 < -tol || o2 < -tol;
        !(any_pos && any_neg)
    }
}

/// Returns twice the signed area of the triangle *pqr*.
///
/// Positive if *r* is to the left of the directed line *pq*,
/// negative if to the right, and zero if the points are collinear.
#[inline]
pub(crate) fn orient<B>(p: Point2<B>, q: Point2<B>, r: Point2<B>) -> f32 {
    let pq: Vec2<B> = q - p;
    pq.perp_dot(&(r - p))
}

impl<B> Plane3<B> {
    /// The x = 0 coordinate plane.
    pub const YZ: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// The y = 0 coordinate plane.
    pub const XZ: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// The z = 0 coordinate plane.
    pub const XY: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Creates a new plane with the given coefficients.
    ///
    /// The returned plane satisfies the plane equation
    ///
    /// *ax* + *by* + *cz* + *d* = 0.
    ///
    /// Note the sign of the *d* coefficient.
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Plane(Vector::new([a, b, c, d]))
    }

    /// Creates a plane given a point on the plane and a normal.
    ///
    /// `n` is stored as is, without normalization.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::{geom::Plane3, math::{pt3, vec3, Point3}};
    ///
    /// let p: Point3 = pt3(1.0, 2.0, 3.0);
    /// let pl = Plane3::from_point_and_normal(p, vec3(0.0, 0.0, 2.0));
    /// assert_eq!(pl, Plane3::new(0.0, 0.0, 2.0, -6.0));
    /// ```
    pub fn from_point_and_normal(pt: Point3<B>, n: Vec3<B>) -> Self {
        // The plane equation n · p + d = 0 must hold for p = pt
        let d = -n.dot(&pt.to_vec());
        Self::new(n.x(), n.y(), n.z(), d)
    }

    /// Returns the normal vector of `self`, as given on construction.
    #[inline]
    pub fn normal(&self) -> Vec3<B> {
        let [a, b, c, _] = self.0.0;
        vec3(a, b, c)
    }

    /// Returns the signed distance of a point to `self`, scaled by the
    /// length of the normal.
    ///
    /// The result is positive if the point is on the side of `self` that
    /// the normal points to, negative if on the opposite side, and zero if
    /// the point lies on the plane. Divide by `self.normal().len()` to get
    /// the true Euclidean distance.
    ///
    /// # Examples
    /// ```
    /// use tritri_core::geom::Plane3;
    /// use tritri_core::math::{pt3, Point3};
    ///
    /// let pt: Point3 = pt3(1.0, 2.0, -3.0);
    ///
    /// assert_eq!(<Plane3>::XZ.signed_dist(pt), 2.0);
    /// assert_eq!(<Plane3>::XY.signed_dist(pt), -3.0);
    /// assert_eq!(<Plane3>::new(0.0, 0.0, 2.0, 0.0).signed_dist(pt), -6.0);
    /// ```
    #[inline]
    pub fn signed_dist(&self, pt: Point3<B>) -> f32 {
        let [a, b, c, d] = self.0.0;
        let [x, y, z] = pt.0;
        a * x + b * y + c * z + d
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{pt2, pt3};

    use super::*;

    fn ccw() -> Tri<Point2> {
        tri(pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(0.0, 1.0))
    }

    #[test]
    fn edges_wrap_around() {
        let t = ccw();
        let [a, b, c] = t.0;
        assert_eq!(t.edges(), [Edge(a, b), Edge(b, c), Edge(c, a)]);
    }

    #[test]
    fn winding_follows_signed_area() {
        let t = ccw();
        assert_eq!(t.winding(), Winding::Ccw);
        assert_eq!(t.area(), 0.5);

        let [a, b, c] = t.0;
        let cw = tri(a, c, b);
        assert_eq!(cw.winding(), Winding::Cw);
        assert_eq!(cw.area(), 0.5);
    }

    #[test]
    fn contains_either_winding() {
        let t = ccw();
        let [a, b, c] = t.0;
        let cw = tri(a, c, b);
        for t in [t, cw] {
            assert!(t.contains(&pt2(0.25, 0.25), 1e-5));
            assert!(t.contains(&pt2(0.5, 0.0), 1e-5));
            assert!(!t.contains(&pt2(-0.01, 0.5), 1e-5));
            assert!(!t.contains(&pt2(0.6, 0.6), 1e-5));
        }
    }

    #[test]
    fn degenerate_tri_contains_no_offline_point() {
        let t: Tri<Point2> = tri(pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(2.0, 0.0));
        assert_eq!(t.signed_area(), 0.0);
        assert!(!t.contains(&pt2(0.5, 1.0), 1e-5));
    }

    #[test]
    fn plane_signed_dist_sides() {
        let t: Tri<Point3> =
            tri(pt3(0.0, 1.0, 0.0), pt3(0.0, 1.0, 1.0), pt3(1.0, 1.0, 0.0));
        let p = t.plane();

        assert_eq!(p.normal(), vec3(0.0, 1.0, 0.0));
        assert_eq!(p.signed_dist(pt3(5.0, 3.0, -2.0)), 2.0);
        assert_eq!(p.signed_dist(pt3(5.0, 1.0, -2.0)), 0.0);
        assert_eq!(p.signed_dist(pt3(5.0, 0.0, -2.0)), -1.0);
    }

    #[test]
    fn degenerate_tris() {
        let ok: Tri<Point3> =
            tri(pt3(0.0, 0.0, 0.0), pt3(1.0, 0.0, 0.0), pt3(0.0, 1.0, 0.0));
        assert!(!ok.is_degenerate(1e-5));

        let coincident = tri(ok.0[0], ok.0[0], ok.0[1]);
        assert!(coincident.is_degenerate(1e-5));
        assert_eq!(coincident.normal(), vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn drop_axis_projects_every_vertex() {
        let t: Tri<Point3> =
            tri(pt3(1.0, 2.0, 3.0), pt3(4.0, 5.0, 6.0), pt3(7.0, 8.0, 9.0));
        let p: Tri<Point2> = t.drop_axis(1);
        assert_eq!(p, tri(pt2(1.0, 3.0), pt2(4.0, 6.0), pt2(7.0, 9.0)));
    }
}
