use proptest::prelude::*;

use tritri_core::prelude::*;

const WALL: Tri<Point3> = tri(
    pt3(0.0, 0.9, 0.0),
    pt3(0.9, -0.9, 0.0),
    pt3(-0.9, -0.9, 0.0),
);

fn overlap(a: &Tri<Point3>, b: &Tri<Point3>) -> bool {
    let res = tri_tri_overlap(a, b);
    assert_eq!(res, tri_tri_overlap(b, a), "asymmetric: {a:?} vs {b:?}");
    res
}

#[test]
fn initially_colliding_layout() {
    let obj = tri(
        pt3(-0.5, 0.75, 0.0),
        pt3(-0.2, 0.25, 0.0),
        pt3(-0.8, 0.25, 0.0),
    );
    assert!(overlap(&obj, &WALL));
    assert_eq!(obj.intersect(&WALL), Some(TriIsect::Coplanar));
}

#[test]
fn initially_apart_layout() {
    let obj = tri(
        pt3(-0.75, 1.0, 0.0),
        pt3(-0.5, 0.5, 0.0),
        pt3(-1.0, 0.5, 0.0),
    );
    assert!(!overlap(&obj, &WALL));
}

#[test]
fn parallel_planes_do_not_overlap() {
    let lower = WALL;
    let upper = WALL.map(|p| p + vec3(0.0, 0.0, 1.0));
    assert!(!overlap(&lower, &upper));
}

#[test]
fn identical_triangles_overlap() {
    assert!(overlap(&WALL, &WALL));
}

#[test]
fn single_shared_vertex_overlaps() {
    let [top, ..] = WALL.0;
    let other = tri(top, pt3(0.5, 2.0, 1.0), pt3(-0.5, 2.0, -1.0));
    assert!(overlap(&WALL, &other));

    let coplanar = tri(top, pt3(1.0, 2.0, 0.0), pt3(-1.0, 2.0, 0.0));
    assert!(overlap(&WALL, &coplanar));
}

#[test]
fn piercing_triangle_overlaps() {
    let spike = tri(
        pt3(0.0, 0.0, -1.0),
        pt3(0.0, 0.0, 1.0),
        pt3(0.0, 3.0, 0.0),
    );
    assert_eq!(WALL.intersect(&spike), Some(TriIsect::Crossing));
    assert!(overlap(&WALL, &spike));
}

#[test]
fn skew_triangles_missing_each_other() {
    // Crosses the plane of the wall only to the right of it
    let other = tri(
        pt3(2.0, 0.0, -1.0),
        pt3(2.0, 0.0, 1.0),
        pt3(3.0, 1.0, 0.0),
    );
    assert!(!overlap(&WALL, &other));
}

#[test]
fn degenerate_inputs_do_not_overlap() {
    let sliver = tri(
        pt3(-1.0, 0.0, 0.0),
        pt3(0.0, 0.0, 0.0),
        pt3(1.0, 0.0, 0.0),
    );
    assert!(!overlap(&WALL, &sliver));
}

#[test]
fn crossing_at_any_scale() {
    for s in [1e-12, 1e-6, 1e-3, 1.0, 1e3, 1e6, 1e12] {
        let a = tri(pt3(0.0, 0.0, 0.0), pt3(s, 0.0, 0.0), pt3(0.0, s, 0.0));
        let b = tri(
            pt3(0.25 * s, 0.25 * s, -s),
            pt3(0.25 * s, 0.25 * s, s),
            pt3(0.25 * s, -2.0 * s, 0.0),
        );
        assert!(overlap(&a, &b), "scale {s}");
        assert_eq!(a.intersect(&b), Some(TriIsect::Crossing), "scale {s}");
    }
}

#[test]
fn parallel_planes_at_any_scale() {
    for s in [1e-12, 1e-6, 1e-3, 1.0, 1e3, 1e6, 1e12] {
        let lower = WALL.map(|p| scaled(p, s));
        let upper = lower.map(|p| p + vec3(0.0, 0.0, s));

        assert!(!overlap(&lower, &upper), "scale {s}");
        assert!(overlap(&lower, &lower), "scale {s}");
    }
}

//
// Properties
//

fn scaled(p: Point3, k: f32) -> Point3 {
    pt3(p.x() * k, p.y() * k, p.z() * k)
}

fn point() -> impl Strategy<Value = Point3> {
    prop::array::uniform3(-10.0f32..10.0).prop_map(Point3::new)
}

fn triangle() -> impl Strategy<Value = Tri<Point3>> {
    (point(), point(), point())
        .prop_map(|(a, b, c)| tri(a, b, c))
        .prop_filter("degenerate", |t| !t.is_degenerate(0.05))
}

fn unit_normal(t: &Tri<Point3>) -> Vec3 {
    let n = t.normal();
    n * (1.0 / n.len())
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in triangle(), b in triangle()) {
        prop_assert_eq!(tri_tri_overlap(&a, &b), tri_tri_overlap(&b, &a));
    }

    #[test]
    fn scale_is_irrelevant(a in triangle(), b in triangle(), e in -10i32..=20) {
        // Scaling by a power of two is exact, so the result must not change
        let k = 2.0f32.powi(e);
        let (ka, kb) = (a.map(|p| scaled(p, k)), b.map(|p| scaled(p, k)));

        prop_assert_eq!(tri_tri_overlap(&ka, &kb), tri_tri_overlap(&a, &b));
    }

    #[test]
    fn triangle_overlaps_itself(t in triangle()) {
        prop_assert!(tri_tri_overlap(&t, &t));
    }

    #[test]
    fn vertex_order_is_irrelevant(a in triangle(), b in triangle()) {
        let expected = tri_tri_overlap(&a, &b);
        let [p, q, r] = a.0;

        prop_assert_eq!(tri_tri_overlap(&tri(q, r, p), &b), expected);
        prop_assert_eq!(tri_tri_overlap(&tri(r, q, p), &b), expected);
    }

    #[test]
    fn separated_along_normal(a in triangle(), b in triangle()) {
        // Translate b to lie entirely above the plane of a
        let n = unit_normal(&a);
        let base = a.0[0];
        let lowest = b.0
            .iter()
            .map(|&p| n.dot(&(p - base)))
            .fold(f32::INFINITY, f32::min);
        let b = b.map(|p| p + n * (0.5 - lowest));

        prop_assert!(!tri_tri_overlap(&a, &b));
        prop_assert!(!tri_tri_overlap(&b, &a));
    }

    #[test]
    fn touching_at_interior_point(
        a in triangle(),
        u in 0.1f32..0.8,
        v in 0.1f32..0.8,
        q in point(),
        r in point(),
    ) {
        prop_assume!(u + v <= 0.9);
        let [p0, p1, p2] = a.0;
        let touch = p0 + (p1 - p0) * u + (p2 - p0) * v;

        // Both other vertices one unit above the plane of a
        let n = unit_normal(&a);
        let up = |p: Point3| p + n * (1.0 - n.dot(&(p - p0)));
        let b = tri(touch, up(q), up(r));
        prop_assume!(!b.is_degenerate(0.05));

        prop_assert!(tri_tri_overlap(&a, &b));
        prop_assert!(tri_tri_overlap(&b, &a));
    }
}
