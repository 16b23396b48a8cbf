//! Input generators for the overlap benchmarks.
//!
//! The generators are seeded deterministically, so every run measures
//! the same inputs.

use rand::{Rng, SeedableRng, rngs::StdRng};

use tri::geom::{Tri, tri};
use tri::math::{Point3, Vec3, pt3, vec3};

/// A pair of triangles to test against each other.
pub type Pair = (Tri<Point3>, Tri<Point3>);

/// Returns a deterministic random number generator.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x7217_7217)
}

fn point(rng: &mut impl Rng, scale: f32) -> Point3 {
    pt3(
        rng.gen_range(-scale..scale),
        rng.gen_range(-scale..scale),
        rng.gen_range(-scale..scale),
    )
}

/// Returns `n` pairs of triangles crossing each other on distinct planes.
///
/// The first triangle of each pair lies on the xy plane around the origin;
/// an edge of the second crosses the plane near the origin.
pub fn crossing(rng: &mut impl Rng, n: usize) -> Vec<Pair> {
    (0..n)
        .map(|_| {
            let a = tri(
                pt3(-1.0, -1.0, 0.0),
                pt3(1.0, -1.0, 0.0),
                pt3(0.0, 1.0, 0.0),
            );
            let (u, v) = (point(rng, 1.0).to_vec(), point(rng, 1.0).to_vec());
            let up = vec3(0.0, 0.0, rng.gen_range(0.5..1.0));
            // One edge crosses the xy plane close to the origin
            let o = Point3::ORIGIN;
            let b = tri(o + up + u * 0.1, o + -up, o + v);
            (a, b)
        })
        .collect()
}

/// Returns `n` pairs of triangles far apart from each other.
pub fn separated(rng: &mut impl Rng, n: usize) -> Vec<Pair> {
    (0..n)
        .map(|_| {
            let a = tri(point(rng, 1.0), point(rng, 1.0), point(rng, 1.0));
            let offset: Vec3 = vec3(0.0, 0.0, 10.0);
            let b = tri(point(rng, 1.0), point(rng, 1.0), point(rng, 1.0))
                .map(|p| p + offset);
            (a, b)
        })
        .collect()
}

/// Returns `n` pairs of coplanar triangles, some of them overlapping.
pub fn coplanar(rng: &mut impl Rng, n: usize) -> Vec<Pair> {
    let flat = |p: Point3| pt3(p.x(), p.y(), 0.0);
    (0..n)
        .map(|_| {
            let a = tri(point(rng, 1.0), point(rng, 1.0), point(rng, 1.0)).map(flat);
            let b = tri(point(rng, 1.0), point(rng, 1.0), point(rng, 1.0))
                .map(|p| flat(p) + vec3(1.0, 0.0, 0.0));
            (a, b)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use tri::geom::isect::tri_tri_overlap;

    use super::*;

    #[test]
    fn crossing_pairs_overlap() {
        let pairs = crossing(&mut rng(), 100);
        assert!(pairs.iter().all(|(a, b)| tri_tri_overlap(a, b)));
    }

    #[test]
    fn separated_pairs_do_not_overlap() {
        let pairs = separated(&mut rng(), 100);
        assert!(pairs.iter().all(|(a, b)| !tri_tri_overlap(a, b)));
    }

    #[test]
    fn coplanar_pairs_are_flat() {
        let pairs = coplanar(&mut rng(), 100);
        assert!(
            pairs
                .iter()
                .flat_map(|(a, b)| a.0.iter().chain(&b.0))
                .all(|p| p.z() == 0.0)
        );
    }
}
