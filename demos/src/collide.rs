//! A moving triangle and a fixed wall, tested for collision every frame.

use clap::ValueEnum;

use tri::geom::{Tri, isect::tri_tri_overlap, tri};
use tri::math::{Mat4, Point3, Vec3, pt3};

/// The fixed triangle the object collides with.
pub const WALL: Tri<Point3> = tri(
    pt3(0.0, 0.9, 0.0),
    pt3(0.9, -0.9, 0.0),
    pt3(-0.9, -0.9, 0.0),
);

/// Initial placement of the moving triangle.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Layout {
    /// Overlapping the left edge of the wall.
    #[default]
    Colliding,
    /// Up and left of the wall, not touching it.
    Apart,
}

impl Layout {
    /// Returns the vertices of the moving triangle in model space.
    pub const fn object(self) -> Tri<Point3> {
        match self {
            Self::Colliding => tri(
                pt3(-0.5, 0.75, 0.0),
                pt3(-0.2, 0.25, 0.0),
                pt3(-0.8, 0.25, 0.0),
            ),
            Self::Apart => tri(
                pt3(-0.75, 1.0, 0.0),
                pt3(-0.5, 0.5, 0.0),
                pt3(-1.0, 0.5, 0.0),
            ),
        }
    }
}

/// The state of the collision demo.
#[derive(Clone, Debug)]
pub struct Scene {
    /// The moving triangle, in model space.
    pub object: Tri<Point3>,
    /// The fixed triangle, in world space.
    pub wall: Tri<Point3>,
    /// Model-to-world transform of the moving triangle.
    pub model: Mat4,
    /// Velocity of the moving triangle, in units per second.
    pub velocity: Vec3,
}

impl Scene {
    /// Returns a scene with the object placed according to `layout`,
    /// at rest.
    pub fn new(layout: Layout) -> Self {
        Self {
            object: layout.object(),
            wall: WALL,
            model: Mat4::identity(),
            velocity: Vec3::zero(),
        }
    }

    /// Sets the velocity of the moving triangle.
    #[must_use]
    pub fn with_velocity(self, velocity: Vec3) -> Self {
        Self { velocity, ..self }
    }

    /// Returns the moving triangle transformed to world space.
    pub fn object_world(&self) -> Tri<Point3> {
        self.object.map(|p| self.model.apply(&p))
    }

    /// Returns whether the moving triangle currently overlaps the wall.
    pub fn is_colliding(&self) -> bool {
        tri_tri_overlap(&self.object_world(), &self.wall)
    }

    /// Advances the scene by `dt` seconds and returns whether the moving
    /// triangle overlaps the wall in its new position.
    pub fn update(&mut self, dt: f32) -> bool {
        let step = Mat4::translate(self.velocity * dt);
        self.model = self.model.then(&step);
        self.is_colliding()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

/// Returns the window title reporting the collision state.
pub const fn title(colliding: bool) -> &'static str {
    if colliding { "Colliding!" } else { "Not Colliding" }
}

#[cfg(test)]
mod tests {
    use tri::assert_approx_eq;
    use tri::math::vec3;

    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn initial_layouts() {
        let scene = Scene::new(Layout::Colliding);
        assert!(scene.is_colliding());
        assert_eq!(title(scene.is_colliding()), "Colliding!");

        let scene = Scene::new(Layout::Apart);
        assert!(!scene.is_colliding());
        assert_eq!(title(scene.is_colliding()), "Not Colliding");
    }

    #[test]
    fn at_rest_nothing_changes() {
        let mut scene = Scene::default();
        for _ in 0..100 {
            assert!(scene.update(DT));
        }
        assert_eq!(scene.object_world(), scene.object);
    }

    #[test]
    fn moving_out_of_collision() {
        let mut scene =
            Scene::new(Layout::Colliding).with_velocity(vec3(1.0, 0.0, 0.0));

        let states: Vec<bool> = (0..120).map(|_| scene.update(DT)).collect();

        assert!(states[0]);
        assert!(!states[119]);
        assert_approx_eq!(scene.model.translation(), vec3(2.0, 0.0, 0.0), eps = 1e-4);
    }

    #[test]
    fn moving_into_collision_uses_transformed_object() {
        let mut scene =
            Scene::new(Layout::Apart).with_velocity(vec3(1.0, 0.0, 0.0));

        // Shifted half a unit right, the lower right vertex is inside the wall
        assert!(scene.update(0.5));
        let [_, b, _] = scene.object_world().0;
        assert_approx_eq!(b, pt3(0.0, 0.5, 0.0));

        // The model-space vertices are untouched
        assert_eq!(scene.object, Layout::Apart.object());
    }

    #[test]
    fn object_world_follows_model() {
        let mut scene = Scene::new(Layout::Colliding);
        scene.model = Mat4::translate(vec3(0.0, -1.0, 0.0));

        let [a, ..] = scene.object_world().0;
        assert_approx_eq!(a, pt3(-0.5, -0.25, 0.0));
    }
}
