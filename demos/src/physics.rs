//! A ball dropped onto a ground plane, simulated with `rapier3d`.

use rapier3d::prelude::*;
use tracing::{debug, info};

/// Parameters of the falling ball simulation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Vertical acceleration due to gravity; negative is down.
    pub gravity: f32,
    /// Simulation steps per second.
    pub hz: f32,
    /// Initial height of the ball's center.
    pub height: f32,
    /// Radius of the ball.
    pub radius: f32,
    /// Mass of the ball.
    pub mass: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: -10.0,
            hz: 60.0,
            height: 50.0,
            radius: 1.0,
            mass: 1.0,
        }
    }
}

/// Owns all the physics engine state of the simulation.
///
/// Everything is released when the `Sim` is dropped.
pub struct Sim {
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    queries: QueryPipeline,
    ball: RigidBodyHandle,
    steps: u32,
    resting: bool,
}

impl Sim {
    /// Creates a static ground plane at y = 0, facing up, and a dynamic
    /// ball above it.
    pub fn new(cfg: &Config) -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        colliders.insert(ColliderBuilder::halfspace(Vector::y_axis()));

        let ball = bodies.insert(
            RigidBodyBuilder::dynamic().translation(vector![0.0, cfg.height, 0.0]),
        );
        colliders.insert_with_parent(
            ColliderBuilder::ball(cfg.radius).mass(cfg.mass),
            ball,
            &mut bodies,
        );

        let params = IntegrationParameters {
            dt: cfg.hz.recip(),
            ..IntegrationParameters::default()
        };
        debug!(?cfg, "simulation created");

        Self {
            gravity: vector![0.0, cfg.gravity, 0.0],
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            queries: QueryPipeline::new(),
            ball,
            steps: 0,
            resting: false,
        }
    }

    /// Advances the simulation by one time step.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            Some(&mut self.queries),
            &(),
            &(),
        );
        self.steps += 1;

        let resting = self.bodies[self.ball].is_sleeping();
        if resting && !self.resting {
            info!(steps = self.steps, height = self.ball_height(), "ball at rest");
        }
        self.resting = resting;
    }

    /// Returns the height of the ball's center.
    pub fn ball_height(&self) -> f32 {
        self.bodies[self.ball].translation().y
    }

    /// Returns the vertical velocity of the ball.
    pub fn ball_velocity(&self) -> f32 {
        self.bodies[self.ball].linvel().y
    }

    /// Returns the number of steps taken so far.
    pub fn steps(&self) -> u32 {
        self.steps
    }
}
