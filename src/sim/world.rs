//! Simulation world: the body collection plus pending spawn parameters
//!
//! The world exclusively owns its bodies. Readers get a slice between
//! ticks; only [`SimulationWorld::step`] and the command methods mutate.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, ColorTag};
use super::collision::{Reconstruction, resolve_all};
use super::integrator::{Bounds, advance};
use crate::consts::{MASS_STEP, MIN_MASS};
use crate::settings::Settings;

/// Launch direction for newly spawned bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Stationary,
    Left,
    Right,
    /// Toward the top of the screen (negative y)
    Up,
    Down,
    /// Velocity set directly rather than from a direction key
    Custom,
}

impl Direction {
    /// Unit vector in screen coordinates (y grows downward)
    pub fn unit(self) -> DVec2 {
        match self {
            Direction::Left => DVec2::NEG_X,
            Direction::Right => DVec2::X,
            Direction::Up => DVec2::NEG_Y,
            Direction::Down => DVec2::Y,
            Direction::Stationary | Direction::Custom => DVec2::ZERO,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Stationary => "Stationary",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Custom => "Custom",
        }
    }
}

/// Parameters handed to the next spawned body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub velocity: DVec2,
    pub direction: Direction,
    pub mass: f64,
    pub color: ColorTag,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            velocity: DVec2::ZERO,
            direction: Direction::Stationary,
            mass: crate::consts::INITIAL_MASS,
            color: ColorTag::Red,
        }
    }
}

impl SpawnConfig {
    /// Add `delta` to the pending mass, never going below the mass floor
    pub fn adjust_mass(&mut self, delta: f64) {
        self.mass = (self.mass + delta).max(MIN_MASS);
    }
}

/// The simulation world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationWorld {
    /// Bodies in creation order
    bodies: Vec<Body>,
    /// Pending spawn parameters
    spawn: SpawnConfig,
    gravity_enabled: bool,
    /// Per-tick gravity acceleration (applied only when enabled)
    gravity: f64,
    bounds: Bounds,
    body_radius: f64,
    launch_speed: f64,
    reconstruction: Reconstruction,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next body ID
    next_id: u32,
}

impl Default for SimulationWorld {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl SimulationWorld {
    /// Create an empty world configured from `settings`
    pub fn new(settings: &Settings) -> Self {
        let spawn = SpawnConfig {
            mass: settings.initial_mass.max(MIN_MASS),
            ..SpawnConfig::default()
        };
        Self {
            bodies: Vec::new(),
            spawn,
            gravity_enabled: settings.gravity_enabled,
            gravity: settings.gravity,
            bounds: Bounds::new(settings.arena_width, settings.arena_height),
            body_radius: settings.body_radius,
            launch_speed: settings.launch_speed,
            reconstruction: settings.reconstruction,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Bodies in creation order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn spawn_config(&self) -> &SpawnConfig {
        &self.spawn
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    pub fn reconstruction(&self) -> Reconstruction {
        self.reconstruction
    }

    pub fn set_reconstruction(&mut self, mode: Reconstruction) {
        self.reconstruction = mode;
    }

    /// Append a body with explicit parameters. Returns its ID.
    pub fn spawn(&mut self, pos: DVec2, vel: DVec2, mass: f64, color: ColorTag) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.bodies
            .push(Body::with_radius(id, pos, vel, mass, self.body_radius, color));
        log::debug!("Spawned body {id} at ({:.1}, {:.1})", pos.x, pos.y);
        id
    }

    /// Spawn at `pos` using the pending spawn parameters
    pub fn spawn_pending(&mut self, pos: DVec2) -> u32 {
        let SpawnConfig {
            velocity,
            mass,
            color,
            ..
        } = self.spawn;
        self.spawn(pos, velocity, mass, color)
    }

    /// Spawn at the arena center using the pending spawn parameters
    pub fn spawn_center(&mut self) -> u32 {
        self.spawn_pending(self.bounds.center())
    }

    /// Remove every body
    pub fn clear_all(&mut self) {
        log::debug!("Cleared {} bodies", self.bodies.len());
        self.bodies.clear();
    }

    pub fn set_gravity(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
        log::debug!("Gravity {}", if enabled { "on" } else { "off" });
    }

    pub fn toggle_gravity(&mut self) {
        self.set_gravity(!self.gravity_enabled);
    }

    /// Set the raw pending velocity
    pub fn set_pending_velocity(&mut self, vx: f64, vy: f64) {
        self.spawn.velocity = DVec2::new(vx, vy);
        self.spawn.direction = Direction::Custom;
    }

    /// Point the pending velocity along `direction` at launch speed
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.spawn.velocity = direction.unit() * self.launch_speed;
        self.spawn.direction = direction;
    }

    /// Additive mass adjustment, floored at the minimum mass
    pub fn set_pending_mass(&mut self, delta: f64) {
        self.spawn.adjust_mass(delta);
    }

    pub fn increase_pending_mass(&mut self) {
        self.set_pending_mass(MASS_STEP);
    }

    pub fn decrease_pending_mass(&mut self) {
        self.set_pending_mass(-MASS_STEP);
    }

    pub fn cycle_pending_color(&mut self) {
        self.spawn.color = self.spawn.color.next();
    }

    /// Advance one tick.
    ///
    /// Integrates every body first, then resolves every pair against the
    /// post-integration positions. Returns the number of colliding pairs.
    pub fn step(&mut self) -> usize {
        self.time_ticks += 1;

        let gravity = self.gravity_enabled.then_some(self.gravity);
        for body in &mut self.bodies {
            advance(body, gravity, &self.bounds);
        }

        resolve_all(&mut self.bodies, self.reconstruction)
    }

    /// Total kinetic energy of all bodies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BODY_RADIUS, LAUNCH_SPEED};
    use proptest::prelude::*;

    fn still_world() -> SimulationWorld {
        let mut world = SimulationWorld::default();
        world.set_gravity(false);
        world
    }

    #[test]
    fn test_defaults() {
        let world = SimulationWorld::default();
        assert!(world.gravity_enabled());
        assert!(world.bodies().is_empty());
        assert_eq!(world.spawn_config(), &SpawnConfig::default());
        assert_eq!(world.spawn_config().direction.label(), "Stationary");
    }

    #[test]
    fn test_spawn_uses_pending_parameters() {
        let mut world = SimulationWorld::default();
        world.set_pending_direction(Direction::Left);
        world.increase_pending_mass();
        world.cycle_pending_color();

        let id = world.spawn_pending(DVec2::new(50.0, 60.0));
        let body = &world.bodies()[0];
        assert_eq!(body.id, id);
        assert_eq!(body.pos, DVec2::new(50.0, 60.0));
        assert_eq!(body.vel, DVec2::new(-LAUNCH_SPEED, 0.0));
        assert!((body.mass() - 1.1).abs() < 1e-12);
        assert_eq!(body.color(), ColorTag::Blue);
        assert_eq!(body.radius(), BODY_RADIUS);
    }

    #[test]
    fn test_direction_zeroes_orthogonal_component() {
        let mut world = SimulationWorld::default();
        world.set_pending_direction(Direction::Right);
        world.set_pending_direction(Direction::Up);
        assert_eq!(world.spawn_config().velocity, DVec2::new(0.0, -LAUNCH_SPEED));
        world.set_pending_direction(Direction::Down);
        assert_eq!(world.spawn_config().velocity, DVec2::new(0.0, LAUNCH_SPEED));
    }

    #[test]
    fn test_spawned_body_keeps_its_color() {
        let mut world = SimulationWorld::default();
        world.spawn_center();
        world.cycle_pending_color();
        assert_eq!(world.bodies()[0].color(), ColorTag::Red);
        assert_eq!(world.bodies()[0].pos, DVec2::new(400.0, 300.0));
    }

    #[test]
    fn test_ids_are_monotonic_across_clear() {
        let mut world = SimulationWorld::default();
        let first = world.spawn_center();
        world.clear_all();
        assert!(world.bodies().is_empty());
        let second = world.spawn_center();
        assert!(second > first);
    }

    #[test]
    fn test_gravity_scenario() {
        let mut world = SimulationWorld::default();
        world.spawn(DVec2::new(400.0, 300.0), DVec2::ZERO, 1.0, ColorTag::Red);

        for _ in 0..10 {
            world.step();
        }

        let body = &world.bodies()[0];
        assert_eq!(body.vel.y, 5.0);
        assert_eq!(body.pos.y, 327.5);
        assert_eq!(world.time_ticks, 10);
    }

    #[test]
    fn test_toggle_gravity() {
        let mut world = SimulationWorld::default();
        world.toggle_gravity();
        assert!(!world.gravity_enabled());
        world.spawn(DVec2::new(400.0, 300.0), DVec2::ZERO, 1.0, ColorTag::Red);
        world.step();
        assert_eq!(world.bodies()[0].vel, DVec2::ZERO);
        world.toggle_gravity();
        assert!(world.gravity_enabled());
    }

    #[test]
    fn test_collisions_see_post_integration_positions() {
        let mut world = still_world();
        // 45 apart now, 39 apart after A moves
        world.spawn(DVec2::new(100.0, 300.0), DVec2::new(6.0, 0.0), 1.0, ColorTag::Red);
        world.spawn(DVec2::new(145.0, 300.0), DVec2::ZERO, 1.0, ColorTag::Blue);

        assert_eq!(world.step(), 1);
        assert!(world.bodies()[1].vel.x > 5.9);
    }

    #[test]
    fn test_equal_mass_head_on_in_world() {
        let mut world = still_world();
        world.set_reconstruction(Reconstruction::PreserveTangent);
        world.spawn(DVec2::new(100.0, 300.0), DVec2::new(5.0, 0.0), 1.0, ColorTag::Red);
        world.spawn(DVec2::new(148.0, 300.0), DVec2::new(-5.0, 0.0), 1.0, ColorTag::Red);

        assert_eq!(world.step(), 1);
        assert!((world.bodies()[0].vel.x - -5.0).abs() < 1e-12);
        assert!((world.bodies()[1].vel.x - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_raw_pending_velocity() {
        let mut world = SimulationWorld::default();
        world.set_pending_velocity(3.0, -4.0);
        assert_eq!(world.spawn_config().direction, Direction::Custom);
        world.spawn_center();
        assert_eq!(world.bodies()[0].vel, DVec2::new(3.0, -4.0));
    }

    #[test]
    fn test_momentum_conserved_in_collision() {
        let mut world = still_world();
        world.set_reconstruction(Reconstruction::PreserveTangent);
        world.spawn(DVec2::new(300.0, 300.0), DVec2::new(4.0, 1.0), 1.0, ColorTag::Red);
        world.spawn(DVec2::new(330.0, 310.0), DVec2::new(-2.0, 0.0), 3.0, ColorTag::Blue);
        let total = |w: &SimulationWorld| -> DVec2 { w.bodies().iter().map(Body::momentum).sum() };
        let before = total(&world);

        assert_eq!(world.step(), 1);
        assert!((total(&world) - before).length() < 1e-9);
    }

    #[test]
    fn test_energy_conserved_without_gravity() {
        let mut world = still_world();
        world.set_reconstruction(Reconstruction::PreserveTangent);
        world.spawn(DVec2::new(200.0, 300.0), DVec2::new(4.0, 1.0), 1.0, ColorTag::Red);
        world.spawn(DVec2::new(260.0, 310.0), DVec2::new(-3.0, 0.5), 2.5, ColorTag::Blue);
        world.spawn(DVec2::new(600.0, 100.0), DVec2::new(-6.0, 2.0), 0.5, ColorTag::Green);
        let start = world.kinetic_energy();

        for _ in 0..600 {
            world.step();
        }

        assert!((world.kinetic_energy() - start).abs() < 1e-6 * start);
    }

    #[test]
    fn test_many_bodies_stay_finite() {
        let mut world = SimulationWorld::default();
        for i in 0..12 {
            world.set_pending_direction(match i % 4 {
                0 => Direction::Left,
                1 => Direction::Right,
                2 => Direction::Up,
                _ => Direction::Down,
            });
            world.spawn_pending(DVec2::new(60.0 + 55.0 * i as f64, 100.0 + 30.0 * i as f64));
        }
        for _ in 0..300 {
            world.step();
            for body in world.bodies() {
                assert!(body.pos.is_finite());
                assert!(body.vel.is_finite());
            }
        }
    }

    proptest! {
        #[test]
        fn prop_mass_never_below_floor(decrements in 0usize..50, increments in 0usize..5) {
            let mut world = SimulationWorld::default();
            for _ in 0..increments {
                world.increase_pending_mass();
            }
            for _ in 0..decrements {
                world.decrease_pending_mass();
                prop_assert!(world.spawn_config().mass >= MIN_MASS);
            }
        }

        #[test]
        fn prop_color_cycle_returns_home(start in 0usize..4) {
            let mut world = SimulationWorld::default();
            for _ in 0..start {
                world.cycle_pending_color();
            }
            let before = world.spawn_config().color;
            for _ in 0..ColorTag::PALETTE.len() {
                world.cycle_pending_color();
            }
            prop_assert_eq!(world.spawn_config().color, before);
        }
    }
}
