//! Elastic Sandbox - a 2D elastic-collision playground
//!
//! Core modules:
//! - `sim`: Deterministic fixed-tick simulation (bodies, integration, collisions)
//! - `settings`: JSON-backed simulation configuration
//! - `input`: Platform-agnostic input events mapped to simulation commands
//! - `hud`: Text overlay snapshot of the scalar simulation state
//! - `render`: GPU-ready per-body instance data
//! - `app`: Fixed-timestep driver that feeds the simulation from a frame loop

pub mod app;
pub mod hud;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use app::Sandbox;
pub use settings::Settings;

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Ticks per second. Gravity and velocities are per tick, not per second.
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f64 = 1.0 / TICK_RATE as f64;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f64 = 800.0;
    pub const ARENA_HEIGHT: f64 = 600.0;

    /// Downward acceleration applied once per tick while gravity is on
    pub const GRAVITY: f64 = 0.5;

    /// Body defaults
    pub const BODY_RADIUS: f64 = 20.0;
    pub const INITIAL_MASS: f64 = 1.0;
    /// Mass floor, keeps `m1 + m2` strictly positive in the collision solver
    pub const MIN_MASS: f64 = 0.1;
    pub const MASS_STEP: f64 = 0.1;

    /// Launch speed for the four axis-aligned spawn directions
    pub const LAUNCH_SPEED: f64 = 10.0;

    /// Extra separation added when pushing overlapping bodies apart
    pub const SEPARATION_PAD: f64 = 1.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: DVec2) -> (f64, f64) {
    (pos.x.hypot(pos.y), pos.y.atan2(pos.x))
}
