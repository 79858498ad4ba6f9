//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one unit step)
//! - Stable iteration order (creation order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod integrator;
pub mod tick;
pub mod world;

pub use body::{Body, ColorTag};
pub use collision::{CollisionResult, Reconstruction, elastic_1d, resolve_all, resolve_pair};
pub use integrator::{Bounds, advance, bounce_axis};
pub use tick::{Command, TickInput, apply_command, tick};
pub use world::{Direction, SimulationWorld, SpawnConfig};
