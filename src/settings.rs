//! Simulation settings
//!
//! Loaded from an optional JSON file; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Reconstruction;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f64,
    pub arena_height: f64,

    // === Physics ===
    /// Gravity acceleration per tick
    pub gravity: f64,
    /// Gravity state at startup
    pub gravity_enabled: bool,
    /// How velocities are rebuilt after a collision
    pub reconstruction: Reconstruction,

    // === Spawning ===
    pub body_radius: f64,
    /// Launch speed for direction keys
    pub launch_speed: f64,
    /// Pending mass at startup
    pub initial_mass: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            gravity: GRAVITY,
            gravity_enabled: true,
            reconstruction: Reconstruction::Legacy,

            body_radius: BODY_RADIUS,
            launch_speed: LAUNCH_SPEED,
            initial_mass: INITIAL_MASS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Whether the arena can hold at least one body
    pub fn is_valid(&self) -> bool {
        self.body_radius > 0.0
            && self.arena_width > 2.0 * self.body_radius
            && self.arena_height > 2.0 * self.body_radius
            && self.gravity.is_finite()
            && self.launch_speed.is_finite()
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Could not read {}: {err}, using default settings", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) if settings.is_valid() => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(_) => {
                log::warn!("Settings in {} are out of range, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("Invalid settings in {}: {err}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
