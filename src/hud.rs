//! HUD text overlay
//!
//! A snapshot of the scalar simulation state, formatted for display.

use glam::DVec2;

use crate::sim::SimulationWorld;

/// Where a HUD line is anchored on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
}

/// One line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub anchor: Anchor,
    pub text: String,
}

/// A label drawn centered on a body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyLabel {
    pub center: DVec2,
    pub text: String,
}

/// HUD snapshot, taken between ticks
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub mass: String,
    pub direction: String,
    pub gravity: String,
    pub color: String,
    pub body_count: usize,
    pub labels: Vec<BodyLabel>,
}

impl Hud {
    pub fn from_world(world: &SimulationWorld) -> Self {
        let spawn = world.spawn_config();
        let gravity = if world.gravity_enabled() {
            "Gravity On"
        } else {
            "Gravity Off"
        };

        Self {
            mass: format!("Mass: {:.1}", spawn.mass),
            direction: format!("Direction: {}", spawn.direction.label()),
            gravity: format!("Gravity: {gravity}"),
            color: format!("Color: {}", spawn.color.name()),
            body_count: world.bodies().len(),
            labels: world
                .bodies()
                .iter()
                .map(|body| BodyLabel {
                    center: body.pos,
                    text: body.mass_label(),
                })
                .collect(),
        }
    }

    /// Text lines in draw order
    pub fn lines(&self) -> Vec<HudLine> {
        vec![
            HudLine {
                anchor: Anchor::TopLeft,
                text: self.mass.clone(),
            },
            HudLine {
                anchor: Anchor::TopRight,
                text: self.direction.clone(),
            },
            HudLine {
                anchor: Anchor::TopCenter,
                text: self.gravity.clone(),
            },
            HudLine {
                anchor: Anchor::BottomLeft,
                text: self.color.clone(),
            },
        ]
    }
}
