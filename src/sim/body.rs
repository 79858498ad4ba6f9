//! Body state and the cosmetic color palette

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BODY_RADIUS, MIN_MASS};

/// Cosmetic body color, one of a fixed palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorTag {
    #[default]
    Red,
    Blue,
    Green,
    Yellow,
}

impl ColorTag {
    /// Palette in cycling order
    pub const PALETTE: [ColorTag; 4] = [
        ColorTag::Red,
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Yellow,
    ];

    /// Position of this color in the palette
    pub fn index(self) -> usize {
        match self {
            ColorTag::Red => 0,
            ColorTag::Blue => 1,
            ColorTag::Green => 2,
            ColorTag::Yellow => 3,
        }
    }

    /// Next color in the palette, wrapping around
    pub fn next(self) -> Self {
        Self::PALETTE[(self.index() + 1) % Self::PALETTE.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorTag::Red => "Red",
            ColorTag::Blue => "Blue",
            ColorTag::Green => "Green",
            ColorTag::Yellow => "Yellow",
        }
    }
}

/// A circular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    mass: f64,
    radius: f64,
    color: ColorTag,
}

impl Body {
    /// Create a body with the default radius. Mass is clamped to the floor.
    pub fn new(id: u32, pos: DVec2, vel: DVec2, mass: f64, color: ColorTag) -> Self {
        Self::with_radius(id, pos, vel, mass, BODY_RADIUS, color)
    }

    pub fn with_radius(
        id: u32,
        pos: DVec2,
        vel: DVec2,
        mass: f64,
        radius: f64,
        color: ColorTag,
    ) -> Self {
        Self {
            id,
            pos,
            vel,
            mass: mass.max(MIN_MASS),
            radius,
            color,
        }
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Radius is fixed at creation
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> ColorTag {
        self.color
    }

    /// Label drawn on top of the body
    pub fn mass_label(&self) -> String {
        format!("{:.1}", self.mass)
    }

    /// Kinetic energy (½mv²)
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }

    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_floor_at_creation() {
        let body = Body::new(1, DVec2::ZERO, DVec2::ZERO, -3.0, ColorTag::Red);
        assert_eq!(body.mass(), MIN_MASS);
        assert_eq!(body.radius(), BODY_RADIUS);
    }

    #[test]
    fn test_color_cycle_wraps() {
        let mut color = ColorTag::Red;
        for _ in 0..ColorTag::PALETTE.len() {
            color = color.next();
        }
        assert_eq!(color, ColorTag::Red);
        assert_eq!(ColorTag::Yellow.next(), ColorTag::Red);
        assert_eq!(ColorTag::Red.next(), ColorTag::Blue);
    }

    #[test]
    fn test_mass_label() {
        let body = Body::new(1, DVec2::ZERO, DVec2::ZERO, 1.34, ColorTag::Green);
        assert_eq!(body.mass_label(), "1.3");
    }
}
