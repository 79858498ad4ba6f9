//! Unit-step Euler integration and wall bounces
//!
//! One tick is one step: velocities are in pixels per tick and gravity is
//! pixels per tick². Nothing here is scaled by wall-clock time.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Axis-aligned arena, spanning `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Arena center, truncated to whole pixels
    pub fn center(&self) -> DVec2 {
        DVec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }
}

/// Advance a body by one tick.
///
/// Applies gravity (if any) to the vertical velocity, moves the body by its
/// velocity, then bounces it off the arena walls, x axis first.
pub fn advance(body: &mut Body, gravity: Option<f64>, bounds: &Bounds) {
    if let Some(g) = gravity {
        body.vel.y += g;
    }
    body.pos += body.vel;

    let radius = body.radius();
    bounce_axis(&mut body.pos.x, &mut body.vel.x, radius, bounds.width);
    bounce_axis(&mut body.pos.y, &mut body.vel.y, radius, bounds.height);
}

/// Reflect one axis off the `[0, upper]` walls.
///
/// On contact the velocity component is negated (restitution 1) and the
/// position is clamped so the body just touches the breached wall.
/// Returns true if the body bounced.
pub fn bounce_axis(pos: &mut f64, vel: &mut f64, radius: f64, upper: f64) -> bool {
    let below = *pos - radius < 0.0;
    let above = *pos + radius > upper;
    if !below && !above {
        return false;
    }

    *vel = -*vel;
    *pos = if below { radius } else { upper - radius };
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BODY_RADIUS, GRAVITY};
    use crate::sim::body::ColorTag;
    use proptest::prelude::*;

    fn body_at(x: f64, y: f64, vx: f64, vy: f64) -> Body {
        Body::new(1, DVec2::new(x, y), DVec2::new(vx, vy), 1.0, ColorTag::Red)
    }

    #[test]
    fn test_free_fall_ten_ticks() {
        let bounds = Bounds::default();
        let mut body = body_at(400.0, 300.0, 0.0, 0.0);

        for _ in 0..10 {
            advance(&mut body, Some(GRAVITY), &bounds);
        }

        assert_eq!(body.vel.y, 5.0);
        assert_eq!(body.pos.y, 327.5);
        assert_eq!(body.pos.x, 400.0);
    }

    #[test]
    fn test_no_gravity_moves_straight() {
        let bounds = Bounds::default();
        let mut body = body_at(100.0, 100.0, 3.0, -2.0);
        advance(&mut body, None, &bounds);
        assert_eq!(body.pos, DVec2::new(103.0, 98.0));
        assert_eq!(body.vel, DVec2::new(3.0, -2.0));
    }

    #[test]
    fn test_left_wall_bounce() {
        let bounds = Bounds::default();
        let mut body = body_at(15.0, 300.0, -10.0, 0.0);
        advance(&mut body, None, &bounds);
        assert_eq!(body.vel.x, 10.0);
        assert_eq!(body.pos.x, BODY_RADIUS);
    }

    #[test]
    fn test_floor_bounce_with_gravity() {
        let bounds = Bounds::default();
        let mut body = body_at(400.0, 575.0, 0.0, 5.0);
        advance(&mut body, Some(GRAVITY), &bounds);
        // vy became 5.5, y overshot to 580.5
        assert_eq!(body.vel.y, -5.5);
        assert_eq!(body.pos.y, bounds.height - BODY_RADIUS);
    }

    #[test]
    fn test_corner_bounces_both_axes() {
        let bounds = Bounds::default();
        let mut body = body_at(790.0, 10.0, 5.0, -5.0);
        advance(&mut body, None, &bounds);
        assert_eq!(body.vel, DVec2::new(-5.0, 5.0));
        assert_eq!(body.pos, DVec2::new(780.0, 20.0));
    }

    #[test]
    fn test_center_truncates() {
        assert_eq!(Bounds::default().center(), DVec2::new(400.0, 300.0));
        assert_eq!(Bounds::new(801.0, 601.0).center(), DVec2::new(400.0, 300.0));
    }

    proptest! {
        #[test]
        fn prop_wall_reflection_negates_and_clamps(
            x in 20.0f64..780.0,
            speed in 0.0f64..200.0,
            toward_right in any::<bool>(),
        ) {
            let vx = if toward_right { speed } else { -speed };
            let mut pos = x + vx;
            let mut vel = vx;
            let bounced = bounce_axis(&mut pos, &mut vel, BODY_RADIUS, ARENA_WIDTH);

            if bounced {
                prop_assert_eq!(vel, -vx);
                prop_assert!(pos == BODY_RADIUS || pos == ARENA_WIDTH - BODY_RADIUS);
            } else {
                prop_assert_eq!(vel, vx);
                prop_assert_eq!(pos, x + vx);
            }
        }
    }
}
