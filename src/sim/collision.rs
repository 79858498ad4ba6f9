//! Narrow-phase circle-circle collision detection and elastic response
//!
//! Bodies are resolved pair by pair: each pair exchanges momentum along the
//! line joining their centers (the collision normal), then is pushed apart
//! so the next tick does not re-trigger on the same overlap.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::consts::SEPARATION_PAD;
use crate::{cartesian_to_polar, polar_to_cartesian};

/// How a body's velocity vector is rebuilt from its new normal speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reconstruction {
    /// Rebuild as `v' * n + v * t`, reusing the pre-collision normal speed
    /// `v` as the tangential term. Matches the reference sandbox motion.
    #[default]
    Legacy,
    /// Keep the body's actual tangential component, replace only the normal one
    PreserveTangent,
}

/// Result of a pair check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the bodies overlapped
    pub hit: bool,
    /// Unit normal pointing from the first body toward the second
    pub normal: DVec2,
    /// Overlap depth (`r_a + r_b - distance`), zero on a miss
    pub penetration: f64,
    /// Normal speeds before resolution
    pub before: (f64, f64),
    /// Normal speeds after resolution
    pub after: (f64, f64),
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: DVec2::ZERO,
            penetration: 0.0,
            before: (0.0, 0.0),
            after: (0.0, 0.0),
        }
    }
}

/// 1-D elastic collision between masses `m1`, `m2` with speeds `v1`, `v2`.
///
/// Conserves both momentum and kinetic energy. Masses must sum to > 0.
#[inline]
pub fn elastic_1d(m1: f64, v1: f64, m2: f64, v2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1_final = ((m1 - m2) * v1 + 2.0 * m2 * v2) / total;
    let v2_final = ((m2 - m1) * v2 + 2.0 * m1 * v1) / total;
    (v1_final, v2_final)
}

/// Component of `vel` along the unit `normal`
#[inline]
pub fn normal_speed(vel: DVec2, normal: DVec2) -> f64 {
    vel.dot(normal)
}

/// Rebuild a velocity after its normal speed changed from `before` to `after`
fn rebuild_velocity(
    vel: DVec2,
    normal: DVec2,
    before: f64,
    after: f64,
    mode: Reconstruction,
) -> DVec2 {
    match mode {
        Reconstruction::Legacy => {
            let tangent = normal.perp();
            normal * after + tangent * before
        }
        Reconstruction::PreserveTangent => vel + normal * (after - before),
    }
}

/// Check and resolve one pair of bodies.
///
/// On overlap, swaps normal momentum via [`elastic_1d`], rebuilds both
/// velocities according to `mode`, and moves the bodies apart along the
/// normal so their centers end up `r_a + r_b + SEPARATION_PAD` apart.
/// Coincident centers resolve along +x.
pub fn resolve_pair(a: &mut Body, b: &mut Body, mode: Reconstruction) -> CollisionResult {
    let (distance, angle) = cartesian_to_polar(b.pos - a.pos);
    let reach = a.radius() + b.radius();
    if distance >= reach {
        return CollisionResult::miss();
    }

    let normal = polar_to_cartesian(1.0, angle);
    let v1 = normal_speed(a.vel, normal);
    let v2 = normal_speed(b.vel, normal);
    let (v1_final, v2_final) = elastic_1d(a.mass(), v1, b.mass(), v2);

    a.vel = rebuild_velocity(a.vel, normal, v1, v1_final, mode);
    b.vel = rebuild_velocity(b.vel, normal, v2, v2_final, mode);

    // Each body takes half the correction
    let correction = (reach - distance + SEPARATION_PAD) / 2.0;
    a.pos -= normal * correction;
    b.pos += normal * correction;

    CollisionResult {
        hit: true,
        normal,
        penetration: reach - distance,
        before: (v1, v2),
        after: (v1_final, v2_final),
    }
}

/// Resolve every unordered pair in index order (i < j).
///
/// Resolution is sequential: a velocity changed by pair (i, j) is what a
/// later pair involving either body sees in the same sweep.
/// Returns the number of colliding pairs.
pub fn resolve_all(bodies: &mut [Body], mode: Reconstruction) -> usize {
    let mut hits = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let first = &mut head[i];
        for second in tail.iter_mut() {
            if resolve_pair(first, second, mode).hit {
                hits += 1;
            }
        }
    }
    hits
}
