//! Render data for an external renderer
//!
//! Bodies are drawn as instanced circles; this module builds the per-instance
//! buffer contents. Upload with [`as_bytes`].

use bytemuck::{Pod, Zeroable};

use crate::sim::{ColorTag, SimulationWorld};

/// One circle instance
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

impl BodyInstance {
    pub const fn new(x: f32, y: f32, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: [x, y],
            radius,
            _pad: 0.0,
            color,
        }
    }
}

/// Colors for sandbox elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
}

/// RGBA for a palette color
pub fn palette_rgba(color: ColorTag) -> [f32; 4] {
    match color {
        ColorTag::Red => colors::RED,
        ColorTag::Blue => colors::BLUE,
        ColorTag::Green => colors::GREEN,
        ColorTag::Yellow => colors::YELLOW,
    }
}

/// Instances for every body, in creation order
pub fn build_instances(world: &SimulationWorld) -> Vec<BodyInstance> {
    world
        .bodies()
        .iter()
        .map(|body| {
            BodyInstance::new(
                body.pos.x as f32,
                body.pos.y as f32,
                body.radius() as f32,
                palette_rgba(body.color()),
            )
        })
        .collect()
}

/// Raw bytes for a GPU buffer upload
pub fn as_bytes(instances: &[BodyInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
