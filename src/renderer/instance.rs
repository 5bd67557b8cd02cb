//! GPU instance records for sprite batching

use bytemuck::{Pod, Zeroable};

use super::draw_list::DrawCommand;

/// One textured quad, laid out for a vertex buffer with instance step mode
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2], // offset 0
    pub size: [f32; 2],     // offset 8
    pub origin: [f32; 2],   // offset 16
    pub angle: f32,         // offset 24 - radians, clockwise
    pub texture: u32,       // offset 28
    pub tint: [f32; 4],     // offset 32
}

impl SpriteInstance {
    /// `None` for anything that isn't a sprite
    pub fn from_command(command: &DrawCommand) -> Option<Self> {
        match command {
            DrawCommand::Sprite {
                texture,
                position,
                size,
                origin,
                angle,
                tint,
            } => Some(Self {
                position: position.to_array(),
                size: size.to_array(),
                origin: origin.to_array(),
                angle: angle.to_radians(),
                texture: texture.index(),
                tint: *tint,
            }),
            _ => None,
        }
    }
}

/// Sprite commands packed in draw order
pub fn instances(commands: &[DrawCommand]) -> Vec<SpriteInstance> {
    commands.iter().filter_map(SpriteInstance::from_command).collect()
}

/// Raw bytes for upload
pub fn as_bytes(instances: &[SpriteInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
