//! Per-frame draw command list
//!
//! The game describes what to draw; a backend decides how. Commands are in
//! painter's order, positions in virtual world units.

use glam::Vec2;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Actor, GameMode, GameState};

/// Texture handles, resolved to files by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    Pinata,
    Hand,
    Bat,
    Candy(u8),
}

impl TextureId {
    pub fn asset_path(&self) -> &'static str {
        match self {
            TextureId::Pinata => "assets/pinata.png",
            TextureId::Hand => "assets/hand.png",
            TextureId::Bat => "assets/bat.png",
            TextureId::Candy(0) => "assets/candy_0.png",
            TextureId::Candy(1) => "assets/candy_1.png",
            TextureId::Candy(2) => "assets/candy_2.png",
            TextureId::Candy(_) => "assets/candy_3.png",
        }
    }

    /// Dense index for GPU instance data
    pub fn index(&self) -> u32 {
        match self {
            TextureId::Pinata => 0,
            TextureId::Hand => 1,
            TextureId::Bat => 2,
            TextureId::Candy(v) => 3 + (*v % CANDY_VARIANTS) as u32,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.96, 0.87, 0.70, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HUD_TEXT: [f32; 4] = [0.15, 0.1, 0.1, 1.0];
    pub const SCORE: [f32; 4] = [0.85, 0.1, 0.35, 1.0];
    pub const BIG_HIT: [f32; 4] = [1.0, 0.6, 0.0, 1.0];
    pub const DEBUG_HIT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const DEBUG_BOUNDS: [f32; 4] = [0.0, 0.4, 1.0, 1.0];
}

/// A single draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear([f32; 4]),
    /// Textured rectangle, `position` is where `origin` (relative to the
    /// sprite's top-left) lands, rotated clockwise by `angle` degrees about it
    Sprite {
        texture: TextureId,
        position: Vec2,
        size: Vec2,
        origin: Vec2,
        angle: f32,
        tint: [f32; 4],
    },
    CircleOutline {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Closed polygon through the corners
    QuadOutline {
        corners: [Vec2; 4],
        color: [f32; 4],
    },
    /// Text with its top-left at `position`
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: [f32; 4],
    },
}

impl DrawCommand {
    fn text(text: impl Into<String>, position: Vec2, size: f32, color: [f32; 4]) -> Self {
        DrawCommand::Text {
            text: text.into(),
            position,
            size,
            color,
        }
    }
}

/// Sprite for a swung actor
fn actor_sprite(actor: &Actor) -> DrawCommand {
    let (texture, size, origin) = match actor.kind {
        GameMode::Hand => {
            let size = Vec2::splat(HAND_RADIUS * 2.0);
            (TextureId::Hand, size, size / 2.0)
        }
        // Pivot at the end of the handle
        GameMode::Bat => (
            TextureId::Bat,
            Vec2::new(BAT_WIDTH, BAT_LENGTH),
            Vec2::new(BAT_WIDTH / 2.0, BAT_LENGTH),
        ),
    };
    DrawCommand::Sprite {
        texture,
        position: actor.pos,
        size,
        origin,
        angle: actor.angle,
        tint: colors::WHITE,
    }
}

/// Build the draw list for one frame
pub fn build_frame(state: &GameState, settings: &Settings) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(8 + CANDY_COUNT);
    commands.push(DrawCommand::Clear(colors::BACKGROUND));

    let rect = &state.pinata.rect;
    commands.push(DrawCommand::Sprite {
        texture: TextureId::Pinata,
        position: rect.position,
        size: rect.size,
        origin: rect.origin,
        angle: rect.angle,
        tint: colors::WHITE,
    });

    if state.candy.active {
        let size = Vec2::splat(CANDY_RADIUS * 2.0);
        for piece in &state.candy.pieces {
            commands.push(DrawCommand::Sprite {
                texture: TextureId::Candy(piece.variant),
                position: piece.pos,
                size,
                origin: size / 2.0,
                angle: piece.angle,
                tint: colors::WHITE,
            });
        }
    }

    let actor = state.active();
    commands.push(actor_sprite(actor));

    if settings.show_hud {
        hud(state, &mut commands);
    }

    if settings.show_debug {
        commands.push(DrawCommand::CircleOutline {
            center: actor.hit_center(),
            radius: actor.hit_radius,
            color: colors::DEBUG_HIT,
        });
        commands.push(DrawCommand::QuadOutline {
            corners: rect.corners(),
            color: colors::DEBUG_BOUNDS,
        });
    }

    commands
}

fn hud(state: &GameState, commands: &mut Vec<DrawCommand>) {
    let left = 40.0;
    commands.push(DrawCommand::text(
        format!("Speed: {:.0}", state.speed),
        Vec2::new(left, 30.0),
        36.0,
        colors::HUD_TEXT,
    ));
    commands.push(DrawCommand::text(
        format!("Max: {:.0}", state.max_speed),
        Vec2::new(left, 75.0),
        36.0,
        colors::HUD_TEXT,
    ));

    let hint = match state.mode {
        GameMode::Hand => "[Tab] switch to bat",
        GameMode::Bat => "[Tab] switch to hand",
    };
    commands.push(DrawCommand::text(
        hint,
        Vec2::new(left, VIRTUAL_HEIGHT - 60.0),
        28.0,
        colors::HUD_TEXT,
    ));

    if state.pinata.smashed {
        let center_x = VIRTUAL_WIDTH / 2.0 - 150.0;
        commands.push(DrawCommand::text(
            format!("{:.0}", state.score),
            Vec2::new(center_x, 120.0),
            120.0,
            colors::SCORE,
        ));
        if state.candy.active {
            commands.push(DrawCommand::text(
                "BIG HIT!",
                Vec2::new(center_x, 260.0),
                72.0,
                colors::BIG_HIT,
            ));
        }
    }
}
