//! Game state and core simulation types
//!
//! Everything the update loop mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::RotatedRect;
use crate::consts::*;
use crate::rotate_degrees;

/// Which actor follows the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Hand,
    Bat,
}

impl GameMode {
    pub fn toggled(self) -> Self {
        match self {
            GameMode::Hand => GameMode::Bat,
            GameMode::Bat => GameMode::Hand,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Hand => "hand",
            GameMode::Bat => "bat",
        }
    }
}

/// Something the player swings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub kind: GameMode,
    /// Pivot position in world space
    pub pos: Vec2,
    /// Position delta over the last frame time (not integrated)
    pub vel: Vec2,
    /// Clockwise rotation, degrees in [0, 360)
    pub angle: f32,
    /// Rest position the actor relaxes back to
    pub start_pos: Vec2,
    /// Rest angle the actor relaxes back to
    pub start_angle: f32,
    /// Hit circle center, relative to the pivot in the actor's unrotated frame
    pub hit_offset: Vec2,
    pub hit_radius: f32,
    pub grabbed: bool,
}

impl Actor {
    fn at_rest(
        kind: GameMode,
        start_pos: Vec2,
        start_angle: f32,
        hit_offset: Vec2,
        hit_radius: f32,
    ) -> Self {
        Self {
            kind,
            pos: start_pos,
            vel: Vec2::ZERO,
            angle: start_angle,
            start_pos,
            start_angle,
            hit_offset,
            hit_radius,
            grabbed: false,
        }
    }

    /// The open hand, resting on the right side of the screen
    pub fn hand() -> Self {
        let start = Vec2::new(
            VIRTUAL_WIDTH - HAND_PADDING - HAND_RADIUS / 2.0,
            (VIRTUAL_HEIGHT - HAND_RADIUS) / 2.0,
        );
        Self::at_rest(GameMode::Hand, start, 0.0, Vec2::ZERO, HAND_RADIUS)
    }

    /// The bat, held by its handle; the hit circle sits near the barrel end
    pub fn bat() -> Self {
        let start = Vec2::new(
            VIRTUAL_WIDTH - HAND_PADDING,
            VIRTUAL_HEIGHT / 2.0 + BAT_LENGTH / 3.0,
        );
        Self::at_rest(
            GameMode::Bat,
            start,
            BAT_REST_ANGLE,
            Vec2::new(0.0, -BAT_LENGTH * 0.8),
            BAT_WIDTH,
        )
    }

    /// World-space center of the hit circle
    pub fn hit_center(&self) -> Vec2 {
        self.pos + rotate_degrees(self.hit_offset, self.angle)
    }

    /// Snap back to rest (no smoothing)
    pub fn reset(&mut self) {
        self.pos = self.start_pos;
        self.vel = Vec2::ZERO;
        self.angle = self.start_angle;
        self.grabbed = false;
    }
}

/// The pinata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pinata {
    /// Bounds, pivot at the center
    pub rect: RotatedRect,
    /// Pivot position to return to on reset
    pub start_pos: Vec2,
    pub smashed: bool,
    /// Degrees per second while smashed
    pub spin_rate: f32,
    /// World units per second (signed, x axis) while smashed
    pub drift_rate: f32,
}

impl Default for Pinata {
    fn default() -> Self {
        let size = Vec2::new(PINATA_WIDTH, PINATA_HEIGHT);
        let start_pos = Vec2::new(PINATA_PADDING + PINATA_WIDTH / 2.0, VIRTUAL_HEIGHT / 2.0);
        Self {
            rect: RotatedRect::centered(start_pos, size, 0.0),
            start_pos,
            smashed: false,
            spin_rate: 0.0,
            drift_rate: 0.0,
        }
    }
}

impl Pinata {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.rect.position
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.rect.angle
    }

    /// Back to upright at the start position
    pub fn reset(&mut self) {
        self.rect.position = self.start_pos;
        self.rect.angle = 0.0;
        self.smashed = false;
        self.spin_rate = 0.0;
        self.drift_rate = 0.0;
    }
}

/// A single piece of candy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Candy {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Degrees
    pub angle: f32,
    /// Degrees per second
    pub spin: f32,
    /// Sprite variant index (0..CANDY_VARIANTS)
    pub variant: u8,
}

/// Fixed-size candy burst; pieces are overwritten on each spawn
#[derive(Debug, Clone)]
pub struct CandyBurst {
    pub pieces: [Candy; CANDY_COUNT],
    /// Spawned during the current smash (drawn and simulated only when set)
    pub active: bool,
}

impl Default for CandyBurst {
    fn default() -> Self {
        Self {
            pieces: [Candy::default(); CANDY_COUNT],
            active: false,
        }
    }
}

/// Discrete things that happened during a tick (for audio, logs, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Actor picked up by the pointer
    Grabbed(GameMode),
    /// Actor let go
    Released(GameMode),
    /// Swing crossed the whoosh speed
    Whoosh { speed: f32 },
    /// Pinata hit
    Smash { score: f32, big: bool },
    /// Candy burst spawned
    CandyBurst,
    /// Pinata restored (timer ran out, or manual reset)
    Reset { manual: bool },
    ModeChanged(GameMode),
}

/// Smash state-machine transition taken by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Transition {
    #[default]
    None,
    /// Idle -> Smashed
    Smashed,
    /// Smashed -> Idle
    Reset,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the candy RNG was created with
    pub seed: u64,
    rng: Pcg32,
    pub mode: GameMode,
    pub hand: Actor,
    pub bat: Actor,
    pub pinata: Pinata,
    pub candy: CandyBurst,
    /// Swing speed measured this frame
    pub speed: f32,
    /// Fastest swing since the current grab began
    pub max_speed: f32,
    /// Score of the last successful hit
    pub score: f32,
    /// Seconds left in the smashed state
    pub timer: f32,
    /// Whoosh already triggered during this swing
    pub whooshing: bool,
    /// Simulation time (seconds)
    pub time: f32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: GameMode::Hand,
            hand: Actor::hand(),
            bat: Actor::bat(),
            pinata: Pinata::default(),
            candy: CandyBurst::default(),
            speed: 0.0,
            max_speed: 0.0,
            score: 0.0,
            timer: 0.0,
            whooshing: false,
            time: 0.0,
        }
    }

    /// Actor currently controlled by the pointer
    pub fn active(&self) -> &Actor {
        match self.mode {
            GameMode::Hand => &self.hand,
            GameMode::Bat => &self.bat,
        }
    }

    pub fn active_mut(&mut self) -> &mut Actor {
        match self.mode {
            GameMode::Hand => &mut self.hand,
            GameMode::Bat => &mut self.bat,
        }
    }

    /// Split borrow for the tick: active actor, pinata, candy and RNG at once
    pub(super) fn parts_mut(&mut self) -> (&mut Actor, &mut Pinata, &mut CandyBurst, &mut Pcg32) {
        let actor = match self.mode {
            GameMode::Hand => &mut self.hand,
            GameMode::Bat => &mut self.bat,
        };
        (actor, &mut self.pinata, &mut self.candy, &mut self.rng)
    }

    /// Smashed -> Idle: pinata upright at its start, score and swing cleared
    pub fn reset_smash(&mut self) {
        self.pinata.reset();
        self.candy.active = false;
        self.score = 0.0;
        self.max_speed = 0.0;
        self.timer = 0.0;
    }
}
