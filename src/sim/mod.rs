//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the `dt` passed to [`tick`]
//! - Seeded RNG only (candy)
//! - No rendering, audio or platform dependencies

pub mod candy;
pub mod collision;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{
    Rect, RotatedRect, circle_rect_collision, circle_rotated_rect_collision, point_in_rotated_rect,
};
pub use motion::{lerp_angle, lerp_toward, smoothing_factor, swing_speed};
pub use state::{Actor, Candy, CandyBurst, GameEvent, GameMode, GameState, Pinata, Transition};
pub use tick::{TickInput, TickOutcome, tick, try_smash};
