//! Smash the Pinata - grab a hand (or a bat) and swing it at a pinata
//!
//! Core modules:
//! - `sim`: Gameplay simulation (motion smoothing, collision, smash/reset state machine, candy)
//! - `renderer`: Per-frame draw command lists for an external graphics backend
//! - `audio`: Sound cues with volume/pitch for an external audio backend
//! - `camera`: Screen to world mapping
//! - `game`: Frame controller that owns all mutable state
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod audio;
pub mod camera;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::{Frame, FrameInput, Game};
pub use settings::Settings;
pub use tuning::Tunables;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Virtual world size (16:9), everything is laid out in these units
    pub const VIRTUAL_HEIGHT: f32 = 1080.0;
    pub const VIRTUAL_WIDTH: f32 = VIRTUAL_HEIGHT * 16.0 / 9.0;

    /// Pinata sprite size and distance from the left edge
    pub const PINATA_WIDTH: f32 = 300.0;
    pub const PINATA_HEIGHT: f32 = 420.0;
    pub const PINATA_PADDING: f32 = 200.0;

    /// Hand sprite radius and distance from the right edge
    pub const HAND_RADIUS: f32 = 100.0;
    pub const HAND_PADDING: f32 = 500.0;

    /// Bat sprite size (pivot sits at the handle)
    pub const BAT_LENGTH: f32 = 420.0;
    pub const BAT_WIDTH: f32 = 70.0;
    /// Bat rest angle (degrees, clockwise) - leaning back over the shoulder
    pub const BAT_REST_ANGLE: f32 = 30.0;

    /// Size of the candy burst
    pub const CANDY_COUNT: usize = 50;
    /// Number of candy sprite variants
    pub const CANDY_VARIANTS: u8 = 4;
    pub const CANDY_RADIUS: f32 = 18.0;

    /// Largest frame delta fed to the simulation (stall guard)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed shortest rotation from `from` to `to`, in (-180, 180]
#[inline]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    let delta = normalize_degrees(to - from);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Rotate a vector clockwise (y-down screen space) by `degrees`
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = normalize_degrees(degrees).to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Heading of a vector in degrees, [0, 360), 0 = +x, 90 = +y (down)
#[inline]
pub fn heading_degrees(v: Vec2) -> f32 {
    normalize_degrees(v.y.atan2(v.x).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!(normalize_degrees(-1e-9) < 360.0);
    }

    #[test]
    fn test_shortest_delta_crosses_zero() {
        assert_eq!(shortest_angle_delta(350.0, 10.0), 20.0);
        assert_eq!(shortest_angle_delta(10.0, 350.0), -20.0);
        assert_eq!(shortest_angle_delta(0.0, 180.0), 180.0);
        assert_eq!(shortest_angle_delta(180.0, 0.0), 180.0);
    }

    #[test]
    fn test_rotate_degrees_clockwise() {
        // +x rotated 90 degrees clockwise on a y-down screen points down (+y)
        let v = rotate_degrees(Vec2::X, 90.0);
        assert!((v - Vec2::Y).length() < 1e-5);
        let back = rotate_degrees(v, -90.0);
        assert!((back - Vec2::X).length() < 1e-5);
    }

    #[test]
    fn test_heading_degrees() {
        assert!((heading_degrees(Vec2::new(1.0, 0.0)) - 0.0).abs() < 1e-5);
        assert!((heading_degrees(Vec2::new(0.0, 1.0)) - 90.0).abs() < 1e-5);
        assert!((heading_degrees(Vec2::new(-1.0, 0.0)) - 180.0).abs() < 1e-4);
        assert!((heading_degrees(Vec2::new(0.0, -1.0)) - 270.0).abs() < 1e-4);
    }
}
