//! Motion smoothing for the swung actors
//!
//! Positions and angles converge exponentially: every frame they cover a
//! fixed fraction (`rate × dt`, capped at 1) of the remaining distance.
//! Velocity is read back from the resulting position change rather than
//! integrated, so the actor always sits exactly where the smoothing put it.

use glam::Vec2;

use super::state::{Actor, GameMode};
use crate::tuning::Tunables;
use crate::{heading_degrees, normalize_degrees, shortest_angle_delta};

/// Fraction of the remaining distance covered this frame
#[inline]
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    (rate * dt).clamp(0.0, 1.0)
}

/// `current + (target - current) × rate × dt`, never past the target
#[inline]
pub fn lerp_toward(current: Vec2, target: Vec2, rate: f32, dt: f32) -> Vec2 {
    current.lerp(target, smoothing_factor(rate, dt))
}

/// Angle step along the shortest arc, result normalized to [0, 360)
#[inline]
pub fn lerp_angle(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let delta = shortest_angle_delta(current, target);
    normalize_degrees(current + delta * smoothing_factor(rate, dt))
}

/// Swing speed as used for scoring
///
/// The hand scores on its full velocity, the bat only on its horizontal
/// component. Scaled by camera zoom so the same physical swing scores the same
/// at any window size.
pub fn swing_speed(kind: GameMode, vel: Vec2, zoom: f32, tunables: &Tunables) -> f32 {
    let raw = match kind {
        GameMode::Hand => vel.length(),
        GameMode::Bat => vel.x.abs(),
    };
    raw * zoom * tunables.speed_scale
}

impl Actor {
    /// Move toward `target` (the pointer) while grabbed
    pub fn follow(&mut self, target: Vec2, tunables: &Tunables, dt: f32) {
        self.step_position(target, tunables.grab_smoothing, dt);

        // Nearly still: hold the current angle instead of jittering
        if self.vel.length() < tunables.rotation_epsilon {
            return;
        }
        let target_angle = self.swing_angle(tunables);
        self.angle = lerp_angle(self.angle, target_angle, tunables.rotation_smoothing, dt);
    }

    /// Drift back to rest while not grabbed
    pub fn relax(&mut self, tunables: &Tunables, dt: f32) {
        self.step_position(self.start_pos, tunables.rest_smoothing, dt);
        self.angle = lerp_angle(self.angle, self.start_angle, tunables.rest_smoothing, dt);
    }

    /// Angle the actor wants to face given its current velocity
    fn swing_angle(&self, tunables: &Tunables) -> f32 {
        match self.kind {
            // Fingers lead the motion
            GameMode::Hand => {
                normalize_degrees(heading_degrees(self.vel) + tunables.hand_heading_offset)
            }
            // Bat tilts with horizontal speed, pivoting on the handle
            GameMode::Bat => {
                let max = tunables.bat_max_tilt;
                let tilt = (self.vel.x * tunables.bat_tilt_per_velocity).clamp(-max, max);
                normalize_degrees(self.start_angle + tilt)
            }
        }
    }

    fn step_position(&mut self, target: Vec2, rate: f32, dt: f32) {
        let prev = self.pos;
        self.pos = lerp_toward(self.pos, target, rate, dt);
        self.vel = if dt > 0.0 { (self.pos - prev) / dt } else { Vec2::ZERO };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lerp_reaches_target_with_large_step() {
        let p = lerp_toward(Vec2::ZERO, Vec2::new(10.0, 0.0), 25.0, 1.0);
        assert_eq!(p, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_lerp_angle_wraps_through_zero() {
        // 350 -> 10 goes forward through 0, not back through 180
        let a = lerp_angle(350.0, 10.0, 10.0, 0.05);
        assert!((a - 0.0).abs() < 1e-3 || (a - 360.0).abs() < 1e-3, "got {a}");
        let b = lerp_angle(10.0, 350.0, 10.0, 0.05);
        assert!((b - 0.0).abs() < 1e-3 || (b - 360.0).abs() < 1e-3, "got {b}");
    }

    #[test]
    fn test_velocity_is_position_delta() {
        let tunables = Tunables::default();
        let mut hand = Actor::hand();
        let start = hand.pos;
        let target = start + Vec2::new(-400.0, 0.0);
        hand.follow(target, &tunables, 0.01);

        // 25/s × 0.01 s = a quarter of the way
        assert!((hand.pos.x - (start.x - 100.0)).abs() < 1e-3);
        assert!((hand.vel.x - -10_000.0).abs() < 0.5);
        assert_eq!(hand.vel.y, 0.0);
    }

    #[test]
    fn test_zero_dt_has_no_velocity() {
        let tunables = Tunables::default();
        let mut hand = Actor::hand();
        let start = hand.pos;
        hand.follow(start + Vec2::new(100.0, 100.0), &tunables, 0.0);
        assert_eq!(hand.pos, start);
        assert_eq!(hand.vel, Vec2::ZERO);
    }

    #[test]
    fn test_rotation_frozen_when_still() {
        let tunables = Tunables::default();
        let mut hand = Actor::hand();
        hand.angle = 42.0;
        // Target equal to current position: no motion, no rotation
        let here = hand.pos;
        hand.follow(here, &tunables, 1.0 / 60.0);
        assert_eq!(hand.angle, 42.0);
    }

    #[test]
    fn test_hand_turns_toward_motion() {
        let tunables = Tunables::default();
        let mut hand = Actor::hand();
        let target = hand.pos + Vec2::new(-500.0, 0.0);
        let want = normalize_degrees(180.0 + tunables.hand_heading_offset);
        for _ in 0..5 {
            hand.follow(target, &tunables, 1.0 / 60.0);
        }
        // Moving left: heading 180, plus the sprite offset
        let before = shortest_angle_delta(0.0, want).abs();
        let after = shortest_angle_delta(hand.angle, want).abs();
        assert!(after < before);
    }

    #[test]
    fn test_bat_tilt_is_clamped() {
        let tunables = Tunables::default();
        let mut bat = Actor::bat();
        let target = bat.pos + Vec2::new(-100_000.0, 0.0);
        for _ in 0..10 {
            bat.follow(target, &tunables, 1.0 / 60.0);
        }
        // Counter-clockwise toward the pinata, but never past the max tilt
        let tilt = shortest_angle_delta(bat.start_angle, bat.angle);
        assert!(tilt < -60.0, "tilt {tilt}");
        assert!(tilt >= -tunables.bat_max_tilt - 1e-2, "tilt {tilt}");
    }

    #[test]
    fn test_swing_speed_by_mode() {
        let tunables = Tunables::default();
        let vel = Vec2::new(-300.0, 400.0);
        assert!((swing_speed(GameMode::Hand, vel, 1.0, &tunables) - 50.0).abs() < 1e-3);
        assert!((swing_speed(GameMode::Bat, vel, 1.0, &tunables) - 30.0).abs() < 1e-3);
        assert!((swing_speed(GameMode::Hand, vel, 0.5, &tunables) - 25.0).abs() < 1e-3);
    }

    #[test]
    fn test_release_relaxes_without_jumping() {
        let tunables = Tunables::default();
        let mut hand = Actor::hand();
        hand.pos = hand.start_pos + Vec2::new(-900.0, 250.0);
        hand.angle = 200.0;

        let mut dist = hand.pos.distance(hand.start_pos);
        for _ in 0..600 {
            let before = hand.pos;
            hand.relax(&tunables, 1.0 / 60.0);
            let next = hand.pos.distance(hand.start_pos);
            assert!(next <= dist, "moved away from rest: {dist} -> {next}");
            // Each step covers a tenth of what is left, never all of it
            assert!(before.distance(hand.pos) <= dist * 0.1 + 1e-3);
            dist = next;
        }
        assert!(dist < 1e-2);
        assert!(shortest_angle_delta(hand.angle, hand.start_angle).abs() < 1e-2);
    }

    proptest! {
        #[test]
        fn prop_smoothing_never_overshoots(
            dt in 0.0001f32..2.0,
            rate in 0.1f32..60.0,
            sx in -2000.0f32..2000.0,
            sy in -2000.0f32..2000.0,
        ) {
            let target = Vec2::new(640.0, 360.0);
            let mut p = Vec2::new(sx, sy);
            let mut dist = p.distance(target);
            for _ in 0..50 {
                let next = lerp_toward(p, target, rate, dt);
                let next_dist = next.distance(target);
                prop_assert!(next_dist <= dist + 1e-3);
                // Same side of the target: no overshoot along the approach
                prop_assert!((next - p).dot(target - p) >= -1e-3 * dist.max(1.0));
                p = next;
                dist = next_dist;
            }
        }

        #[test]
        fn prop_angle_step_takes_short_path(
            current in 0.0f32..360.0,
            target in -720.0f32..720.0,
            dt in 0.0001f32..1.0,
        ) {
            let next = lerp_angle(current, target, 12.0, dt);
            prop_assert!((0.0..360.0).contains(&next));
            let wanted = shortest_angle_delta(current, target);
            prop_assert!(wanted.abs() <= 180.0);
            let step = shortest_angle_delta(current, next);
            prop_assert!(step.abs() <= wanted.abs() + 1e-2);
        }
    }
}
