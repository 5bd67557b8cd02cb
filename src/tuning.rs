//! Data-driven game balance
//!
//! Every number that was tuned by feel lives here instead of being scattered
//! through the simulation. Loaded from JSON so it can be tweaked without a
//! rebuild; missing fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Largest candy launch speed accepted from config (world units/s)
const MAX_CANDY_SPEED: f32 = 100_000.0;
/// Largest candy spin accepted from config (degrees/s)
const MAX_CANDY_SPIN: f32 = 100_000.0;

/// Gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    // === Motion ===
    /// Convergence rate (per second) while the actor follows the pointer
    pub grab_smoothing: f32,
    /// Convergence rate (per second) while the actor drifts back to rest
    pub rest_smoothing: f32,
    /// Convergence rate (per second) for the actor's rotation
    pub rotation_smoothing: f32,
    /// Below this velocity (world units/s) rotation is frozen
    pub rotation_epsilon: f32,
    /// Added to the velocity heading so the hand sprite faces its motion
    pub hand_heading_offset: f32,
    /// Bat tilt (degrees) per unit of horizontal velocity
    pub bat_tilt_per_velocity: f32,
    /// Maximum bat tilt away from rest (degrees)
    pub bat_max_tilt: f32,
    /// Grab radius as a multiple of the actor's hit radius
    pub grab_radius_scale: f32,

    // === Swing speed ===
    /// Empirical factor turning zoomed velocity into a score-sized number
    pub speed_scale: f32,
    /// Minimum speed for a hit to register
    pub hit_threshold: f32,
    /// Score above which a hit is a "big hit" (candy + long celebration)
    pub big_hit_threshold: f32,
    /// Speed at which the whoosh sound starts
    pub whoosh_threshold: f32,

    // === Smash ===
    /// Smashed duration for a normal hit (seconds)
    pub short_smash_duration: f32,
    /// Smashed duration for a big hit (seconds)
    pub long_smash_duration: f32,
    /// Pinata spin rate after a hit (degrees/s)
    pub spin_rate: f32,
    /// Spin multiplier for a big hit
    pub big_hit_spin_multiplier: f32,
    /// Pinata drift (world units/s) per point of score
    pub drift_per_score: f32,

    // === Candy ===
    /// Downward acceleration applied to candy (world units/s²)
    pub candy_gravity: f32,
    /// Horizontal launch speed range
    pub candy_speed_x: (f32, f32),
    /// Upward launch speed range (positive = up)
    pub candy_speed_up: (f32, f32),
    /// Maximum spin of a candy piece (degrees/s, either direction)
    pub candy_max_spin: f32,
    /// Spawn scatter around the pinata pivot, as a fraction of its size
    pub candy_scatter: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            grab_smoothing: 25.0,
            rest_smoothing: 6.0,
            rotation_smoothing: 12.0,
            rotation_epsilon: 1.0,
            hand_heading_offset: 90.0,
            bat_tilt_per_velocity: 0.03,
            bat_max_tilt: 75.0,
            grab_radius_scale: 1.5,

            speed_scale: 0.1,
            hit_threshold: 50.0,
            big_hit_threshold: 200.0,
            whoosh_threshold: 80.0,

            short_smash_duration: 1.0,
            long_smash_duration: 3.0,
            spin_rate: 240.0,
            big_hit_spin_multiplier: 3.0,
            drift_per_score: 2.0,

            candy_gravity: 1500.0,
            candy_speed_x: (-500.0, 500.0),
            candy_speed_up: (400.0, 1000.0),
            candy_max_spin: 360.0,
            candy_scatter: 0.25,
        }
    }
}

impl Tunables {
    /// Parse tunables from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tunables from a file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tunables {}: {} - using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tunables) => {
                log::info!("Loaded tunables from {}", path.display());
                tunables
            }
            Err(e) => {
                log::warn!("Invalid tunables {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would break the simulation
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        for (name, value, fallback) in [
            ("grab_smoothing", &mut self.grab_smoothing, defaults.grab_smoothing),
            ("rest_smoothing", &mut self.rest_smoothing, defaults.rest_smoothing),
            ("rotation_smoothing", &mut self.rotation_smoothing, defaults.rotation_smoothing),
            ("speed_scale", &mut self.speed_scale, defaults.speed_scale),
        ] {
            if !value.is_finite() || *value <= 0.0 {
                log::warn!("Tunable {} = {} is not positive, using {}", name, value, fallback);
                *value = fallback;
            }
        }

        for (name, value) in [
            ("short_smash_duration", &mut self.short_smash_duration),
            ("long_smash_duration", &mut self.long_smash_duration),
            ("rotation_epsilon", &mut self.rotation_epsilon),
            ("candy_scatter", &mut self.candy_scatter),
            ("candy_max_spin", &mut self.candy_max_spin),
        ] {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("Tunable {} = {} is negative, clamping to 0", name, value);
                *value = 0.0;
            }
        }

        if self.big_hit_threshold < self.hit_threshold {
            log::warn!(
                "big_hit_threshold {} below hit_threshold {}, raising it",
                self.big_hit_threshold,
                self.hit_threshold
            );
            self.big_hit_threshold = self.hit_threshold;
        }

        if self.candy_max_spin > MAX_CANDY_SPIN {
            log::warn!("Tunable candy_max_spin = {} too large, clamping", self.candy_max_spin);
            self.candy_max_spin = MAX_CANDY_SPIN;
        }

        for (name, range, fallback) in [
            ("candy_speed_x", &mut self.candy_speed_x, defaults.candy_speed_x),
            ("candy_speed_up", &mut self.candy_speed_up, defaults.candy_speed_up),
        ] {
            if !range.0.is_finite() || !range.1.is_finite() {
                log::warn!("Tunable {} = {:?} is not finite, using {:?}", name, range, fallback);
                *range = fallback;
            }
            // Sampling needs a finite span
            range.0 = range.0.clamp(-MAX_CANDY_SPEED, MAX_CANDY_SPEED);
            range.1 = range.1.clamp(-MAX_CANDY_SPEED, MAX_CANDY_SPEED);
            if range.0 > range.1 {
                log::warn!("Tunable {} range is reversed, swapping", name);
                *range = (range.1, range.0);
            }
        }

        self
    }

    /// Smashed duration for a given score
    pub fn smash_duration(&self, score: f32) -> f32 {
        if self.is_big_hit(score) {
            self.long_smash_duration
        } else {
            self.short_smash_duration
        }
    }

    #[inline]
    pub fn is_big_hit(&self, score: f32) -> bool {
        score > self.big_hit_threshold
    }
}
