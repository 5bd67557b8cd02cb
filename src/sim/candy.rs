//! Candy burst for big hits
//!
//! A fixed set of pieces thrown up and out from the pinata, then left to fall.
//! No collisions and no lifetime: the burst just stops being drawn when the
//! pinata resets.

use glam::Vec2;
use rand::Rng;

use super::state::{Candy, CandyBurst, Pinata};
use crate::consts::CANDY_VARIANTS;
use crate::tuning::Tunables;

impl CandyBurst {
    /// Throw every piece from around the pinata's pivot
    pub fn spawn<R: Rng>(&mut self, pinata: &Pinata, tunables: &Tunables, rng: &mut R) {
        let scatter = pinata.rect.size * tunables.candy_scatter;
        let (min_x, max_x) = tunables.candy_speed_x;
        let (min_up, max_up) = tunables.candy_speed_up;
        let spin = tunables.candy_max_spin;

        for piece in self.pieces.iter_mut() {
            let offset = Vec2::new(
                rng.random_range(-1.0f32..=1.0) * scatter.x,
                rng.random_range(-1.0f32..=1.0) * scatter.y,
            );
            // y is down, so "up" is negative
            let vel = Vec2::new(
                rng.random_range(min_x..=max_x),
                -rng.random_range(min_up..=max_up),
            );

            *piece = Candy {
                pos: pinata.pos() + offset,
                vel,
                angle: rng.random_range(0.0..360.0),
                spin: rng.random_range(-spin..=spin),
                variant: rng.random_range(0..CANDY_VARIANTS),
            };
        }

        self.active = true;
    }

    /// Advance every piece under gravity
    pub fn update(&mut self, gravity: f32, dt: f32) {
        if !self.active {
            return;
        }
        for piece in self.pieces.iter_mut() {
            piece.update(gravity, dt);
        }
    }
}

impl Candy {
    #[inline]
    pub fn update(&mut self, gravity: f32, dt: f32) {
        self.pos += self.vel * dt;
        self.vel.y += gravity * dt;
        self.angle = crate::normalize_degrees(self.angle + self.spin * dt);
    }
}
