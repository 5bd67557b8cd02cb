//! Collision detection against rotated rectangles
//!
//! The pinata is a sprite rotated about its pivot, so the hit test can't be a
//! plain AABB check. Instead the test point is moved into the rectangle's own
//! (unrotated) frame, where the usual axis-aligned math applies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{normalize_degrees, rotate_degrees};

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Closest point inside the rectangle to `p`
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.x + self.width),
            p.y.clamp(self.y, self.y + self.height),
        )
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// A rectangle placed in the world by its pivot and rotated about it
///
/// `position` is where the pivot sits in world space, `origin` is the pivot's
/// offset from the rectangle's top-left corner (usually the center).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotatedRect {
    pub position: Vec2,
    pub size: Vec2,
    pub origin: Vec2,
    /// Clockwise rotation in degrees
    pub angle: f32,
}

impl RotatedRect {
    /// Rectangle with its pivot at the center
    pub fn centered(position: Vec2, size: Vec2, angle: f32) -> Self {
        Self {
            position,
            size,
            origin: size / 2.0,
            angle,
        }
    }

    /// Transform a world point into the rectangle's unrotated local frame,
    /// where the rectangle spans `[0, w] × [0, h]`
    #[inline]
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        rotate_degrees(p - self.position, -normalize_degrees(self.angle)) + self.origin
    }

    /// Inverse of [`to_local`](Self::to_local)
    #[inline]
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        rotate_degrees(local - self.origin, normalize_degrees(self.angle)) + self.position
    }

    /// The four corners in world space (top-left, top-right, bottom-right, bottom-left)
    pub fn corners(&self) -> [Vec2; 4] {
        let (w, h) = (self.size.x, self.size.y);
        [
            self.to_world(Vec2::new(0.0, 0.0)),
            self.to_world(Vec2::new(w, 0.0)),
            self.to_world(Vec2::new(w, h)),
            self.to_world(Vec2::new(0.0, h)),
        ]
    }

    /// The rectangle's bounds in its own frame
    #[inline]
    fn local_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.x, self.size.y)
    }
}

/// Axis-aligned circle vs rectangle overlap (touching counts)
#[inline]
pub fn circle_rect_collision(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.clamp_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// Circle vs rotated rectangle overlap
pub fn circle_rotated_rect_collision(center: Vec2, radius: f32, rect: &RotatedRect) -> bool {
    let local = rect.to_local(center);
    circle_rect_collision(local, radius, &rect.local_bounds())
}

/// Point inside a rotated rectangle
pub fn point_in_rotated_rect(point: Vec2, rect: &RotatedRect) -> bool {
    rect.local_bounds().contains_point(rect.to_local(point))
}
