//! 2D camera between the window and the virtual playfield

use glam::Vec2;

use crate::consts::{VIRTUAL_HEIGHT, VIRTUAL_WIDTH};

/// Maps screen pixels to world units and back
///
/// `target` is the world point shown at `offset` on screen, `zoom` is screen
/// pixels per world unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub target: Vec2,
    pub offset: Vec2,
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::virtual_view(1.0)
    }
}

impl Camera {
    /// Camera centered on the virtual playfield, filling a window `zoom` times its size
    pub fn virtual_view(zoom: f32) -> Self {
        let center = Vec2::new(VIRTUAL_WIDTH, VIRTUAL_HEIGHT) / 2.0;
        Self {
            target: center,
            offset: center * zoom,
            zoom,
        }
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        if self.zoom <= 0.0 {
            return self.target;
        }
        (screen - self.offset) / self.zoom + self.target
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.target) * self.zoom + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_unit_zoom() {
        let camera = Camera::default();
        let p = Vec2::new(123.0, 456.0);
        assert_eq!(camera.screen_to_world(p), p);
        assert_eq!(camera.world_to_screen(p), p);
    }

    #[test]
    fn test_half_size_window() {
        let camera = Camera::virtual_view(0.5);
        // Bottom-right pixel of a 960x540 window is the playfield corner
        let corner = camera.screen_to_world(Vec2::new(960.0, 540.0));
        assert!((corner - Vec2::new(VIRTUAL_WIDTH, VIRTUAL_HEIGHT)).length() < 1e-3);

        let p = Vec2::new(700.0, 300.0);
        assert!((camera.screen_to_world(camera.world_to_screen(p)) - p).length() < 1e-3);
    }

    #[test]
    fn test_zero_zoom_does_not_divide() {
        let camera = Camera {
            zoom: 0.0,
            ..Camera::default()
        };
        assert!(camera.screen_to_world(Vec2::new(10.0, 10.0)).is_finite());
    }
}
