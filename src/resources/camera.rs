//! Scrolling camera resource.
//!
//! The world is larger than the window, so drawing goes through a camera
//! offset: [`ScrollCamera::update`] recenters the view on a target position
//! and clamps the offset so the visible window never scrolls past the world
//! edges, and [`ScrollCamera::apply`] translates a world position into its
//! draw position.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Viewport offset into the larger world used for scrolled rendering.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScrollCamera {
    /// Current top-left translation applied to drawn entities.
    /// Always within `[-(world - view), 0]` on each axis.
    pub offset: Vector2,
    /// Visible window size in pixels.
    pub view: Vector2,
    /// Total world size in pixels.
    pub world: Vector2,
}

impl ScrollCamera {
    /// Camera over a world `world_scale` times larger than the viewport,
    /// initially at the world origin.
    pub fn new(view_width: f32, view_height: f32, world_scale: f32) -> Self {
        Self {
            offset: Vector2::zero(),
            view: Vector2 {
                x: view_width,
                y: view_height,
            },
            world: Vector2 {
                x: view_width * world_scale,
                y: view_height * world_scale,
            },
        }
    }

    /// Recenter the view on `target` (a world position), clamped so the
    /// window stays inside the world.
    pub fn update(&mut self, target: Vector2) {
        let x = self.view.x * 0.5 - target.x;
        let y = self.view.y * 0.5 - target.y;
        self.offset = Vector2 {
            x: x.clamp(-(self.world.x - self.view.x), 0.0),
            y: y.clamp(-(self.world.y - self.view.y), 0.0),
        };
    }

    /// Draw position for a world position under the current offset.
    pub fn apply(&self, position: Vector2) -> Vector2 {
        position + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_starts_at_origin() {
        let camera = ScrollCamera::new(800.0, 600.0, 32.0);
        assert_eq!(camera.offset.x, 0.0);
        assert_eq!(camera.offset.y, 0.0);
        assert_eq!(camera.world.x, 800.0 * 32.0);
        assert_eq!(camera.world.y, 600.0 * 32.0);
    }

    #[test]
    fn target_near_origin_clamps_to_zero() {
        let mut camera = ScrollCamera::new(800.0, 600.0, 32.0);
        camera.update(Vector2 { x: 10.0, y: 10.0 });
        assert_eq!(camera.offset.x, 0.0);
        assert_eq!(camera.offset.y, 0.0);
    }

    #[test]
    fn target_in_the_open_centers_the_view() {
        let mut camera = ScrollCamera::new(800.0, 600.0, 32.0);
        camera.update(Vector2 {
            x: 1000.0,
            y: 1000.0,
        });
        assert_eq!(camera.offset.x, 400.0 - 1000.0);
        assert_eq!(camera.offset.y, 300.0 - 1000.0);
    }

    #[test]
    fn target_past_the_far_edge_clamps_to_world_bounds() {
        let mut camera = ScrollCamera::new(800.0, 600.0, 2.0);
        camera.update(Vector2 {
            x: 10_000.0,
            y: 10_000.0,
        });
        assert_eq!(camera.offset.x, -(1600.0 - 800.0));
        assert_eq!(camera.offset.y, -(1200.0 - 600.0));
    }

    #[test]
    fn offset_stays_in_bounds_for_any_target_inside_the_world() {
        let mut camera = ScrollCamera::new(800.0, 600.0, 4.0);
        for x in 0..3200 {
            camera.update(Vector2 {
                x: x as f32,
                y: (x % 2400) as f32,
            });
            assert!(camera.offset.x <= 0.0 && camera.offset.x >= -(camera.world.x - camera.view.x));
            assert!(camera.offset.y <= 0.0 && camera.offset.y >= -(camera.world.y - camera.view.y));
        }
    }

    #[test]
    fn apply_translates_by_the_offset() {
        let mut camera = ScrollCamera::new(800.0, 600.0, 32.0);
        camera.update(Vector2 {
            x: 1000.0,
            y: 1000.0,
        });
        let drawn = camera.apply(Vector2 {
            x: 1000.0,
            y: 1000.0,
        });
        assert_eq!(drawn.x, 400.0);
        assert_eq!(drawn.y, 300.0);
    }
}
