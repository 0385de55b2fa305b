use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position of an entity, anchored at its top-left corner.
///
/// Draw rectangles and collision rectangles are derived from this position
/// every time they are needed, so there is no stored rectangle that could
/// drift out of sync with it.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
