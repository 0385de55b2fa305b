use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Axis-aligned collision rectangle, anchored at the entity position plus an
/// optional offset.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Collider of the given size with no offset.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2 {
                x: width,
                y: height,
            },
            offset: Vector2::zero(),
        }
    }

    /// World-space rectangle of the collider for a given entity position.
    pub fn rect(&self, position: Vector2) -> Rectangle {
        Rectangle {
            x: position.x + self.offset.x,
            y: position.y + self.offset.y,
            width: self.size.x,
            height: self.size.y,
        }
    }

    /// AABB overlap test against another collider at another position.
    /// Touching edges do not count as an overlap.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let a = self.rect(position);
        let b = other.rect(other_position);
        a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_anchored_at_position() {
        let collider = BoxCollider::new(16.0, 32.0);
        let rect = collider.rect(Vector2 { x: 320.0, y: 240.0 });
        assert_eq!(rect.x, 320.0);
        assert_eq!(rect.y, 240.0);
        assert_eq!(rect.width, 16.0);
        assert_eq!(rect.height, 32.0);
    }

    #[test]
    fn overlapping_rects_collide() {
        let a = BoxCollider::new(16.0, 16.0);
        let b = BoxCollider::new(16.0, 16.0);
        assert!(a.overlaps(
            Vector2 { x: 0.0, y: 0.0 },
            &b,
            Vector2 { x: 15.0, y: 15.0 }
        ));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = BoxCollider::new(16.0, 16.0);
        let b = BoxCollider::new(16.0, 16.0);
        assert!(!a.overlaps(
            Vector2 { x: 0.0, y: 0.0 },
            &b,
            Vector2 { x: 16.0, y: 0.0 }
        ));
    }

    #[test]
    fn disjoint_rects_do_not_collide() {
        let a = BoxCollider::new(16.0, 16.0);
        let b = BoxCollider::new(16.0, 16.0);
        assert!(!a.overlaps(
            Vector2 { x: 0.0, y: 0.0 },
            &b,
            Vector2 { x: 100.0, y: 0.0 }
        ));
    }
}
