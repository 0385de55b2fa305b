//! Camera follow system.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera::ScrollCamera;

/// Recenter the scroll camera on the player.
///
/// Runs before movement, so the camera tracks the player's pre-move
/// position: the view trails the player by one tick, as in the reference.
pub fn camera_follow(
    mut camera: ResMut<ScrollCamera>,
    query: Query<&MapPosition, With<Player>>,
) {
    if let Ok(position) = query.single() {
        camera.update(position.pos);
    }
}
