//! Screen size resource.

use bevy_ecs::prelude::Resource;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}
