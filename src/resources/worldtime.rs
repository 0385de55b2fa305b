use bevy_ecs::prelude::Resource;

/// Wall-clock bookkeeping for the current run. Movement is fixed-tick and
/// does not consume this; it feeds logging and the debug overlay.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Seconds since the loop started.
    pub elapsed: f32,
    /// Seconds spent on the previous frame.
    pub delta: f32,
    /// Frames rendered since the loop started.
    pub frame_count: u64,
}
