//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay and extra
//! diagnostics; remove it to disable them.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws collider outlines and
/// a diagnostics readout.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
