use bevy_ecs::prelude::Component;

/// Drawable surface of an entity: a texture key into the
/// [`TextureStore`](crate::resources::texturestore::TextureStore) plus the
/// on-map size in pixels. The texture is stretched to that size and drawn
/// with its top-left corner at the entity position.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }
}
