//! Rendering systems.
//!
//! [`render_system`] is an exclusive system: it temporarily takes the Raylib
//! handle and thread out of the world, opens a draw scope, and hands the
//! world to [`render_pass`]. Presentation happens when the draw scope ends.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera::ScrollCamera;
use crate::resources::debugmode::DebugMode;
use crate::resources::levels::LevelRegistry;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

/// Draw the frame. Runs last in the schedule.
pub fn render_system(world: &mut World) {
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("RaylibThread missing from world");
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("RaylibHandle missing from world");

    {
        let mut d = rl.begin_drawing(&thread);
        render_pass(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// Draw the backdrop, then every sprite in z order through the camera.
fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    d.clear_background(Color::BLACK);

    let camera = match world.get_resource::<ScrollCamera>() {
        Some(camera) => *camera,
        // Setup has not run yet; nothing to draw.
        None => return,
    };

    // Backdrop of the active level. The reference keeps the backdrop fixed
    // at the origin; only entities scroll.
    let background = world
        .resource::<LevelRegistry>()
        .active_def()
        .map(|def| def.background.clone());
    if let Some(key) = background {
        let textures = world.resource::<TextureStore>();
        if let Some(texture) = textures.get(&key) {
            d.draw_texture(texture, 0, 0, Color::WHITE);
        }
    }

    // Collect visible sprites, sort by z, then draw: painter's order, so
    // characters < obstacles < portals end up layered like the reference.
    let mut to_draw: Vec<(Sprite, Vector2, ZIndex)> = {
        let mut query = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        query
            .iter(world)
            .filter_map(|(sprite, position, z)| {
                let screen = camera.apply(position.pos);
                let visible = screen.x + sprite.width >= 0.0
                    && screen.x <= camera.view.x
                    && screen.y + sprite.height >= 0.0
                    && screen.y <= camera.view.y;
                visible.then(|| (sprite.clone(), screen, *z))
            })
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    let textures = world.resource::<TextureStore>();
    for (sprite, screen, _z) in &to_draw {
        if let Some(texture) = textures.get(&sprite.tex_key) {
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: texture.width as f32,
                height: texture.height as f32,
            };
            let dest = Rectangle {
                x: screen.x,
                y: screen.y,
                width: sprite.width,
                height: sprite.height,
            };
            d.draw_texture_pro(texture, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        }
    }

    if world.contains_resource::<DebugMode>() {
        render_debug_overlay(world, d, camera);
    }
}

/// Collider outlines plus a diagnostics readout.
fn render_debug_overlay(world: &mut World, d: &mut RaylibDrawHandle, camera: ScrollCamera) {
    let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
    for (collider, position) in colliders.iter(world) {
        let rect = collider.rect(camera.apply(position.pos));
        d.draw_rectangle_lines(
            rect.x as i32,
            rect.y as i32,
            rect.width as i32,
            rect.height as i32,
            Color::RED,
        );
    }

    let screen = *world.resource::<ScreenSize>();
    let time = *world.resource::<WorldTime>();
    let signals = world.resource::<WorldSignals>();

    let text = format!(
        "DEBUG (F11) | FPS {} | frame {} | t {:.1}s",
        d.get_fps(),
        time.frame_count,
        time.elapsed
    );
    d.draw_text(&text, 10, 10, 10, Color::GREEN);

    let level = signals
        .get_string("level")
        .map(String::as_str)
        .unwrap_or("-");
    let health = signals.get_integer("health").unwrap_or(0);
    let lives = signals.get_integer("lives").unwrap_or(0);
    let items = signals.get_integer("items").unwrap_or(0);
    let text = format!(
        "level {} | health {} | lives {} | items {}",
        level, health, lives, items
    );
    d.draw_text(&text, 10, 24, 10, Color::GREEN);

    let text = format!(
        "camera ({:.0}, {:.0}) | dt {:.3}",
        camera.offset.x, camera.offset.y, time.delta
    );
    d.draw_text(&text, 10, screen.h - 20, 10, Color::GREEN);
}
