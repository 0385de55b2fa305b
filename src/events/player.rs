//! Player damage and defeat events.
//!
//! [`DamagePlayerEvent`] is the operation surface for hurting the player;
//! its observer applies the damage and, when the hit leaves health at or
//! below zero, triggers exactly one [`PlayerDefeatedEvent`]. Defeat has no
//! further consequence yet (no game-over flow exists); the observer logs it
//! and raises the `player_defeated` signal.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::resources::worldsignals::WorldSignals;

/// Apply damage to the player.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamagePlayerEvent {
    pub amount: i32,
}

/// Fired once per damaging hit that leaves the player defeated.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDefeatedEvent {}

/// Subtract the damage, publish the new health, and report defeat.
pub fn observe_player_damage(
    trigger: On<DamagePlayerEvent>,
    mut commands: Commands,
    mut players: Query<&mut Player>,
    mut signals: ResMut<WorldSignals>,
) {
    let amount = trigger.event().amount;
    for mut player in players.iter_mut() {
        let defeated = player.take_damage(amount);
        signals.set_integer("health", player.health);
        if defeated {
            commands.trigger(PlayerDefeatedEvent {});
        }
    }
}

/// Log the defeat and raise the `player_defeated` signal.
pub fn observe_player_defeated(
    _trigger: On<PlayerDefeatedEvent>,
    mut signals: ResMut<WorldSignals>,
) {
    log::info!("player defeated");
    signals.set_flag("player_defeated");
}
