//! Player character state.

use bevy_ecs::prelude::Component;

/// Starting health of a freshly spawned player.
pub const DEFAULT_HEALTH: i32 = 100;
/// Starting life count of a freshly spawned player.
pub const DEFAULT_LIVES: i32 = 5;

/// Hero stats: health, lives, and the (initially empty) inventory.
///
/// Health is deliberately unclamped in both directions: [`Player::heal`] can
/// push it past the starting value and [`Player::take_damage`] can drive it
/// below zero. Defeat is reported to the caller, which is responsible for
/// firing [`PlayerDefeatedEvent`](crate::events::player::PlayerDefeatedEvent).
#[derive(Component, Clone, Debug)]
pub struct Player {
    pub health: i32,
    pub lives: i32,
    pub inventory: Vec<String>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            health: DEFAULT_HEALTH,
            lives: DEFAULT_LIVES,
            inventory: Vec::new(),
        }
    }

    /// Subtract `amount` from health. Returns `true` when the player is
    /// defeated, i.e. health is at or below zero after the hit.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        self.health <= 0
    }

    /// Restore `amount` health. There is no upper clamp.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }

    /// Weapon stub: there is no projectile system, so firing only leaves a
    /// trace in the log.
    pub fn shoot(&self) {
        log::info!("shoot!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_has_defaults() {
        let player = Player::new();
        assert_eq!(player.health, 100);
        assert_eq!(player.lives, 5);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn damage_below_zero_reports_defeat() {
        let mut player = Player::new();
        let defeated = player.take_damage(150);
        assert!(defeated);
        assert_eq!(player.health, -50);
    }

    #[test]
    fn damage_above_zero_is_not_defeat() {
        let mut player = Player::new();
        let defeated = player.take_damage(99);
        assert!(!defeated);
        assert_eq!(player.health, 1);
    }

    #[test]
    fn heal_has_no_upper_clamp() {
        let mut player = Player::new();
        player.heal(50);
        assert_eq!(player.health, 150);
    }
}
