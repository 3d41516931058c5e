//! Event handlers that move players to random locations.

use std::sync::Arc;

use respawn_utils::random::Random;
use respawn_utils::random::legacy_random::LegacyRandom;

use crate::event::{EventHandler, PlayerJoinEvent, PlayerRespawnEvent};
use crate::provider::RespawnLocationProvider;
use crate::world::WorldLookup;

/// Teleports players joining for the first time.
pub struct FirstJoinHandler<R: Random = LegacyRandom> {
    provider: Arc<RespawnLocationProvider<R>>,
}

impl<R: Random> FirstJoinHandler<R> {
    /// Creates a new `FirstJoinHandler`.
    #[must_use]
    pub const fn new(provider: Arc<RespawnLocationProvider<R>>) -> Self {
        Self { provider }
    }
}

impl<R: Random + Send> EventHandler<PlayerJoinEvent> for FirstJoinHandler<R> {
    fn handle(&self, event: &mut PlayerJoinEvent) {
        let player = &event.player;
        if player.has_played_before() {
            return;
        }

        let world = player.world();
        let Some(location) = self.provider.resolve_for_world(world.as_ref()) else {
            log::debug!("No safe location found for {}, keeping join position", player.name());
            return;
        };

        log::info!("Sending new player {} to {location}", player.name());
        player.teleport(&location);
    }
}

/// Replaces the world spawn respawn location of dead players.
///
/// Players respawning at their bed are left alone. Respawn anchors are not
/// beds, so anchor respawns are replaced too.
pub struct DeathRespawnHandler<R: Random = LegacyRandom> {
    provider: Arc<RespawnLocationProvider<R>>,
    worlds: Arc<dyn WorldLookup>,
}

impl<R: Random> DeathRespawnHandler<R> {
    /// Creates a new `DeathRespawnHandler`.
    #[must_use]
    pub fn new(provider: Arc<RespawnLocationProvider<R>>, worlds: Arc<dyn WorldLookup>) -> Self {
        Self { provider, worlds }
    }
}

impl<R: Random + Send> EventHandler<PlayerRespawnEvent> for DeathRespawnHandler<R> {
    fn handle(&self, event: &mut PlayerRespawnEvent) {
        if event.is_bed_spawn {
            return;
        }

        let Some(world) = self.worlds.world(&event.respawn_location.world) else {
            log::debug!(
                "Respawn world {} of {} is not loaded",
                event.respawn_location.world,
                event.player.name()
            );
            return;
        };

        if let Some(location) = self.provider.resolve_for_world(world.as_ref()) {
            log::info!("Respawning {} at {location}", event.player.name());
            event.set_respawn_location(location);
        }
    }
}
