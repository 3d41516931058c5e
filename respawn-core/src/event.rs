//! Player events the plugin listens to, and the registry hosts fire them through.

use std::sync::Arc;

use respawn_utils::Location;

use crate::world::RespawnWorld;

/// The host's view of an online player.
pub trait PlayerHandle: Send + Sync {
    /// The player's name, used in log messages.
    fn name(&self) -> &str;

    /// Whether the player has joined this server before.
    fn has_played_before(&self) -> bool;

    /// The world the player is currently in.
    fn world(&self) -> Arc<dyn RespawnWorld>;

    /// Moves the player to `location`.
    fn teleport(&self, location: &Location);
}

/// Fired after a player joined the server and was placed in a world.
pub struct PlayerJoinEvent {
    /// The player who joined.
    pub player: Arc<dyn PlayerHandle>,
}

impl PlayerJoinEvent {
    /// Creates a new `PlayerJoinEvent`.
    #[must_use]
    pub fn new(player: Arc<dyn PlayerHandle>) -> Self {
        Self { player }
    }
}

/// Fired when a dead player respawns, before they are moved.
///
/// Handlers may replace the respawn location; the host reads it back after
/// all handlers ran.
pub struct PlayerRespawnEvent {
    /// The player who is respawning.
    pub player: Arc<dyn PlayerHandle>,
    /// Where the player will respawn.
    pub respawn_location: Location,
    /// Whether the location comes from the player's bed.
    pub is_bed_spawn: bool,
    /// Whether the location comes from a charged respawn anchor. Anchor
    /// respawns do not count as bed spawns.
    pub is_anchor_spawn: bool,
}

impl PlayerRespawnEvent {
    /// Creates a respawn event for a world spawn respawn.
    #[must_use]
    pub fn new(player: Arc<dyn PlayerHandle>, respawn_location: Location) -> Self {
        Self {
            player,
            respawn_location,
            is_bed_spawn: false,
            is_anchor_spawn: false,
        }
    }

    /// Replaces the respawn location.
    pub fn set_respawn_location(&mut self, location: Location) {
        self.respawn_location = location;
    }
}

/// Handles one kind of event.
pub trait EventHandler<E>: Send + Sync {
    /// Called on the tick thread each time the event fires.
    fn handle(&self, event: &mut E);
}

struct Registration<E> {
    owner: &'static str,
    handler: Arc<dyn EventHandler<E>>,
}

/// Handlers for every event type, in registration order.
#[derive(Default)]
pub struct EventRegistry {
    join: Vec<Registration<PlayerJoinEvent>>,
    respawn: Vec<Registration<PlayerRespawnEvent>>,
}

impl EventRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a join handler on behalf of `owner`.
    pub fn register_join(
        &mut self,
        owner: &'static str,
        handler: Arc<dyn EventHandler<PlayerJoinEvent>>,
    ) {
        self.join.push(Registration { owner, handler });
    }

    /// Registers a respawn handler on behalf of `owner`.
    pub fn register_respawn(
        &mut self,
        owner: &'static str,
        handler: Arc<dyn EventHandler<PlayerRespawnEvent>>,
    ) {
        self.respawn.push(Registration { owner, handler });
    }

    /// Removes every handler registered by `owner`.
    pub fn unregister_all(&mut self, owner: &str) {
        self.join.retain(|r| r.owner != owner);
        self.respawn.retain(|r| r.owner != owner);
    }

    /// Number of registered join handlers.
    #[must_use]
    pub fn join_handler_count(&self) -> usize {
        self.join.len()
    }

    /// Number of registered respawn handlers.
    #[must_use]
    pub fn respawn_handler_count(&self) -> usize {
        self.respawn.len()
    }

    /// Runs every join handler.
    pub fn fire_join(&self, event: &mut PlayerJoinEvent) {
        for registration in &self.join {
            registration.handler.handle(event);
        }
    }

    /// Runs every respawn handler.
    pub fn fire_respawn(&self, event: &mut PlayerRespawnEvent) {
        for registration in &self.respawn {
            registration.handler.handle(event);
        }
    }
}
