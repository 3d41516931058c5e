//! Finds random respawn locations on safe surface blocks.
//!
//! A single pre-computed location is kept in a cache slot. The scheduler
//! refills it every few seconds, and the next player event consumes it. When
//! the slot is empty the event falls back to a bounded search of its own.

use respawn_utils::locks::SyncMutex;
use respawn_utils::random::Random;
use respawn_utils::random::legacy_random::LegacyRandom;
use respawn_utils::{Identifier, Location, Vector3};

use crate::block::is_safe_surface;
use crate::config::ValidatedConfig;
use crate::world::{RespawnWorld, WorldLookup};

/// Maximum number of columns sampled by one uncached lookup.
pub const MAX_SEARCH_ATTEMPTS: usize = 10;

/// Offset from the surface block's corner to where the player is placed:
/// centered on the block, with clearance above it.
pub const SURFACE_OFFSET: Vector3<f64> = Vector3::new(0.5, 2.5, 0.5);

/// Provides random respawn locations inside a square around the world origin.
pub struct RespawnLocationProvider<R: Random = LegacyRandom> {
    world: Identifier,
    radius: i32,
    random: SyncMutex<R>,
    cached: SyncMutex<Option<Location>>,
}

impl<R: Random> RespawnLocationProvider<R> {
    /// Creates a provider drawing coordinates from `random`.
    #[must_use]
    pub fn with_random(config: &ValidatedConfig, random: R) -> Self {
        Self {
            world: config.world.clone(),
            radius: config.radius,
            random: SyncMutex::new(random),
            cached: SyncMutex::new(None),
        }
    }

    /// The world the cache is filled from.
    #[must_use]
    pub const fn world(&self) -> &Identifier {
        &self.world
    }

    /// The search radius in blocks.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Returns true if a pre-computed location is waiting.
    #[must_use]
    pub fn has_cached(&self) -> bool {
        self.cached.lock().is_some()
    }

    /// Removes and returns the cached location.
    pub fn take_cached(&self) -> Option<Location> {
        self.cached.lock().take()
    }

    /// Returns a respawn location for `world`.
    ///
    /// A cached location is handed out first, whichever world it was found
    /// in. Otherwise up to [`MAX_SEARCH_ATTEMPTS`] columns are sampled and the
    /// first safe one wins.
    #[tracing::instrument(level = "trace", skip_all, name = "resolve_respawn")]
    pub fn resolve_for_world(&self, world: &dyn RespawnWorld) -> Option<Location> {
        if let Some(location) = self.take_cached() {
            return Some(location);
        }

        (0..MAX_SEARCH_ATTEMPTS).find_map(|_| self.search_once(world))
    }

    /// Samples one random column and returns a location on top of it if its
    /// highest block is a safe surface.
    pub fn search_once(&self, world: &dyn RespawnWorld) -> Option<Location> {
        let (x, z) = self.sample_column();
        let highest = world.highest_block_at(x, z);

        if log::log_enabled!(log::Level::Debug) {
            let biome = world
                .biome_at(highest.pos)
                .map_or_else(|| "unknown".to_string(), |b| b.to_string());
            log::debug!("Block [{x}, {z}] is {} ({biome})", highest.block);
        }

        is_safe_surface(&highest.block)
            .then(|| Location::at_block(world.key().clone(), highest.pos, SURFACE_OFFSET))
    }

    /// Fills the cache with one search attempt in the configured world.
    ///
    /// Does nothing if the cache is already full or the world is not loaded.
    /// A failed attempt leaves the cache empty until the next refresh.
    pub fn refresh_cache(&self, worlds: &dyn WorldLookup) {
        let mut cached = self.cached.lock();
        if cached.is_some() {
            return;
        }

        let Some(world) = worlds.world(&self.world) else {
            log::debug!("World {} is not loaded, skipping cache refresh", self.world);
            return;
        };

        *cached = self.search_once(world.as_ref());
    }

    /// Picks `x` and `z` uniformly in `[-radius, radius]`.
    fn sample_column(&self) -> (i32, i32) {
        let span = self.radius * 2 + 1;
        let mut random = self.random.lock();
        let x = random.next_i32_bounded(span) - self.radius;
        let z = random.next_i32_bounded(span) - self.radius;
        (x, z)
    }
}
