//! A minimal in-memory host for driving the plugin in tests.

#![allow(dead_code, reason = "not every test file uses every helper")]

use std::path::Path;
use std::sync::Arc;

use respawn_core::block::vanilla_blocks;
use respawn_core::event::{EventRegistry, PlayerHandle};
use respawn_core::scheduler::TickScheduler;
use respawn_core::world::{HighestBlock, RespawnWorld, WorldLookup};
use respawn_core::{PluginContext, PluginError, PluginState, RandomRespawnPlugin};
use respawn_utils::locks::SyncMutex;
use respawn_utils::{BlockPos, Identifier, Location};
use rustc_hash::FxHashMap;

/// Lowest block of a flat world, as in vanilla's overworld.
pub const FLAT_MIN_Y: i32 = -64;

/// A superflat world: bedrock, two dirt layers and a top layer.
pub struct FlatWorld {
    key: Identifier,
    top: Identifier,
}

impl FlatWorld {
    pub fn grass(key: Identifier) -> Self {
        Self {
            key,
            top: vanilla_blocks::GRASS_BLOCK,
        }
    }

    pub fn covered_with(key: Identifier, top: Identifier) -> Self {
        Self { key, top }
    }

    /// Y of the top layer.
    pub const fn surface_y() -> i32 {
        FLAT_MIN_Y + 3
    }
}

impl RespawnWorld for FlatWorld {
    fn key(&self) -> &Identifier {
        &self.key
    }

    fn highest_block_at(&self, x: i32, z: i32) -> HighestBlock {
        HighestBlock {
            pos: BlockPos::new(x, Self::surface_y(), z),
            block: self.top.clone(),
        }
    }

    fn biome_at(&self, _pos: BlockPos) -> Option<Identifier> {
        Some(Identifier::vanilla("plains"))
    }
}

/// A player recording every teleport it receives.
pub struct TestPlayer {
    name: String,
    played_before: bool,
    world: Arc<dyn RespawnWorld>,
    teleports: SyncMutex<Vec<Location>>,
}

impl TestPlayer {
    pub fn new(name: &str, played_before: bool, world: Arc<dyn RespawnWorld>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            played_before,
            world,
            teleports: SyncMutex::new(Vec::new()),
        })
    }

    pub fn teleports(&self) -> Vec<Location> {
        self.teleports.lock().clone()
    }
}

impl PlayerHandle for TestPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_played_before(&self) -> bool {
        self.played_before
    }

    fn world(&self) -> Arc<dyn RespawnWorld> {
        self.world.clone()
    }

    fn teleport(&self, location: &Location) {
        self.teleports.lock().push(location.clone());
    }
}

/// Everything a host owns on the plugin's behalf.
pub struct TestHost {
    pub worlds: Arc<FxHashMap<Identifier, Arc<dyn RespawnWorld>>>,
    pub events: EventRegistry,
    pub scheduler: TickScheduler,
}

impl TestHost {
    pub fn new(worlds: Vec<Arc<dyn RespawnWorld>>) -> Self {
        let worlds: FxHashMap<Identifier, Arc<dyn RespawnWorld>> = worlds
            .into_iter()
            .map(|world| (world.key().clone(), world))
            .collect();
        Self {
            worlds: Arc::new(worlds),
            events: EventRegistry::new(),
            scheduler: TickScheduler::new(),
        }
    }

    pub fn world(&self, key: &Identifier) -> Arc<dyn RespawnWorld> {
        self.worlds.world(key).expect("world is loaded")
    }

    pub fn enable(
        &mut self,
        plugin: &mut RandomRespawnPlugin,
        data_dir: &Path,
    ) -> Result<PluginState, PluginError> {
        let mut ctx = PluginContext {
            data_dir,
            worlds: self.worlds.clone(),
            events: &mut self.events,
            scheduler: &mut self.scheduler,
        };
        plugin.on_enable(&mut ctx)
    }

    pub fn disable(&mut self, plugin: &mut RandomRespawnPlugin, data_dir: &Path) {
        let mut ctx = PluginContext {
            data_dir,
            worlds: self.worlds.clone(),
            events: &mut self.events,
            scheduler: &mut self.scheduler,
        };
        plugin.on_disable(&mut ctx);
    }

    pub fn run_ticks(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.scheduler.tick();
        }
    }
}

pub fn overworld() -> Identifier {
    Identifier::vanilla("overworld")
}

/// Writes a config with the given values into `dir`.
pub fn write_config(dir: &Path, world: &str, radius: i32, on_first_join: bool, on_death: bool) {
    let text = format!(
        "{{ location: {{ world: \"{world}\", radius: {radius} }}, \
         enabled: {{ \"on-first-join\": {on_first_join}, \"on-death\": {on_death} }} }}"
    );
    std::fs::write(dir.join("config.json5"), text).expect("config written");
}
