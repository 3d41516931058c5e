//! Plugin lifecycle: reads the config, wires up handlers and the cache refresh.

use std::path::Path;
use std::sync::Arc;

use respawn_utils::random::legacy_random::LegacyRandom;
use thiserror::Error;

use crate::config::{ConfigError, RespawnConfig};
use crate::event::EventRegistry;
use crate::listener::{DeathRespawnHandler, FirstJoinHandler};
use crate::provider::RespawnLocationProvider;
use crate::scheduler::{SchedulerError, TICKS_PER_SECOND, TaskId, TickScheduler};
use crate::world::WorldLookup;

/// Name handlers are registered under.
pub const PLUGIN_NAME: &str = "random-respawn";

/// Config file name inside the plugin's data directory.
pub const CONFIG_FILE_NAME: &str = "config.json5";

/// Ticks before the first cache refresh.
pub const CACHE_REFRESH_DELAY: u64 = 10 * TICKS_PER_SECOND;
/// Ticks between cache refreshes.
pub const CACHE_REFRESH_PERIOD: u64 = 10 * TICKS_PER_SECOND;

/// An error that stops the plugin from loading.
#[derive(Error, Debug)]
pub enum PluginError {
    /// The config file could not be read or written.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The cache refresh task could not be scheduled.
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

/// Whether the plugin is active after [`RandomRespawnPlugin::on_enable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginState {
    /// The config was unusable; nothing was registered.
    Disabled,
    /// Handlers and the refresh task are registered.
    Enabled,
}

/// What the host hands the plugin while enabling or disabling it.
pub struct PluginContext<'a> {
    /// Directory holding the plugin's config file.
    pub data_dir: &'a Path,
    /// Loaded worlds.
    pub worlds: Arc<dyn WorldLookup>,
    /// Event handler registry.
    pub events: &'a mut EventRegistry,
    /// The tick scheduler.
    pub scheduler: &'a mut TickScheduler,
}

/// Scatters players on first join and on death.
#[derive(Default)]
pub struct RandomRespawnPlugin {
    seed: Option<i64>,
    provider: Option<Arc<RespawnLocationProvider>>,
    refresh_task: Option<TaskId>,
}

impl RandomRespawnPlugin {
    /// Creates a plugin with an entropy seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plugin whose random source starts from `seed`.
    #[must_use]
    pub fn seeded(seed: i64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// The location provider, while the plugin is enabled.
    #[must_use]
    pub const fn provider(&self) -> Option<&Arc<RespawnLocationProvider>> {
        self.provider.as_ref()
    }

    /// Loads the config and registers everything.
    ///
    /// An invalid config only logs a warning and leaves the plugin disabled.
    /// Failing to read or create the config file is an error.
    pub fn on_enable(&mut self, ctx: &mut PluginContext<'_>) -> Result<PluginState, PluginError> {
        let config_path = ctx.data_dir.join(CONFIG_FILE_NAME);
        let config = match RespawnConfig::load_or_create(&config_path) {
            Ok(config) => config.validate(),
            Err(err @ ConfigError::Io { .. }) => return Err(err.into()),
            Err(err) => Err(err),
        };

        let config = match config {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Invalid configuration, plugin not enabled: {err}");
                return Ok(PluginState::Disabled);
            }
        };

        log::info!("World: {}, radius: {}", config.world, config.radius);

        let random = self
            .seed
            .map_or_else(LegacyRandom::from_entropy, LegacyRandom::from_seed);
        let provider = Arc::new(RespawnLocationProvider::with_random(&config, random));

        let refresh_provider = provider.clone();
        let worlds = ctx.worlds.clone();
        let task = ctx.scheduler.schedule_repeating(
            CACHE_REFRESH_DELAY,
            CACHE_REFRESH_PERIOD,
            move || refresh_provider.refresh_cache(&*worlds),
        )?;

        if config.on_first_join {
            ctx.events
                .register_join(PLUGIN_NAME, Arc::new(FirstJoinHandler::new(provider.clone())));
        }
        if config.on_death {
            ctx.events.register_respawn(
                PLUGIN_NAME,
                Arc::new(DeathRespawnHandler::new(provider.clone(), ctx.worlds.clone())),
            );
        }

        self.refresh_task = Some(task);
        self.provider = Some(provider);
        Ok(PluginState::Enabled)
    }

    /// Unregisters the handlers and stops the cache refresh.
    pub fn on_disable(&mut self, ctx: &mut PluginContext<'_>) {
        ctx.events.unregister_all(PLUGIN_NAME);
        if let Some(task) = self.refresh_task.take() {
            ctx.scheduler.cancel(task);
        }
        self.provider = None;
    }
}
