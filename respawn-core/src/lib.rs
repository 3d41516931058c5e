//! Random respawn locations for players on first join and after death.
//!
//! - **[config](config)** - Config file loading and validation
//! - **[block](block)** - The safe surface block allow-list
//! - **[world](world)** - Host world access
//! - **[event](event)** - Player events and handler registration
//! - **[scheduler](scheduler)** - Repeating tick tasks
//! - **[provider](provider)** - Cached and searched respawn locations
//! - **[listener](listener)** - Event handlers that move players
//! - **[plugin](plugin)** - Enable/disable lifecycle

pub mod block;
pub mod config;
pub mod event;
pub mod listener;
pub mod plugin;
pub mod provider;
pub mod scheduler;
pub mod world;

pub use plugin::{PluginContext, PluginError, PluginState, RandomRespawnPlugin};
pub use provider::RespawnLocationProvider;
