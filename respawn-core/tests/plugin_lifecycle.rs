//! Enabling and disabling the plugin against an in-memory host.

mod common;

use std::sync::Arc;

use common::{FlatWorld, TestHost, overworld, write_config};
use respawn_core::config::{ConfigError, DEFAULT_CONFIG};
use respawn_core::plugin::{CACHE_REFRESH_DELAY, CONFIG_FILE_NAME};
use respawn_core::{PluginError, PluginState, RandomRespawnPlugin};
use tempfile::{NamedTempFile, tempdir};

fn flat_host() -> TestHost {
    TestHost::new(vec![Arc::new(FlatWorld::grass(overworld()))])
}

#[test]
fn missing_config_writes_default_and_enables() {
    let dir = tempdir().expect("temp dir");
    let mut host = flat_host();
    let mut plugin = RandomRespawnPlugin::seeded(1);

    let state = host.enable(&mut plugin, dir.path()).expect("plugin loads");

    assert_eq!(state, PluginState::Enabled);
    let written =
        std::fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).expect("config exists");
    assert_eq!(written, DEFAULT_CONFIG);
    assert_eq!(host.events.join_handler_count(), 1);
    assert_eq!(host.events.respawn_handler_count(), 1);
    assert_eq!(host.scheduler.task_count(), 1);

    let provider = plugin.provider().expect("provider while enabled");
    assert_eq!(provider.radius(), 1000);
    assert_eq!(provider.world(), &overworld());
}

#[test]
fn existing_config_is_not_overwritten() {
    let dir = tempdir().expect("temp dir");
    write_config(dir.path(), "overworld", 42, true, false);
    let mut host = flat_host();
    let mut plugin = RandomRespawnPlugin::seeded(1);

    host.enable(&mut plugin, dir.path()).expect("plugin loads");

    let provider = plugin.provider().expect("provider while enabled");
    assert_eq!(provider.radius(), 42);
    assert_eq!(host.events.join_handler_count(), 1);
    assert_eq!(host.events.respawn_handler_count(), 0);
}

#[test]
fn non_positive_radius_disables_plugin() {
    let dir = tempdir().expect("temp dir");
    write_config(dir.path(), "overworld", 0, true, true);
    let mut host = flat_host();
    let mut plugin = RandomRespawnPlugin::seeded(1);

    let state = host.enable(&mut plugin, dir.path()).expect("invalid config is not an error");

    assert_eq!(state, PluginState::Disabled);
    assert!(plugin.provider().is_none());
    assert_eq!(host.events.join_handler_count(), 0);
    assert_eq!(host.events.respawn_handler_count(), 0);
    assert_eq!(host.scheduler.task_count(), 0);
}

#[test]
fn missing_world_disables_plugin() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "{ location: { radius: 100 }, enabled: { \"on-death\": true } }",
    )
    .expect("config written");
    let mut host = flat_host();
    let mut plugin = RandomRespawnPlugin::seeded(1);

    let state = host.enable(&mut plugin, dir.path()).expect("invalid config is not an error");

    assert_eq!(state, PluginState::Disabled);
    assert_eq!(host.scheduler.task_count(), 0);
}

#[test]
fn malformed_config_disables_plugin() {
    let dir = tempdir().expect("temp dir");
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{ location: ").expect("config written");
    let mut host = flat_host();
    let mut plugin = RandomRespawnPlugin::seeded(1);

    let state = host.enable(&mut plugin, dir.path()).expect("invalid config is not an error");

    assert_eq!(state, PluginState::Disabled);
}

#[test]
fn unreachable_config_dir_is_an_error() {
    // A regular file where the data directory should be.
    let file = NamedTempFile::new().expect("temp file");
    let mut host = flat_host();
    let mut plugin = RandomRespawnPlugin::seeded(1);

    let result = host.enable(&mut plugin, file.path());

    assert!(matches!(
        result,
        Err(PluginError::Config(ConfigError::Io { .. }))
    ));
    assert_eq!(host.scheduler.task_count(), 0);
}

#[test]
fn refresh_fills_cache_every_ten_seconds() {
    let dir = tempdir().expect("temp dir");
    write_config(dir.path(), "overworld", 100, true, true);
    let mut host = flat_host();
    let mut plugin = RandomRespawnPlugin::seeded(7);
    host.enable(&mut plugin, dir.path()).expect("plugin loads");
    let provider = plugin.provider().expect("provider while enabled").clone();

    host.run_ticks(CACHE_REFRESH_DELAY - 1);
    assert!(!provider.has_cached());

    host.run_ticks(1);
    let cached = provider.take_cached().expect("grass is always safe");
    assert_eq!(cached.world, overworld());
    assert!((-100.0..=101.0).contains(&cached.position.x));
    assert!((-100.0..=101.0).contains(&cached.position.z));

    host.run_ticks(CACHE_REFRESH_DELAY);
    assert!(provider.has_cached());
}

#[test]
fn refresh_ignores_unloaded_world() {
    let dir = tempdir().expect("temp dir");
    write_config(dir.path(), "the_nether", 100, true, true);
    let mut host = flat_host();
    let mut plugin = RandomRespawnPlugin::seeded(7);
    host.enable(&mut plugin, dir.path()).expect("plugin loads");
    let provider = plugin.provider().expect("provider while enabled").clone();

    host.run_ticks(CACHE_REFRESH_DELAY * 3);

    assert!(!provider.has_cached());
}

#[test]
fn disable_unregisters_everything() {
    let dir = tempdir().expect("temp dir");
    let mut host = flat_host();
    let mut plugin = RandomRespawnPlugin::seeded(1);
    host.enable(&mut plugin, dir.path()).expect("plugin loads");

    host.disable(&mut plugin, dir.path());

    assert!(plugin.provider().is_none());
    assert_eq!(host.events.join_handler_count(), 0);
    assert_eq!(host.events.respawn_handler_count(), 0);
    assert_eq!(host.scheduler.task_count(), 0);
}
