//! The parts of a host world the plugin reads.

use std::sync::Arc;

use respawn_utils::{BlockPos, Identifier};
use rustc_hash::FxHashMap;

/// The topmost non-air block of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighestBlock {
    /// Position of the block.
    pub pos: BlockPos,
    /// Registry key of the block.
    pub block: Identifier,
}

/// Read access to a loaded world.
pub trait RespawnWorld: Send + Sync {
    /// The world's dimension key.
    fn key(&self) -> &Identifier;

    /// Returns the highest non-air block at column `(x, z)`.
    ///
    /// Columns without any block report air at the world's minimum height.
    fn highest_block_at(&self, x: i32, z: i32) -> HighestBlock;

    /// Returns the biome at `pos`, if the host tracks biomes.
    fn biome_at(&self, _pos: BlockPos) -> Option<Identifier> {
        None
    }
}

/// Looks up loaded worlds by key.
pub trait WorldLookup: Send + Sync {
    /// Returns the world if it is currently loaded.
    fn world(&self, key: &Identifier) -> Option<Arc<dyn RespawnWorld>>;
}

impl WorldLookup for FxHashMap<Identifier, Arc<dyn RespawnWorld>> {
    fn world(&self, key: &Identifier) -> Option<Arc<dyn RespawnWorld>> {
        self.get(key).cloned()
    }
}
