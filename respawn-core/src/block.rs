//! Surface blocks players can safely be placed on.

use phf::phf_set;
use respawn_utils::Identifier;
use respawn_utils::identifier::VANILLA_NAMESPACE;

/// Block keys used by the plugin and its tests.
pub mod vanilla_blocks {
    use respawn_utils::Identifier;

    /// `minecraft:air`
    pub const AIR: Identifier = Identifier::vanilla_static("air");
    /// `minecraft:grass_block`
    pub const GRASS_BLOCK: Identifier = Identifier::vanilla_static("grass_block");
    /// `minecraft:stone`
    pub const STONE: Identifier = Identifier::vanilla_static("stone");
    /// `minecraft:sand`
    pub const SAND: Identifier = Identifier::vanilla_static("sand");
    /// `minecraft:podzol`
    pub const PODZOL: Identifier = Identifier::vanilla_static("podzol");
    /// `minecraft:dirt`
    pub const DIRT: Identifier = Identifier::vanilla_static("dirt");
    /// `minecraft:water`
    pub const WATER: Identifier = Identifier::vanilla_static("water");
    /// `minecraft:lava`
    pub const LAVA: Identifier = Identifier::vanilla_static("lava");
    /// `minecraft:oak_leaves`
    pub const OAK_LEAVES: Identifier = Identifier::vanilla_static("oak_leaves");
    /// `minecraft:ice`
    pub const ICE: Identifier = Identifier::vanilla_static("ice");
}

/// Paths of the vanilla blocks a player may be placed on top of.
static SAFE_SURFACE_BLOCKS: phf::Set<&'static str> = phf_set! {
    "grass_block",
    "stone",
    "sand",
    "podzol",
};

/// Returns true if `block` is a safe surface to stand on.
///
/// Only the four vanilla blocks grass block, stone, sand and podzol qualify.
#[must_use]
pub fn is_safe_surface(block: &Identifier) -> bool {
    block.namespace == VANILLA_NAMESPACE && SAFE_SURFACE_BLOCKS.contains(block.path.as_ref())
}
