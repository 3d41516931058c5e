//! A position inside a specific world.

use std::fmt;

use crate::{BlockPos, Identifier, Vector3};

/// A world key plus a precise position and facing.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// The world this location belongs to.
    pub world: Identifier,
    /// The position inside the world.
    pub position: Vector3<f64>,
    /// Horizontal rotation in degrees.
    pub yaw: f32,
    /// Vertical rotation in degrees.
    pub pitch: f32,
}

impl Location {
    /// Creates a location facing yaw 0, pitch 0.
    #[must_use]
    pub const fn new(world: Identifier, position: Vector3<f64>) -> Self {
        Self {
            world,
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Creates a location at the corner of `block` moved by `offset`.
    #[must_use]
    pub fn at_block(world: Identifier, block: BlockPos, offset: Vector3<f64>) -> Self {
        Self::new(world, block.offset(offset))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.world, self.position)
    }
}
