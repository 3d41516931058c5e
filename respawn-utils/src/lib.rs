//! Shared primitives for the random respawn plugin: math types, namespaced
//! identifiers, locations, locking and random sources.

pub mod identifier;
pub mod location;
pub mod locks;
pub mod math;
pub mod random;

pub use identifier::Identifier;
pub use location::Location;
pub use math::{BlockPos, Vector3};
