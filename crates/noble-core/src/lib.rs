//! Core types for NobleItems: custom item and mob definitions.
//!
//! This crate defines the data model that the definition files load into and
//! that the resource pack builder reads from. It is independent of the pack
//! pipeline: you can construct a [`DefinitionSnapshot`] programmatically or
//! load one from a data directory with [`loader::load_snapshot`].

/// Error types used throughout the crate.
pub mod error;
/// Custom item definitions.
pub mod item;
/// Loading definitions from JSON files on disk.
pub mod loader;
/// Custom mob definitions and equipment slots.
pub mod mob;
/// Model references and item stats shared by items and mobs.
pub mod model;
/// Keyed definition stores and the snapshot handed to a pack build.
pub mod registry;

/// Re-export error types.
pub use error::{NobleError, NobleResult};
/// Re-export item types.
pub use item::ItemDefinition;
/// Re-export mob types.
pub use mob::{EquipmentSlot, MobDefinition};
/// Re-export model types.
pub use model::{ItemStats, ModelReference};
/// Re-export registry types.
pub use registry::{Definition, DefinitionSnapshot, Registry};
