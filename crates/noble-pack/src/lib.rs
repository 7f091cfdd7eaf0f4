//! Resource pack assembly for NobleItems.
//!
//! Given a [`DefinitionSnapshot`](noble_core::DefinitionSnapshot), a
//! [`PackBuilder`] produces one zip archive holding the pack manifest, a copy
//! of every referenced model and texture under the pack namespace, and one
//! generated item model per base type that routes variant ids to the custom
//! models.
//!
//! Missing or unreadable assets never abort a build; they are logged and
//! listed in the returned [`BuildReport`]. Only structural failures surface
//! as a [`PackError`].

/// Zip serialization of a directory tree.
pub mod archive;
/// The end-to-end pack build.
pub mod assembler;
/// Pack-wide settings.
pub mod config;
/// Error types for pack builds.
pub mod error;
/// Resolving and staging asset files.
pub mod locator;
/// Generated item model override documents.
pub mod overrides;
/// Per-build outcome records.
pub mod report;
/// The scoped working directory of a build.
pub mod workdir;

/// Re-export the builder.
pub use assembler::PackBuilder;
/// Re-export configuration.
pub use config::PackConfig;
/// Re-export error types.
pub use error::{PackError, PackResult};
/// Re-export report types.
pub use report::{AssetOutcome, BuildReport, SkipReason};
