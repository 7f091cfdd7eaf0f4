use std::fmt;
use std::path::{Path, PathBuf};

/// Why an asset or archive entry was left out of the pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The referenced file does not exist at the resolved path.
    Missing(PathBuf),
    /// The reference is absolute or climbs out of the data directory.
    OutsideBaseDir,
    /// The file exists but copying it failed.
    CopyFailed(String),
    /// The file could not be read while writing the archive.
    ReadFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "missing file {}", path.display()),
            Self::OutsideBaseDir => write!(f, "path escapes the data directory"),
            Self::CopyFailed(e) => write!(f, "copy failed: {e}"),
            Self::ReadFailed(e) => write!(f, "read failed: {e}"),
        }
    }
}

/// The result of staging one referenced asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOutcome {
    /// The asset was copied into the working tree.
    Copied {
        /// The reference as written in the definition.
        reference: String,
    },
    /// The asset was left out.
    Skipped {
        /// The reference as written in the definition.
        reference: String,
        /// Why it was left out.
        reason: SkipReason,
    },
}

impl AssetOutcome {
    /// The reference this outcome is about.
    pub fn reference(&self) -> &str {
        match self {
            Self::Copied { reference } | Self::Skipped { reference, .. } => reference,
        }
    }
}

/// A file in the working tree that did not make it into the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Entry name the file would have had.
    pub name: String,
    /// Why it was left out.
    pub reason: SkipReason,
}

/// What a successful build produced.
///
/// A build succeeds even when assets are missing; [`BuildReport::is_complete`]
/// tells a complete pack from a partial one.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// The archive that was written.
    pub destination: PathBuf,
    /// One outcome per distinct referenced asset.
    pub assets: Vec<AssetOutcome>,
    /// Root-relative paths of the generated item model documents.
    pub documents: Vec<String>,
    /// Archive entry names, in write order.
    pub entries: Vec<String>,
    /// Working-tree files left out of the archive.
    pub skipped_entries: Vec<SkippedEntry>,
}

impl BuildReport {
    /// The archive that was written.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// References that were copied.
    pub fn copied(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().filter_map(|o| match o {
            AssetOutcome::Copied { reference } => Some(reference.as_str()),
            AssetOutcome::Skipped { .. } => None,
        })
    }

    /// References that were skipped, with the reason.
    pub fn skipped_assets(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.assets.iter().filter_map(|o| match o {
            AssetOutcome::Skipped { reference, reason } => Some((reference.as_str(), reason)),
            AssetOutcome::Copied { .. } => None,
        })
    }

    /// True if no asset and no archive entry was skipped.
    pub fn is_complete(&self) -> bool {
        self.skipped_assets().next().is_none() && self.skipped_entries.is_empty()
    }
}
