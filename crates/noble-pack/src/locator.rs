use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::report::{AssetOutcome, SkipReason};

/// Resolves asset references against the data directory and copies them
/// into a pack's working tree.
#[derive(Debug, Clone)]
pub struct AssetLocator {
    base_dir: PathBuf,
}

impl AssetLocator {
    /// Create a locator for assets under `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory references are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of an existing file for `reference`, or `None` if there is none.
    pub fn locate(&self, reference: &str) -> Option<PathBuf> {
        let relative = relative_path(reference)?;
        let path = self.base_dir.join(relative);
        path.is_file().then_some(path)
    }

    /// Copy the file behind `reference` to the same relative path under
    /// `dest_root`. Never fails; problems are logged and returned as a skip.
    pub fn stage(&self, reference: &str, dest_root: &Path) -> AssetOutcome {
        let skipped = |reason: SkipReason| AssetOutcome::Skipped {
            reference: reference.to_string(),
            reason,
        };

        let Some(relative) = relative_path(reference) else {
            tracing::warn!("asset reference escapes the data directory: {reference}");
            return skipped(SkipReason::OutsideBaseDir);
        };
        let Some(source) = self.locate(reference) else {
            let missing = self.base_dir.join(&relative);
            tracing::warn!("missing model asset: {}", missing.display());
            return skipped(SkipReason::Missing(missing));
        };

        let destination = dest_root.join(&relative);
        match copy_asset(&source, &destination) {
            Ok(()) => {
                tracing::debug!("staged {} -> {}", source.display(), destination.display());
                AssetOutcome::Copied {
                    reference: reference.to_string(),
                }
            }
            Err(e) => {
                tracing::error!("failed to copy model asset {}: {e}", source.display());
                skipped(SkipReason::CopyFailed(e.to_string()))
            }
        }
    }
}

/// Copy `source` to `destination`, creating missing parent directories.
pub fn copy_asset(source: &Path, destination: &Path) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, destination)?;
    Ok(())
}

/// Turn a reference into a relative path that stays below its root.
/// Backslashes count as separators. Returns `None` for empty, absolute or
/// climbing references.
fn relative_path(reference: &str) -> Option<PathBuf> {
    let normalized = reference.replace('\\', "/");
    let mut relative = PathBuf::new();
    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (!relative.as_os_str().is_empty()).then_some(relative)
}
