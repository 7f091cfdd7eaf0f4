use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use noble_core::DefinitionSnapshot;
use serde::Serialize;

use crate::archive;
use crate::config::PackConfig;
use crate::error::{PackError, PackResult};
use crate::locator::AssetLocator;
use crate::overrides;
use crate::report::{AssetOutcome, BuildReport};
use crate::workdir::WorkDir;

/// Manifest path, relative to the pack root.
pub const MANIFEST_FILE: &str = "pack.mcmeta";

#[derive(Serialize)]
struct Manifest<'a> {
    pack: PackMeta<'a>,
}

#[derive(Serialize)]
struct PackMeta<'a> {
    pack_format: u32,
    description: &'a str,
}

/// Builds a resource pack archive from a definition snapshot.
///
/// Each build runs in its own working directory, which is removed before
/// [`PackBuilder::build`] returns, whatever the outcome.
#[derive(Debug)]
pub struct PackBuilder<'a> {
    snapshot: &'a DefinitionSnapshot,
    locator: AssetLocator,
    config: PackConfig,
}

impl<'a> PackBuilder<'a> {
    /// A builder reading assets from `data_dir`, with the default config.
    pub fn new(snapshot: &'a DefinitionSnapshot, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshot,
            locator: AssetLocator::new(data_dir),
            config: PackConfig::default(),
        }
    }

    /// Replace the config.
    pub fn with_config(mut self, config: PackConfig) -> Self {
        self.config = config;
        self
    }

    /// The active config.
    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Build the pack into `destination`, creating its parent directories.
    ///
    /// Missing or unreadable assets are skipped and listed in the report.
    /// Fails only if the working tree, a generated document or the archive
    /// itself cannot be written; on failure an existing `destination` is left
    /// as it was.
    pub fn build(&self, destination: &Path) -> PackResult<BuildReport> {
        tracing::info!(
            "building resource pack from {} items and {} mobs",
            self.snapshot.items.len(),
            self.snapshot.mobs.len()
        );

        let work = WorkDir::create(&self.config.work_root())?;
        let result = self.assemble(work.path(), destination);
        work.close();

        match &result {
            Ok(report) if report.is_complete() => {
                tracing::info!("built resource pack at {}", destination.display());
            }
            Ok(report) => tracing::warn!(
                "built partial resource pack at {} ({} assets and {} entries skipped)",
                destination.display(),
                report.skipped_assets().count(),
                report.skipped_entries.len()
            ),
            Err(e) => tracing::error!("failed to build resource pack: {e}"),
        }
        result
    }

    fn assemble(&self, root: &Path, destination: &Path) -> PackResult<BuildReport> {
        self.write_manifest(root)?;
        let assets = self.stage_assets(root);

        // Mobs are not rendered through item model overrides.
        let groups = overrides::collect(self.snapshot.items.values(), &self.config.namespace);
        let documents = overrides::write_documents(root, &groups)?;

        let archive = archive::write_archive(root, destination)?;

        Ok(BuildReport {
            destination: destination.to_path_buf(),
            assets,
            documents,
            entries: archive.entries,
            skipped_entries: archive.skipped,
        })
    }

    fn write_manifest(&self, root: &Path) -> PackResult<()> {
        let path = root.join(MANIFEST_FILE);
        let manifest = Manifest {
            pack: PackMeta {
                pack_format: self.config.pack_format,
                description: &self.config.description,
            },
        };
        let json = serde_json::to_string(&manifest).map_err(|source| PackError::Serialize {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| PackError::WriteDocument { path, source })
    }

    /// Copy each distinct model and texture reference under
    /// `assets/<namespace>/`.
    fn stage_assets(&self, root: &Path) -> Vec<AssetOutcome> {
        let asset_root = root.join("assets").join(&self.config.namespace);
        let mut seen = BTreeSet::new();
        self.snapshot
            .models()
            .flat_map(|model| model.asset_paths())
            .filter(|reference| seen.insert(*reference))
            .map(|reference| self.locator.stage(reference, &asset_root))
            .collect()
    }
}
