use std::path::PathBuf;

/// Namespace custom assets are copied under.
pub const DEFAULT_NAMESPACE: &str = "nobleitems";
/// Pack format understood by 1.21 clients.
pub const DEFAULT_PACK_FORMAT: u32 = 34;
/// Manifest description.
pub const DEFAULT_DESCRIPTION: &str = "NobleItems Blockbench pack";
/// Default archive file name, relative to the data directory.
pub const DEFAULT_PACK_FILE: &str = "nobleitems-resourcepack.zip";

/// Settings for a pack build.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Namespace of copied assets and generated model ids.
    pub namespace: String,
    /// `pack_format` written to the manifest.
    pub pack_format: u32,
    /// `description` written to the manifest.
    pub description: String,
    /// Directory the per-build working directory is created in.
    /// `None` uses the system temp directory.
    pub work_root: Option<PathBuf>,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            pack_format: DEFAULT_PACK_FORMAT,
            description: DEFAULT_DESCRIPTION.to_string(),
            work_root: None,
        }
    }
}

impl PackConfig {
    /// Set the asset namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the manifest pack format.
    pub fn with_pack_format(mut self, pack_format: u32) -> Self {
        self.pack_format = pack_format;
        self
    }

    /// Set the manifest description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Create working directories under `root` instead of the system temp dir.
    pub fn with_work_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.work_root = Some(root.into());
        self
    }

    /// The directory working directories are created in.
    pub fn work_root(&self) -> PathBuf {
        self.work_root.clone().unwrap_or_else(std::env::temp_dir)
    }
}
