use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{PackError, PackResult};

const PREFIX: &str = "nobleitems-pack-";

/// A uniquely named directory that is removed when dropped.
///
/// Removal failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct WorkDir {
    path: PathBuf,
    dir: Option<TempDir>,
}

impl WorkDir {
    /// Create a fresh working directory inside `root`.
    pub fn create(root: &Path) -> PackResult<Self> {
        let workdir_err = |source| PackError::WorkDir {
            root: root.to_path_buf(),
            source,
        };
        fs::create_dir_all(root).map_err(workdir_err)?;
        let dir = tempfile::Builder::new()
            .prefix(PREFIX)
            .tempdir_in(root)
            .map_err(workdir_err)?;

        tracing::debug!("created working directory {}", dir.path().display());
        Ok(Self {
            path: dir.path().to_path_buf(),
            dir: Some(dir),
        })
    }

    /// The directory's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the directory now instead of at drop.
    pub fn close(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };
        match dir.close() {
            Ok(()) => tracing::debug!("removed working directory {}", self.path.display()),
            Err(e) => tracing::warn!(
                "failed to remove working directory {}: {e}",
                self.path.display()
            ),
        }
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_per_build() {
        let root = TempDir::new().unwrap();
        let a = WorkDir::create(root.path()).unwrap();
        let b = WorkDir::create(root.path()).unwrap();
        assert_ne!(a.path(), b.path());
        assert!(a.path().starts_with(root.path()));
        assert!(
            a.path()
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with(PREFIX)
        );
    }

    #[test]
    fn removed_with_contents_on_close() {
        let root = TempDir::new().unwrap();
        let work = WorkDir::create(root.path()).unwrap();
        let path = work.path().to_path_buf();
        fs::create_dir_all(path.join("a/b")).unwrap();
        fs::write(path.join("a/b/c.txt"), "x").unwrap();

        work.close();
        assert!(!path.exists());
    }

    #[test]
    fn removed_on_drop() {
        let root = TempDir::new().unwrap();
        let path = {
            let work = WorkDir::create(root.path()).unwrap();
            work.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn already_removed_is_not_fatal() {
        let root = TempDir::new().unwrap();
        let work = WorkDir::create(root.path()).unwrap();
        fs::remove_dir_all(work.path()).unwrap();
        work.close();
    }

    #[test]
    fn root_that_is_a_file_fails() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("file");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            WorkDir::create(&file),
            Err(PackError::WorkDir { .. })
        ));
    }
}
