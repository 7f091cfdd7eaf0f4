use std::io;
use std::path::PathBuf;

/// Alias for `Result<T, PackError>`.
pub type PackResult<T> = Result<T, PackError>;

/// Failures that abort a pack build.
///
/// Per-asset and per-entry problems are not errors; they are recorded in the
/// [`BuildReport`](crate::BuildReport) instead.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// The working directory could not be created.
    #[error("cannot create working directory in {}", root.display())]
    WorkDir {
        /// Directory the working directory was to be created in.
        root: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A generated document (manifest or item model) could not be written.
    #[error("cannot write {}", path.display())]
    WriteDocument {
        /// The document path inside the working directory.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A generated document could not be serialized.
    #[error("cannot serialize {}", path.display())]
    Serialize {
        /// The document path inside the working directory.
        path: PathBuf,
        /// The underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The archive could not be created, written or finalized.
    #[error("cannot write archive {}", path.display())]
    Archive {
        /// The destination archive.
        path: PathBuf,
        /// The underlying archive error.
        #[source]
        source: zip::result::ZipError,
    },

    /// The finished archive could not be moved to its destination.
    #[error("cannot move archive into place at {}", path.display())]
    Persist {
        /// The destination archive.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
