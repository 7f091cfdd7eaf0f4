use std::path::PathBuf;

/// Alias for `Result<T, NobleError>`.
pub type NobleResult<T> = Result<T, NobleError>;

/// Errors that can occur when loading or writing definition files.
#[derive(Debug, thiserror::Error)]
pub enum NobleError {
    /// A definition file does not exist.
    #[error("definition file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    /// A definition file could not be read or written.
    #[error("cannot access {}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A definition file is not valid JSON or has the wrong shape.
    #[error("malformed definition file {}", path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}
