use std::fs;
use std::io::{self, Read, Seek, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::result::ZipError;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{PackError, PackResult};
use crate::report::{SkipReason, SkippedEntry};

/// What went into an archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveSummary {
    /// Entry names, in write order.
    pub entries: Vec<String>,
    /// Files that could not be read and were left out.
    pub skipped: Vec<SkippedEntry>,
}

/// Why a single entry could not be appended.
#[derive(Debug)]
enum EntryError {
    /// Reading the source failed. The partial entry has been dropped.
    Source(io::Error),
    /// The archive stream itself failed.
    Archive(ZipError),
}

/// Zip every regular file under `root` into `destination`.
///
/// Entries are named by their root-relative path with `/` separators and
/// written in depth-first, file-name order. The archive is first written to
/// a temporary file next to `destination` and only renamed over it once the
/// zip stream has been finished, so a failure leaves any existing
/// `destination` untouched. Unreadable files are skipped and reported.
pub fn write_archive(root: &Path, destination: &Path) -> PackResult<ArchiveSummary> {
    let archive_err = |source: ZipError| PackError::Archive {
        path: destination.to_path_buf(),
        source,
    };

    let parent = destination
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    fs::create_dir_all(parent).map_err(|e| archive_err(e.into()))?;
    let staging = NamedTempFile::new_in(parent).map_err(|e| archive_err(e.into()))?;

    let summary = {
        let mut zip = ZipWriter::new(staging.as_file());
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut summary = ArchiveSummary::default();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(archive_err(io::Error::from(e).into())),
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    tracing::error!("failed to walk {}: {e}", path.display());
                    summary.skipped.push(SkippedEntry {
                        name: entry_name(root, &path),
                        reason: SkipReason::ReadFailed(e.to_string()),
                    });
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry_name(root, entry.path());
            let added = fs::File::open(entry.path())
                .map_err(EntryError::Source)
                .and_then(|mut file| append_entry(&mut zip, &name, &mut file, options));
            match added {
                Ok(()) => summary.entries.push(name),
                Err(EntryError::Source(e)) => {
                    tracing::error!(
                        "failed to add file to resource pack: {}: {e}",
                        entry.path().display()
                    );
                    summary.skipped.push(SkippedEntry {
                        name,
                        reason: SkipReason::ReadFailed(e.to_string()),
                    });
                }
                Err(EntryError::Archive(e)) => return Err(archive_err(e)),
            }
        }

        zip.finish().map_err(archive_err)?;
        summary
    };

    make_readable(staging.as_file()).map_err(|e| archive_err(e.into()))?;
    staging.as_file().sync_all().map_err(|e| archive_err(e.into()))?;
    staging
        .persist(destination)
        .map_err(|e| PackError::Persist {
            path: destination.to_path_buf(),
            source: e.error,
        })?;

    tracing::debug!("wrote {} entries to {}", summary.entries.len(), destination.display());
    Ok(summary)
}

/// Stream `source` into a new entry called `name`.
///
/// A read failure removes the half-written entry again, leaving the archive
/// ready for the next one.
fn append_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    source: &mut impl Read,
    options: SimpleFileOptions,
) -> Result<(), EntryError> {
    zip.start_file(name, options).map_err(EntryError::Archive)?;
    let mut buf = [0u8; 8192];
    loop {
        let read = match source.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                zip.abort_file().map_err(EntryError::Archive)?;
                return Err(EntryError::Source(e));
            }
        };
        zip.write_all(&buf[..read])
            .map_err(|e| EntryError::Archive(e.into()))?;
    }
}

/// Temp files are created owner-only; packs get the usual `rw-r--r--`.
#[cfg(unix)]
fn make_readable(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn make_readable(_file: &fs::File) -> io::Result<()> {
    Ok(())
}

/// Root-relative entry name of `path` with `/` separators.
pub fn entry_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
