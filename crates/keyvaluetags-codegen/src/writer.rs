//! Persisting the generated module.
//!
//! Output is written to a temporary file next to the target and renamed over
//! it, so readers never observe a partially written module and a failed run
//! leaves the previous artifact in place.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::{CodegenError, CodegenResult};

/// State of an existing artifact compared with freshly generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// The file matches byte for byte.
    Fresh,
    /// The file exists but differs.
    Stale,
    /// The file does not exist.
    Missing,
}

/// Atomically replace `path` with `contents`, creating parent directories.
///
/// An existing artifact keeps its permissions. A new one gets the same mode a
/// plain file creation would (`0o666` less the umask on Unix).
///
/// # Errors
/// Returns [`CodegenError::Io`] if any step fails; the temporary file is
/// removed and `path` is left untouched.
pub fn write_atomic(path: &Path, contents: &str) -> CodegenResult<()> {
    let io_err = |source: io::Error| CodegenError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(io_err)?;

    let existing = fs::metadata(path)
        .ok()
        .filter(fs::Metadata::is_file)
        .map(|meta| meta.permissions());
    let mut tmp = temp_file_in(dir, existing.clone()).map_err(io_err)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions).map_err(io_err)?;
    }
    tmp.write_all(contents.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote generated module");
    Ok(())
}

fn temp_file_in(dir: &Path, permissions: Option<fs::Permissions>) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    if let Some(permissions) = permissions.or_else(default_permissions) {
        builder.permissions(permissions);
    }
    builder.tempfile_in(dir)
}

#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

/// Compare `contents` with the file at `path` without modifying it.
///
/// # Errors
/// Returns [`CodegenError::Io`] if the file exists but cannot be read.
pub fn check(path: &Path, contents: &str) -> CodegenResult<Freshness> {
    match fs::read(path) {
        Ok(existing) if existing == contents.as_bytes() => Ok(Freshness::Fresh),
        Ok(_) => Ok(Freshness::Stale),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Freshness::Missing),
        Err(source) => Err(CodegenError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
