//! Single-slot backup rotation and scoped file writes.
//!
//! Rotation is two separate filesystem steps (delete old backup, rename current
//! file onto it) followed by a fresh write. None of this is atomic: a crash
//! between steps can lose the previous version or leave no current file.
//! Concurrent writers to the same file are not detected; the last one wins.

use std::ffi::OsString;
use std::fs::{
    self,
    File,
};
use std::io::{
    self,
    BufWriter,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

const BACKUP_EXTENSION: &str = ".backup";

/// `<path>.backup`
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_EXTENSION);
    PathBuf::from(name)
}

/// Moves an existing file at `path` to `<path>.backup`, replacing any older backup.
///
/// Does nothing when `path` does not exist.
///
/// # Errors
/// Propagates failures of the delete or rename.
pub fn rotate(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let backup = backup_path(path);
    if backup.exists() {
        fs::remove_file(&backup)?;
    }
    fs::rename(path, &backup)?;
    tracing::debug!(path = %path.display(), backup = %backup.display(), "Rotated backup");
    Ok(())
}

/// Writes a file from scratch, optionally rotating the previous version first.
///
/// Missing parent directories are created. The file handle is released on
/// every exit path, including when `write` fails.
///
/// # Errors
/// Propagates failures of rotation, creation and of `write` itself.
pub fn write_file<F>(path: &Path, keep_backup: bool, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    if keep_backup {
        rotate(path)?;
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer)?;
    writer.flush()
}
