//! File persistence for directories
//!
//! Writes use the write-fsync-rename pattern, so an existing file is either
//! fully replaced or left untouched. Reads load the whole file and hand it
//! to the codec; the directory only exists once decoding succeeds.
//!
//! A directory's file is `<home>/<name>.<ext>`. When loading, the name is
//! the file name with its extension removed and the home is the parent
//! directory of the path.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use contactdb_core::{Error, Limits, Result};
use tracing::{debug, info};

use crate::codec::DirectoryCodec;
use crate::directory::Directory;

/// Path of a directory's file inside `home`
pub fn file_path(home: &Path, name: &str, codec: &dyn DirectoryCodec) -> PathBuf {
    home.join(format!("{}.{}", name, codec.extension()))
}

/// Directory that holds `path`, `.` for a bare file name
pub fn home_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Derive a directory name from a file path.
///
/// The file name must end in `.<extension>`; the rest must be a valid
/// directory name under `limits`.
pub fn directory_name_from_path(path: &Path, extension: &str, limits: &Limits) -> Result<String> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::invalid_path(path, "file name is missing or not UTF-8"))?;

    let suffix = format!(".{}", extension);
    let name = file_name
        .strip_suffix(&suffix)
        .ok_or_else(|| Error::invalid_path(path, format!("expected a {} file", suffix)))?;

    limits
        .validate_directory_name(name)
        .map_err(|e| Error::invalid_path(path, e.to_string()))?;
    Ok(name.to_string())
}

/// Write `bytes` to `path` atomically (write-fsync-rename)
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp_path = PathBuf::from(temp);

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&temp_path)?;

    if let Err(e) = file.write_all(bytes).and_then(|_| file.sync_all()) {
        drop(file);
        let _ = std::fs::remove_file(&temp_path);
        return Err(e.into());
    }
    drop(file);

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e.into());
    }

    // Sync parent directory so the rename is durable
    let parent = home_of(path);
    if let Ok(dir) = File::open(&parent) {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Encode `directory` and write it to `<home>/<name>.<ext>`.
///
/// Returns the path written.
pub fn persist(codec: &dyn DirectoryCodec, directory: &Directory, home: &Path) -> Result<PathBuf> {
    let path = file_path(home, directory.name(), codec);
    let bytes = codec.encode(directory)?;
    atomic_write(&path, &bytes)?;
    info!(
        directory = directory.name(),
        codec = codec.codec_id(),
        path = %path.display(),
        records = directory.len(),
        "directory persisted"
    );
    Ok(path)
}

/// Read the file at `path` and decode it into a new directory.
pub fn load(codec: &dyn DirectoryCodec, path: &Path, limits: &Limits) -> Result<Directory> {
    let name = directory_name_from_path(path, codec.extension(), limits)?;
    let data = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = data.len(), "read directory file");

    let directory = codec.decode(&name, &data, limits)?;
    info!(
        directory = %name,
        codec = codec.codec_id(),
        path = %path.display(),
        records = directory.len(),
        "directory loaded"
    );
    Ok(directory)
}
