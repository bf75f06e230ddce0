//! Filesystem enumeration behind the resource listing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Entry, ListError};

/// Scans a resource directory for files whose names start with a fixed
/// prefix.
///
/// Both the directory and the prefix are explicit constructor parameters;
/// there is no implicit search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLister {
    dir: PathBuf,
    prefix: String,
}

impl ResourceLister {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Enumerate the directory once and collect the matching entries.
    ///
    /// Keeps the relative order of the underlying enumeration. Only regular
    /// files are considered; entries whose type cannot be determined are
    /// skipped, as are directories, symlinks, sockets and the like. A
    /// directory with no matching names yields an empty vec, not an error.
    pub fn scan(&self) -> Result<Vec<Entry>, ListError> {
        let read = fs::read_dir(&self.dir).map_err(|source| ListError::DirectoryRead {
            path: self.dir.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in read.filter_map(|result| result.ok()) {
            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(_) => continue, // Skip if we can't determine type
            };
            if !file_type.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if !name.starts_with(&self.prefix) {
                continue;
            }

            let size = entry.metadata().ok().map(|m| m.len());
            entries.push(Entry {
                name,
                path: entry.path(),
                size,
            });
        }

        log::debug!("Scanned {:?}: {} entries match prefix '{}'", self.dir, entries.len(), self.prefix);
        Ok(entries)
    }
}
