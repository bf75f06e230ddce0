use std::path::PathBuf;

/// One file accepted into the resource listing.
///
/// The name is the plain file name as enumerated, no directory components.
/// It always starts with the prefix the listing was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File name used as the row label
    pub name: String,
    /// Full path of the file
    pub path: PathBuf,
    /// Size in bytes, if the metadata could be read
    pub size: Option<u64>,
}

impl Entry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}
