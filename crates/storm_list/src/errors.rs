//! Error types for building a resource listing.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while building a resource listing.
///
/// A failed scan is a value, not a process exit. Callers that present the
/// listing keep an empty list alongside the error (see
/// [`EntryBrowser::load`](crate::EntryBrowser::load)).
#[derive(Debug, Error)]
pub enum ListError {
    #[error("Failed to read resource directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
