//! Core resource listing: prefix-filtered directory scans and the
//! list/detail selection flow built on top of them.

mod entry;
pub use entry::Entry;

mod errors;
pub use errors::ListError;

mod lister;
pub use lister::ResourceLister;

mod browser;
pub use browser::{DetailSurface, EntryBrowser};
