//! List/detail flow over a scanned resource listing.

use std::io;

use crate::{Entry, ListError, ResourceLister};

/// Receives the selected entry for display.
///
/// This is the seam to the detail presentation: its sole responsibility is
/// to show the entry it is handed.
pub trait DetailSurface {
    fn show(&mut self, entry: &Entry) -> io::Result<()>;
}

/// Read-once list of entries with a bounds-checked selection.
///
/// The listing is populated on load and never refreshed. The selection is an
/// index into the listing; it can only be set through the checked operations
/// here and is consumed when the entry is handed to a detail surface.
pub struct EntryBrowser {
    entries: Vec<Entry>,
    selected: Option<usize>,
    error: Option<ListError>,
}

impl EntryBrowser {
    /// Scan once with the given lister.
    ///
    /// A failed scan produces an empty browser that retains the error for
    /// the presentation layer instead of propagating it.
    pub fn load(lister: &ResourceLister) -> Self {
        match lister.scan() {
            Ok(entries) => Self {
                entries,
                selected: None,
                error: None,
            },
            Err(err) => {
                log::error!("{err}");
                Self {
                    entries: Vec::new(),
                    selected: None,
                    error: Some(err),
                }
            }
        }
    }

    /// Build a browser over an already collected listing.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            selected: None,
            error: None,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// The scan failure the browser came up with, if any.
    pub fn list_error(&self) -> Option<&ListError> {
        self.error.as_ref()
    }

    /// Select row `index`.
    ///
    /// Returns false and leaves the selection unchanged if the row does not
    /// exist.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Move the selection one row down, clamped to the last row.
    /// With no selection yet, selects the first row.
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1).min(self.entries.len() - 1),
            None => 0,
        });
    }

    /// Move the selection one row up, clamped to the first row.
    /// With no selection yet, selects the first row.
    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => index.saturating_sub(1),
            None => 0,
        });
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The currently selected entry, if any.
    pub fn selected(&self) -> Option<&Entry> {
        let index = self.selected?;
        self.entries.get(index)
    }

    /// Hand the selected entry to the detail surface.
    ///
    /// The selection is consumed: it is cleared whether or not the surface
    /// manages to display the entry. Returns true if an entry was shown,
    /// false if nothing was selected.
    pub fn activate(&mut self, surface: &mut dyn DetailSurface) -> io::Result<bool> {
        let Some(index) = self.selected.take() else {
            return Ok(false);
        };
        // Selection is only set through the checked operations above, so the
        // index is always in range while the listing is unchanged.
        surface.show(&self.entries[index])?;
        Ok(true)
    }
}
