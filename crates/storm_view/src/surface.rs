//! Terminal detail surface.

use std::io::{self, Write};

use storm_list::{DetailSurface, Entry};

/// Detail presentation writing to a terminal-style writer.
///
/// Shows the one entry it is handed: name, size when known, full path.
pub struct TerminalDetailSurface<W: Write> {
    out: W,
}

impl<W: Write> TerminalDetailSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> DetailSurface for TerminalDetailSurface<W> {
    fn show(&mut self, entry: &Entry) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", entry.name)?;
        match entry.size {
            Some(size) => writeln!(self.out, "  size: {size} bytes")?,
            None => writeln!(self.out, "  size: unknown")?,
        }
        writeln!(self.out, "  path: {}", entry.path.display())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_prints_name_size_and_path() {
        let mut surface = TerminalDetailSurface::new(Vec::new());
        let entry = Entry::new("nssl0049.jpg", "/res/nssl0049.jpg").with_size(16);
        surface.show(&entry).unwrap();

        let text = String::from_utf8(surface.out).unwrap();
        assert!(text.contains("nssl0049.jpg"));
        assert!(text.contains("size: 16 bytes"));
        assert!(text.contains("path: /res/nssl0049.jpg"));
    }

    #[test]
    fn test_show_without_metadata() {
        let mut surface = TerminalDetailSurface::new(Vec::new());
        let entry = Entry::new("nssl0010.jpg", "/res/nssl0010.jpg");
        surface.show(&entry).unwrap();

        let text = String::from_utf8(surface.out).unwrap();
        assert!(text.contains("size: unknown"));
    }
}
