use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Owned handle for the blob backing the preview frame.
///
/// At most one document is published at a time: publishing a new one
/// releases the previous file, and `release` tears the resource down
/// entirely, so repeated preview toggles cannot accumulate stale blobs.
#[derive(Debug, Default)]
pub struct PreviewResource {
    current: Option<NamedTempFile>,
}

impl PreviewResource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `html` to a fresh backing file and swaps it in, deleting the
    /// superseded one. On error the prior document stays published.
    pub fn publish(&mut self, html: &str) -> std::io::Result<&Path> {
        let mut file = tempfile::Builder::new()
            .prefix("forge-preview-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(html.as_bytes())?;
        file.flush()?;
        let current = self.current.insert(file);
        Ok(current.path())
    }

    /// Location of the currently published document, if any.
    pub fn path(&self) -> Option<&Path> {
        self.current.as_ref().map(NamedTempFile::path)
    }

    /// Deletes the published document.
    pub fn release(&mut self) {
        self.current = None;
    }
}
