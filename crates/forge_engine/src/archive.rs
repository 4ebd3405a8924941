use std::io::{Cursor, Write};

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Default name for the downloaded archive.
pub const DEFAULT_ARCHIVE_NAME: &str = "forge-project.zip";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("project is empty; nothing to archive")]
    EmptyProject,
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializes the project into an in-memory ZIP archive, one entry per file
/// in store order. An empty project is an error, not an empty archive.
pub fn build_archive(files: &[(String, String)]) -> Result<Vec<u8>, ArchiveError> {
    if files.is_empty() {
        return Err(ArchiveError::EmptyProject);
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, content) in files {
        writer.start_file(name.as_str(), options)?;
        writer.write_all(content.as_bytes())?;
    }
    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
