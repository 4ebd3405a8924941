//! Forge engine: transcript scraping, preview synthesis and export.
mod archive;
mod extract;
mod highlight;
mod persist;
mod preview;
mod snapshot;
mod synthesize;

pub use archive::{build_archive, ArchiveError, DEFAULT_ARCHIVE_NAME};
pub use extract::{extract_message, extract_snapshot, find_marker_names, ExtractedFile};
pub use highlight::{language_hint, Highlighter, NullHighlighter};
pub use persist::{ensure_output_dir, ArchiveSink, PersistError};
pub use preview::PreviewResource;
pub use snapshot::{
    parse_transcript, DocumentSnapshot, MessageRegion, TranscriptSource, MESSAGE_SELECTORS,
};
pub use synthesize::{synthesize_preview, SynthesisError, ENTRY_POINT};
