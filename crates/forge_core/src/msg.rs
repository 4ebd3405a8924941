use crate::watch::TimerGeneration;

/// One file scraped out of a message: the marker name paired with the
/// trimmed text of its code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedFile {
    pub name: String,
    pub content: String,
}

impl ScrapedFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Ordered `(filename, code)` pairs extracted from a single message.
/// Transient: recomputed on every scan, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionRecord {
    pub pairs: Vec<ScrapedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The host document mutated. `within_panel` marks mutations caused by
    /// the tool's own output, which must not re-trigger a scan.
    MutationObserved { within_panel: bool },
    /// The trailing debounce timer fired.
    DebounceElapsed { generation: TimerGeneration },
    /// The interaction-suppression timeout fired.
    SuppressionElapsed { generation: TimerGeneration },
    /// Scraper results: one record per message, in document order.
    MessagesScraped { records: Vec<ExtractionRecord> },
    /// User selected a file in the tree.
    FileSelected { name: String },
    /// User clicked play/pause.
    PlayPauseClicked,
    /// User clicked clear.
    ClearClicked,
    /// User clicked download.
    DownloadClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
