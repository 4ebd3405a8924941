use std::sync::OnceLock;

use forge_logging::forge_trace;
use regex::Regex;

use crate::snapshot::{DocumentSnapshot, MessageRegion};

/// A filename marker paired with the trimmed text of its code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub name: String,
    pub content: String,
}

/// Literal placeholder that appears in instructions to the assistant; it is
/// a known non-file and is always filtered out.
const NAME_PLACEHOLDER: &str = "filename.ext";

/// Marker convention: `[File: <stem>.<ext>]`, keyword case-insensitive,
/// extension required. Stems may contain word characters, dots, dashes and
/// whitespace; anything else fails the match and the content is never
/// captured.
fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"(?i)\[file:\s*([\w.\-\s]+\.[a-z0-9]+)\]").expect("marker pattern")
    })
}

/// Filename markers in `text`, in order of appearance, trimmed, with the
/// placeholder filtered out.
pub fn find_marker_names(text: &str) -> Vec<String> {
    marker_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().trim().to_string())
        .filter(|name| !name.eq_ignore_ascii_case(NAME_PLACEHOLDER))
        .collect()
}

/// Pairs the Nth marker with the Nth code block, positionally. Markers and
/// code blocks are assumed to appear in matching order and count; surplus
/// code blocks are dropped and surplus markers left unused. This mirrors the
/// documented source convention rather than guessing at proximity.
pub fn extract_message(region: &MessageRegion) -> Vec<ExtractedFile> {
    let names = find_marker_names(&region.text);
    if names.len() != region.code_blocks.len() {
        forge_trace!(
            "marker/code-block count mismatch: {} markers, {} blocks",
            names.len(),
            region.code_blocks.len()
        );
    }
    names
        .into_iter()
        .zip(region.code_blocks.iter())
        .map(|(name, code)| ExtractedFile {
            name,
            content: code.trim().to_string(),
        })
        .collect()
}

/// Extraction for every message of a snapshot, in document order. Messages
/// with no markers or no code blocks contribute an empty record.
pub fn extract_snapshot(snapshot: &DocumentSnapshot) -> Vec<Vec<ExtractedFile>> {
    snapshot.messages.iter().map(extract_message).collect()
}
