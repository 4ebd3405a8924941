/// Optional syntax-highlighting collaborator. The shell renders plain text
/// when no real implementation is wired in; the feature degrades silently.
pub trait Highlighter: Send + Sync {
    /// Returns highlighted markup for `code`, or `None` to fall back to the
    /// raw text.
    fn highlight(&self, language: &str, code: &str) -> Option<String>;
}

/// Stand-in used when no highlighting collaborator is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHighlighter;

impl Highlighter for NullHighlighter {
    fn highlight(&self, _language: &str, _code: &str) -> Option<String> {
        None
    }
}

/// Language hint derived from the filename extension.
pub fn language_hint(filename: &str) -> &'static str {
    match filename.rsplit('.').next() {
        Some("html") | Some("htm") => "html",
        Some("css") => "css",
        Some("js") | Some("mjs") => "javascript",
        Some("json") => "json",
        Some("md") => "markdown",
        Some("svg") | Some("xml") => "xml",
        _ => "plaintext",
    }
}
