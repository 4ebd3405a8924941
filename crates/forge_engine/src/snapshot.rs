use scraper::{ElementRef, Html, Selector};

/// Abstract view of the host document at one instant: assistant messages in
/// document order, each with its plain text and its code blocks. The scraper
/// works against this, never against live markup, so it can be exercised
/// with synthetic snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentSnapshot {
    pub messages: Vec<MessageRegion>,
}

/// One message-like node: the flattened text (markers live here) and the
/// text of each `pre` descendant in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageRegion {
    pub text: String,
    pub code_blocks: Vec<String>,
}

impl MessageRegion {
    pub fn new(text: impl Into<String>, code_blocks: Vec<String>) -> Self {
        Self {
            text: text.into(),
            code_blocks,
        }
    }
}

/// Something that can produce the current document snapshot. The shell backs
/// this with a transcript file; tests hand in snapshots directly.
pub trait TranscriptSource: Send + Sync {
    fn snapshot(&self) -> std::io::Result<DocumentSnapshot>;
}

/// Content-class selectors that identify assistant messages in the
/// transcript markup.
pub const MESSAGE_SELECTORS: &str = ".model-response-text, .markdown";

/// Parses transcript HTML into a snapshot using the known message selectors.
pub fn parse_transcript(html: &str) -> DocumentSnapshot {
    let doc = Html::parse_document(html);
    let message_sel = match Selector::parse(MESSAGE_SELECTORS) {
        Ok(sel) => sel,
        Err(_) => return DocumentSnapshot::default(),
    };
    let pre_sel = match Selector::parse("pre") {
        Ok(sel) => sel,
        Err(_) => return DocumentSnapshot::default(),
    };

    let mut messages = Vec::new();
    for node in doc.select(&message_sel) {
        messages.push(parse_message(node, &pre_sel));
    }
    DocumentSnapshot { messages }
}

fn parse_message(node: ElementRef<'_>, pre_sel: &Selector) -> MessageRegion {
    let text: String = node.text().collect();
    let code_blocks = node
        .select(pre_sel)
        .map(|block| block.text().collect::<String>())
        .collect();
    MessageRegion { text, code_blocks }
}
