use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Entry point the synthesizer requires in the project.
pub const ENTRY_POINT: &str = "index.html";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("project has no {ENTRY_POINT} entry point")]
    MissingEntryPoint,
}

/// Forced on the preview root so the frame fills its container no matter
/// what the generated page styles itself with.
const FORCED_LAYOUT_CSS: &str = "\
html, body {
    height: 100% !important;
    margin: 0 !important;
    padding: 0 !important;
    width: 100% !important;
    overflow-x: hidden;
}
";

fn stylesheet_link_regex() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| {
        Regex::new(r#"(?i)<link\s+[^>]*rel=["']stylesheet["'][^>]*>"#).expect("link pattern")
    })
}

/// Assembles one self-contained HTML document from the project files, in
/// store order: `index.html` as the base, every `.css` entry in one style
/// block, every `.js` entry in one script block. Pure function of its input;
/// the same entries always yield the identical string.
pub fn synthesize_preview(files: &[(String, String)]) -> Result<String, SynthesisError> {
    let base = files
        .iter()
        .find(|(name, _)| name == ENTRY_POINT)
        .map(|(_, content)| content.as_str())
        .ok_or(SynthesisError::MissingEntryPoint)?;

    let lower = base.to_lowercase();
    let mut html = if lower.contains("<html") {
        base.to_string()
    } else {
        format!("<html><body>{base}</body></html>")
    };
    if !lower.contains("<!doctype html>") {
        html = format!("<!DOCTYPE html>\n{html}");
    }

    // The synthesized style block is the sole source of styling; external
    // stylesheet links would double-load or 404 on relative paths.
    html = stylesheet_link_regex().replace_all(&html, "").into_owned();

    let mut css = String::from(FORCED_LAYOUT_CSS);
    for (name, content) in files {
        if name.ends_with(".css") {
            css.push_str(&format!("\n/* --- {name} --- */\n{content}\n"));
        }
    }

    let mut js = String::new();
    for (name, content) in files {
        if name.ends_with(".js") {
            js.push_str(&format!("\n/* --- {name} --- */\n{content}\n"));
        }
    }

    let style_tag = format!("<style>{css}</style>");
    if html.contains("</head>") {
        html = html.replacen("</head>", &format!("{style_tag}\n</head>"), 1);
    } else if html.contains("<html>") {
        html = html.replacen("<html>", &format!("<html><head>{style_tag}</head>"), 1);
    } else {
        html = format!("{style_tag}\n{html}");
    }

    let script_tag = format!("<script>{js}</script>");
    if html.contains("</body>") {
        html = html.replacen("</body>", &format!("{script_tag}\n</body>"), 1);
    } else {
        html = format!("{html}\n{script_tag}");
    }

    Ok(html)
}
