use forge_engine::{synthesize_preview, SynthesisError};
use pretty_assertions::assert_eq;

fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(n, c)| (n.to_string(), c.to_string()))
        .collect()
}

#[test]
fn full_project_becomes_one_document() {
    let files = entries(&[
        ("index.html", "<p>hi</p>"),
        ("style.css", "p{color:red}"),
        ("script.js", "alert(1)"),
    ]);
    let doc = synthesize_preview(&files).unwrap();

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<p>hi</p>"));
    assert_eq!(doc.matches("<style>").count(), 1);
    assert_eq!(doc.matches("<script>").count(), 1);
    assert!(doc.contains("/* --- style.css --- */"));
    assert!(doc.contains("p{color:red}"));
    assert!(doc.contains("/* --- script.js --- */"));
    assert!(doc.contains("alert(1)"));
}

#[test]
fn synthesis_is_deterministic() {
    let files = entries(&[
        ("index.html", "<html><head></head><body><p>x</p></body></html>"),
        ("a.css", "p{}"),
        ("b.js", "1+1"),
    ]);
    assert_eq!(
        synthesize_preview(&files).unwrap(),
        synthesize_preview(&files).unwrap()
    );
}

#[test]
fn stylesheet_links_are_stripped() {
    let files = entries(&[
        (
            "index.html",
            r#"<html><head><link rel="stylesheet" href="style.css"><LINK REL='STYLESHEET' HREF='other.css'></head><body></body></html>"#,
        ),
        ("style.css", "p{margin:0}"),
    ]);
    let doc = synthesize_preview(&files).unwrap();

    assert!(!doc.to_lowercase().contains("<link"));
    assert!(doc.contains("p{margin:0}"));
}

#[test]
fn css_and_js_concatenate_in_store_order() {
    let files = entries(&[
        ("index.html", "<html><head></head><body></body></html>"),
        ("first.css", "a{}"),
        ("second.css", "b{}"),
        ("first.js", "one()"),
        ("second.js", "two()"),
    ]);
    let doc = synthesize_preview(&files).unwrap();

    let first_css = doc.find("/* --- first.css --- */").unwrap();
    let second_css = doc.find("/* --- second.css --- */").unwrap();
    assert!(first_css < second_css);

    let first_js = doc.find("/* --- first.js --- */").unwrap();
    let second_js = doc.find("/* --- second.js --- */").unwrap();
    assert!(first_js < second_js);
}

#[test]
fn forced_layout_rule_precedes_project_css() {
    let files = entries(&[
        ("index.html", "<html><head></head><body></body></html>"),
        ("style.css", "body{height:10px}"),
    ]);
    let doc = synthesize_preview(&files).unwrap();

    let forced = doc.find("height: 100% !important").unwrap();
    let project = doc.find("body{height:10px}").unwrap();
    assert!(forced < project);
}

#[test]
fn style_lands_in_head_and_script_before_body_close() {
    let files = entries(&[
        ("index.html", "<html><head><title>t</title></head><body><p>x</p></body></html>"),
        ("a.js", "go()"),
    ]);
    let doc = synthesize_preview(&files).unwrap();

    let style = doc.find("<style>").unwrap();
    let head_close = doc.find("</head>").unwrap();
    assert!(style < head_close);

    let script = doc.find("<script>").unwrap();
    let body_close = doc.find("</body>").unwrap();
    assert!(doc.find("<p>x</p>").unwrap() < script);
    assert!(script < body_close);
}

#[test]
fn missing_entry_point_is_an_error() {
    let files = entries(&[("main.js", "alert(1)")]);
    assert_eq!(
        synthesize_preview(&files),
        Err(SynthesisError::MissingEntryPoint)
    );
}
