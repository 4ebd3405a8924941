use forge_engine::{extract_message, extract_snapshot, find_marker_names, MessageRegion};
use pretty_assertions::assert_eq;

fn region(text: &str, blocks: &[&str]) -> MessageRegion {
    MessageRegion::new(text, blocks.iter().map(|b| b.to_string()).collect())
}

fn pairs(region: &MessageRegion) -> Vec<(String, String)> {
    extract_message(region)
        .into_iter()
        .map(|file| (file.name, file.content))
        .collect()
}

#[test]
fn markers_found_in_order_and_trimmed() {
    let names = find_marker_names(
        "Here is [File: index.html] and later [file:  my-app.js] plus [FILE: style.css]",
    );
    assert_eq!(names, vec!["index.html", "my-app.js", "style.css"]);
}

#[test]
fn placeholder_marker_is_filtered() {
    let names = find_marker_names("Use [File: filename.ext] then [File: real.js]");
    assert_eq!(names, vec!["real.js"]);
}

#[test]
fn malformed_markers_do_not_match() {
    // No extension, non-alphanumeric extension, missing brackets.
    assert_eq!(find_marker_names("[File: noext]"), Vec::<String>::new());
    assert_eq!(find_marker_names("[File: bad.c++]"), Vec::<String>::new());
    assert_eq!(find_marker_names("File: loose.js"), Vec::<String>::new());
}

#[test]
fn nth_marker_pairs_with_nth_code_block() {
    let msg = region("[File: a.js] text [File: b.js]", &["1", "2"]);
    assert_eq!(
        pairs(&msg),
        vec![
            ("a.js".to_string(), "1".to_string()),
            ("b.js".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn surplus_markers_are_unused() {
    let msg = region("[File: a.js] [File: b.js] [File: c.js]", &["1", "2"]);
    assert_eq!(
        pairs(&msg),
        vec![
            ("a.js".to_string(), "1".to_string()),
            ("b.js".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn surplus_code_blocks_are_dropped() {
    let msg = region("[File: only.js]", &["kept", "dropped", "dropped too"]);
    assert_eq!(pairs(&msg), vec![("only.js".to_string(), "kept".to_string())]);
}

#[test]
fn code_text_is_trimmed() {
    let msg = region("[File: a.css]", &["\n  p { color: red }\n\n"]);
    assert_eq!(
        pairs(&msg),
        vec![("a.css".to_string(), "p { color: red }".to_string())]
    );
}

#[test]
fn messages_without_markers_or_blocks_contribute_nothing() {
    let snapshot = forge_engine::DocumentSnapshot {
        messages: vec![
            region("prose only, no files here", &[]),
            region("a block but no marker", &["orphan code"]),
            region("[File: a.js]", &["1"]),
        ],
    };
    let records = extract_snapshot(&snapshot);
    assert_eq!(records.len(), 3);
    assert!(records[0].is_empty());
    assert!(records[1].is_empty());
    assert_eq!(records[2].len(), 1);
}
