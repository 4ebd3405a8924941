use std::io::BufRead;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use forge_core::{AppViewModel, Msg, Notice};
use forge_engine::{language_hint, Highlighter};

use super::ShellEvent;

const EMPTY_PLACEHOLDER: &str = "// Ready to forge...";

/// Paints the file tree, status line and active-file display.
pub fn render(view: &AppViewModel, highlighter: &dyn Highlighter) {
    println!();
    if view.preview_mode {
        println!("[preview running - `pause` to return to the file browser]");
    }
    println!("-- {} files --", view.file_count());
    for name in &view.file_names {
        let marker = if view.active_file.as_deref() == Some(name.as_str()) {
            "*"
        } else {
            " "
        };
        println!(" {marker} {name}");
    }
    match (&view.active_file, &view.active_content) {
        (Some(name), Some(content)) => {
            let hint = language_hint(name);
            let rendered = highlighter
                .highlight(hint, content)
                .unwrap_or_else(|| content.clone());
            println!("--- {name} ({hint}) ---");
            println!("{rendered}");
        }
        _ => println!("{EMPTY_PLACEHOLDER}"),
    }
}

pub fn show_notice(notice: Notice) {
    match notice {
        Notice::MissingEntryPoint => {
            println!("Cannot run: index.html is missing! (Tip: ask the assistant to generate it)");
        }
        Notice::EmptyProject => println!("No files to download!"),
    }
}

pub fn preview_loaded(path: &Path) {
    println!("Preview ready: {}", path.display());
}

pub fn preview_cleared() {
    println!("Preview stopped.");
}

pub fn export_saved(path: &Path) {
    println!("Project saved: {}", path.display());
}

pub fn export_failed(reason: &str) {
    println!("Download failed: {reason}");
}

/// Reads user commands from stdin: the four panel actions plus quit.
pub fn spawn_input_reader(tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            let event = match parse_command(line.trim()) {
                Some(event) => event,
                None => {
                    println!("commands: play | pause | clear | download | select <file> | quit");
                    continue;
                }
            };
            let quitting = event == ShellEvent::Quit;
            if tx.send(event).is_err() || quitting {
                break;
            }
        }
        let _ = tx.send(ShellEvent::Quit);
    });
}

fn parse_command(line: &str) -> Option<ShellEvent> {
    if let Some(name) = line.strip_prefix("select ") {
        return Some(ShellEvent::Core(Msg::FileSelected {
            name: name.trim().to_string(),
        }));
    }
    match line {
        "play" | "pause" => Some(ShellEvent::Core(Msg::PlayPauseClicked)),
        "clear" => Some(ShellEvent::Core(Msg::ClearClicked)),
        "download" => Some(ShellEvent::Core(Msg::DownloadClicked)),
        "quit" | "exit" => Some(ShellEvent::Quit),
        "" => Some(ShellEvent::Core(Msg::NoOp)),
        _ => None,
    }
}
