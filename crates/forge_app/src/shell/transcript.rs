use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, SystemTime};

use forge_core::Msg;
use forge_engine::{parse_transcript, DocumentSnapshot, TranscriptSource};

use super::ShellEvent;

/// Transcript file standing in for the host document.
pub struct FileTranscript {
    path: PathBuf,
}

impl FileTranscript {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TranscriptSource for FileTranscript {
    fn snapshot(&self) -> std::io::Result<DocumentSnapshot> {
        let html = fs::read_to_string(&self.path)?;
        Ok(parse_transcript(&html))
    }
}

/// Polls the transcript and reports every observed change as a mutation.
/// Changes to files under the tool's own output directory count as
/// panel-origin, which the core ignores to avoid feedback loops.
pub fn spawn_watcher(
    path: PathBuf,
    output_dir: &Path,
    interval: Duration,
    tx: mpsc::Sender<ShellEvent>,
) {
    let within_panel = path.starts_with(output_dir);
    thread::spawn(move || {
        let mut last: Option<(Option<SystemTime>, u64)> = None;
        loop {
            let current = fs::metadata(&path)
                .ok()
                .map(|meta| (meta.modified().ok(), meta.len()));
            if current.is_some() && current != last {
                let event = ShellEvent::Core(Msg::MutationObserved { within_panel });
                if tx.send(event).is_err() {
                    break;
                }
            }
            last = current;
            thread::sleep(interval);
        }
    });
}
