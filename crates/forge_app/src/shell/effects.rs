use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use forge_core::{
    AppViewModel, Effect, ExtractionRecord, Msg, ScrapedFile, TimerGeneration,
};
use forge_engine::{
    build_archive, synthesize_preview, ArchiveSink, PreviewResource, TranscriptSource,
    DEFAULT_ARCHIVE_NAME,
};
use forge_logging::{forge_error, forge_info, forge_warn};

use super::settings::ShellSettings;
use super::transcript::FileTranscript;
use super::ShellEvent;

/// Executes core effects against the outside world: timers, the scraper,
/// the preview resource, and the archive sink.
pub struct EffectRunner {
    tx: mpsc::Sender<ShellEvent>,
    transcript: FileTranscript,
    preview: PreviewResource,
    settings: ShellSettings,
}

impl EffectRunner {
    pub fn new(tx: mpsc::Sender<ShellEvent>, settings: ShellSettings) -> Self {
        let transcript = FileTranscript::new(settings.transcript_path.clone());
        Self {
            tx,
            transcript,
            preview: PreviewResource::new(),
            settings,
        }
    }

    /// Runs effects in order against the view the update produced them with.
    pub fn run(&mut self, effects: Vec<Effect>, view: &AppViewModel) {
        for effect in effects {
            match effect {
                Effect::StartDebounce { generation } => {
                    self.arm_timer(generation, self.settings.debounce_quiet_period, |g| {
                        Msg::DebounceElapsed { generation: g }
                    });
                }
                Effect::StartSuppression { generation } => {
                    self.arm_timer(generation, self.settings.interaction_suppression, |g| {
                        Msg::SuppressionElapsed { generation: g }
                    });
                }
                Effect::RequestScan => self.run_scan(),
                Effect::LoadPreview => self.load_preview(view),
                Effect::ClearPreview => {
                    self.preview.release();
                    super::ui::preview_cleared();
                }
                Effect::SaveArchive => self.save_archive(view),
                Effect::Notify(notice) => super::ui::show_notice(notice),
            }
        }
    }

    fn arm_timer(
        &self,
        generation: TimerGeneration,
        delay: Duration,
        msg: impl FnOnce(TimerGeneration) -> Msg + Send + 'static,
    ) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = tx.send(ShellEvent::Core(msg(generation)));
        });
    }

    fn run_scan(&self) {
        let snapshot = match self.transcript.snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                forge_warn!("transcript unreadable, skipping scan: {}", err);
                return;
            }
        };
        let records: Vec<ExtractionRecord> = forge_engine::extract_snapshot(&snapshot)
            .into_iter()
            .map(|pairs| ExtractionRecord {
                pairs: pairs
                    .into_iter()
                    .map(|file| ScrapedFile::new(file.name, file.content))
                    .collect(),
            })
            .collect();
        let _ = self.tx.send(ShellEvent::Core(Msg::MessagesScraped { records }));
    }

    fn load_preview(&mut self, view: &AppViewModel) {
        let html = match synthesize_preview(&view.files) {
            Ok(html) => html,
            Err(err) => {
                // The update function guards the entry point, so this only
                // fires if the store changed under us.
                forge_warn!("preview synthesis failed: {}", err);
                return;
            }
        };
        match self.preview.publish(&html) {
            Ok(path) => {
                forge_info!("preview published at {:?}", path);
                super::ui::preview_loaded(path);
            }
            Err(err) => forge_error!("failed to publish preview: {}", err),
        }
    }

    fn save_archive(&self, view: &AppViewModel) {
        let bytes = match build_archive(&view.files) {
            Ok(bytes) => bytes,
            Err(err) => {
                forge_error!("archive build failed: {}", err);
                super::ui::export_failed(&err.to_string());
                return;
            }
        };
        let sink = ArchiveSink::new(self.settings.output_dir.clone());
        match sink.write(DEFAULT_ARCHIVE_NAME, &bytes) {
            Ok(path) => {
                forge_info!("archive saved to {:?}", path);
                super::ui::export_saved(&path);
            }
            Err(err) => {
                forge_error!("archive save failed: {}", err);
                super::ui::export_failed(&err.to_string());
            }
        }
    }
}
