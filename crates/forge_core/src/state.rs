use crate::msg::ExtractionRecord;
use crate::store::FileStore;
use crate::view_model::AppViewModel;
use crate::watch::ScanScheduler;

/// The one filename the preview synthesizer requires.
pub const ENTRY_POINT: &str = "index.html";

/// Whole session state: the virtual project plus UI mode flags and the scan
/// scheduler. All of it is volatile; nothing survives a restart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    files: FileStore,
    active_file: Option<String>,
    preview_mode: bool,
    scheduler: ScanScheduler,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            file_names: self.files.iter().map(|(name, _)| name.to_string()).collect(),
            files: self.files.snapshot(),
            active_file: self.active_file.clone(),
            active_content: self
                .active_file
                .as_deref()
                .and_then(|name| self.files.get(name))
                .map(ToOwned::to_owned),
            preview_mode: self.preview_mode,
            scheduler_phase: self.scheduler.phase(),
            dirty: self.dirty,
        }
    }

    pub fn files(&self) -> &FileStore {
        &self.files
    }

    pub fn active_file(&self) -> Option<&str> {
        self.active_file.as_deref()
    }

    pub fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    /// Returns the dirty flag and resets it; the shell re-renders only when
    /// this was set since the last dispatch.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn scheduler_mut(&mut self) -> &mut ScanScheduler {
        &mut self.scheduler
    }

    /// Applies scraped records in document order, last writer wins. Returns
    /// true when any entry actually changed. Auto-selects the first file when
    /// nothing was active and the store became non-empty.
    pub(crate) fn apply_records(&mut self, records: Vec<ExtractionRecord>) -> bool {
        let mut changed = false;
        for record in records {
            for pair in record.pairs {
                changed |= self.files.upsert(pair.name, pair.content);
            }
        }
        if changed {
            if self.active_file.is_none() {
                self.active_file = self.files.first_name().map(ToOwned::to_owned);
            }
            self.dirty = true;
        }
        changed
    }

    /// Makes `name` the displayed file. Returns false for unknown names.
    pub(crate) fn select_file(&mut self, name: &str) -> bool {
        if !self.files.contains(name) {
            return false;
        }
        self.active_file = Some(name.to_string());
        self.dirty = true;
        true
    }

    pub(crate) fn enter_preview(&mut self) {
        self.preview_mode = true;
        self.dirty = true;
    }

    pub(crate) fn exit_preview(&mut self) {
        self.preview_mode = false;
        self.dirty = true;
    }

    /// Wipes the project: store, active file, and preview mode.
    pub(crate) fn clear_project(&mut self) {
        self.files.clear();
        self.active_file = None;
        self.preview_mode = false;
        self.dirty = true;
    }
}
