use crate::watch::SchedulerPhase;

/// Snapshot of the session handed to the shell for rendering, preview
/// synthesis and export. Cheap to compare; the shell only repaints when it
/// differs from the last one it rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Filenames in store insertion order.
    pub file_names: Vec<String>,
    /// Full `(name, content)` entries in store insertion order.
    pub files: Vec<(String, String)>,
    pub active_file: Option<String>,
    pub active_content: Option<String>,
    pub preview_mode: bool,
    pub scheduler_phase: SchedulerPhase,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn file_count(&self) -> usize {
        self.file_names.len()
    }
}
