use crate::watch::TimerGeneration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the trailing debounce timer for the given generation.
    StartDebounce { generation: TimerGeneration },
    /// Arm the interaction-suppression timeout for the given generation.
    StartSuppression { generation: TimerGeneration },
    /// Run the scraper over the current host document.
    RequestScan,
    /// Synthesize the preview document and load it into the frame.
    LoadPreview,
    /// Tear down the preview frame and release its backing resource.
    ClearPreview,
    /// Serialize the project into a ZIP archive and save it.
    SaveArchive,
    /// Surface a non-fatal notice to the user.
    Notify(Notice),
}

/// User-visible, non-fatal failure notices. None of these change state; the
/// panel stays usable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Preview requested without an `index.html` entry.
    MissingEntryPoint,
    /// Export requested with an empty project.
    EmptyProject,
}
