use crate::{AppState, Effect, Msg, Notice, ScanDecision, ENTRY_POINT};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::MutationObserved { within_panel } => {
            // Mutations caused by the tool's own output must never re-arm
            // the debounce, or every re-render would trigger another scan.
            if within_panel {
                Vec::new()
            } else {
                let generation = state.scheduler_mut().observe_mutation();
                vec![Effect::StartDebounce { generation }]
            }
        }
        Msg::DebounceElapsed { generation } => {
            match state.scheduler_mut().debounce_elapsed(generation) {
                ScanDecision::Run => vec![Effect::RequestScan],
                ScanDecision::SkipSuppressed | ScanDecision::Stale => Vec::new(),
            }
        }
        Msg::SuppressionElapsed { generation } => {
            state.scheduler_mut().suppression_elapsed(generation);
            Vec::new()
        }
        Msg::MessagesScraped { records } => {
            // The dirty flag drives the re-render; the only outward effect
            // of a changed scan is a preview reload.
            if state.apply_records(records) && state.preview_mode() {
                vec![Effect::LoadPreview]
            } else {
                Vec::new()
            }
        }
        Msg::FileSelected { name } => {
            if state.select_file(&name) {
                let generation = state.scheduler_mut().begin_suppression();
                vec![Effect::StartSuppression { generation }]
            } else {
                Vec::new()
            }
        }
        Msg::PlayPauseClicked => {
            if state.preview_mode() {
                state.exit_preview();
                vec![Effect::ClearPreview]
            } else if !state.files().contains(ENTRY_POINT) {
                vec![Effect::Notify(Notice::MissingEntryPoint)]
            } else {
                state.enter_preview();
                vec![Effect::LoadPreview]
            }
        }
        Msg::ClearClicked => {
            let was_previewing = state.preview_mode();
            state.clear_project();
            if was_previewing {
                vec![Effect::ClearPreview]
            } else {
                Vec::new()
            }
        }
        Msg::DownloadClicked => {
            if state.files().is_empty() {
                vec![Effect::Notify(Notice::EmptyProject)]
            } else {
                vec![Effect::SaveArchive]
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
