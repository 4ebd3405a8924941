//! Forge core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod store;
mod update;
mod view_model;
mod watch;

pub use effect::{Effect, Notice};
pub use msg::{ExtractionRecord, Msg, ScrapedFile};
pub use state::{AppState, ENTRY_POINT};
pub use store::FileStore;
pub use update::update;
pub use view_model::AppViewModel;
pub use watch::{
    ScanDecision, ScanScheduler, SchedulerPhase, TimerGeneration, DEBOUNCE_QUIET_PERIOD,
    INTERACTION_SUPPRESSION,
};
