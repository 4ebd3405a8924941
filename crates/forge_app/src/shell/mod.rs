mod app;
mod effects;
mod logging;
mod settings;
mod transcript;
mod ui;

pub use app::run;

use forge_core::Msg;

/// Everything the main loop can receive: core messages plus a shell-level
/// shutdown request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    Core(Msg),
    Quit,
}
