use std::sync::mpsc;

use forge_core::{update, AppState};
use forge_engine::NullHighlighter;
use forge_logging::forge_info;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::settings::ShellSettings;
use super::{transcript, ui, ShellEvent};

pub fn run() -> anyhow::Result<()> {
    let settings = ShellSettings::from_args()?;
    logging::initialize(LogDestination::File);
    forge_info!(
        "watching transcript {:?}, exporting to {:?}",
        settings.transcript_path,
        settings.output_dir
    );

    let (tx, rx) = mpsc::channel::<ShellEvent>();
    transcript::spawn_watcher(
        settings.transcript_path.clone(),
        &settings.output_dir,
        settings.poll_interval,
        tx.clone(),
    );
    ui::spawn_input_reader(tx.clone());

    let mut runner = EffectRunner::new(tx, settings);
    // No real highlighting collaborator is wired in; the display falls back
    // to plain text.
    let highlighter = NullHighlighter;
    let mut state = AppState::new();
    ui::render(&state.view(), &highlighter);

    for event in rx {
        let msg = match event {
            ShellEvent::Core(msg) => msg,
            ShellEvent::Quit => break,
        };
        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        runner.run(effects, &state.view());
        if state.consume_dirty() {
            ui::render(&state.view(), &highlighter);
        }
    }

    forge_info!("shutting down");
    Ok(())
}
