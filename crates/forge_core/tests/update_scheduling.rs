use std::sync::Once;

use forge_core::{update, AppState, Effect, Msg, SchedulerPhase};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(forge_logging::initialize_for_tests);
}

fn debounce_generation(effects: &[Effect]) -> u64 {
    match effects {
        [Effect::StartDebounce { generation }] => *generation,
        other => panic!("expected a single StartDebounce, got {other:?}"),
    }
}

#[test]
fn mutation_arms_the_debounce_and_its_expiry_requests_a_scan() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(
        state,
        Msg::MutationObserved {
            within_panel: false,
        },
    );
    let generation = debounce_generation(&effects);
    assert_eq!(state.view().scheduler_phase, SchedulerPhase::PendingScan);

    let (state, effects) = update(state, Msg::DebounceElapsed { generation });
    assert_eq!(effects, vec![Effect::RequestScan]);
    assert_eq!(state.view().scheduler_phase, SchedulerPhase::Idle);
}

#[test]
fn panel_mutations_are_ignored_entirely() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(state, Msg::MutationObserved { within_panel: true });

    assert!(effects.is_empty());
    assert_eq!(state.view().scheduler_phase, SchedulerPhase::Idle);
}

#[test]
fn a_burst_of_mutations_yields_one_scan() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(
        state,
        Msg::MutationObserved {
            within_panel: false,
        },
    );
    let stale = debounce_generation(&effects);
    let (state, effects) = update(
        state,
        Msg::MutationObserved {
            within_panel: false,
        },
    );
    let live = debounce_generation(&effects);

    // The superseded timer fires first and must be ignored.
    let (state, effects) = update(state, Msg::DebounceElapsed { generation: stale });
    assert!(effects.is_empty());

    let (_state, effects) = update(state, Msg::DebounceElapsed { generation: live });
    assert_eq!(effects, vec![Effect::RequestScan]);
}

#[test]
fn suppression_swallows_the_scan_until_it_times_out() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::MessagesScraped {
            records: vec![forge_core::ExtractionRecord {
                pairs: vec![forge_core::ScrapedFile::new("index.html", "<p>hi</p>")],
            }],
        },
    );

    let (state, effects) = update(
        state,
        Msg::FileSelected {
            name: "index.html".to_string(),
        },
    );
    let suppression = match effects.as_slice() {
        [Effect::StartSuppression { generation }] => *generation,
        other => panic!("unexpected effects: {other:?}"),
    };
    assert_eq!(state.view().scheduler_phase, SchedulerPhase::Suppressed);

    // A mutation during the interaction still debounces, but the scan it
    // would trigger is skipped while the flag is up.
    let (state, effects) = update(
        state,
        Msg::MutationObserved {
            within_panel: false,
        },
    );
    let generation = debounce_generation(&effects);
    let (state, effects) = update(state, Msg::DebounceElapsed { generation });
    assert!(effects.is_empty());

    let (state, effects) = update(
        state,
        Msg::SuppressionElapsed {
            generation: suppression,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().scheduler_phase, SchedulerPhase::Idle);
}
