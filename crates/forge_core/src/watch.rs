use std::time::Duration;

/// Quiet period after the last host-document mutation before a scan runs.
pub const DEBOUNCE_QUIET_PERIOD: Duration = Duration::from_millis(800);

/// Window after a user click during which automatic scans are skipped.
pub const INTERACTION_SUPPRESSION: Duration = Duration::from_millis(500);

/// Identifies one armed timer. A newer timer supersedes an older one; when a
/// stale generation fires it is ignored, which is how a restarted trailing
/// debounce cancels its predecessor without the shell tracking timer handles.
pub type TimerGeneration = u64;

/// Observable phase of the scan scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulerPhase {
    #[default]
    Idle,
    PendingScan,
    Suppressed,
}

/// Outcome of a debounce timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDecision {
    /// Quiet period elapsed with no suppression: run the scraper now.
    Run,
    /// A user interaction is in flight; the pending scan is dropped, not
    /// deferred. The next mutation will arm a fresh debounce.
    SkipSuppressed,
    /// A newer mutation already restarted the debounce; this timer is dead.
    Stale,
}

/// Turns a storm of mutation notifications into at most one scan request per
/// quiescence window, with an independent interaction-suppression flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanScheduler {
    next_generation: TimerGeneration,
    pending: Option<TimerGeneration>,
    suppression: Option<TimerGeneration>,
}

impl ScanScheduler {
    pub fn phase(&self) -> SchedulerPhase {
        if self.suppression.is_some() {
            SchedulerPhase::Suppressed
        } else if self.pending.is_some() {
            SchedulerPhase::PendingScan
        } else {
            SchedulerPhase::Idle
        }
    }

    /// A host-document mutation was observed. (Re)starts the trailing
    /// debounce and returns the generation the shell must arm a timer for.
    pub(crate) fn observe_mutation(&mut self) -> TimerGeneration {
        let generation = self.allocate();
        self.pending = Some(generation);
        generation
    }

    /// The debounce timer for `generation` fired.
    pub(crate) fn debounce_elapsed(&mut self, generation: TimerGeneration) -> ScanDecision {
        if self.pending != Some(generation) {
            return ScanDecision::Stale;
        }
        self.pending = None;
        if self.suppression.is_some() {
            ScanDecision::SkipSuppressed
        } else {
            ScanDecision::Run
        }
    }

    /// A user interaction started. Returns the generation for the
    /// suppression timeout. A second interaction extends the window by
    /// superseding the earlier timeout.
    pub(crate) fn begin_suppression(&mut self) -> TimerGeneration {
        let generation = self.allocate();
        self.suppression = Some(generation);
        generation
    }

    /// The suppression timeout for `generation` fired. Returns true when the
    /// flag was actually cleared.
    pub(crate) fn suppression_elapsed(&mut self, generation: TimerGeneration) -> bool {
        if self.suppression == Some(generation) {
            self.suppression = None;
            true
        } else {
            false
        }
    }

    fn allocate(&mut self) -> TimerGeneration {
        self.next_generation += 1;
        self.next_generation
    }
}
