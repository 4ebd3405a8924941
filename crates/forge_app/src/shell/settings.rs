use std::path::PathBuf;
use std::time::Duration;

use forge_core::{DEBOUNCE_QUIET_PERIOD, INTERACTION_SUPPRESSION};

/// Runtime settings for the shell.
#[derive(Debug, Clone)]
pub struct ShellSettings {
    /// Transcript HTML file standing in for the host document.
    pub transcript_path: PathBuf,
    /// Where exported archives land.
    pub output_dir: PathBuf,
    /// How often the watcher checks the transcript for mutations.
    pub poll_interval: Duration,
    /// Quiet period before a scan runs.
    pub debounce_quiet_period: Duration,
    /// Window after a file selection during which scans are skipped.
    pub interaction_suppression: Duration,
}

impl ShellSettings {
    /// `forge_app <transcript.html> [output_dir]`
    pub fn from_args() -> anyhow::Result<Self> {
        let mut args = std::env::args().skip(1);
        let transcript_path = args
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("usage: forge_app <transcript.html> [output_dir]"))?;
        let output_dir = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("output"));
        Ok(Self {
            transcript_path,
            output_dir,
            ..Self::default()
        })
    }
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            transcript_path: PathBuf::from("transcript.html"),
            output_dir: PathBuf::from("output"),
            poll_interval: Duration::from_millis(100),
            debounce_quiet_period: DEBOUNCE_QUIET_PERIOD,
            interaction_suppression: INTERACTION_SUPPRESSION,
        }
    }
}
