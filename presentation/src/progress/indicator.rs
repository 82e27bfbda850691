//! Spinner that stands in for the disabled trigger control

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows the trigger label as a spinner on stderr while a request runs.
///
/// A disabled indicator ignores every call, for `--quiet` and for tests.
pub struct ThinkingIndicator {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl ThinkingIndicator {
    pub fn new() -> Self {
        Self {
            enabled: true,
            bar: Mutex::new(None),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start (or relabel) the spinner.
    pub fn start(&self, label: &str) {
        if !self.enabled {
            return;
        }
        let mut bar = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        match bar.as_ref() {
            Some(pb) => pb.set_message(label.to_string()),
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message(label.to_string());
                pb.enable_steady_tick(Duration::from_millis(100));
                *bar = Some(pb);
            }
        }
    }

    /// Remove the spinner from the terminal, if one is showing.
    pub fn stop(&self) {
        if let Some(pb) = self.bar.lock().unwrap_or_else(|e| e.into_inner()).take() {
            pb.finish_and_clear();
        }
    }

    pub fn is_running(&self) -> bool {
        self.bar
            .lock()
            .map(|bar| bar.is_some())
            .unwrap_or(false)
    }
}

impl Default for ThinkingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ThinkingIndicator {
    fn drop(&mut self) {
        self.stop();
    }
}
