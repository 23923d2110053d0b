use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shared by every cycle in flight
#[derive(Default)]
struct SpinnerState {
    bar: Option<ProgressBar>,
    cycles: usize,
}

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// While sources are in flight an indicatif spinner ticks on stderr; it
/// is cleared only once the last overlapping cycle completes.
pub struct StderrProgressReporter {
    state: Mutex<SpinnerState>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SpinnerState::default()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("   {spinner:.green} {pos}/{len} source(s) - {msg}")
            .expect("Failed to set spinner template")
    }

    fn new_spinner(total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::spinner_style());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Prints a line without tearing the spinner
    fn print(&self, message: &str) {
        match self.state.lock() {
            Ok(state) => match &state.bar {
                Some(pb) => pb.suspend(|| eprintln!("{}", message)),
                None => eprintln!("{}", message),
            },
            Err(_) => eprintln!("{}", message),
        }
    }

    #[cfg(test)]
    fn cycles_in_flight(&self) -> usize {
        self.state.lock().map(|state| state.cycles).unwrap_or(0)
    }

    #[cfg(test)]
    fn spinner_length(&self) -> Option<u64> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.bar.as_ref().and_then(|pb| pb.length()))
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print(message);
    }

    fn begin_cycle(&self, total: usize) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        state.cycles += 1;
        let pb = state.bar.get_or_insert_with(|| Self::new_spinner(total));
        pb.set_length(total as u64);
        pb.set_position(0);
        pb.set_message("fetching sources");
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        let pb = state.bar.get_or_insert_with(|| Self::new_spinner(total));
        pb.set_length(total as u64);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.print(message);
    }

    fn report_completion(&self, message: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.cycles = state.cycles.saturating_sub(1);
            if state.cycles == 0 {
                if let Some(pb) = state.bar.take() {
                    pb.finish_and_clear();
                }
            }
        }
        self.print(message);
    }
}

/// QuietProgressReporter adapter that discards all progress output
#[derive(Debug, Default, Clone, Copy)]
pub struct QuietProgressReporter;

impl ProgressReporter for QuietProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}
