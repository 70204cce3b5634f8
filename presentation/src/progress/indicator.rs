//! Shared "working" spinner.
//!
//! Both the answer surface (start/stop) and the step reporter (lines printed
//! while the agent runs) go through one [`WorkingIndicator`], so step lines
//! are printed above the spinner instead of tearing it.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

pub struct WorkingIndicator {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
}

impl WorkingIndicator {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: Mutex::new(None),
        }
    }

    /// Indicator that never draws (quiet mode, JSON output).
    pub fn disabled() -> Self {
        Self::new(false)
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn start(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    pub fn stop(&self) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        self.bar.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }

    /// Print a line to stderr, above the spinner when it is running.
    pub fn println(&self, line: &str) {
        let slot = self.bar.lock().ok();
        match slot.as_ref().and_then(|slot| slot.as_ref()) {
            Some(pb) => pb.println(line),
            None => eprintln!("{}", line),
        }
    }
}

impl Default for WorkingIndicator {
    fn default() -> Self {
        Self::new(true)
    }
}
