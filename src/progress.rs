use std::time::{Duration, Instant};

use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

/// Stage spinner on stderr; a hidden bar when disabled.
pub struct Progress {
    enabled: bool,
    start: Instant,
    stage: ProgressBar,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        let start = Instant::now();
        if !enabled {
            return Self {
                enabled,
                start,
                stage: ProgressBar::hidden(),
            };
        }

        let stage = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}  [{elapsed_precise}]") {
            stage.set_style(style);
        }
        stage.enable_steady_tick(Duration::from_millis(80));
        stage.set_message("starting");

        Self {
            enabled,
            start,
            stage,
        }
    }

    pub fn set_stage(&self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.stage.set_message(msg.into());
    }

    pub fn finish(&self) {
        if !self.enabled {
            return;
        }
        self.stage.finish_with_message(format!(
            "done in {}",
            HumanDuration(self.start.elapsed())
        ));
    }
}
