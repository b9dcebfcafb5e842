//! Spinner shown while a reply is pending

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for one pending reply; inert when quiet
pub struct ReplySpinner {
    bar: Option<ProgressBar>,
}

impl ReplySpinner {
    /// Start spinning (no-op when `quiet`)
    pub fn start(model: &str, quiet: bool) -> Self {
        if quiet {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_prefix(model.to_string());
        bar.set_message("thinking...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Stop and clear the spinner line
    pub fn finish(self, success: bool) {
        if let Some(bar) = self.bar {
            if success {
                bar.finish_and_clear();
            } else {
                bar.finish_with_message(format!("{}", "fallback reply".yellow()));
            }
        }
    }
}
