//! Progress reporting during a run
//!
//! Both reporters draw on stderr so stdout carries only the rendered result.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use verdict_application::ProgressNotifier;
use verdict_domain::ProviderName;

/// Reports progress with an indicatif bar for the fan-out and a spinner for the summarizer
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn fan_out_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn replace(&self, next: Option<ProgressBar>) -> Option<ProgressBar> {
        match self.bar.lock() {
            Ok(mut guard) => std::mem::replace(&mut *guard, next),
            Err(_) => None,
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_fan_out_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::fan_out_style());
        pb.set_prefix("Querying providers");
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(100));
        self.replace(Some(pb));
    }

    fn on_provider_complete(&self, provider: &ProviderName, success: bool) {
        self.with_bar(|pb| {
            let status = if success {
                format!("{} {}", "v".green(), provider)
            } else {
                format!("{} {}", "x".red(), provider)
            };
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_fan_out_complete(&self, answered: usize, failed: usize) {
        if let Some(pb) = self.replace(None) {
            pb.finish_with_message(format!(
                "{} answered, {} failed",
                answered.to_string().green(),
                failed.to_string().red()
            ));
        }
    }

    fn on_summarize_start(&self, summarizer: &ProviderName) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Summarizing");
        pb.set_message(summarizer.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.replace(Some(pb));
    }

    fn on_summarize_complete(&self, summarizer: &ProviderName, success: bool) {
        if let Some(pb) = self.replace(None) {
            if success {
                pb.finish_with_message(format!("{} {}", "v".green(), summarizer));
            } else {
                pb.abandon_with_message(format!("{} {} (failed)", "x".red(), summarizer));
            }
        }
    }
}

/// Simple line-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_fan_out_start(&self, total: usize) {
        eprintln!(
            "{} {} ({} providers)",
            "->".cyan(),
            "Querying providers".bold(),
            total
        );
    }

    fn on_provider_complete(&self, provider: &ProviderName, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), provider);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), provider);
        }
    }

    fn on_fan_out_complete(&self, answered: usize, failed: usize) {
        eprintln!("  {} answered, {} failed", answered, failed);
    }

    fn on_summarize_start(&self, summarizer: &ProviderName) {
        eprintln!("{} {} ({})", "->".cyan(), "Summarizing".bold(), summarizer);
    }
}
