//! Console reporter: status lines per label and a progress bar per module.

use std::sync::Mutex;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::{LabelSpec, ModuleSpec, SubTaskSpec, STEPS_PER_MODULE};
use crate::report::{Outcome, SyncReporter};
use crate::ui;

const PROGRESS_TEMPLATE: &str = "{spinner:.cyan} {msg} [{pos}/{len}]";

/// Prints run progress to the terminal.
#[derive(Default)]
pub struct ConsoleReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.current.lock() {
            if let Some(bar) = guard.as_ref() {
                f(bar);
            }
        }
    }
}

fn outcome_line(outcome: Outcome, what: &str) -> String {
    match outcome {
        Outcome::Created => format!("{} Created {what}", "✓".green()),
        Outcome::Reused => format!("{} Reusing existing {what}", "ℹ".blue()),
        Outcome::Skipped => format!("{} Skipped {what}", "⚠".yellow()),
        Outcome::Failed => format!("{} Failed to create {what}", "✗".red()),
    }
}

impl SyncReporter for ConsoleReporter {
    fn labels_started(&self, total: usize) {
        ui::print_step(&format!("Setting up {total} labels..."));
    }

    fn label(&self, label: &LabelSpec, outcome: Outcome) {
        let what = format!("label: {} ({})", label.name, label.color);
        match outcome {
            Outcome::Failed => ui::print_error(&format!("Failed to create {what}")),
            _ => println!("  {}", outcome_line(outcome, &what)),
        }
    }

    fn labels_finished(&self, registered: usize) {
        ui::print_success(&format!("{registered} labels ready"));
    }

    fn module_started(&self, module: &ModuleSpec) {
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::new(STEPS_PER_MODULE)
            .with_style(style)
            .with_message(format!("Creating {}...", module.issue_title()));
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.current.lock() {
            *guard = Some(bar);
        }
    }

    fn module(&self, module: &ModuleSpec, outcome: Outcome) {
        let what = format!("issue: {}", module.issue_title());
        self.with_bar(|bar| {
            if outcome != Outcome::Created {
                bar.println(format!("  {}", outcome_line(outcome, &what)));
            }
            bar.inc(1);
        });
    }

    fn sub_task(&self, _module: &ModuleSpec, task: &SubTaskSpec, outcome: Outcome) {
        let what = format!("sub-task: {}", task.title);
        self.with_bar(|bar| {
            if matches!(outcome, Outcome::Failed | Outcome::Reused) {
                bar.println(format!("    {}", outcome_line(outcome, &what)));
            }
            bar.inc(1);
        });
    }

    fn module_finished(&self, module: &ModuleSpec) {
        if let Ok(mut guard) = self.current.lock() {
            if let Some(bar) = guard.take() {
                // Reported as one unit of work regardless of individual outcomes.
                bar.set_position(STEPS_PER_MODULE);
                bar.finish_with_message(format!("{} {}", "✓".green(), module.issue_title()));
            }
        }
    }
}
