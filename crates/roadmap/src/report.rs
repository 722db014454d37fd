//! Run outcomes and the reporting hook the orchestrator calls into.

use std::fmt;

use crate::catalog::{LabelSpec, ModuleSpec, SubTaskSpec};

/// What happened to one label or issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Created during this run
    Created,
    /// Already present remotely and registered instead of created
    Reused,
    /// Not attempted because a dependency never materialized
    Skipped,
    /// Linear reported failure
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Created => "created",
            Self::Reused => "reused",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Counts per outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub created: usize,
    pub reused: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Created => self.created += 1,
            Outcome::Reused => self.reused += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    /// Items that ended up with a remote id.
    #[must_use]
    pub fn resolved(&self) -> usize {
        self.created + self.reused
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.created + self.reused + self.skipped + self.failed
    }
}

/// Result of one module and its sub-tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReport {
    pub number: u32,
    pub title: String,
    pub outcome: Outcome,
    pub sub_tasks: Tally,
}

/// Summary of a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub labels: Tally,
    /// Names of labels Linear refused to create
    pub failed_labels: Vec<String>,
    pub modules: Vec<ModuleReport>,
}

impl SyncReport {
    /// Sub-task counts across all modules.
    #[must_use]
    pub fn sub_tasks(&self) -> Tally {
        self.modules.iter().fold(Tally::default(), |mut acc, m| {
            acc.created += m.sub_tasks.created;
            acc.reused += m.sub_tasks.reused;
            acc.skipped += m.sub_tasks.skipped;
            acc.failed += m.sub_tasks.failed;
            acc
        })
    }

    /// `true` when nothing failed or was skipped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let sub_tasks = self.sub_tasks();
        self.labels.failed == 0
            && self
                .modules
                .iter()
                .all(|m| matches!(m.outcome, Outcome::Created | Outcome::Reused))
            && sub_tasks.failed == 0
            && sub_tasks.skipped == 0
    }
}

/// Progress hook. Every method defaults to doing nothing.
pub trait SyncReporter: Send + Sync {
    fn labels_started(&self, _total: usize) {}

    fn label(&self, _label: &LabelSpec, _outcome: Outcome) {}

    fn labels_finished(&self, _registered: usize) {}

    fn module_started(&self, _module: &ModuleSpec) {}

    fn module(&self, _module: &ModuleSpec, _outcome: Outcome) {}

    fn sub_task(&self, _module: &ModuleSpec, _task: &SubTaskSpec, _outcome: Outcome) {}

    fn module_finished(&self, _module: &ModuleSpec) {}
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl SyncReporter for NoopReporter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(number: u32, outcome: Outcome, sub_tasks: Tally) -> ModuleReport {
        ModuleReport {
            number,
            title: format!("Module {number}"),
            outcome,
            sub_tasks,
        }
    }

    #[test]
    fn test_tally_record() {
        let mut tally = Tally::default();
        for outcome in [Outcome::Created, Outcome::Created, Outcome::Reused, Outcome::Failed] {
            tally.record(outcome);
        }
        assert_eq!(tally.resolved(), 3);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_report_complete() {
        let full = Tally {
            created: 5,
            ..Tally::default()
        };
        let report = SyncReport {
            labels: Tally {
                created: 10,
                ..Tally::default()
            },
            failed_labels: vec![],
            modules: vec![module(1, Outcome::Created, full), module(2, Outcome::Reused, full)],
        };
        assert!(report.is_complete());
        assert_eq!(report.sub_tasks().created, 10);
    }

    #[test]
    fn test_report_incomplete_when_module_failed() {
        let skipped = Tally {
            skipped: 5,
            ..Tally::default()
        };
        let report = SyncReport {
            modules: vec![module(1, Outcome::Failed, skipped)],
            ..SyncReport::default()
        };
        assert!(!report.is_complete());
    }

    #[test]
    fn test_report_incomplete_when_label_failed() {
        let mut report = SyncReport::default();
        report.labels.record(Outcome::Failed);
        report.failed_labels.push("Performance".to_string());
        assert!(!report.is_complete());
    }
}
