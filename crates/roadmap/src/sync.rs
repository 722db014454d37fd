//! Roadmap orchestrator.
//!
//! Walks the catalog in a fixed order (labels, then each module followed by
//! its sub-tasks) and creates everything through a [`ResourceClient`],
//! recording remote ids in the run's [`Registry`].
//!
//! Remote-reported failures are contained: a label that fails is simply not
//! applied later, and a module that fails skips its own sub-tasks while the
//! next module proceeds. Transport errors abort the run.

use std::collections::{HashMap, HashSet};

use linear_api::{ResourceClient, TransportError};
use tracing::{debug, info, warn};

use crate::catalog::{ModuleSpec, Roadmap};
use crate::registry::{Registry, RegistryKey};
use crate::report::{ModuleReport, NoopReporter, Outcome, SyncReport, SyncReporter, Tally};

/// Issues fetched when looking for existing modules
pub const DEFAULT_ISSUE_SCAN_LIMIT: u32 = 250;

static NOOP_REPORTER: NoopReporter = NoopReporter;

/// How to treat labels and issues that already exist in the team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExistingPolicy {
    /// Create everything; re-running duplicates the roadmap
    #[default]
    AlwaysCreate,
    /// Register same-named labels and same-titled issues instead of creating them
    ReuseExisting,
}

/// Orchestrator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    pub existing: ExistingPolicy,
    /// Upper bound for the issue listing used by [`ExistingPolicy::ReuseExisting`]
    pub issue_scan_limit: u32,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            existing: ExistingPolicy::AlwaysCreate,
            issue_scan_limit: DEFAULT_ISSUE_SCAN_LIMIT,
        }
    }
}

/// Remote issue already in the team, keyed by title.
#[derive(Debug, Clone)]
struct ExistingIssue {
    id: String,
    child_titles: HashSet<String>,
}

/// Creates a [`Roadmap`] in Linear.
pub struct RoadmapSync<'a, C: ResourceClient + ?Sized> {
    client: &'a C,
    roadmap: Roadmap,
    options: SyncOptions,
    reporter: &'a dyn SyncReporter,
    registry: Registry,
    report: SyncReport,
    existing_issues: Option<HashMap<String, ExistingIssue>>,
}

impl<'a, C: ResourceClient + ?Sized> RoadmapSync<'a, C> {
    #[must_use]
    pub fn new(client: &'a C, roadmap: Roadmap) -> Self {
        Self {
            client,
            roadmap,
            options: SyncOptions::default(),
            reporter: &NOOP_REPORTER,
            registry: Registry::new(),
            report: SyncReport::default(),
            existing_issues: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_reporter(mut self, reporter: &'a dyn SyncReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Ids registered so far in this run.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Outcomes recorded so far in this run.
    #[must_use]
    pub fn report(&self) -> &SyncReport {
        &self.report
    }

    #[must_use]
    pub fn into_report(self) -> SyncReport {
        self.report
    }

    /// Create labels, then every module with its sub-tasks.
    pub async fn run(&mut self) -> Result<&SyncReport, TransportError> {
        self.setup_labels().await?;
        self.create_all_modules().await?;
        Ok(&self.report)
    }

    /// Create every catalog label. Returns how many labels are registered.
    pub async fn setup_labels(&mut self) -> Result<usize, TransportError> {
        let labels = self.roadmap.labels;
        self.reporter.labels_started(labels.len());

        let existing: HashMap<String, String> = match self.options.existing {
            ExistingPolicy::AlwaysCreate => HashMap::new(),
            ExistingPolicy::ReuseExisting => self
                .client
                .list_labels()
                .await?
                .into_iter()
                .map(|label| (label.name, label.id))
                .collect(),
        };

        for label in labels {
            let key = RegistryKey::label(label.name);

            let outcome = if let Some(id) = existing.get(label.name) {
                self.registry.register(key, id);
                Outcome::Reused
            } else {
                match self
                    .client
                    .create_label(label.name, label.color, label.description)
                    .await?
                {
                    Some(id) => {
                        self.registry.register(key, &id);
                        Outcome::Created
                    }
                    None => {
                        warn!(label = label.name, "Label was not created");
                        self.report.failed_labels.push(label.name.to_string());
                        Outcome::Failed
                    }
                }
            };

            self.report.labels.record(outcome);
            self.reporter.label(label, outcome);
        }

        let registered = self.registry.label_count();
        info!(registered, total = labels.len(), "Labels set up");
        self.reporter.labels_finished(registered);
        Ok(registered)
    }

    /// Create every module in ascending number, each followed by its sub-tasks.
    pub async fn create_all_modules(&mut self) -> Result<(), TransportError> {
        let mut modules: Vec<&'static ModuleSpec> = self.roadmap.modules.iter().collect();
        modules.sort_by_key(|m| m.number);

        for module in modules {
            self.create_module(module).await?;
        }

        let sub_tasks = self.report.sub_tasks();
        info!(
            modules = self.registry.module_count(),
            sub_tasks = sub_tasks.resolved(),
            "Roadmap modules created"
        );
        Ok(())
    }

    /// Create one module issue and, if it got an id, its sub-tasks.
    ///
    /// A module whose number already has an issue in this run is skipped
    /// along with its sub-tasks.
    pub async fn create_module(&mut self, module: &ModuleSpec) -> Result<Outcome, TransportError> {
        self.reporter.module_started(module);

        let title = module.issue_title();
        if let Some(id) = self.registry.module_id(module.number) {
            warn!(
                module = module.number,
                title = %title,
                existing_id = id,
                "Module number already used in this run, skipping"
            );
            self.reporter.module(module, Outcome::Skipped);
            let sub_tasks = self.skip_sub_tasks(module);
            self.finish_module(module, title, Outcome::Skipped, sub_tasks);
            return Ok(Outcome::Skipped);
        }

        let existing = self.existing_issue(&title).await?;

        let outcome = if let Some(existing) = &existing {
            self.registry.register(module.key(), &existing.id);
            Outcome::Reused
        } else {
            let label_ids = self.registry.label_ids(module.label);
            if label_ids.is_empty() {
                debug!(label = module.label, module = module.number, "Module label unresolved");
            }

            match self
                .client
                .create_issue(&title, module.description, &label_ids, None, module.priority)
                .await?
            {
                Some(id) => {
                    self.registry.register(module.key(), &id);
                    Outcome::Created
                }
                None => Outcome::Failed,
            }
        };
        self.reporter.module(module, outcome);

        let sub_tasks = if outcome == Outcome::Failed {
            warn!(module = module.number, title = %title, "Module issue not created, skipping its sub-tasks");
            self.skip_sub_tasks(module)
        } else {
            let child_titles = existing.map(|e| e.child_titles).unwrap_or_default();
            self.create_sub_tasks(module, &child_titles).await?
        };

        self.finish_module(module, title, outcome, sub_tasks);
        Ok(outcome)
    }

    fn finish_module(&mut self, module: &ModuleSpec, title: String, outcome: Outcome, sub_tasks: Tally) {
        self.report.modules.push(ModuleReport {
            number: module.number,
            title,
            outcome,
            sub_tasks,
        });
        self.reporter.module_finished(module);
    }

    async fn create_sub_tasks(
        &mut self,
        module: &ModuleSpec,
        existing_children: &HashSet<String>,
    ) -> Result<Tally, TransportError> {
        let Some(parent_id) = self.registry.module_id(module.number).map(str::to_string) else {
            warn!(key = %module.key(), "Parent issue not found");
            return Ok(self.skip_sub_tasks(module));
        };

        let mut tally = Tally::default();
        for task in module.sub_tasks {
            let outcome = if existing_children.contains(task.title) {
                Outcome::Reused
            } else {
                let label_ids = self.registry.label_ids(task.label);
                match self
                    .client
                    .create_sub_issue(&parent_id, task.title, task.description, &label_ids)
                    .await?
                {
                    Some(_) => Outcome::Created,
                    None => {
                        warn!(module = module.number, title = task.title, "Sub-task was not created");
                        Outcome::Failed
                    }
                }
            };

            tally.record(outcome);
            self.reporter.sub_task(module, task, outcome);
        }
        Ok(tally)
    }

    fn skip_sub_tasks(&self, module: &ModuleSpec) -> Tally {
        let mut tally = Tally::default();
        for task in module.sub_tasks {
            tally.record(Outcome::Skipped);
            self.reporter.sub_task(module, task, Outcome::Skipped);
        }
        tally
    }

    /// Top-level issue with this exact title, when reusing existing issues.
    async fn existing_issue(&mut self, title: &str) -> Result<Option<ExistingIssue>, TransportError> {
        if self.options.existing == ExistingPolicy::AlwaysCreate {
            return Ok(None);
        }

        if self.existing_issues.is_none() {
            let issues = self.client.list_issues(self.options.issue_scan_limit).await?;
            let index = issues
                .into_iter()
                .filter(|issue| issue.is_top_level())
                .map(|issue| {
                    let child_titles = issue.children.nodes.into_iter().map(|c| c.title).collect();
                    (
                        issue.title,
                        ExistingIssue {
                            id: issue.id,
                            child_titles,
                        },
                    )
                })
                .collect();
            self.existing_issues = Some(index);
        }

        Ok(self
            .existing_issues
            .as_ref()
            .and_then(|index| index.get(title))
            .cloned())
    }
}
