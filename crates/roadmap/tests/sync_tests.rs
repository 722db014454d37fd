//! Integration tests for the roadmap orchestrator.
//!
//! A recording stub stands in for Linear so the tests can check call order,
//! the ids threaded between calls and how failures are contained.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use linear_api::{
    ChildRef, Connection, IssueSnapshot, IssueUpdateInput, Label, LinearClient, ParentRef,
    ResourceClient, Transport, TransportError,
};
use roadmap::{
    ExistingPolicy, LabelSpec, ModuleSpec, Outcome, Roadmap, RoadmapSync, SubTaskSpec,
    SyncOptions,
};
use serde_json::{json, Value};

// =============================================================================
// Recording stub
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    CreateLabel {
        name: String,
    },
    ListLabels,
    CreateIssue {
        title: String,
        label_ids: Vec<String>,
        parent_id: Option<String>,
        priority: i32,
    },
    ListIssues {
        limit: u32,
    },
}

/// Hands out sequential ids and records every call.
#[derive(Default)]
struct StubClient {
    calls: Mutex<Vec<Call>>,
    next_id: AtomicUsize,
    /// Label names Linear refuses to create
    failing_labels: HashSet<String>,
    /// Issue titles Linear refuses to create
    failing_issues: HashSet<String>,
    /// Issue title whose creation fails in transport
    broken_issue: Option<String>,
    existing_labels: Vec<Label>,
    existing_issues: Vec<IssueSnapshot>,
}

impl StubClient {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn issue_calls(&self) -> Vec<(String, Vec<String>, Option<String>, i32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateIssue {
                    title,
                    label_ids,
                    parent_id,
                    priority,
                } => Some((title, label_ids, parent_id, priority)),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ResourceClient for StubClient {
    async fn create_label(
        &self,
        name: &str,
        _color: &str,
        _description: &str,
    ) -> Result<Option<String>, TransportError> {
        self.record(Call::CreateLabel {
            name: name.to_string(),
        });
        if self.failing_labels.contains(name) {
            return Ok(None);
        }
        Ok(Some(self.next_id("label")))
    }

    async fn list_labels(&self) -> Result<Vec<Label>, TransportError> {
        self.record(Call::ListLabels);
        Ok(self.existing_labels.clone())
    }

    async fn create_issue(
        &self,
        title: &str,
        _description: &str,
        label_ids: &[String],
        parent_id: Option<&str>,
        priority: i32,
    ) -> Result<Option<String>, TransportError> {
        self.record(Call::CreateIssue {
            title: title.to_string(),
            label_ids: label_ids.to_vec(),
            parent_id: parent_id.map(str::to_string),
            priority,
        });
        if self.broken_issue.as_deref() == Some(title) {
            return Err(TransportError::Status {
                status: 502,
                body: "Bad Gateway".to_string(),
            });
        }
        if self.failing_issues.contains(title) {
            return Ok(None);
        }
        Ok(Some(self.next_id("issue")))
    }

    async fn list_issues(&self, limit: u32) -> Result<Vec<IssueSnapshot>, TransportError> {
        self.record(Call::ListIssues { limit });
        Ok(self.existing_issues.clone())
    }

    async fn update_issue(
        &self,
        _issue_id: &str,
        _input: IssueUpdateInput,
    ) -> Result<bool, TransportError> {
        Ok(true)
    }

    async fn delete_issue(&self, _issue_id: &str) -> Result<bool, TransportError> {
        Ok(true)
    }
}

fn curriculum() -> Roadmap {
    Roadmap::python_curriculum()
}

fn module(number: u32) -> &'static ModuleSpec {
    curriculum().module(number).unwrap()
}

fn snapshot(id: &str, title: &str, parent: Option<&str>, children: &[&str]) -> IssueSnapshot {
    IssueSnapshot {
        id: id.to_string(),
        identifier: format!("PY-{id}"),
        title: title.to_string(),
        description: None,
        state: None,
        labels: Connection::default(),
        parent: parent.map(|id| ParentRef {
            id: id.to_string(),
            identifier: None,
        }),
        children: Connection {
            nodes: children
                .iter()
                .enumerate()
                .map(|(i, title)| ChildRef {
                    id: format!("{id}-child-{i}"),
                    identifier: None,
                    title: (*title).to_string(),
                })
                .collect(),
        },
    }
}

// =============================================================================
// Full run
// =============================================================================

#[tokio::test]
async fn test_full_run_creates_everything_in_order() {
    let client = StubClient::default();
    let roadmap = curriculum();
    let mut sync = RoadmapSync::new(&client, roadmap);

    let report = sync.run().await.unwrap().clone();
    assert!(report.is_complete());
    assert_eq!(report.labels.created, 10);
    assert_eq!(report.modules.len(), 10);
    assert_eq!(report.sub_tasks().created, 50);

    let calls = client.calls();
    assert_eq!(calls.len(), 70);

    let label_names: Vec<String> = calls[..10]
        .iter()
        .map(|call| match call {
            Call::CreateLabel { name } => name.clone(),
            other => panic!("expected label creation, got {other:?}"),
        })
        .collect();
    let expected: Vec<String> = roadmap.labels.iter().map(|l| l.name.to_string()).collect();
    assert_eq!(label_names, expected);

    let registry = sync.registry();
    assert_eq!(registry.label_count(), 10);
    assert_eq!(registry.module_count(), 10);

    let issues = client.issue_calls();
    assert_eq!(issues.len(), 60);

    for (index, chunk) in issues.chunks(6).enumerate() {
        let spec = &roadmap.modules[index];
        let module_id = registry.module_id(spec.number).unwrap();

        let (title, label_ids, parent_id, priority) = &chunk[0];
        assert_eq!(title, &spec.issue_title());
        assert_eq!(parent_id, &None);
        assert_eq!(*priority, spec.priority);
        assert_eq!(label_ids, &registry.label_ids(spec.label));
        assert_eq!(label_ids.len(), 1);

        for ((title, label_ids, parent_id, priority), task) in chunk[1..].iter().zip(spec.sub_tasks)
        {
            assert_eq!(title, task.title);
            assert_eq!(parent_id.as_deref(), Some(module_id));
            assert_eq!(*priority, 3);
            assert_eq!(label_ids, &registry.label_ids(task.label));
        }
    }
}

#[tokio::test]
async fn test_module_ids_are_distinct_and_non_empty() {
    let client = StubClient::default();
    let mut sync = RoadmapSync::new(&client, curriculum());
    sync.run().await.unwrap();

    let ids: HashSet<&str> = sync.registry().modules().map(|(_, id)| id).collect();
    assert_eq!(ids.len(), 10);
    assert!(ids.iter().all(|id| !id.is_empty()));

    let numbers: Vec<u32> = sync.registry().modules().map(|(n, _)| n).collect();
    assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
}

// =============================================================================
// Failure containment
// =============================================================================

#[tokio::test]
async fn test_failed_module_skips_only_its_sub_tasks() {
    let failing = module(4).issue_title();
    let client = StubClient {
        failing_issues: HashSet::from([failing.clone()]),
        ..StubClient::default()
    };
    let mut sync = RoadmapSync::new(&client, curriculum());

    let report = sync.run().await.unwrap().clone();
    assert!(!report.is_complete());

    let module_report = &report.modules[3];
    assert_eq!(module_report.number, 4);
    assert_eq!(module_report.outcome, Outcome::Failed);
    assert_eq!(module_report.sub_tasks.skipped, 5);
    assert_eq!(report.sub_tasks().created, 45);

    assert_eq!(sync.registry().module_id(4), None);
    assert_eq!(sync.registry().module_count(), 9);

    let issues = client.issue_calls();
    assert_eq!(issues.len(), 55);
    for task in module(4).sub_tasks {
        assert!(
            issues.iter().all(|(title, ..)| title != task.title),
            "sub-task {:?} of the failed module was attempted",
            task.title
        );
    }

    let after = issues
        .iter()
        .position(|(title, ..)| title == &failing)
        .unwrap();
    assert_eq!(issues[after + 1].0, module(5).issue_title());
    assert_eq!(issues[after + 1].2, None);
}

#[tokio::test]
async fn test_failed_label_leaves_module_unlabelled() {
    let label = module(3).label;
    let client = StubClient {
        failing_labels: HashSet::from([label.to_string()]),
        ..StubClient::default()
    };
    let mut sync = RoadmapSync::new(&client, curriculum());

    let report = sync.run().await.unwrap().clone();
    assert_eq!(report.labels.failed, 1);
    assert_eq!(report.failed_labels, vec![label.to_string()]);
    assert!(!report.is_complete());
    assert_eq!(sync.registry().label_count(), 9);
    assert_eq!(sync.registry().label_id(label), None);

    let issues = client.issue_calls();
    let (_, label_ids, _, _) = issues
        .iter()
        .find(|(title, ..)| title == &module(3).issue_title())
        .unwrap();
    assert!(label_ids.is_empty());

    assert_eq!(report.modules[2].outcome, Outcome::Created);
    assert!(sync.registry().module_id(3).is_some());
    assert_eq!(report.sub_tasks().created, 50);
}

#[tokio::test]
async fn test_failed_sub_task_does_not_stop_siblings() {
    let task = &module(6).sub_tasks[1];
    let client = StubClient {
        failing_issues: HashSet::from([task.title.to_string()]),
        ..StubClient::default()
    };
    let mut sync = RoadmapSync::new(&client, curriculum());

    let report = sync.run().await.unwrap().clone();
    let module_report = &report.modules[5];
    assert_eq!(module_report.outcome, Outcome::Created);
    assert_eq!(module_report.sub_tasks.created, 4);
    assert_eq!(module_report.sub_tasks.failed, 1);
    assert_eq!(client.issue_calls().len(), 60);
}

#[tokio::test]
async fn test_transport_error_aborts_run() {
    let client = StubClient {
        broken_issue: Some(module(2).issue_title()),
        ..StubClient::default()
    };
    let mut sync = RoadmapSync::new(&client, curriculum());

    let err = sync.run().await.unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 502, .. }));

    let issues = client.issue_calls();
    assert_eq!(issues.last().unwrap().0, module(2).issue_title());
    assert!(issues.iter().all(|(title, ..)| title != &module(3).issue_title()));

    // Work done before the failure stays registered.
    assert!(sync.registry().module_id(1).is_some());
    assert_eq!(sync.registry().label_count(), 10);
}

// =============================================================================
// Partial runs
// =============================================================================

#[tokio::test]
async fn test_labels_only() {
    let client = StubClient::default();
    let mut sync = RoadmapSync::new(&client, curriculum());

    let registered = sync.setup_labels().await.unwrap();
    assert_eq!(registered, 10);
    assert!(client.issue_calls().is_empty());
    assert!(sync.report().modules.is_empty());
}

#[tokio::test]
async fn test_modules_without_labels_are_created_unlabelled() {
    let client = StubClient::default();
    let mut sync = RoadmapSync::new(&client, curriculum());

    sync.create_all_modules().await.unwrap();
    assert_eq!(sync.registry().module_count(), 10);
    assert!(client
        .issue_calls()
        .iter()
        .all(|(_, label_ids, ..)| label_ids.is_empty()));
}

static SMALL_LABELS: [LabelSpec; 1] = [LabelSpec {
    name: "Basics",
    color: "#000000",
    description: "",
}];

static SMALL_TASKS: [SubTaskSpec; 1] = [SubTaskSpec {
    title: "Read the docs",
    description: "",
    label: "Basics",
}];

static SMALL_MODULES: [ModuleSpec; 2] = [
    ModuleSpec {
        number: 2,
        title: "Second",
        description: "",
        label: "Basics",
        priority: 2,
        sub_tasks: &SMALL_TASKS,
    },
    ModuleSpec {
        number: 1,
        title: "First",
        description: "",
        label: "Basics",
        priority: 1,
        sub_tasks: &SMALL_TASKS,
    },
];

#[tokio::test]
async fn test_modules_created_in_ascending_number() {
    let client = StubClient::default();
    let mut sync = RoadmapSync::new(&client, Roadmap::new(&SMALL_LABELS, &SMALL_MODULES));
    sync.run().await.unwrap();

    let titles: Vec<String> = client
        .issue_calls()
        .into_iter()
        .map(|(title, ..)| title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Module 1: First",
            "Read the docs",
            "Module 2: Second",
            "Read the docs"
        ]
    );
}

static DUPLICATE_TASKS: [SubTaskSpec; 1] = [SubTaskSpec {
    title: "Should not be attached",
    description: "",
    label: "Basics",
}];

static DUPLICATE_MODULES: [ModuleSpec; 2] = [
    ModuleSpec {
        number: 1,
        title: "First",
        description: "",
        label: "Basics",
        priority: 1,
        sub_tasks: &SMALL_TASKS,
    },
    ModuleSpec {
        number: 1,
        title: "Also first",
        description: "",
        label: "Basics",
        priority: 1,
        sub_tasks: &DUPLICATE_TASKS,
    },
];

#[tokio::test]
async fn test_repeated_module_number_is_skipped() {
    let client = StubClient::default();
    let mut sync = RoadmapSync::new(&client, Roadmap::new(&SMALL_LABELS, &DUPLICATE_MODULES));

    let report = sync.run().await.unwrap().clone();
    assert!(!report.is_complete());
    assert_eq!(report.modules.len(), 2);
    assert_eq!(report.modules[0].outcome, Outcome::Created);
    assert_eq!(report.modules[1].outcome, Outcome::Skipped);
    assert_eq!(report.modules[1].sub_tasks.skipped, 1);

    let titles: Vec<String> = client
        .issue_calls()
        .into_iter()
        .map(|(title, ..)| title)
        .collect();
    assert_eq!(titles, vec!["Module 1: First", "Read the docs"]);
    assert_eq!(sync.registry().module_count(), 1);
}

// =============================================================================
// Reusing existing resources
// =============================================================================

#[tokio::test]
async fn test_reuse_existing_labels_and_modules() {
    let roadmap = curriculum();
    let first = module(1);
    let second = module(2);

    let existing_labels = roadmap
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| Label {
            id: format!("existing-label-{i}"),
            name: label.name.to_string(),
            color: Some(label.color.to_string()),
            description: None,
        })
        .collect();

    let existing_issues = vec![
        snapshot(
            "existing-1",
            &first.issue_title(),
            None,
            &[first.sub_tasks[0].title, first.sub_tasks[1].title],
        ),
        // Same title as module 2, but a child issue: not a match
        snapshot("stray", &second.issue_title(), Some("elsewhere"), &[]),
    ];

    let client = StubClient {
        existing_labels,
        existing_issues,
        ..StubClient::default()
    };
    let options = SyncOptions {
        existing: ExistingPolicy::ReuseExisting,
        ..SyncOptions::default()
    };
    let mut sync = RoadmapSync::new(&client, roadmap).with_options(options);

    let report = sync.run().await.unwrap().clone();
    assert!(report.is_complete());
    assert_eq!(report.labels.reused, 10);
    assert_eq!(report.labels.created, 0);
    assert_eq!(report.modules[0].outcome, Outcome::Reused);
    assert_eq!(report.modules[0].sub_tasks.reused, 2);
    assert_eq!(report.modules[0].sub_tasks.created, 3);
    assert_eq!(report.modules[1].outcome, Outcome::Created);

    let calls = client.calls();
    assert!(!calls
        .iter()
        .any(|call| matches!(call, Call::CreateLabel { .. })));
    assert_eq!(
        calls.iter().filter(|call| **call == Call::ListLabels).count(),
        1
    );
    assert_eq!(
        calls
            .iter()
            .filter(|call| **call == Call::ListIssues { limit: 250 })
            .count(),
        1
    );

    assert_eq!(sync.registry().module_id(1), Some("existing-1"));
    assert_eq!(
        sync.registry().label_id(roadmap.labels[0].name),
        Some("existing-label-0")
    );

    let issues = client.issue_calls();
    assert!(issues.iter().all(|(title, ..)| title != &first.issue_title()));
    let first_children: Vec<&str> = issues
        .iter()
        .filter(|(_, _, parent, _)| parent.as_deref() == Some("existing-1"))
        .map(|(title, ..)| title.as_str())
        .collect();
    assert_eq!(
        first_children,
        first.sub_tasks[2..]
            .iter()
            .map(|t| t.title)
            .collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_always_create_never_lists() {
    let client = StubClient::default();
    let mut sync = RoadmapSync::new(&client, curriculum());
    sync.run().await.unwrap();

    assert!(!client
        .calls()
        .iter()
        .any(|call| matches!(call, Call::ListLabels | Call::ListIssues { .. })));
}

// =============================================================================
// End to end over the GraphQL client
// =============================================================================

/// Answers every mutation with success and a fresh id.
#[derive(Default)]
struct FakeLinear {
    counter: AtomicUsize,
    requests: Mutex<Vec<Value>>,
}

#[async_trait]
impl Transport for FakeLinear {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value, TransportError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.requests.lock().unwrap().push(variables.clone());

        if document.contains("issueLabelCreate") {
            return Ok(json!({
                "data": {
                    "issueLabelCreate": {
                        "success": true,
                        "issueLabel": { "id": format!("label-{n}"), "name": variables["input"]["name"] }
                    }
                }
            }));
        }

        Ok(json!({
            "data": {
                "issueCreate": {
                    "success": true,
                    "issue": {
                        "id": format!("issue-{n}"),
                        "identifier": format!("PY-{n}"),
                        "title": variables["input"]["title"]
                    }
                }
            }
        }))
    }
}

#[tokio::test]
async fn test_end_to_end_with_graphql_client() {
    let client = LinearClient::new(FakeLinear::default(), "team-1");
    let mut sync = RoadmapSync::new(&client, curriculum());

    let report = sync.run().await.unwrap().clone();
    assert!(report.is_complete());

    let registry = sync.registry();
    assert_eq!(registry.label_count(), 10);
    assert_eq!(registry.module_count(), 10);

    let requests = client.transport().requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 70);
    assert!(requests
        .iter()
        .all(|vars| vars["input"]["teamId"] == "team-1"));

    let module_one = registry.module_id(1).unwrap();
    let children: Vec<&Value> = requests
        .iter()
        .filter(|vars| vars["input"]["parentId"] == module_one)
        .collect();
    assert_eq!(children.len(), 5);
    assert!(children.iter().all(|vars| vars["input"]["priority"] == 3));

    // Top-level issues carry no parentId at all.
    let top_level = requests
        .iter()
        .filter(|vars| vars["input"].get("title").is_some())
        .filter(|vars| vars["input"].get("parentId").is_none())
        .count();
    assert_eq!(top_level, 10);
}
