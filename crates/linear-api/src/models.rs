//! Linear entity type definitions.

use serde::{Deserialize, Serialize};

/// GraphQL connection wrapper (`{ nodes: [...] }`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// Linear label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Unique identifier
    pub id: String,
    /// Label name
    pub name: String,
    /// Label color
    #[serde(default)]
    pub color: Option<String>,
    /// Label description
    #[serde(default)]
    pub description: Option<String>,
}

/// Label as it appears nested in an issue listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelRef {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Workflow state name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateRef {
    pub name: String,
}

/// Parent issue reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParentRef {
    pub id: String,
    #[serde(default)]
    pub identifier: Option<String>,
}

/// Child issue summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChildRef {
    pub id: String,
    #[serde(default)]
    pub identifier: Option<String>,
    pub title: String,
}

/// Read-only issue snapshot returned by the team issue listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueSnapshot {
    /// Unique identifier
    pub id: String,
    /// Human-readable identifier (e.g., "LRN-12")
    pub identifier: String,
    /// Issue title
    pub title: String,
    /// Issue description (markdown)
    #[serde(default)]
    pub description: Option<String>,
    /// Current workflow state
    #[serde(default)]
    pub state: Option<StateRef>,
    /// Labels on the issue
    #[serde(default)]
    pub labels: Connection<LabelRef>,
    /// Parent issue (for sub-issues)
    #[serde(default)]
    pub parent: Option<ParentRef>,
    /// Direct children
    #[serde(default)]
    pub children: Connection<ChildRef>,
}

impl IssueSnapshot {
    /// Comma-separated label names.
    #[must_use]
    pub fn label_names(&self) -> String {
        self.labels
            .nodes
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Workflow state name, empty when the listing omitted it.
    #[must_use]
    pub fn state_name(&self) -> &str {
        self.state.as_ref().map_or("", |s| s.name.as_str())
    }

    /// Whether this issue has no parent.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}

/// Issue returned by `issueCreate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedIssue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Input for creating a label
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelCreateInput {
    /// Team ID
    pub team_id: String,
    /// Label name (unique within the team)
    pub name: String,
    /// Hex color code (e.g., "#ef4444")
    pub color: String,
    /// Label description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input for creating an issue
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateInput {
    /// Team ID
    pub team_id: String,
    /// Issue title
    pub title: String,
    /// Issue description (markdown)
    pub description: String,
    /// Label IDs to apply
    pub label_ids: Vec<String>,
    /// Parent issue ID (for sub-issues)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Priority (0 = none, 1 = urgent, 2 = high, 3 = normal, 4 = low)
    pub priority: i32,
}

/// Input for updating an issue. Unset fields are left untouched remotely.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdateInput {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New workflow state ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
}

impl IssueUpdateInput {
    /// Check if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.state_id.is_none()
    }
}

/// Default priority for issues created without an explicit one
pub const DEFAULT_PRIORITY: i32 = 3;
