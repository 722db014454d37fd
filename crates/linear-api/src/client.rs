//! Typed label and issue operations on top of a GraphQL [`Transport`].
//!
//! Every operation issues exactly one transport call. Remote-reported
//! failures (`success: false`, missing payload, GraphQL `errors`) come back
//! as `None`/`false` so a long batch can keep going; only transport
//! failures are returned as `Err`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info, instrument, warn};

use crate::config::LinearConfig;
use crate::error::TransportError;
use crate::models::{
    CreatedIssue, IssueCreateInput, IssueSnapshot, IssueUpdateInput, Label, LabelCreateInput,
    DEFAULT_PRIORITY,
};
use crate::transport::{HttpTransport, Transport};

const CREATE_LABEL_MUTATION: &str = r"
    mutation CreateLabel($input: IssueLabelCreateInput!) {
        issueLabelCreate(input: $input) {
            success
            issueLabel {
                id
                name
                color
            }
        }
    }
";

const LIST_LABELS_QUERY: &str = r"
    query GetLabels($teamId: String!) {
        team(id: $teamId) {
            labels {
                nodes {
                    id
                    name
                    color
                    description
                }
            }
        }
    }
";

const CREATE_ISSUE_MUTATION: &str = r"
    mutation CreateIssue($input: IssueCreateInput!) {
        issueCreate(input: $input) {
            success
            issue {
                id
                identifier
                title
                url
            }
        }
    }
";

const LIST_ISSUES_QUERY: &str = r"
    query GetIssues($teamId: String!, $first: Int!) {
        team(id: $teamId) {
            issues(first: $first) {
                nodes {
                    id
                    identifier
                    title
                    description
                    state {
                        name
                    }
                    labels {
                        nodes {
                            name
                            color
                        }
                    }
                    parent {
                        id
                        identifier
                    }
                    children {
                        nodes {
                            id
                            identifier
                            title
                        }
                    }
                }
            }
        }
    }
";

const UPDATE_ISSUE_MUTATION: &str = r"
    mutation UpdateIssue($id: String!, $input: IssueUpdateInput!) {
        issueUpdate(id: $id, input: $input) {
            success
        }
    }
";

const DELETE_ISSUE_MUTATION: &str = r"
    mutation DeleteIssue($id: String!) {
        issueDelete(id: $id) {
            success
        }
    }
";

/// Remote label/issue operations used by the roadmap seeder.
///
/// Creation returns the remote id, or `None` when Linear reported failure.
/// Callers must not register a `None` result.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Create a team label.
    async fn create_label(
        &self,
        name: &str,
        color: &str,
        description: &str,
    ) -> Result<Option<String>, TransportError>;

    /// List the team's labels.
    async fn list_labels(&self) -> Result<Vec<Label>, TransportError>;

    /// Create an issue. `parent_id` makes it a child issue.
    async fn create_issue(
        &self,
        title: &str,
        description: &str,
        label_ids: &[String],
        parent_id: Option<&str>,
        priority: i32,
    ) -> Result<Option<String>, TransportError>;

    /// Create a child issue with the default priority.
    async fn create_sub_issue(
        &self,
        parent_id: &str,
        title: &str,
        description: &str,
        label_ids: &[String],
    ) -> Result<Option<String>, TransportError> {
        self.create_issue(title, description, label_ids, Some(parent_id), DEFAULT_PRIORITY)
            .await
    }

    /// List up to `limit` team issues. Display only.
    async fn list_issues(&self, limit: u32) -> Result<Vec<IssueSnapshot>, TransportError>;

    /// Partially update an issue. An empty input succeeds without a request.
    async fn update_issue(
        &self,
        issue_id: &str,
        input: IssueUpdateInput,
    ) -> Result<bool, TransportError>;

    /// Delete an issue.
    async fn delete_issue(&self, issue_id: &str) -> Result<bool, TransportError>;
}

/// Linear GraphQL client scoped to one team.
#[derive(Debug, Clone)]
pub struct LinearClient<T = HttpTransport> {
    transport: T,
    team_id: String,
}

impl LinearClient<HttpTransport> {
    /// Build an HTTP-backed client from configuration.
    pub fn from_config(config: &LinearConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(transport, config.team_id.clone()))
    }
}

impl<T: Transport> LinearClient<T> {
    /// Create a client over an arbitrary transport.
    #[must_use]
    pub fn new(transport: T, team_id: impl Into<String>) -> Self {
        Self {
            transport,
            team_id: team_id.into(),
        }
    }

    /// Underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute a document and return the `data.<operation>` payload.
    async fn operation(
        &self,
        document: &str,
        variables: Value,
        operation: &str,
    ) -> Result<Option<Value>, TransportError> {
        let mut body = self.transport.execute(document, variables).await?;
        log_graphql_errors(&body, operation);

        Ok(body
            .get_mut("data")
            .and_then(|data| data.get_mut(operation))
            .map(Value::take)
            .filter(|payload| !payload.is_null()))
    }
}

/// `payload.success == true`
fn succeeded(payload: Option<&Value>) -> bool {
    payload
        .and_then(|p| p.get("success"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn log_graphql_errors(body: &Value, operation: &str) {
    if let Some(errors) = body.get("errors").and_then(Value::as_array) {
        let messages: Vec<&str> = errors
            .iter()
            .filter_map(|e| e.get("message").and_then(Value::as_str))
            .collect();
        warn!(operation, errors = %messages.join(", "), "GraphQL errors in response");
    }
}

/// Deserialize `{ nodes: [...] }`, skipping nodes that do not match `N`.
fn nodes<N: DeserializeOwned>(connection: Option<&Value>) -> Vec<N> {
    connection
        .and_then(|c| c.get("nodes"))
        .and_then(Value::as_array)
        .map(|nodes| {
            nodes
                .iter()
                .filter_map(|node| match serde_json::from_value(node.clone()) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        warn!(error = %e, "Skipping malformed node in Linear response");
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl<T: Transport> ResourceClient for LinearClient<T> {
    #[instrument(skip_all, fields(label = %name))]
    async fn create_label(
        &self,
        name: &str,
        color: &str,
        description: &str,
    ) -> Result<Option<String>, TransportError> {
        let input = LabelCreateInput {
            team_id: self.team_id.clone(),
            name: name.to_string(),
            color: color.to_string(),
            description: Some(description.to_string()).filter(|d| !d.is_empty()),
        };

        let payload = self
            .operation(
                CREATE_LABEL_MUTATION,
                json!({ "input": input }),
                "issueLabelCreate",
            )
            .await?;

        if !succeeded(payload.as_ref()) {
            warn!(label = name, "Failed to create label");
            return Ok(None);
        }

        let id = payload
            .as_ref()
            .and_then(|p| p.pointer("/issueLabel/id"))
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        match &id {
            Some(id) => info!(label = name, color, label_id = %id, "Created label"),
            None => warn!(label = name, "Label not returned after creation"),
        }
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list_labels(&self) -> Result<Vec<Label>, TransportError> {
        let payload = self
            .operation(
                LIST_LABELS_QUERY,
                json!({ "teamId": self.team_id }),
                "team",
            )
            .await?;

        let labels: Vec<Label> = nodes(payload.as_ref().and_then(|team| team.get("labels")));
        debug!(count = labels.len(), "Retrieved team labels");
        Ok(labels)
    }

    #[instrument(skip_all, fields(title = %title, parent_id = ?parent_id))]
    async fn create_issue(
        &self,
        title: &str,
        description: &str,
        label_ids: &[String],
        parent_id: Option<&str>,
        priority: i32,
    ) -> Result<Option<String>, TransportError> {
        let input = IssueCreateInput {
            team_id: self.team_id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            label_ids: label_ids.to_vec(),
            parent_id: parent_id.map(str::to_string),
            priority,
        };

        let payload = self
            .operation(
                CREATE_ISSUE_MUTATION,
                json!({ "input": input }),
                "issueCreate",
            )
            .await?;

        if !succeeded(payload.as_ref()) {
            warn!(title, "Failed to create issue");
            return Ok(None);
        }

        let issue: Option<CreatedIssue> = payload
            .and_then(|mut p| p.get_mut("issue").map(Value::take))
            .and_then(|issue| serde_json::from_value(issue).ok())
            .filter(|issue: &CreatedIssue| !issue.id.is_empty());

        match issue {
            Some(issue) => {
                info!(identifier = %issue.identifier, title, "Created issue");
                Ok(Some(issue.id))
            }
            None => {
                warn!(title, "Issue not returned after creation");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn list_issues(&self, limit: u32) -> Result<Vec<IssueSnapshot>, TransportError> {
        let payload = self
            .operation(
                LIST_ISSUES_QUERY,
                json!({ "teamId": self.team_id, "first": limit }),
                "team",
            )
            .await?;

        let issues: Vec<IssueSnapshot> =
            nodes(payload.as_ref().and_then(|team| team.get("issues")));
        debug!(count = issues.len(), "Retrieved team issues");
        Ok(issues)
    }

    #[instrument(skip_all, fields(issue_id = %issue_id))]
    async fn update_issue(
        &self,
        issue_id: &str,
        input: IssueUpdateInput,
    ) -> Result<bool, TransportError> {
        if input.is_empty() {
            debug!(issue_id, "Nothing to update");
            return Ok(true);
        }

        let payload = self
            .operation(
                UPDATE_ISSUE_MUTATION,
                json!({ "id": issue_id, "input": input }),
                "issueUpdate",
            )
            .await?;

        let ok = succeeded(payload.as_ref());
        if !ok {
            warn!(issue_id, "Failed to update issue");
        }
        Ok(ok)
    }

    #[instrument(skip_all, fields(issue_id = %issue_id))]
    async fn delete_issue(&self, issue_id: &str) -> Result<bool, TransportError> {
        let payload = self
            .operation(
                DELETE_ISSUE_MUTATION,
                json!({ "id": issue_id }),
                "issueDelete",
            )
            .await?;

        let ok = succeeded(payload.as_ref());
        if !ok {
            warn!(issue_id, "Failed to delete issue");
        }
        Ok(ok)
    }
}
