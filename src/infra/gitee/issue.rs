//! Project issues.

use serde::Deserialize;
use serde_json::Value;

use super::client::GiteeClient;
use super::config::{ClientConfig, Field};
use super::error::Result;
use super::resource::{Resource, date, or_default, render_with};

const ISSUES: Resource = Resource {
    operation: "issues",
    label: "project issues",
    required: &[Field::Owner, Field::Project],
    path: |c| {
        format!(
            "/repos/{}/{}/issues?state=all",
            c.owner_str(),
            c.project_str()
        )
    },
};

#[derive(Deserialize)]
struct IssueLine {
    #[serde(default, deserialize_with = "or_default")]
    state: String,
    #[serde(default, deserialize_with = "or_default")]
    issue_type: String,
    #[serde(default, deserialize_with = "or_default")]
    created_at: String,
    #[serde(default, deserialize_with = "or_default")]
    title: String,
    milestone: Option<MilestoneRef>,
}

#[derive(Deserialize)]
struct MilestoneRef {
    #[serde(default, deserialize_with = "or_default")]
    title: String,
}

fn render(item: &Value) -> String {
    render_with(item, |issue: IssueLine| {
        let milestone = issue
            .milestone
            .map(|m| format!(" Milestone: [{}]", m.title))
            .unwrap_or_default();
        format!(
            "State: [{}] Type: [{}] Created: [{}] Title: [{}]{milestone}",
            issue.state,
            issue.issue_type,
            date(&issue.created_at),
            issue.title
        )
    })
}

impl GiteeClient {
    /// List project issues in every state. Requires `owner` and `project`.
    pub async fn issues(&self, config: &ClientConfig) -> Result<Vec<Value>> {
        self.fetch_list(&ISSUES, config, render).await
    }
}
