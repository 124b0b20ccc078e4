//! Project milestones.

use serde::Deserialize;
use serde_json::Value;

use super::client::GiteeClient;
use super::config::{ClientConfig, Field};
use super::error::Result;
use super::resource::{Resource, date, or_default, render_with};

const MILESTONES: Resource = Resource {
    operation: "milestones",
    label: "project milestones",
    required: &[Field::Owner, Field::Project],
    path: |c| format!("/repos/{}/{}/milestones", c.owner_str(), c.project_str()),
};

#[derive(Deserialize)]
struct MilestoneLine {
    #[serde(default, deserialize_with = "or_default")]
    state: String,
    #[serde(default, deserialize_with = "or_default")]
    created_at: String,
    due_on: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    title: String,
    #[serde(default, deserialize_with = "or_default")]
    open_issues: u64,
    #[serde(default, deserialize_with = "or_default")]
    closed_issues: u64,
}

fn render(item: &Value) -> String {
    render_with(item, |m: MilestoneLine| {
        format!(
            "State: [{}] Created: [{}] Deadline: [{}] Title: [{}] Open/Closed issues: [{}/{}]",
            m.state,
            date(&m.created_at),
            m.due_on.as_deref().map(date).unwrap_or(""),
            m.title,
            m.open_issues,
            m.closed_issues
        )
    })
}

impl GiteeClient {
    /// List project milestones. Requires `owner` and `project`.
    pub async fn milestones(&self, config: &ClientConfig) -> Result<Vec<Value>> {
        self.fetch_list(&MILESTONES, config, render).await
    }
}
