//! Project tags.

use serde::Deserialize;
use serde_json::Value;

use super::client::GiteeClient;
use super::config::{ClientConfig, Field};
use super::error::Result;
use super::resource::{Resource, date, or_default, render_with};

const TAGS: Resource = Resource {
    operation: "tags",
    label: "project tags",
    required: &[Field::Owner, Field::Project],
    path: |c| format!("/repos/{}/{}/tags", c.owner_str(), c.project_str()),
};

#[derive(Deserialize)]
struct TagLine {
    #[serde(default, deserialize_with = "or_default")]
    name: String,
    commit: Option<TagCommit>,
}

#[derive(Deserialize)]
struct TagCommit {
    #[serde(default, deserialize_with = "or_default")]
    date: String,
}

fn render(item: &Value) -> String {
    render_with(item, |tag: TagLine| {
        let created = tag.commit.map(|c| c.date).unwrap_or_default();
        format!("Created: [{}] Name: [{}]", date(&created), tag.name)
    })
}

impl GiteeClient {
    /// List project tags. Requires `owner` and `project`.
    pub async fn tags(&self, config: &ClientConfig) -> Result<Vec<Value>> {
        self.fetch_list(&TAGS, config, render).await
    }
}
