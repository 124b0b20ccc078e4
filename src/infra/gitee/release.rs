//! Project releases.

use serde::Deserialize;
use serde_json::Value;

use super::client::GiteeClient;
use super::config::{ClientConfig, Field};
use super::error::Result;
use super::resource::{Resource, date, or_default, render_with};

const RELEASES: Resource = Resource {
    operation: "releases",
    label: "project releases",
    required: &[Field::Owner, Field::Project],
    path: |c| format!("/repos/{}/{}/releases", c.owner_str(), c.project_str()),
};

#[derive(Deserialize)]
struct ReleaseLine {
    #[serde(default, deserialize_with = "or_default")]
    created_at: String,
    #[serde(default, deserialize_with = "or_default")]
    tag_name: String,
    name: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    prerelease: bool,
}

fn render(item: &Value) -> String {
    render_with(item, |r: ReleaseLine| {
        format!(
            "Created: [{}] Tag: [{}] Release name: [{}]{}",
            date(&r.created_at),
            r.tag_name,
            r.name.unwrap_or_default(),
            if r.prerelease { " [Pre-release]" } else { "" }
        )
    })
}

impl GiteeClient {
    /// List published project releases. Requires `owner` and `project`.
    pub async fn releases(&self, config: &ClientConfig) -> Result<Vec<Value>> {
        self.fetch_list(&RELEASES, config, render).await
    }
}
