//! Repositories visible to the authenticated user.

use serde::Deserialize;
use serde_json::Value;

use super::client::GiteeClient;
use super::config::{ClientConfig, Field};
use super::error::Result;
use super::resource::{Resource, date, or_default, render_with};

const REPOSITORIES: Resource = Resource {
    operation: "repositories",
    label: "user repositories",
    required: &[Field::Token],
    path: |_| "/user/repos?sort=full_name&direction=asc&page=1&per_page=100".to_string(),
};

#[derive(Deserialize)]
struct RepositoryLine {
    #[serde(default, deserialize_with = "or_default")]
    full_name: String,
    #[serde(default, deserialize_with = "or_default")]
    updated_at: String,
    #[serde(default, deserialize_with = "or_default")]
    private: bool,
    #[serde(default, deserialize_with = "or_default")]
    fork: bool,
}

fn render(item: &Value) -> String {
    render_with(item, |r: RepositoryLine| {
        format!(
            "Updated: [{}] Name: [{}]{}{}",
            date(&r.updated_at),
            r.full_name,
            if r.private { " [Private]" } else { "" },
            if r.fork { " [Fork]" } else { "" }
        )
    })
}

impl GiteeClient {
    /// List repositories of the token owner (first page, up to 100, sorted by
    /// full name). Requires `token`.
    pub async fn repositories(&self, config: &ClientConfig) -> Result<Vec<Value>> {
        self.fetch_list(&REPOSITORIES, config, render).await
    }
}
