//! Repository file tree.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::client::GiteeClient;
use super::config::{ClientConfig, Field};
use super::error::Result;
use super::resource::{Resource, or_default, render_with, summary};

const FILES: Resource = Resource {
    operation: "files",
    label: "project files",
    required: &[Field::Owner, Field::Project, Field::Sha],
    path: |c| {
        format!(
            "/repos/{}/{}/git/trees/{}?recursive={}",
            c.owner_str(),
            c.project_str(),
            c.sha_str(),
            u8::from(c.recursive)
        )
    },
};

#[derive(Deserialize)]
struct TreeEntry {
    #[serde(default, deserialize_with = "or_default")]
    path: String,
    #[serde(rename = "type", default, deserialize_with = "or_default")]
    kind: String,
}

fn render(item: &Value) -> String {
    render_with(item, |entry: TreeEntry| {
        let suffix = if entry.kind == "tree" { "/" } else { "" };
        format!("|-> {}{suffix}", entry.path)
    })
}

impl GiteeClient {
    /// Get the project file tree at `config.sha`.
    ///
    /// Requires `owner`, `project` and `sha`. With `config.recursive` every
    /// nested path is listed, otherwise only the root directory. Returns the
    /// response object containing the `tree` array, or an empty object.
    pub async fn files(&self, config: &ClientConfig) -> Result<Map<String, Value>> {
        let response = self.fetch(&FILES, config).await?;

        let object = match response {
            Value::Object(object) if object.get("tree").is_some_and(Value::is_array) => object,
            _ => {
                tracing::info!("There are no {}", FILES.label);
                return Ok(Map::new());
            }
        };

        let entries = object
            .get("tree")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        if config.more_debug {
            tracing::debug!(
                "Project files data successfully received. Records: [{}]",
                entries.len()
            );
        }

        if !entries.is_empty() {
            let heading = if config.recursive {
                format!("List of all project files [{}]:", entries.len())
            } else {
                format!("List of project files in root directory [{}]:", entries.len())
            };
            let heading = format!("{heading}\n. {} repository", config.project_str());
            tracing::info!("{}", summary(&heading, entries.iter().map(render)));
        }

        Ok(object)
    }

    /// Alias of [`GiteeClient::files`].
    pub async fn project_files(&self, config: &ClientConfig) -> Result<Map<String, Value>> {
        self.files(config).await
    }
}
