//! Shared request/summary flow behind every resource accessor.

use serde::Deserialize;
use serde_json::Value;

use super::client::GiteeClient;
use super::config::{ClientConfig, Field};
use super::error::Result;
use super::request::HttpMethod;

/// Static description of one API resource.
pub(super) struct Resource {
    /// Accessor name used in error messages, e.g. `issues`.
    pub operation: &'static str,
    /// Human-readable name used in log lines, e.g. `project issues`.
    pub label: &'static str,
    /// Fields that must be set before any request is sent.
    pub required: &'static [Field],
    /// Path and query appended to the gateway.
    pub path: fn(&ClientConfig) -> String,
}

impl Resource {
    pub fn url(&self, config: &ClientConfig) -> String {
        format!("{}{}", config.gateway_url(), (self.path)(config))
    }
}

impl GiteeClient {
    /// Validate the configuration, then GET the resource.
    pub(super) async fn fetch(&self, resource: &Resource, config: &ClientConfig) -> Result<Value> {
        config.require(resource.operation, resource.required)?;

        tracing::debug!("Requesting all {}. Wait, please...", resource.label);
        self.send(&resource.url(config), HttpMethod::Get, config)
            .await
    }

    /// GET a list resource and log one summary line per item.
    ///
    /// Anything other than a non-empty array is reported as "no items" and
    /// normalized to an empty vector.
    pub(super) async fn fetch_list(
        &self,
        resource: &Resource,
        config: &ClientConfig,
        render: fn(&Value) -> String,
    ) -> Result<Vec<Value>> {
        let items = match self.fetch(resource, config).await? {
            Value::Array(items) if !items.is_empty() => items,
            _ => {
                tracing::info!("There are no {}", resource.label);
                return Ok(Vec::new());
            }
        };

        if config.more_debug {
            tracing::debug!(
                "{} data successfully received. Records: [{}]",
                resource.label,
                items.len()
            );
        }

        let heading = format!("List of all {} [{}]:", resource.label, items.len());
        tracing::info!("{}", summary(&heading, items.iter().map(render)));

        Ok(items)
    }
}

/// Heading followed by the lines sorted lexicographically.
pub(super) fn summary(heading: &str, lines: impl Iterator<Item = String>) -> String {
    let mut lines: Vec<String> = lines.collect();
    lines.sort();

    let mut text = heading.to_string();
    for line in lines {
        text.push('\n');
        text.push_str(&line);
    }
    text
}

/// Date part of an ISO-8601 timestamp.
pub(super) fn date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// Field deserializer treating an explicit `null` like a missing key.
pub(super) fn or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an item for rendering. Items of an unexpected shape fall back
/// to their raw JSON text.
pub(super) fn render_with<T, F>(item: &Value, render: F) -> String
where
    T: serde::de::DeserializeOwned,
    F: FnOnce(T) -> String,
{
    match T::deserialize(item) {
        Ok(parsed) => render(parsed),
        Err(_) => item.to_string(),
    }
}
