//! Connection and target settings shared by every accessor call.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use super::error::{GiteeError, Result};

/// Default API gateway of the Russian Gitee service.
pub const DEFAULT_GATEWAY: &str = "https://gitee.ru/api/v5";

/// Settings for one client session.
///
/// The value is borrowed by every call, so it cannot change while a request
/// (or its retry loop) is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API gateway, e.g. `https://gitee.com/api/v5`.
    pub gateway: String,

    /// OAuth token. Anonymous calls are allowed but rate limited by the server.
    pub token: Option<String>,

    /// Space name the repository belongs to (enterprise, organization or user).
    pub owner: Option<String>,

    /// Repository name.
    pub project: Option<String>,

    /// Branch name, commit, or blob SHA.
    pub sha: Option<String>,

    /// Request file trees recursively.
    pub recursive: bool,

    /// Timeout of a single attempt.
    pub timeout: Duration,

    /// Retries after the first request when a 5xx status is returned.
    /// Zero means a single attempt.
    pub retry: u32,

    /// Sleep between retries.
    pub pause: Duration,

    /// Write downloaded blobs into `output_dir`.
    pub save: bool,

    /// Directory for saved blobs.
    pub output_dir: PathBuf,

    /// Headers sent with every request.
    pub headers: BTreeMap<String, String>,

    /// Log request/response metadata and decoded bodies.
    pub more_debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gateway: DEFAULT_GATEWAY.to_string(),
            token: None,
            owner: None,
            project: None,
            sha: None,
            recursive: false,
            timeout: Duration::from_secs(15),
            retry: 3,
            pause: Duration::from_secs(5),
            save: false,
            output_dir: PathBuf::from("."),
            headers: default_headers(),
            more_debug: false,
        }
    }
}

pub fn default_headers() -> BTreeMap<String, String> {
    [
        ("Content-Type", "application/json"),
        ("charset", "UTF-8"),
        ("accept", "application/json"),
        ("x-app-name", "3LogicGroup.GPReplicator"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Configuration fields an accessor may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Owner,
    Project,
    Sha,
    Token,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Project => "project",
            Self::Sha => "sha",
            Self::Token => "token",
        }
    }
}

impl ClientConfig {
    fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Owner => &self.owner,
            Field::Project => &self.project,
            Field::Sha => &self.sha,
            Field::Token => &self.token,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Fail with `MissingConfiguration` unless every listed field is set and non-empty.
    pub fn require(&self, operation: &'static str, fields: &[Field]) -> Result<()> {
        if fields.iter().all(|f| self.field(*f).is_some()) {
            return Ok(());
        }

        tracing::error!(
            "All the variables: {:?} must be defined for using `{operation}`",
            fields.iter().map(|f| f.name()).collect::<Vec<_>>()
        );
        Err(GiteeError::MissingConfiguration {
            operation,
            fields: fields.iter().map(|f| f.name()).collect(),
        })
    }

    /// Owner, project and SHA of the target; empty when unset.
    pub(crate) fn owner_str(&self) -> &str {
        self.field(Field::Owner).unwrap_or_default()
    }

    pub(crate) fn project_str(&self) -> &str {
        self.field(Field::Project).unwrap_or_default()
    }

    pub(crate) fn sha_str(&self) -> &str {
        self.field(Field::Sha).unwrap_or_default()
    }

    /// Gateway without trailing slashes.
    pub fn gateway_url(&self) -> &str {
        self.gateway.trim_end_matches('/')
    }

    /// Form-encoded access token body, or `None` for anonymous access.
    pub fn request_body(&self) -> Option<String> {
        self.field(Field::Token)
            .map(|token| format!("access_token={}", utf8_percent_encode(token, NON_ALPHANUMERIC)))
    }
}
