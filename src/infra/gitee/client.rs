//! Gitee API client.

use tokio::sync::Mutex;

use super::error::Result;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the Gitee REST API v5.
///
/// Holds the HTTP connection pool and the lock that serializes requests.
/// Share one instance across tasks with `Arc<GiteeClient>`; at most one
/// request (including its retries) is in flight per instance.
pub struct GiteeClient {
    pub(super) http: reqwest::Client,
    pub(super) lock: Mutex<()>,
}

impl GiteeClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_http_client(http))
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self {
            http,
            lock: Mutex::new(()),
        }
    }
}
