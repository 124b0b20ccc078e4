//! Request description built for each transport call.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::config::ClientConfig;
use super::error::GiteeError;

/// Supported request types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl FromStr for HttpMethod {
    type Err = GiteeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            _ => {
                tracing::error!("You can define request type: `GET` or `POST`!");
                Err(GiteeError::InvalidArgument(s.to_string()))
            }
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// One outgoing request: method, URL, headers and optional body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl RequestSpec {
    /// Build a request from the configured headers and access token body.
    pub fn new(url: &str, method: HttpMethod, config: &ClientConfig) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: config.headers.clone(),
            body: config.request_body(),
        }
    }

    pub(crate) fn log_parameters(&self) {
        tracing::debug!("Request parameters:");
        tracing::debug!("    - REST API URL: {}", self.url);
        tracing::debug!("    - request type: {}", self.method);
        tracing::debug!("    - headers:\n{:?}", self.headers);
        tracing::debug!("    - raw request body:\n{:?}", self.redacted_body());
    }

    /// Body with the access token value masked.
    fn redacted_body(&self) -> Option<String> {
        self.body.as_deref().map(|body| match body.split_once('=') {
            Some(("access_token", _)) => "access_token=***".to_string(),
            _ => body.to_string(),
        })
    }
}
