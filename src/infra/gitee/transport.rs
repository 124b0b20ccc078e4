//! Request sending with retries on 5xx responses.

use serde_json::Value;

use super::client::GiteeClient;
use super::config::ClientConfig;
use super::error::Result;
use super::json;
use super::request::{HttpMethod, RequestSpec};
use super::retry::{RetryState, StatusClass};

impl GiteeClient {
    /// Send a request given its type as a string (`"GET"` or `"POST"`).
    ///
    /// Any other type fails with `InvalidArgument` before network activity.
    pub async fn send_str(&self, url: &str, method: &str, config: &ClientConfig) -> Result<Value> {
        let method = method.parse::<HttpMethod>()?;
        self.send(url, method, config).await
    }

    /// Send a request built from `config` and return the decoded JSON body.
    pub async fn send(&self, url: &str, method: HttpMethod, config: &ClientConfig) -> Result<Value> {
        let request = RequestSpec::new(url, method, config);
        self.execute(&request, config).await
    }

    /// Send a prepared request.
    ///
    /// - 4xx: no retry, the decoded error body is returned.
    /// - 5xx: retried up to `config.retry` times with `config.pause` between
    ///   attempts; `{}` is returned once the budget is exhausted.
    /// - Network faults are returned as `GiteeError::Transport` without retry.
    pub async fn execute(&self, request: &RequestSpec, config: &ClientConfig) -> Result<Value> {
        if config.more_debug {
            request.log_parameters();
        }

        let _guard = self.lock.lock().await;

        let mut state = RetryState::new();
        let mut accepted: Option<String> = None;

        while accepted.is_none() && state.can_attempt(config.retry) {
            let response = self.attempt(request, config).await?;
            let status = response.status();

            if config.more_debug {
                tracing::debug!("Response:");
                tracing::debug!("    - status code: {}", status.as_u16());
                tracing::debug!("    - reason: {}", status.canonical_reason().unwrap_or(""));
                tracing::debug!("    - headers:\n{:?}", response.headers());
            }

            let text = response.text().await?;
            if config.more_debug {
                tracing::debug!("    - body length: {}", text.len());
            }

            match StatusClass::of(status.as_u16()) {
                StatusClass::ClientError => {
                    tracing::debug!(
                        "    - not oK, but do not retry for 4xx errors, status code: [{}], response body: {text}",
                        status.as_u16()
                    );
                    if let Some(message) = server_message(&text) {
                        tracing::debug!(
                            "HTTP-status code [{}], server message: {message}",
                            status.as_u16()
                        );
                    }
                    tracing::warn!(
                        "Server returns status code [{}] for {}",
                        status.as_u16(),
                        request.url
                    );
                    state.stop();
                    accepted = Some(text);
                }
                StatusClass::ServerError => {
                    let message =
                        format!("status code: [{}], response body: {text}", status.as_u16());
                    tracing::debug!("    - not oK, {message}");
                    if let Some(server) = server_message(&text) {
                        tracing::debug!(
                            "HTTP-status code [{}], error message: {server}",
                            status.as_u16()
                        );
                    }

                    if state.record_failure(message, config.retry) {
                        tracing::debug!(
                            "Retry: [{}]. Wait {} sec. and try again...",
                            state.attempt,
                            config.pause.as_secs_f64()
                        );
                        tokio::time::sleep(config.pause).await;
                    }
                }
                StatusClass::Ok => accepted = Some(text),
            }
        }

        let Some(body) = accepted else {
            tracing::error!("Server returns not `oK` status! See full debug log.");
            if let Some(last_error) = &state.last_error {
                tracing::error!("    - not oK, {last_error}");
            }
            return Ok(json::decode(""));
        };

        let value = json::decode(&body);
        if config.more_debug {
            tracing::debug!(
                "JSON-data of raw response body:\n{}",
                serde_json::to_string_pretty(&value).unwrap_or_default()
            );
        }
        Ok(value)
    }

    async fn attempt(
        &self,
        request: &RequestSpec,
        config: &ClientConfig,
    ) -> Result<reqwest::Response> {
        let mut builder = self
            .http
            .request(request.method.into(), &request.url)
            .timeout(config.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        Ok(builder.send().await?)
    }
}

/// Extract `message` from a `{"code": ..., "message": ...}` error payload.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    if !object.contains_key("code") {
        return None;
    }
    object.get("message").map(|m| match m {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
