//! wiremock-based Gitee mock server for testing.
//!
//! ```ignore
//! let mock = GiteeMockServer::start().await;
//! let ctx = mock.repo("owner", "project");
//!
//! ctx.tree("master").query("recursive", "1").respond(fixtures::tree(46)).await;
//! ctx.issues().status(404).respond(json!({"message": "Not Found"})).await;
//! mock.user_repos().respond(json!([])).await;
//! mock.expect_no_requests().await;
//! ```

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{any, body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::config::ClientConfig;

pub struct GiteeMockServer {
    server: MockServer,
}

impl GiteeMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Config targeting this server: no retries, no pauses.
    pub fn config(&self, owner: &str, project: &str) -> ClientConfig {
        ClientConfig {
            gateway: self.server.uri(),
            owner: Some(owner.to_string()),
            project: Some(project.to_string()),
            retry: 0,
            pause: Duration::ZERO,
            timeout: Duration::from_secs(5),
            ..ClientConfig::default()
        }
    }

    pub fn repo<'a>(&'a self, owner: &'a str, project: &'a str) -> MockRepoContext<'a> {
        MockRepoContext {
            server: &self.server,
            owner,
            project,
        }
    }

    /// GET /user/repos.
    pub fn user_repos(&self) -> MockEndpoint<'_> {
        MockEndpoint::new(&self.server, "/user/repos".to_string())
    }

    /// Fail the test if any request reaches the server.
    pub async fn expect_no_requests(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}

/// Repository-scoped endpoints.
pub struct MockRepoContext<'a> {
    server: &'a MockServer,
    owner: &'a str,
    project: &'a str,
}

impl<'a> MockRepoContext<'a> {
    fn endpoint(&self, suffix: &str) -> MockEndpoint<'a> {
        MockEndpoint::new(
            self.server,
            format!("/repos/{}/{}/{suffix}", self.owner, self.project),
        )
    }

    pub fn tree(&self, sha: &str) -> MockEndpoint<'a> {
        self.endpoint(&format!("git/trees/{sha}"))
    }

    pub fn blob(&self, sha: &str) -> MockEndpoint<'a> {
        self.endpoint(&format!("git/blobs/{sha}"))
    }

    pub fn issues(&self) -> MockEndpoint<'a> {
        self.endpoint("issues")
    }

    pub fn milestones(&self) -> MockEndpoint<'a> {
        self.endpoint("milestones")
    }

    pub fn releases(&self) -> MockEndpoint<'a> {
        self.endpoint("releases")
    }

    pub fn tags(&self) -> MockEndpoint<'a> {
        self.endpoint("tags")
    }

    pub fn branches(&self) -> MockEndpoint<'a> {
        self.endpoint("branches")
    }
}

/// Builder for a single GET endpoint mock.
pub struct MockEndpoint<'a> {
    server: &'a MockServer,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<String>,
    status: u16,
    times: u64,
}

impl<'a> MockEndpoint<'a> {
    fn new(server: &'a MockServer, path: String) -> Self {
        Self {
            server,
            path,
            query: Vec::new(),
            body: None,
            status: 200,
            times: 1,
        }
    }

    /// Require a query parameter.
    pub fn query(mut self, key: &'static str, value: &str) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Require an exact request body.
    pub fn body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Expected number of calls (default: 1).
    pub fn times(mut self, times: u64) -> Self {
        self.times = times;
        self
    }

    pub async fn respond(self, body: Value) {
        let mut mock = Mock::given(method("GET")).and(path(self.path.as_str()));
        for (key, value) in &self.query {
            mock = mock.and(query_param(*key, value.as_str()));
        }
        if let Some(body) = self.body {
            mock = mock.and(body_string(body));
        }
        mock.respond_with(ResponseTemplate::new(self.status).set_body_json(body))
            .expect(self.times)
            .mount(self.server)
            .await;
    }
}

/// Canned API payloads.
pub mod fixtures {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    use super::*;

    /// Tree with `count` entries; every fifth entry is a directory.
    pub fn tree(count: usize) -> Value {
        let entries: Vec<Value> = (0..count)
            .map(|i| {
                let kind = if i % 5 == 0 { "tree" } else { "blob" };
                json!({
                    "path": format!("path/{i:02}"),
                    "mode": if kind == "tree" { "040000" } else { "100644" },
                    "type": kind,
                    "sha": format!("{i:040x}"),
                })
            })
            .collect();
        json!({"sha": "master", "tree": entries, "truncated": false})
    }

    /// Blob payload as the API returns it: base64 wrapped at 60 columns.
    pub fn blob(sha: &str, content: &str) -> Value {
        let encoded = STANDARD.encode(content);
        let wrapped: Vec<String> = encoded
            .as_bytes()
            .chunks(60)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect();
        json!({
            "sha": sha,
            "size": content.len(),
            "url": format!("https://gitee.ru/api/v5/repos/o/p/git/blobs/{sha}"),
            "content": wrapped.join("\n"),
            "encoding": "base64",
        })
    }

    pub fn issue(title: &str, state: &str, milestone: Option<&str>) -> Value {
        json!({
            "number": "I1ABCD",
            "title": title,
            "state": state,
            "issue_type": "任务",
            "created_at": "2024-02-10T12:00:00+08:00",
            "milestone": milestone.map(|m| json!({"title": m})),
        })
    }

    pub fn milestone(title: &str, open: u64, closed: u64) -> Value {
        json!({
            "title": title,
            "state": "open",
            "created_at": "2024-01-01T09:00:00+08:00",
            "due_on": "2024-06-30T00:00:00+08:00",
            "open_issues": open,
            "closed_issues": closed,
        })
    }

    pub fn release(tag: &str, name: &str, prerelease: bool) -> Value {
        json!({
            "tag_name": tag,
            "name": name,
            "prerelease": prerelease,
            "created_at": "2024-03-15T08:30:00+08:00",
        })
    }

    pub fn tag(name: &str, date: &str) -> Value {
        json!({
            "name": name,
            "commit": {"sha": "a1b2c3", "date": date},
        })
    }

    pub fn branch(name: &str, sha: &str, protected: bool) -> Value {
        json!({
            "name": name,
            "commit": {"sha": sha, "url": "https://gitee.ru/api/v5/commit"},
            "protected": protected,
        })
    }

    pub fn repository(full_name: &str, private: bool, fork: bool) -> Value {
        json!({
            "full_name": full_name,
            "private": private,
            "fork": fork,
            "updated_at": "2024-04-01T00:00:00+08:00",
        })
    }
}
