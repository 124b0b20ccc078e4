//! Project branches.

use serde::Deserialize;
use serde_json::Value;

use super::client::GiteeClient;
use super::config::{ClientConfig, Field};
use super::error::Result;
use super::resource::{Resource, or_default, render_with};

const BRANCHES: Resource = Resource {
    operation: "branches",
    label: "project branches",
    required: &[Field::Owner, Field::Project],
    path: |c| {
        format!(
            "/repos/{}/{}/branches?sort=name&direction=asc&page=1&per_page=100",
            c.owner_str(),
            c.project_str()
        )
    },
};

#[derive(Deserialize)]
struct BranchLine {
    #[serde(default, deserialize_with = "or_default")]
    name: String,
    commit: Option<BranchCommit>,
    #[serde(default, deserialize_with = "or_default")]
    protected: bool,
}

#[derive(Deserialize)]
struct BranchCommit {
    #[serde(default, deserialize_with = "or_default")]
    sha: String,
}

fn render(item: &Value) -> String {
    render_with(item, |b: BranchLine| {
        format!(
            "Name: [{}] Commit: [{}] Protected: [{}]",
            b.name,
            b.commit.map(|c| c.sha).unwrap_or_default(),
            if b.protected { "yes" } else { "no" }
        )
    })
}

impl GiteeClient {
    /// List project branches (first page, up to 100, sorted by name).
    /// Requires `owner` and `project`.
    pub async fn branches(&self, config: &ClientConfig) -> Result<Vec<Value>> {
        self.fetch_list(&BRANCHES, config, render).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::gitee::mock::{GiteeMockServer, fixtures};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::protected(fixtures::branch("master", "abc123", true), "Name: [master] Commit: [abc123] Protected: [yes]")]
    #[case::unprotected(fixtures::branch("dev", "def456", false), "Name: [dev] Commit: [def456] Protected: [no]")]
    #[case::null_fields(
        json!({"name": "wip", "commit": {"sha": null}, "protected": null}),
        "Name: [wip] Commit: [] Protected: [no]"
    )]
    fn test_render(#[case] item: Value, #[case] expected: &str) {
        assert_eq!(render(&item), expected);
    }

    #[tokio::test]
    async fn branches_requests_first_page_sorted_by_name() {
        let mock = GiteeMockServer::start().await;
        mock.repo("owner", "project")
            .branches()
            .query("sort", "name")
            .query("direction", "asc")
            .query("page", "1")
            .query("per_page", "100")
            .respond(json!([fixtures::branch("master", "abc", true)]))
            .await;

        let client = GiteeClient::new().unwrap();
        let branches = client.branches(&mock.config("owner", "project")).await.unwrap();

        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0]["name"], "master");
    }
}
