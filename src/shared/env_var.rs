//! Centralized reader for GITEE_* environment variables.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

use crate::infra::gitee::ClientConfig;

const TOKEN: &str = "GITEE_TOKEN";
const OWNER: &str = "GITEE_OWNER";
const PROJECT: &str = "GITEE_PROJECT";

/// Snapshot of the GITEE_* environment variables at load time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvVars {
    /// OAuth token for the Gitee API.
    pub token: Option<String>,

    /// Space name the repository belongs to.
    pub owner: Option<String>,

    /// Repository name.
    pub project: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read the GITEE_* environment variables from the current process.
    pub fn load() -> Self {
        let vars = Self {
            token: non_empty_var(TOKEN),
            owner: non_empty_var(OWNER),
            project: non_empty_var(PROJECT),
        };

        for (name, value) in [(TOKEN, &vars.token), (OWNER, &vars.owner), (PROJECT, &vars.project)] {
            if value.is_some() {
                tracing::debug!("Default value set up from environment variable `{name}`");
            }
        }
        vars
    }

    /// Override `config` with the variables that are set.
    pub fn apply(&self, config: &mut ClientConfig) {
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        if let Some(owner) = &self.owner {
            config.owner = Some(owner.clone());
        }
        if let Some(project) = &self.project {
            config.project = Some(project.clone());
        }
    }
}
