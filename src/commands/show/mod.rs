use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use crate::infra::gitee::{ClientConfig, GiteeClient};
use crate::shared::config::{self, FileConfig};
use crate::shared::env_var::EnvVars;

#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct ShowArgs {
    /// API gateway of Gitee service
    #[arg(short = 'g', long = "gitee-gateway")]
    pub gateway: Option<String>,

    /// Your API token on Gitee service [env: GITEE_TOKEN]
    #[arg(short = 't', long = "gitee-token")]
    pub token: Option<String>,

    /// Project owner on Gitee service [env: GITEE_OWNER]
    #[arg(short = 'o', long = "gitee-owner")]
    pub owner: Option<String>,

    /// Project on Gitee service [env: GITEE_PROJECT]
    #[arg(short = 'p', long = "gitee-project")]
    pub project: Option<String>,

    /// Branch name (such as master), commit or blob SHA
    #[arg(short = 's', long = "gitee-sha")]
    pub sha: Option<String>,

    /// Receive file trees recursively
    #[arg(short = 'r', long = "gitee-recursive")]
    pub recursive: bool,

    /// Save downloaded files into the output directory
    #[arg(long)]
    pub save: bool,

    /// Directory for saved files
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Retries after the first request on 5xx responses
    #[arg(long)]
    pub retry: Option<u32>,

    /// Pause between retries in seconds
    #[arg(long, value_name = "SECS")]
    pub pause: Option<u64>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log request/response headers and bodies
    #[arg(long)]
    pub more_debug: bool,

    /// Print results as JSON to stdout
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub resources: ResourceFlags,
}

/// Resources to request; at least one is required. Run in declaration order.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
#[group(required = true, multiple = true)]
pub struct ResourceFlags {
    /// Show project files
    #[arg(short = 'f', long)]
    pub files: bool,

    /// Download the blob given by --gitee-sha
    #[arg(long)]
    pub get_file: bool,

    /// Show project issues
    #[arg(short = 'i', long)]
    pub issues: bool,

    /// Show project milestones
    #[arg(short = 'm', long)]
    pub milestones: bool,

    /// Show project releases
    #[arg(long)]
    pub releases: bool,

    /// Show project tags
    #[arg(long)]
    pub tags: bool,

    /// Show project branches
    #[arg(short = 'b', long)]
    pub branches: bool,

    /// Show repositories of the token owner
    #[arg(long)]
    pub repos: bool,
}

impl ShowArgs {
    /// Layer CLI flags over environment variables, the config file and defaults.
    pub fn client_config(&self, file: &FileConfig, env: &EnvVars) -> ClientConfig {
        let mut config = ClientConfig::default();
        file.apply(&mut config);
        env.apply(&mut config);

        if let Some(gateway) = &self.gateway {
            config.gateway = gateway.clone();
        }
        if self.token.is_some() {
            config.token = self.token.clone();
        }
        if self.owner.is_some() {
            config.owner = self.owner.clone();
        }
        if self.project.is_some() {
            config.project = self.project.clone();
        }
        if self.sha.is_some() {
            config.sha = self.sha.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(retry) = self.retry {
            config.retry = retry;
        }
        if let Some(secs) = self.pause {
            config.pause = Duration::from_secs(secs);
        }
        if let Some(secs) = self.timeout {
            config.timeout = Duration::from_secs(secs);
        }
        config.recursive |= self.recursive;
        config.save |= self.save;
        config.more_debug |= self.more_debug;
        config
    }
}

#[tokio::main]
pub async fn run(args: &ShowArgs) -> anyhow::Result<()> {
    let file = config::load_config()?;
    let config = args.client_config(&file, &EnvVars::load());
    let client = GiteeClient::new().context("Failed to build HTTP client")?;

    run_with_client(args, &client, &config).await
}

async fn run_with_client(
    args: &ShowArgs,
    client: &GiteeClient,
    config: &ClientConfig,
) -> anyhow::Result<()> {
    let wanted = &args.resources;

    if wanted.files {
        let files = client.files(config).await?;
        print_json(args.json, &files)?;
    }
    if wanted.get_file {
        let content = client.get_file(config).await?;
        if args.json {
            print_json(true, &content)?;
        } else if !config.save {
            println!("{content}");
        }
    }
    if wanted.issues {
        print_json(args.json, &client.issues(config).await?)?;
    }
    if wanted.milestones {
        print_json(args.json, &client.milestones(config).await?)?;
    }
    if wanted.releases {
        print_json(args.json, &client.releases(config).await?)?;
    }
    if wanted.tags {
        print_json(args.json, &client.tags(config).await?)?;
    }
    if wanted.branches {
        print_json(args.json, &client.branches(config).await?)?;
    }
    if wanted.repos {
        print_json(args.json, &client.repositories(config).await?)?;
    }

    Ok(())
}

fn print_json<T: Serialize>(enabled: bool, value: &T) -> anyhow::Result<()> {
    if enabled {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::gitee::GiteeError;
    use crate::infra::gitee::mock::{GiteeMockServer, fixtures};
    use serde_json::json;

    fn args(resources: ResourceFlags) -> ShowArgs {
        ShowArgs {
            gateway: None,
            token: None,
            owner: None,
            project: None,
            sha: None,
            recursive: false,
            save: false,
            output_dir: None,
            retry: None,
            pause: None,
            timeout: None,
            more_debug: false,
            json: false,
            resources,
        }
    }

    #[test]
    fn cli_flags_override_env_and_file() {
        let file = FileConfig {
            gateway: Some("https://file.example/api/v5".to_string()),
            retry: Some(5),
            ..FileConfig::default()
        };
        let env = EnvVars {
            token: Some("env-token".to_string()),
            owner: Some("env-owner".to_string()),
            project: Some("env-project".to_string()),
        };
        let show = ShowArgs {
            owner: Some("cli-owner".to_string()),
            retry: Some(0),
            pause: Some(1),
            recursive: true,
            ..args(ResourceFlags::default())
        };

        let config = show.client_config(&file, &env);

        assert_eq!(config.gateway, "https://file.example/api/v5");
        assert_eq!(config.token.as_deref(), Some("env-token"));
        assert_eq!(config.owner.as_deref(), Some("cli-owner"));
        assert_eq!(config.project.as_deref(), Some("env-project"));
        assert_eq!(config.retry, 0);
        assert_eq!(config.pause, Duration::from_secs(1));
        assert!(config.recursive);
    }

    #[test]
    fn without_overrides_defaults_apply() {
        let config = args(ResourceFlags::default())
            .client_config(&FileConfig::default(), &EnvVars::default());
        assert_eq!(config, ClientConfig::default());
    }

    #[tokio::test]
    async fn runs_every_selected_resource() {
        let mock = GiteeMockServer::start().await;
        let ctx = mock.repo("owner", "project");
        ctx.tags().respond(json!([fixtures::tag("v1", "2024-01-01T00:00:00Z")])).await;
        ctx.branches().respond(json!([fixtures::branch("master", "abc", true)])).await;

        let show = args(ResourceFlags {
            tags: true,
            branches: true,
            ..ResourceFlags::default()
        });
        let client = GiteeClient::new().unwrap();

        run_with_client(&show, &client, &mock.config("owner", "project"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn stops_at_first_configuration_error() {
        let mock = GiteeMockServer::start().await;
        mock.expect_no_requests().await;

        let show = args(ResourceFlags {
            repos: true,
            issues: true,
            ..ResourceFlags::default()
        });
        let client = GiteeClient::new().unwrap();

        let err = run_with_client(&show, &client, &mock.config("", ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GiteeError>(),
            Some(GiteeError::MissingConfiguration { operation: "issues", .. })
        ));
    }
}
