use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::infra::gitee::ClientConfig;

/// Optional settings file for gpreplicator.
///
/// Unset fields keep the built-in defaults.
#[derive(Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// API gateway of the Gitee service (default: "https://gitee.ru/api/v5").
    pub gateway: Option<String>,

    /// Timeout of a single request in seconds (default: 15).
    pub timeout_secs: Option<u64>,

    /// Retries after the first request on 5xx responses (default: 3).
    pub retry: Option<u32>,

    /// Pause between retries in seconds (default: 5).
    pub pause_secs: Option<u64>,

    /// Extra request headers; entries replace defaults with the same name.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Directory for saved blobs (default: current directory).
    pub output_dir: Option<PathBuf>,

    /// Log request/response details (default: false).
    #[serde(default)]
    pub more_debug: bool,
}

impl FileConfig {
    /// Override `config` with the values present in the file.
    pub fn apply(&self, config: &mut ClientConfig) {
        if let Some(gateway) = &self.gateway {
            config.gateway = gateway.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(retry) = self.retry {
            config.retry = retry;
        }
        if let Some(secs) = self.pause_secs {
            config.pause = Duration::from_secs(secs);
        }
        for (name, value) in &self.headers {
            config.headers.insert(name.clone(), value.clone());
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        config.more_debug |= self.more_debug;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file (permission error, etc.)
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parse error
    #[error("Invalid config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// XDG config directory (~/.config or $XDG_CONFIG_HOME).
/// Empty values are treated as unset.
fn config_dir() -> Option<PathBuf> {
    let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());

    if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    non_empty("HOME").map(|home| PathBuf::from(home).join(".config"))
}

/// Directory searched for `config.yaml` / `config.yml`.
pub fn app_config_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("gpreplicator"))
}

/// Load configuration from ~/.config/gpreplicator/config.ya?ml.
/// Returns FileConfig::default() if no config file exists.
pub fn load_config() -> anyhow::Result<FileConfig> {
    let Some(dir) = app_config_dir() else {
        return Ok(FileConfig::default());
    };
    load_config_from_dir(&dir)
}

/// Load configuration from a specific directory.
/// Searches for config.yaml, then config.yml in the given directory.
pub fn load_config_from_dir(dir: &Path) -> anyhow::Result<FileConfig> {
    for filename in &["config.yaml", "config.yml"] {
        let path = dir.join(filename);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!("Loading config file {}", path.display());
                return parse_config(&content, &path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::ReadError { path, source: e }.into()),
        }
    }

    Ok(FileConfig::default())
}

fn parse_config(content: &str, path: &Path) -> anyhow::Result<FileConfig> {
    serde_yaml::from_str(content)
        .map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
        .map_err(Into::into)
}

/// Generate JSON Schema for the config file.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(FileConfig)
}
