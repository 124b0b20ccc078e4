use clap::Subcommand;

use crate::shared::config;

/// Inspect the optional YAML settings file.
#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print JSON Schema for the configuration file
    Schema,

    /// Print the directory searched for config.yaml / config.yml
    Path,
}

impl ConfigCommands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Schema => println!("{}", schema_json()?),
            Self::Path => match config::app_config_dir() {
                Some(dir) => println!("{}", dir.display()),
                None => anyhow::bail!("Neither XDG_CONFIG_HOME nor HOME is set"),
            },
        }
        Ok(())
    }
}

fn schema_json() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&config::generate_schema())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_describes_file_sections() {
        let value: serde_json::Value = serde_json::from_str(&schema_json().unwrap()).unwrap();

        assert_eq!(value["type"], "object");
        for key in ["gateway", "timeout_secs", "retry", "pause_secs", "headers", "output_dir"] {
            assert!(value["properties"][key].is_object(), "missing {key}");
        }
        assert!(value["properties"]["gateway"]["description"].is_string());
    }

    #[test]
    fn path_fails_without_home() {
        temp_env::with_vars_unset(["XDG_CONFIG_HOME", "HOME"], || {
            assert!(ConfigCommands::Path.run().is_err());
        });
    }
}
