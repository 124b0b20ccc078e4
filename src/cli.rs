use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::config::ConfigCommands;
use crate::commands::show::{self, ShowArgs};
use crate::shared::logging::DEFAULT_VERBOSITY;

#[derive(Parser)]
#[command(
    name = "gpreplicator",
    bin_name = "gpr",
    version,
    about = "Gitee API client: project files, issues, milestones, releases, tags, branches",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct LogArgs {
    /// Console log level: 10 = DEBUG, 20 = INFO, 30 = WARNING, 40 = ERROR, 50 = CRITICAL
    #[arg(short = 'v', long, global = true, default_value_t = DEFAULT_VERBOSITY)]
    pub verbosity: u8,

    /// Also write debug-level JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Request project data from the Gitee API
    Show(ShowArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::Show(args) => show::run(args),
        Commands::Config(cmd) => cmd.run(),
        Commands::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "gpr", &mut io::stdout());
            Ok(())
        }
    }
}
