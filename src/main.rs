use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use gpreplicator::cli::{self, Cli};
use gpreplicator::shared::logging;

fn main() -> ExitCode {
    let Cli { log, command } = Cli::parse();

    let _guard = match logging::init(log.verbosity, log.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::from(255);
        }
    };

    let started = Instant::now();
    tracing::debug!("Start time: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));

    let code = match cli::run(&command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            for cause in err.chain() {
                tracing::error!("{cause}");
            }
            ExitCode::from(255)
        }
    };

    tracing::debug!(
        "Finish time: {} (duration: {:.3}s)",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        started.elapsed().as_secs_f64()
    );
    code
}
