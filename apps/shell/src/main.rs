mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use relay::Relay;
use relay::domain::config::{LoggerSettings, RelayConfig};
use relay::domain::constants::DEFAULT_CONFIG;
use relay::features::gate::Admission;
use relay::kernel::config::{load_config, load_config_or_default};
use relay_logger::{ConsoleTarget, FileOutput, Logger, parse_level, parse_rotation};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

const EXIT_REJECTED: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Admission::Admitted) => ExitCode::SUCCESS,
        Ok(Admission::Rejected(_)) => ExitCode::from(EXIT_REJECTED),
        Err(err) => {
            report_failure(&err);
            ExitCode::from(EXIT_FAILURE)
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<Admission> {
    let mut config: RelayConfig = match &cli.config {
        Some(path) => load_config(Some(path)),
        None => load_config_or_default(None::<&Path>),
    }
    .context("Critical: Configuration is malformed")?;

    let _logger = init_logger(&config.logger)?;
    let source = cli.config.as_deref().unwrap_or_else(|| Path::new(DEFAULT_CONFIG));
    info!("Configuration loaded from {}", source.display());

    match cli.command {
        Commands::Check { message_id, logged_in, lines } => {
            if let Some(logged_in) = logged_in {
                config.settings.logged_in = logged_in;
            }
            if !lines.is_empty() {
                config.settings.active_lines = lines;
            }

            let relay = Relay::from_config(&config)?;
            let admission = relay.evaluate(message_id.as_deref());
            report(admission);
            Ok(admission)
        },
    }
}

/// Console logs go to stderr so stdout only carries the verdict.
fn init_logger(settings: &LoggerSettings) -> anyhow::Result<Option<Logger>> {
    if !settings.console && settings.directory.is_none() {
        return Ok(None);
    }

    let file = match &settings.directory {
        Some(directory) => Some(
            FileOutput::new(directory)
                .rotation(parse_rotation(&settings.rotation)?)
                .max_files(settings.max_files),
        ),
        None => None,
    };

    let logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console_target(ConsoleTarget::Stderr)
        .console(settings.console)
        .level(parse_level(&settings.level)?)
        .file(file)
        .init()?;
    Ok(Some(logger))
}

#[allow(clippy::print_stdout)]
fn report(admission: Admission) {
    match admission {
        Admission::Admitted => println!("admitted"),
        Admission::Rejected(rejection) => println!("rejected: {rejection}"),
    }
}

#[allow(clippy::print_stderr)]
fn report_failure(err: &anyhow::Error) {
    eprintln!("relay: {err:#}");
}
