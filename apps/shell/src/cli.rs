//! # CLI Argument Definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "relay")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Operator shell for the SMS relay admission gate")]
pub(crate) struct Cli {
    /// Configuration file. Defaults to `relay.*` in the working directory, if present.
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Evaluate the admission gate for one inbound message.
    ///
    /// Exits with 0 when the message is admitted and 1 when it is rejected.
    Check {
        /// Message ID of the inbound event; omit to simulate an event without one.
        #[arg(short, long)]
        message_id: Option<String>,

        /// Override the configured login state.
        #[arg(long, action = ArgAction::Set)]
        logged_in: Option<bool>,

        /// Override the configured active lines (repeatable: `--line SIM1 --line SIM2`).
        #[arg(long = "line", value_name = "LINE")]
        lines: Vec<String>,
    },
}
