//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for relay binaries.
//!
//! Records go to the console, to rolling files in a directory, or to both. A tool
//! whose stdout carries its result points the console at [`ConsoleTarget::Stderr`].
//! `RUST_LOG` adjusts the configured level unless [`LoggerBuilder::env_filter`]
//! pins the directives.
//!
//! ## Example
//!
//! ```rust
//! use relay_logger::{ConsoleTarget, Logger, parse_level};
//!
//! let _logger = Logger::builder()
//!     .name("relay")
//!     .console_target(ConsoleTarget::Stderr)
//!     .level(parse_level("debug").unwrap())
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Stream used by the console layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Rolling file output: `<name>.<period>.log` files under one directory.
#[derive(Debug, Clone)]
pub struct FileOutput {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
}

impl FileOutput {
    /// Daily files, the newest ten kept.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into(), rotation: Rotation::DAILY, max_files: DEFAULT_MAX_FILES }
    }

    #[must_use]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Number of files kept before the oldest is removed. Must be non-zero.
    #[must_use]
    pub const fn max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    fn appender(&self, prefix: &str) -> Result<RollingFileAppender, LoggerError> {
        fs::create_dir_all(&self.directory).map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some(format!("Failed to create {}", self.directory.display()).into()),
        })?;

        RollingFileAppender::builder()
            .rotation(self.rotation.clone())
            .filename_prefix(prefix)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(self.max_files)
            .build(&self.directory)
            .context("Failed to open log directory")
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

/// Collects the output settings; [`LoggerBuilder::init`] is available once named.
#[derive(Debug)]
pub struct LoggerBuilder<N = NoName> {
    name: N,
    level: LevelFilter,
    directives: Option<String>,
    console: bool,
    console_target: ConsoleTarget,
    file: Option<FileOutput>,
}

impl LoggerBuilder<NoName> {
    /// Names the logger. The name also prefixes rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder {
            name: WithName(name.into()),
            level: self.level,
            directives: self.directives,
            console: self.console,
            console_target: self.console_target,
            file: self.file,
        }
    }
}

impl<N> LoggerBuilder<N> {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Pins filter directives such as `relay_gate=debug`; `RUST_LOG` is then ignored.
    #[must_use]
    pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Enables the console and selects its stream.
    #[must_use]
    pub const fn console_target(mut self, target: ConsoleTarget) -> Self {
        self.console = true;
        self.console_target = target;
        self
    }

    /// Adds (or, with `None`, removes) rolling file output.
    #[must_use]
    pub fn file(mut self, output: impl Into<Option<FileOutput>>) -> Self {
        self.file = output.into();
        self
    }
}

impl LoggerBuilder<WithName> {
    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive while logging: it owns the background
    /// writer of the file output.
    ///
    /// # Errors
    /// - [`LoggerError::InvalidConfiguration`] for an empty name, no output, a
    ///   zero `max_files`, or unparsable directives.
    /// - [`LoggerError::Appender`] / [`LoggerError::Internal`] if the log directory
    ///   cannot be prepared.
    /// - [`LoggerError::Subscriber`] if the process already has a global subscriber.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let Self { name: WithName(name), level, directives, console, console_target, file } = self;

        let filter = build_filter(level, directives.as_deref())?;

        let mut layers = Vec::new();
        if console {
            layers.push(console_layer(console_target));
        }
        let guard = match &file {
            Some(output) => {
                let (layer, guard) = file_layer(&name, output)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        let problem = if self.name.0.trim().is_empty() {
            "logger name is empty"
        } else if !self.console && self.file.is_none() {
            "no output enabled; turn on the console or set a log directory"
        } else if self.file.as_ref().is_some_and(|output| output.max_files == 0) {
            "max_files must be at least 1"
        } else {
            return Ok(());
        };
        Err(LoggerError::InvalidConfiguration { message: problem.into(), context: None })
    }
}

/// Handle to the installed subscriber.
#[must_use = "dropping the logger stops the file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder with the console on stdout at `INFO` and no file output.
    pub const fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: NoName,
            level: LevelFilter::INFO,
            directives: None,
            console: true,
            console_target: ConsoleTarget::Stdout,
            file: None,
        }
    }

    /// Whether records are also written to rolling files.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

/// Parses a level name from config (`trace` .. `error`, or `off`).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid log level '{level}': {e}").into(),
        context: None,
    })
}

/// Parses a rotation period from config: `minutely`, `hourly`, `daily` or `never`.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for any other value.
pub fn parse_rotation(rotation: &str) -> Result<Rotation, LoggerError> {
    match rotation.trim().to_ascii_lowercase().as_str() {
        "minutely" => Ok(Rotation::MINUTELY),
        "hourly" => Ok(Rotation::HOURLY),
        "daily" => Ok(Rotation::DAILY),
        "never" => Ok(Rotation::NEVER),
        _ => Err(LoggerError::InvalidConfiguration {
            message: format!("Invalid rotation '{rotation}': expected minutely, hourly, daily or never")
                .into(),
            context: None,
        }),
    }
}

fn build_filter(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        Some(directives) => builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid filter '{directives}': {e}").into(),
            context: None,
        }),
        None => Ok(builder.from_env_lossy()),
    }
}

fn console_layer<S>(target: ConsoleTarget) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let layer = fmt::layer().compact();
    match target {
        ConsoleTarget::Stdout => layer.boxed(),
        ConsoleTarget::Stderr => layer.with_ansi(false).with_writer(std::io::stderr).boxed(),
    }
}

fn file_layer<S>(name: &str, output: &FileOutput) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let (writer, guard) = tracing_appender::non_blocking(output.appender(name)?);
    Ok((fmt::layer().with_writer(writer).with_ansi(false).boxed(), guard))
}
