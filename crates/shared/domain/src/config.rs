use crate::constants::{SIM1, SIM2};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level relay configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelayConfigInner {
    pub logger: LoggerSettings,
    pub settings: SettingsConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(flatten, default)]
    inner: Arc<RelayConfigInner>,
}

impl Deref for RelayConfig {
    type Target = RelayConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RelayConfig {
    fn deref_mut(&mut self) -> &mut RelayConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging knobs read from the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files; file output is disabled when unset.
    pub directory: Option<PathBuf>,
    /// File rotation period: `minutely`, `hourly`, `daily` or `never`.
    pub rotation: String,
    /// Rotated files kept in `directory`.
    pub max_files: usize,
}

/// Initial session and line state for the settings store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    pub logged_in: bool,
    /// Line selectors considered active, e.g. `["SIM1"]`.
    pub active_lines: Vec<String>,
}

// --- Default ---

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            directory: None,
            rotation: "daily".to_owned(),
            max_files: 10,
        }
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self { logged_in: false, active_lines: vec![SIM1.to_owned(), SIM2.to_owned()] }
    }
}
