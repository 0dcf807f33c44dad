//! # Settings
//!
//! The session flag and SIM line activation flags that the admission gate reads.
//!
//! [`SettingsStore`] owns the state and is what callers pass to the gate as its
//! context. [`Settings`] is the stateless accessor implementing the gate's
//! collaborator traits on top of a store.
//!
//! ```rust
//! use relay_gate::AdmissionGate;
//! use relay_kernel::domain::line::Line;
//! use relay_settings::{Settings, SettingsStore};
//!
//! let store = SettingsStore::new();
//! let gate = AdmissionGate::new(Settings, Settings);
//! assert!(!gate.is_admissible(&store, Some("abc")));
//!
//! store.set_logged_in(true);
//! store.set_active_status(Line::Sim2, true);
//! assert!(gate.is_admissible(&store, Some("abc")));
//! ```

mod error;

pub use crate::error::{SettingsError, SettingsErrorExt};

use parking_lot::RwLock;
use relay_gate::{LineActivationRegistry, SessionStateProvider};
use relay_kernel::domain::config::SettingsConfig;
use relay_kernel::domain::line::{Line, LineSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Point-in-time copy of the settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    pub logged_in: bool,
    pub active_lines: LineSet,
}

/// Thread-safe holder of the session and line flags.
#[derive(Debug, Default)]
pub struct SettingsStore {
    state: RwLock<SettingsSnapshot>,
}

impl SettingsStore {
    /// Logged out, no line active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_snapshot(snapshot: SettingsSnapshot) -> Self {
        Self { state: RwLock::new(snapshot) }
    }

    /// Builds a store from the `[settings]` config section.
    ///
    /// # Errors
    /// Returns [`SettingsError::UnknownLine`] if `active_lines` names an unsupported line.
    pub fn from_config(config: &SettingsConfig) -> Result<Self, SettingsError> {
        let active_lines = parse_lines(&config.active_lines).context("settings.active_lines")?;
        Ok(Self::with_snapshot(SettingsSnapshot { logged_in: config.logged_in, active_lines }))
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.state.read().logged_in
    }

    pub fn set_logged_in(&self, logged_in: bool) {
        let mut state = self.state.write();
        if state.logged_in != logged_in {
            debug!(logged_in, "Session state changed");
        }
        state.logged_in = logged_in;
    }

    #[must_use]
    pub fn active_status(&self, line: Line) -> bool {
        self.state.read().active_lines.contains_line(line)
    }

    pub fn set_active_status(&self, line: Line, active: bool) {
        let mut state = self.state.write();
        if state.active_lines.contains_line(line) != active {
            debug!(line = %line, active, "Line activation changed");
        }
        state.active_lines.set(LineSet::from(line), active);
    }

    #[must_use]
    pub fn active_lines(&self) -> LineSet {
        self.state.read().active_lines
    }

    /// Replaces the whole line set at once.
    pub fn set_active_lines(&self, lines: LineSet) {
        let mut state = self.state.write();
        if state.active_lines != lines {
            debug!(active_lines = lines.bits(), "Line activation changed");
        }
        state.active_lines = lines;
    }

    #[must_use]
    pub fn snapshot(&self) -> SettingsSnapshot {
        *self.state.read()
    }
}

/// Accessor that answers the gate's questions from a [`SettingsStore`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Settings;

impl SessionStateProvider<SettingsStore> for Settings {
    fn is_logged_in(&self, store: &SettingsStore) -> bool {
        store.is_logged_in()
    }
}

impl LineActivationRegistry<SettingsStore> for Settings {
    fn active_status(&self, store: &SettingsStore, line: Line) -> bool {
        store.active_status(line)
    }
}

/// Parses line selectors such as `["SIM1", "2"]` into a [`LineSet`].
///
/// # Errors
/// Returns [`SettingsError::UnknownLine`] for the first selector that is not a line.
pub fn parse_lines<I, T>(names: I) -> Result<LineSet, SettingsError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            Line::parse(name).ok_or_else(|| SettingsError::UnknownLine {
                message: format!("'{name}' is not one of SIM1, SIM2").into(),
                context: None,
            })
        })
        .collect()
}
