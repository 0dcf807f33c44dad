//! Facade crate for relay features and shared modules.
//! Re-exports domain/kernel primitives and wires the settings store to the admission gate.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use relay_domain as domain;
pub use relay_kernel as kernel;

/// Feature slices.
pub mod features {
    pub use relay_gate as gate;
    pub use relay_settings as settings;
}

use relay_domain::config::RelayConfig;
use relay_gate::{Admission, AdmissionGate};
use relay_settings::{Settings, SettingsError, SettingsStore};

/// A settings store paired with the gate that reads it.
#[derive(Debug)]
pub struct Relay {
    settings: SettingsStore,
    gate: AdmissionGate<Settings, Settings>,
}

impl Relay {
    #[must_use]
    pub const fn new(settings: SettingsStore) -> Self {
        Self { settings, gate: AdmissionGate::new(Settings, Settings) }
    }

    /// Builds the relay from a loaded configuration.
    ///
    /// # Errors
    /// Returns [`SettingsError::UnknownLine`] if the configured lines are invalid.
    pub fn from_config(config: &RelayConfig) -> Result<Self, SettingsError> {
        let settings = SettingsStore::from_config(&config.settings)?;
        let snapshot = settings.snapshot();
        tracing::info!(
            logged_in = snapshot.logged_in,
            active_lines = snapshot.active_lines.bits(),
            "Relay initialized"
        );
        Ok(Self::new(settings))
    }

    /// Live settings; changes are seen by the next admission check.
    #[must_use]
    pub const fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Returns `true` when an inbound message with this ID may be handled.
    #[must_use]
    pub fn admit(&self, message_id: Option<&str>) -> bool {
        self.gate.is_admissible(&self.settings, message_id)
    }

    pub fn evaluate(&self, message_id: Option<&str>) -> Admission {
        self.gate.evaluate(&self.settings, message_id)
    }
}
