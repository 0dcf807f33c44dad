//! Stable names shared by configuration, logs and the CLI.

pub const SIM1: &str = "SIM1";
pub const SIM2: &str = "SIM2";

/// Default configuration file stem, resolved relative to the working directory.
pub const DEFAULT_CONFIG: &str = "relay";

/// Prefix for environment overrides (`RELAY__SETTINGS__LOGGED_IN=true`).
pub const ENV_PREFIX: &str = "RELAY";
