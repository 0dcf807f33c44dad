use config::{Config, Environment, File};
use relay_domain::constants::{DEFAULT_CONFIG, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keys whose environment values are comma-separated lists.
const LIST_KEYS: [&str; 1] = ["settings.active_lines"];

/// Custom error type for config loading.
#[relay_derive::relay_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a required file with environment overrides on top.
///
/// Layers, lowest precedence first:
/// 1. **Base File**: `path`, or `relay` in the working directory when `None`. The format
///    is picked from the extension; a bare stem probes the supported extensions.
/// 2. **Environment Overrides**: variables prefixed with `RELAY__`, nested with `__`
///    (e.g., `RELAY__SETTINGS__LOGGED_IN=true` maps to `settings.logged_in`).
///    `RELAY__SETTINGS__ACTIVE_LINES` takes a comma-separated list.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file cannot be found, or its content (after
/// overrides) does not match `T`.
///
/// # Example
/// ```rust
/// use relay_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(&effective_path(path), true)
}

/// Like [`load_config`], but a missing file is not an error: `T` is built from its
/// serde defaults plus environment overrides.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an existing file or an override is malformed.
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load(&effective_path(path), false)
}

fn effective_path(path: Option<impl AsRef<Path>>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf())
}

fn load<T>(path: &Path, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut environment = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .convert_case(config::Case::Snake)
        .try_parsing(true)
        .list_separator(",");
    for key in LIST_KEYS {
        environment = environment.with_list_parse_key(key);
    }

    let builder = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(environment);

    debug!(required, "Loading config from {}", path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
