//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain and owns config loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use relay_kernel::config::load_config;
//! use relay_kernel::domain::config::RelayConfig;
//!
//! let cfg: RelayConfig = load_config(Some("relay.toml")).unwrap();
//! assert!(!cfg.settings.active_lines.is_empty());
//! ```
pub mod config;

pub use relay_domain as domain;
