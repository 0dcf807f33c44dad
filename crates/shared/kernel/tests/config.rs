use relay_kernel::config::{ConfigError, load_config, load_config_or_default};
use relay_kernel::domain::config::RelayConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("relay.toml");
    fs::write(
        &path,
        r#"
[logger]
level = "warn"
console = false

[settings]
logged_in = true
active_lines = ["SIM2"]
"#,
    )?;

    let cfg: RelayConfig = load_config(Some(&path))?;
    assert_eq!(cfg.logger.level, "warn");
    assert!(!cfg.logger.console);
    assert!(cfg.settings.logged_in);
    assert_eq!(cfg.settings.active_lines, vec!["SIM2".to_owned()]);
    Ok(())
}

#[test]
fn partial_file_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("relay.toml");
    fs::write(&path, "[settings]\nlogged_in = true\n")?;

    let cfg: RelayConfig = load_config(Some(&path))?;
    assert!(cfg.settings.logged_in);
    assert_eq!(cfg.settings.active_lines.len(), 2);
    assert_eq!(cfg.logger.level, "info");
    Ok(())
}

#[test]
fn missing_required_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let err = load_config::<RelayConfig>(Some(&path)).expect_err("missing file must fail");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn missing_optional_file_yields_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let cfg: RelayConfig = load_config_or_default(Some(&path)).expect("defaults");
    assert!(!cfg.settings.logged_in);
    assert_eq!(cfg.logger.level, "info");
}

#[test]
fn malformed_file_reports_context() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("relay.toml");
    fs::write(&path, "[settings]\nlogged_in = \"maybe\"\n").expect("write config");

    let err = load_config::<RelayConfig>(Some(&path)).expect_err("bad bool must fail");
    assert!(err.to_string().contains("Failed to deserialize config"));
}
