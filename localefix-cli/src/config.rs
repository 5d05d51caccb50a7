//! Configuration file loading for localefix.
//!
//! Discovers and loads `localefix.toml` from the working directory. CLI
//! arguments take precedence over config file settings.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use localefix_types::locale::Locale;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "localefix.toml";

/// Top-level configuration from localefix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocalefixConfig {
    /// Directory holding `<locale>.json` message files.
    pub messages_dir: Option<Utf8PathBuf>,

    /// Default target locales. Empty means every locale file found.
    pub locales: Vec<Locale>,

    /// Backup settings.
    pub backups: BackupsConfig,

    /// Validation settings.
    pub validation: ValidationConfig,
}

/// Backups section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackupsConfig {
    /// Whether to copy the previous contents aside before writing.
    pub enabled: bool,

    /// Suffix for backup files.
    pub suffix: String,
}

impl Default for BackupsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            suffix: ".localefix.bak".to_string(),
        }
    }
}

/// Validation section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject structure-repair output that does not parse as JSON.
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Discover the localefix.toml config file in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a localefix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<LocalefixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<LocalefixConfig> {
    let config: LocalefixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return defaults if no file is found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<LocalefixConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(LocalefixConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_backups_and_strict_validation() {
        let config = LocalefixConfig::default();
        assert!(config.backups.enabled);
        assert_eq!(config.backups.suffix, ".localefix.bak");
        assert!(config.validation.strict);
        assert!(config.messages_dir.is_none());
        assert!(config.locales.is_empty());
    }

    #[test]
    fn parses_full_config() {
        let config = parse_config(
            r#"
messages_dir = "site/messages"
locales = ["de", "es"]

[backups]
enabled = false
suffix = ".bak"

[validation]
strict = false
"#,
        )
        .expect("parse");

        assert_eq!(config.messages_dir.as_deref().map(|p| p.as_str()), Some("site/messages"));
        assert_eq!(config.locales, vec![Locale::De, Locale::Es]);
        assert!(!config.backups.enabled);
        assert_eq!(config.backups.suffix, ".bak");
        assert!(!config.validation.strict);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config = parse_config("locales = [\"ru\"]\n").expect("parse");
        assert_eq!(config.locales, vec![Locale::Ru]);
        assert!(config.backups.enabled);
        assert!(config.validation.strict);
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let err = parse_config("locales = [\"fr\"]\n").unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }
}
