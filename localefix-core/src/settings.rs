//! Clap-free settings for the batch pipelines.

use camino::Utf8PathBuf;
use localefix_types::locale::Locale;

/// Settings for the structure-repair pipeline.
#[derive(Debug, Clone)]
pub struct StructureSettings {
    pub messages_dir: Utf8PathBuf,

    /// Target locales. Empty means every known locale file found in
    /// `messages_dir`.
    pub locales: Vec<Locale>,

    /// Output directory for run artifacts (report, patch).
    pub out_dir: Utf8PathBuf,

    // Apply behaviour
    pub dry_run: bool,
    pub validate: bool,

    // Backups
    pub backup_enabled: bool,
    pub backup_suffix: String,
}

impl Default for StructureSettings {
    fn default() -> Self {
        Self {
            messages_dir: Utf8PathBuf::from("messages"),
            locales: Vec::new(),
            out_dir: Utf8PathBuf::from("messages/.localefix"),
            dry_run: true,
            validate: true,
            backup_enabled: true,
            backup_suffix: ".localefix.bak".to_string(),
        }
    }
}

/// Settings for the section-update pipeline.
#[derive(Debug, Clone)]
pub struct SectionsSettings {
    pub messages_dir: Utf8PathBuf,
    pub locales: Vec<Locale>,
    pub out_dir: Utf8PathBuf,

    // Apply behaviour
    pub dry_run: bool,

    /// Only add missing keys instead of overwriting whole sections.
    pub only_missing: bool,

    // Backups
    pub backup_enabled: bool,
    pub backup_suffix: String,
}

impl Default for SectionsSettings {
    fn default() -> Self {
        Self {
            messages_dir: Utf8PathBuf::from("messages"),
            locales: Vec::new(),
            out_dir: Utf8PathBuf::from("messages/.localefix"),
            dry_run: true,
            only_missing: false,
            backup_enabled: true,
            backup_suffix: ".localefix.bak".to_string(),
        }
    }
}
