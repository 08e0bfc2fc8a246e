//! Application configuration.
//!
//! Configuration is loaded from a TOML file at:
//! 1. `$CAMPUSDASH_CONFIG` (environment variable)
//! 2. `~/.config/campusdash/config.toml` (Linux/macOS)
//!    `%APPDATA%\campusdash\config.toml` (Windows)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::filter::memo::DEFAULT_CAPACITY;
use crate::model::address::Mailbox;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "CAMPUSDASH_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior settings.
    pub general: GeneralConfig,
    /// Display and layout settings.
    pub display: DisplayConfig,
    /// Operator identity used when composing.
    pub mailbox: MailboxConfig,
    /// Seed data location.
    pub data: DataConfig,
    /// Performance tuning.
    pub performance: PerformanceConfig,
}

/// General behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
    /// Override cache directory for logs.
    pub cache_dir: Option<PathBuf>,
    /// `strftime` format string for dates in lists.
    pub date_format: String,
}

/// Display and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color theme: "dark" or "light".
    pub theme: String,
    /// Section shown on startup: "overview", "users", "mailbox", "explore".
    pub start_section: String,
    /// Show sidebar on startup.
    pub show_sidebar: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailboxConfig {
    pub operator_name: String,
    pub operator_address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON seed file replacing the built-in data set.
    pub seed_path: Option<PathBuf>,
}

/// Performance tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Entries kept in the user-category selection memo.
    pub filter_cache_size: usize,
}

// ── Default implementations ─────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            cache_dir: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            start_section: "overview".to_string(),
            show_sidebar: true,
        }
    }
}

impl Default for MailboxConfig {
    fn default() -> Self {
        Self {
            operator_name: "Campus Admin".to_string(),
            operator_address: "admin@campus.local".to_string(),
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            filter_cache_size: DEFAULT_CAPACITY,
        }
    }
}

impl MailboxConfig {
    /// The identity drafts are sent as.
    pub fn sender(&self) -> Mailbox {
        Mailbox::new(self.operator_name.trim(), self.operator_address.trim())
    }
}

/// Date format used when none (or an invalid one) is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Whether `fmt` is a `strftime` pattern chrono can render.
pub fn is_valid_date_format(fmt: &str) -> bool {
    StrftimeItems::new(fmt).all(|item| !matches!(item, Item::Error))
}

impl Config {
    /// Replace settings that would fail at render time with their defaults.
    pub fn sanitize(&mut self) {
        if !is_valid_date_format(&self.general.date_format) {
            tracing::warn!(
                date_format = %self.general.date_format,
                "Invalid date_format, using default"
            );
            self.general.date_format = DEFAULT_DATE_FORMAT.to_string();
        }
    }
}

// ── Load / save ─────────────────────────────────────────────────

/// Load configuration, searching standard locations.
///
/// Returns the default configuration if no file is found or on parse error.
pub fn load_config() -> Config {
    match config_file_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Config::default(),
    }
}

/// Load configuration from an explicit file, falling back to defaults.
pub fn load_config_from(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(mut cfg) => {
                tracing::info!(path = %path.display(), "Loaded config");
                cfg.sanitize();
                cfg
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to parse config, using defaults"
                );
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to read config file, using defaults"
            );
            Config::default()
        }
    }
}

/// Save configuration to the standard location.
pub fn save_config(config: &Config) -> anyhow::Result<()> {
    let path = config_file_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config file path"))?;
    save_config_to(config, &path)
}

/// Save configuration to an explicit file, creating parent directories.
pub fn save_config_to(config: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    tracing::info!(path = %path.display(), "Saved config");
    Ok(())
}

/// Determine the config file path (checking env var first, then standard dirs).
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|d| d.join("campusdash").join("config.toml"))
}

/// Return the cache directory for logs.
pub fn cache_dir(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.general.cache_dir {
        return dir.clone();
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("campusdash")
}

/// Return the log file path.
pub fn log_file_path(config: &Config) -> PathBuf {
    cache_dir(config).join("campusdash.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.general.log_level, "warn");
        assert_eq!(cfg.display.theme, "dark");
        assert_eq!(cfg.display.start_section, "overview");
        assert!(cfg.data.seed_path.is_none());
        assert_eq!(cfg.performance.filter_cache_size, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let partial = r#"
[mailbox]
operator_address = "registrar@mak.ac.ug"

[display]
theme = "light"
"#;
        let cfg: Config = toml::from_str(partial).expect("parse partial");
        assert_eq!(cfg.display.theme, "light");
        assert_eq!(cfg.mailbox.operator_address, "registrar@mak.ac.ug");
        // Other fields use defaults
        assert_eq!(cfg.mailbox.operator_name, "Campus Admin");
        assert!(cfg.display.show_sidebar);
        assert_eq!(cfg.general.date_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_save_then_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.performance.filter_cache_size = 4;
        cfg.data.seed_path = Some(PathBuf::from("/srv/seed.json"));
        save_config_to(&cfg, &path).expect("save");

        let loaded = load_config_from(&path);
        assert_eq!(loaded.performance.filter_cache_size, 4);
        assert_eq!(loaded.data.seed_path, Some(PathBuf::from("/srv/seed.json")));
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display\ntheme = ").expect("write");
        let cfg = load_config_from(&path);
        assert_eq!(cfg.display.theme, "dark");

        let missing = load_config_from(&dir.path().join("absent.toml"));
        assert_eq!(missing.general.log_level, "warn");
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));
        assert!(is_valid_date_format("%a %d %b"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("%Y-%"));

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\ndate_format = \"%Q\"\nlog_level = \"debug\"\n")
            .expect("write");
        let cfg = load_config_from(&path);
        assert_eq!(cfg.general.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(cfg.general.log_level, "debug");
    }

    #[test]
    fn test_sender_trims_identity() {
        let mailbox = MailboxConfig {
            operator_name: " Registrar ".to_string(),
            operator_address: " registrar@mak.ac.ug".to_string(),
        };
        let sender = mailbox.sender();
        assert_eq!(sender.display_name, "Registrar");
        assert_eq!(sender.address, "registrar@mak.ac.ug");
    }
}
