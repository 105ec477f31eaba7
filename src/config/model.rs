//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the demo runs without a config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub application: ApplicationConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Title and icon handed to the application object at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_icon")]
    pub icon: PathBuf,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            icon: default_icon(),
        }
    }
}

/// Behavior of the dynamic button area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Upper bound on the number of dynamic buttons. Values below 1 are
    /// treated as 1.
    #[serde(default = "default_max_buttons")]
    pub max_buttons: usize,
    #[serde(default = "default_button_label")]
    pub button_label: String,
}

impl DemoConfig {
    pub fn max_buttons(&self) -> usize {
        self.max_buttons.max(1)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            max_buttons: default_max_buttons(),
            button_label: default_button_label(),
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so log output
/// always goes to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub debug: bool,
    /// Relative paths are resolved against the data directory.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Append the current date to the file name (`debug_2024-01-31.log`).
    #[serde(default)]
    pub daily: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
            log_file: default_log_file(),
            daily: false,
        }
    }
}

fn default_title() -> String {
    "Test module".to_string()
}
fn default_icon() -> PathBuf {
    PathBuf::from("/usr/share/icons/mageia.png")
}
fn default_max_buttons() -> usize {
    6
}
fn default_button_label() -> String {
    "Delete Me".to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_file() -> PathBuf {
    PathBuf::from("debug.log")
}
