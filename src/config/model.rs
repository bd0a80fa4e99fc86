//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::focus::context::{
    DEFAULT_DELETE_GLYPH, DEFAULT_KEY, DEFAULT_PROMPT, DEFAULT_TODAY_LABEL,
};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where and under which key the focus is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store file. `None` means `<data dir>/dayfocus/store.toml`.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: default_key(),
        }
    }
}

/// Fixed strings shown by the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_today")]
    pub today: String,
    #[serde(default = "default_delete_glyph")]
    pub delete_glyph: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            today: default_today(),
            delete_glyph: default_delete_glyph(),
        }
    }
}

/// Diagnostic log settings. Logs never go to the terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

/// Event loop and rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How many ticks a status-bar notice stays visible.
    #[serde(default = "default_notice_ticks")]
    pub notice_ticks: u64,
    #[serde(default = "default_true")]
    pub show_date: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            notice_ticks: default_notice_ticks(),
            show_date: true,
        }
    }
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}
fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}
fn default_today() -> String {
    DEFAULT_TODAY_LABEL.to_string()
}
fn default_delete_glyph() -> String {
    DEFAULT_DELETE_GLYPH.to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/dayfocus/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
fn default_tick_rate_ms() -> u64 {
    250
}
fn default_notice_ticks() -> u64 {
    16 // 4s at the default tick rate
}
