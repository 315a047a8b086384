// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast position, per-kind display durations, transitions
//! - `[diagnostics]` - In-memory event buffer size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `GAP2GROWTH_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gap2growth_ui::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::Position;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
///
/// Durations are stored in milliseconds. Out-of-range values are clamped
/// when converted into runtime settings, not rejected at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Screen corner the toast stack is anchored to.
    #[serde(default)]
    pub position: Position,

    #[serde(default = "default_success_ms")]
    pub success_duration_ms: u64,

    #[serde(default = "default_info_ms")]
    pub info_duration_ms: u64,

    #[serde(default = "default_warning_ms")]
    pub warning_duration_ms: u64,

    #[serde(default = "default_error_ms")]
    pub error_duration_ms: u64,

    /// Fade-in length.
    #[serde(default = "default_enter_ms")]
    pub enter_transition_ms: u64,

    /// Fade-out length before a toast is detached.
    #[serde(default = "default_exit_ms")]
    pub exit_transition_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            success_duration_ms: DEFAULT_SUCCESS_DURATION_MS,
            info_duration_ms: DEFAULT_INFO_DURATION_MS,
            warning_duration_ms: DEFAULT_WARNING_DURATION_MS,
            error_duration_ms: DEFAULT_ERROR_DURATION_MS,
            enter_transition_ms: DEFAULT_ENTER_TRANSITION_MS,
            exit_transition_ms: DEFAULT_EXIT_TRANSITION_MS,
        }
    }
}

impl NotificationsConfig {
    /// Returns the clamped enter transition.
    #[must_use]
    pub fn enter_transition(&self) -> Duration {
        Duration::from_millis(self.enter_transition_ms.min(MAX_ENTER_TRANSITION_MS))
    }

    /// Returns the clamped exit transition.
    #[must_use]
    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(self.exit_transition_ms.min(MAX_TRANSITION_MS))
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in the circular buffer.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_success_ms() -> u64 {
    DEFAULT_SUCCESS_DURATION_MS
}

fn default_info_ms() -> u64 {
    DEFAULT_INFO_DURATION_MS
}

fn default_warning_ms() -> u64 {
    DEFAULT_WARNING_DURATION_MS
}

fn default_error_ms() -> u64 {
    DEFAULT_ERROR_DURATION_MS
}

fn default_enter_ms() -> u64 {
    DEFAULT_ENTER_TRANSITION_MS
}

fn default_exit_ms() -> u64 {
    DEFAULT_EXIT_TRANSITION_MS
}

fn default_buffer_capacity() -> usize {
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key describing what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
