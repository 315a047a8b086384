// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`] (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_override`]
//! 3. **Environment variable** (`GAP2GROWTH_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "Gap2Growth";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GAP2GROWTH_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are ignored and logged.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("config dir override already initialized, ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/Gap2Growth/`
/// - macOS: `~/Library/Application Support/Gap2Growth/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Gap2Growth\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// The override has highest priority, followed by the CLI argument, the
/// environment variable, and finally the platform default.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let custom = PathBuf::from("/tmp/gap2growth-test-config");
        let result = get_app_config_dir_with_override(Some(custom.clone()));
        assert_eq!(result, Some(custom));
    }

    #[test]
    fn env_var_is_respected() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/gap2growth-env-config");

        let result = get_app_config_dir();

        std::env::remove_var(ENV_CONFIG_DIR);
        // A CLI override set by another test in this process would take precedence
        if get_cli_config_dir().is_none() {
            assert_eq!(result, Some(PathBuf::from("/tmp/gap2growth-env-config")));
        }
    }

    #[test]
    fn empty_env_var_falls_back_to_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let result = get_app_config_dir();

        std::env::remove_var(ENV_CONFIG_DIR);
        if let Some(path) = result {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }
}
