//! Centralized path definitions for todos
//!
//! ## Global (User-Level)
//!
//! ```text
//! <config dir>/todos/          # ~/.config/todos on Linux
//! └── config.toml              # Server defaults (host, port)
//! ```

use std::path::PathBuf;

/// Directory name under the platform config dir
const GLOBAL_DIR: &str = "todos";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global config directory.
///
/// Falls back to `$HOME/.config/todos` when the platform reports no config
/// dir. Returns `None` when neither a config dir nor a home dir is known.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .map(|dir| dir.join(GLOBAL_DIR))
}

/// Get the global config file path, if a config dir is known.
#[must_use]
pub fn global_config() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
}
