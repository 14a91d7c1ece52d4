//! User configuration loading for callback-bridge.
//!
//! User config location: $XDG_CONFIG_HOME/callback-bridge/callback-bridge.toml
//! Fallback: the platform config directory reported by `dirs::config_dir()`.

use std::path::PathBuf;

use super::BridgeSettings;
use crate::error::Result;

const APP_DIR: &str = "callback-bridge";
const FILE_NAME: &str = "callback-bridge.toml";

/// Returns the path to the user configuration file.
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(xdg_config) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg_config).join(APP_DIR).join(FILE_NAME));
    }

    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
}

impl BridgeSettings {
    /// Load the user configuration file.
    ///
    /// A missing file (or an undeterminable config directory) yields the
    /// default settings. A file that exists but cannot be read or parsed is
    /// an error.
    pub fn load_user() -> Result<Self> {
        let Some(path) = user_config_path() else {
            log::debug!(
                target: "callback_bridge::config",
                "No config directory; using default settings"
            );
            return Ok(Self::default());
        };

        if !path.exists() {
            log::debug!(
                target: "callback_bridge::config",
                "No user config at {}; using default settings",
                path.display()
            );
            return Ok(Self::default());
        }

        Self::load(&path)
    }
}
