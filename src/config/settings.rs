use std::path::Path;

use serde::{Deserialize, Serialize};

use super::RequestTimeout;
use crate::error::{Error, Result};

/// Bridge settings, usually read from `callback-bridge.toml`.
///
/// ```toml
/// # Deadline for bounded requests; omit to wait indefinitely.
/// request_timeout_ms = 30000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
}

impl BridgeSettings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load settings from a TOML file.
    ///
    /// The timeout is validated eagerly so a bad file fails here rather than
    /// on the first bounded request.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&contents).map_err(|e| Error::parse(path, e))?;
        settings.request_timeout()?;
        log::debug!(
            target: "callback_bridge::config",
            "Loaded settings from {}: {:?}",
            path.display(),
            settings
        );
        Ok(settings)
    }

    /// Validated deadline for bounded requests, `None` if unset.
    pub fn request_timeout(&self) -> Result<Option<RequestTimeout>> {
        self.request_timeout_ms
            .map(RequestTimeout::from_millis)
            .transpose()
    }
}
