//! Backend configuration.
//!
//! All fields have defaults, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! joystick_count = 8
//! source_mask = 0x01000411       # GAMEPAD | JOYSTICK
//! capabilities = "query"         # or "assume-all"
//! ```

use crate::device::SourceFlags;
use crate::error::{Error, Result};
use crate::joystick::JOYSTICK_COUNT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound for [`BackendConfig::joystick_count`].
pub const MAX_JOYSTICK_COUNT: u32 = 32;

/// How a joystick's axis capabilities are determined at open time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityMode {
    /// Read `InputDevice.getMotionRanges()` and map each range's axis.
    #[default]
    Query,
    /// Report every axis as present without querying motion ranges.
    AssumeAll,
}

/// Tunables of a [`JoystickContext`](crate::activity::JoystickContext).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendConfig {
    /// Number of joystick slots. `1` gives single-gamepad behavior.
    pub joystick_count: u32,

    /// Sources a device must support to be picked up as a joystick.
    pub source_mask: SourceFlags,

    /// Capability detection strategy.
    pub capabilities: CapabilityMode,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            joystick_count: JOYSTICK_COUNT,
            source_mask: SourceFlags::GAMEPAD | SourceFlags::JOYSTICK,
            capabilities: CapabilityMode::Query,
        }
    }
}

impl BackendConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: BackendConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.joystick_count == 0 || self.joystick_count > MAX_JOYSTICK_COUNT {
            return Err(Error::InvalidConfig(format!(
                "joystick_count must be in 1..={MAX_JOYSTICK_COUNT}, got {}",
                self.joystick_count
            )));
        }
        if self.source_mask.is_empty() {
            return Err(Error::InvalidConfig("source_mask must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = BackendConfig::from_toml_str("").unwrap();
        assert_eq!(config, BackendConfig::default());
        assert_eq!(config.joystick_count, 8);
        assert_eq!(config.source_mask.bits(), 0x0100_0411);
    }

    #[test]
    fn parses_all_fields() {
        let config = BackendConfig::from_toml_str(
            r#"
            joystick_count = 1
            source_mask = 0x00000401
            capabilities = "assume-all"
            "#,
        )
        .unwrap();
        assert_eq!(config.joystick_count, 1);
        assert_eq!(config.source_mask, SourceFlags::GAMEPAD);
        assert_eq!(config.capabilities, CapabilityMode::AssumeAll);
    }

    #[test]
    fn rejects_zero_slots() {
        let err = BackendConfig::from_toml_str("joystick_count = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_empty_mask() {
        let err = BackendConfig::from_toml_str("source_mask = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = BackendConfig::from_toml_str("slots = 4").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
