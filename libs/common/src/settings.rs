//! Decode configuration
//!
//! Controls how strictly payload fields are type-checked when the model
//! bindings decode untyped input.

use std::fmt;
use std::str::FromStr;

use ::config::{Config, Environment};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, ModelResult};

/// Environment prefix for all shadow-id settings
pub const ENV_PREFIX: &str = "SHADOW_ID";

/// How present-but-mistyped fields are handled during decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Reject non-string field values and non-object documents
    #[default]
    Strict,
    /// Treat non-string field values as absent
    Lenient,
}

impl FromStr for DecodeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(DecodeMode::Strict),
            "lenient" => Ok(DecodeMode::Lenient),
            other => Err(format!(
                "unknown decode mode `{}` (expected `strict` or `lenient`)",
                other
            )),
        }
    }
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeMode::Strict => f.write_str("strict"),
            DecodeMode::Lenient => f.write_str("lenient"),
        }
    }
}

/// Decode configuration
#[derive(Debug, Clone, Default)]
pub struct DecodeConfig {
    /// Mode used when a caller does not pick one explicitly
    pub mode: DecodeMode,
}

impl DecodeConfig {
    /// Create a new DecodeConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SHADOW_ID_DECODE_MODE`: `strict` or `lenient` (default: `strict`)
    pub fn from_env() -> ModelResult<Self> {
        let settings = Config::builder()
            .set_default("decode_mode", DecodeMode::default().to_string())
            .and_then(|builder| {
                builder
                    .add_source(Environment::with_prefix(ENV_PREFIX))
                    .build()
            })
            .map_err(|e| ModelError::Configuration(e.to_string()))?;

        let mode: DecodeMode = settings
            .get_string("decode_mode")
            .map_err(|e| ModelError::Configuration(e.to_string()))?
            .parse()
            .map_err(ModelError::Configuration)?;

        debug!(%mode, "Decode configuration loaded");
        Ok(DecodeConfig { mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const MODE_VAR: &str = "SHADOW_ID_DECODE_MODE";

    fn with_mode_var<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        // SAFETY: serialized by #[serial], no other thread touches the environment.
        unsafe {
            match value {
                Some(v) => std::env::set_var(MODE_VAR, v),
                None => std::env::remove_var(MODE_VAR),
            }
        }
        let result = f();
        unsafe { std::env::remove_var(MODE_VAR) };
        result
    }

    #[test]
    #[serial]
    fn test_decode_config_defaults_to_strict() {
        let config = with_mode_var(None, DecodeConfig::from_env).expect("default config");
        assert_eq!(config.mode, DecodeMode::Strict);
    }

    #[test]
    #[serial]
    fn test_decode_config_reads_lenient() {
        let config = with_mode_var(Some("LENIENT"), DecodeConfig::from_env).expect("lenient");
        assert_eq!(config.mode, DecodeMode::Lenient);
    }

    #[test]
    #[serial]
    fn test_decode_config_rejects_unknown_mode() {
        let err = with_mode_var(Some("sloppy"), DecodeConfig::from_env).unwrap_err();
        assert!(matches!(err, ModelError::Configuration(msg) if msg.contains("sloppy")));
    }

    #[test]
    fn test_decode_mode_round_trips_through_display() {
        for mode in [DecodeMode::Strict, DecodeMode::Lenient] {
            assert_eq!(mode.to_string().parse::<DecodeMode>(), Ok(mode));
        }
    }
}
