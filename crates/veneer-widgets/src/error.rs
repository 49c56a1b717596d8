//! Error types for scrollbar configuration.

use thiserror::Error;
use veneer_core::ColorParseError;

/// Errors raised while loading or validating a [`ScrollbarConfig`].
///
/// [`ScrollbarConfig`]: crate::ScrollbarConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A pixel dimension was negative, NaN or infinite.
    #[error("Invalid value for '{field}': {value} is not a finite, non-negative pixel size")]
    InvalidDimension {
        /// Field name
        field: &'static str,
        /// Rejected value
        value: f32,
    },

    /// A color string was not valid hex.
    #[error("Invalid color for '{field}': {source}")]
    InvalidColor {
        /// Field name
        field: &'static str,
        /// Parse failure
        #[source]
        source: ColorParseError,
    },
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
