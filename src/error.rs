//! Error types for the ringseed library.

use thiserror::Error;

/// Errors produced by the ringseed library.
///
/// The type is `Clone` so the cached result of the payload loader can be
/// handed to every caller without re-running the decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingSeedError {
    /// Input data cannot drive the computation (empty history, empty draw).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A game or engine configuration violates its invariants.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The embedded payload could not be decoded.
    #[error("Payload initialization failed: {0}")]
    Initialization(String),

    /// A configuration or history file could not be read.
    #[error("Failed to read '{path}': {reason}")]
    ConfigIo {
        /// Path that was being read
        path: String,
        /// Underlying I/O failure
        reason: String,
    },

    /// A configuration or history document is not valid JSON for its schema.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for RingSeedError {
    fn from(err: serde_json::Error) -> Self {
        RingSeedError::ConfigParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = RingSeedError::InvalidInput("history is empty".into());
        assert_eq!(format!("{}", err), "Invalid input: history is empty");
    }

    #[test]
    fn test_display_configuration() {
        let err = RingSeedError::Configuration("mains_count 8 exceeds ring 7".into());
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: mains_count 8 exceeds ring 7"
        );
    }

    #[test]
    fn test_display_config_io() {
        let err = RingSeedError::ConfigIo {
            path: "games.json".into(),
            reason: "not found".into(),
        };
        assert_eq!(format!("{}", err), "Failed to read 'games.json': not found");
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = RingSeedError::from(parse_err);
        assert!(matches!(err, RingSeedError::ConfigParse(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = RingSeedError::Initialization("Invalid padding".into());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
