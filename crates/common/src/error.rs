//! Error types shared across Swipeable crates.
//!
//! Gesture tracking itself never fails; these errors only surface from the
//! ambient layers around it (configuration, recorded streams, gesture logs).

use std::path::PathBuf;

/// Top-level error type for Swipeable operations.
#[derive(Debug, thiserror::Error)]
pub enum SwipeableError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid option `{field}`: {message}")]
    InvalidOption {
        field: &'static str,
        message: String,
    },

    #[error("Event stream error: {message}")]
    Stream { message: String },

    #[error("Replay error: {message}")]
    Replay { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using SwipeableError.
pub type SwipeableResult<T> = Result<T, SwipeableError>;

impl SwipeableError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invalid_option(field: &'static str, msg: impl Into<String>) -> Self {
        Self::InvalidOption {
            field,
            message: msg.into(),
        }
    }

    pub fn stream(msg: impl Into<String>) -> Self {
        Self::Stream {
            message: msg.into(),
        }
    }

    pub fn replay(msg: impl Into<String>) -> Self {
        Self::Replay {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_message_names_field() {
        let err = SwipeableError::invalid_option("delta", "must be finite");
        assert_eq!(err.to_string(), "Invalid option `delta`: must be finite");
    }

    #[test]
    fn test_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SwipeableError = parse_err.into();
        assert!(matches!(err, SwipeableError::Json(_)));
    }
}
