//! Error types for the application

use thiserror::Error;

/// Result type alias using our TraderError
pub type Result<T> = std::result::Result<T, TraderError>;

/// Main error type for strategy, feed and configuration operations
#[derive(Error, Debug)]
pub enum TraderError {
    /// Security identifier was empty
    #[error("Invalid security identifier: {0:?}")]
    InvalidSecurity(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed price line from a replay source
    #[error("Cannot parse price line {line:?}: {reason}")]
    PriceParse { line: String, reason: String },

    /// I/O errors while reading a price source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Channel send errors
    #[error("Channel send error: {0}")]
    ChannelSend(String),
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for TraderError {
    fn from(err: tokio::sync::mpsc::error::SendError<T>) -> Self {
        TraderError::ChannelSend(err.to_string())
    }
}

/// Reject empty security identifiers
///
/// Any other string, whitespace included, is a valid key.
pub fn ensure_security(security: &str) -> Result<()> {
    if security.is_empty() {
        return Err(TraderError::InvalidSecurity(security.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_security() {
        assert!(ensure_security("IBM").is_ok());
        assert!(matches!(
            ensure_security(""),
            Err(TraderError::InvalidSecurity(_))
        ));
        assert!(ensure_security("   ").is_ok());
    }

    #[test]
    fn test_error_display() {
        let err = TraderError::PriceParse {
            line: "IBM abc".to_string(),
            reason: "invalid float literal".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot parse price line \"IBM abc\": invalid float literal"
        );
    }
}
