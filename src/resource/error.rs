//! Failures of a single resource fetch.
//!
//! Every variant ends up as a `Failure` message on screen; the kinds only
//! matter for logging.

use thiserror::Error;

/// Shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Response status outside the 2xx range.
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },

    /// Request could not be sent or the connection failed.
    #[error("{0}")]
    Transport(String),

    /// Body could not be read or was not the expected JSON.
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    /// Message for display, falling back to [`UNKNOWN_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Short kind label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Http { .. } => "http",
            FetchError::Transport(_) => "transport",
            FetchError::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_embeds_status() {
        let err = FetchError::Http { status: 404 };
        assert_eq!(err.user_message(), "HTTP error! Status: 404");
        assert_eq!(err.kind(), "http");
    }

    #[test]
    fn empty_transport_message_uses_fallback() {
        let err = FetchError::Transport(String::new());
        assert_eq!(err.user_message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn blank_decode_message_uses_fallback() {
        let err = FetchError::Decode("   ".to_string());
        assert_eq!(err.user_message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn transport_message_is_kept() {
        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), "connection refused");
        assert_eq!(err.kind(), "transport");
    }
}
