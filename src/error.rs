//! Custom error types for the Skyclerk CLI
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Skyclerk CLI operations
#[derive(Error, Debug)]
pub enum SkyclerkError {
    /// Base URL and path did not form a valid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP request could not be assembled
    #[error("unable to create request: {0}")]
    Request(String),

    /// The request never produced a response (DNS, connect, TLS, timeout)
    #[error("request failed: {0}")]
    Transport(String),

    /// The response arrived but its body could not be read
    #[error("unable to read response body: {0}")]
    ResponseBody(String),

    /// The server answered with a status outside [200, 300)
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// JSON serialization/deserialization errors
    #[error("{0}")]
    Json(String),

    /// A local file needed by the request could not be opened or read
    #[error("unable to open file: {0}")]
    LocalFile(String),

    /// An error annotated with the operation that produced it
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SkyclerkError>,
    },

    /// Configuration-related errors
    #[error("{0}")]
    Config(String),

    /// No config file on disk
    #[error("not logged in. Run 'skyclerk login' first")]
    NotLoggedIn,

    /// Neither the config nor the command line selected an account
    #[error("no account selected. Run 'skyclerk accounts use <id>' first.")]
    NoAccount,

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid user input
    #[error("{0}")]
    Validation(String),

    /// Interactive prompt failures
    #[error("unable to read input: {0}")]
    Prompt(String),
}

impl SkyclerkError {
    /// Wrap this error with the name of the operation that failed
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// HTTP status of the underlying API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Context { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Check if this is (or wraps) an HTTP status error
    pub fn is_api(&self) -> bool {
        self.status().is_some()
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SkyclerkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SkyclerkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Skyclerk CLI operations
pub type SkyclerkResult<T> = Result<T, SkyclerkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = SkyclerkError::Api {
            status: 422,
            body: r#"{"error":"bad date"}"#.into(),
        };
        assert_eq!(
            err.to_string(),
            r#"API error (status 422): {"error":"bad date"}"#
        );
    }

    #[test]
    fn test_context_wraps_message() {
        let err = SkyclerkError::Api {
            status: 500,
            body: "boom".into(),
        }
        .context("unable to get ledgers");

        assert_eq!(
            err.to_string(),
            "unable to get ledgers: API error (status 500): boom"
        );
        assert_eq!(err.status(), Some(500));
        assert!(err.is_api());
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = SkyclerkError::Transport("connection refused".into()).context("login failed");
        assert_eq!(err.to_string(), "login failed: request failed: connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SkyclerkError = io_err.into();
        assert!(matches!(err, SkyclerkError::Io(_)));
    }
}
