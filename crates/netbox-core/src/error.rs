use thiserror::Error;

/// Result type alias for NetBox operations
pub type Result<T> = std::result::Result<T, NetboxError>;

/// Errors that can occur when talking to the NetBox API
#[derive(Error, Debug)]
pub enum NetboxError {
    /// Authentication failed - invalid, expired or under-privileged token
    #[error("authentication failed ({code}): {message}")]
    Unauthorized {
        /// HTTP status code (401 or 403)
        code: u16,
        /// Error detail from the API
        message: String,
    },

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Certificate validation of the configured host failed
    #[error("TLS certificate check failed for {host}: {reason}")]
    Tls {
        /// Host that was probed
        host: String,
        /// Why the probe failed
        reason: String,
    },

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Console I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetboxError {
    /// Returns true if the error is due to authentication
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns the HTTP status code if the server answered
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { code, .. } | Self::Api { code, .. } => Some(*code),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}
