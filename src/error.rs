use std::fmt;

/// Custom error type for AWX operations
#[derive(Debug)]
pub enum AwxError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned a non-success response
    Api { status: u16, message: String },
    /// Mandatory fields are absent from a request payload
    MissingFields(Vec<String>),
    /// JSON encoding or decoding error
    Json(String),
    /// Base URL or pagination cursor could not be parsed
    InvalidUrl(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for AwxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwxError::Http(e) => write!(f, "HTTP request failed: {}", e),
            AwxError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            AwxError::MissingFields(fields) => write!(
                f,
                "mandatory input arguments are absent: {}",
                fields.join(", ")
            ),
            AwxError::Json(msg) => write!(f, "JSON error: {}", msg),
            AwxError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            AwxError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AwxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AwxError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AwxError {
    fn from(err: reqwest::Error) -> Self {
        AwxError::Http(err)
    }
}

impl From<serde_json::Error> for AwxError {
    fn from(err: serde_json::Error) -> Self {
        AwxError::Json(err.to_string())
    }
}

/// Result type alias for AWX operations
pub type Result<T> = std::result::Result<T, AwxError>;
