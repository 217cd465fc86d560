//! Error types for the ARTIK Cloud client
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! The first error raised during a paginated fetch aborts the whole fetch and
//! is handed to the caller unchanged.

use thiserror::Error;

/// The main error type for the ARTIK Cloud client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("Unexpected response format: {message}")]
    UnexpectedFormat { message: String },

    #[error("Page declared {declared} items but contained {received}")]
    CountMismatch { declared: u64, received: usize },

    #[error("Invalid item at index {index}: {message}")]
    InvalidItem { index: usize, message: String },

    #[error("Empty page at offset {offset} while {total} items were reported")]
    NoProgress { offset: u64, total: u64 },

    #[error("Page size {size} is outside 1..={max}", max = crate::pagination::MAX_PAGE_SIZE)]
    InvalidPageSize { size: u32 },

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("Rule scope '{scope}' cannot be assigned to a rule")]
    InvalidScope { scope: String },

    #[error("One or more actions of rule '{id}' cannot be tested")]
    ActionsNotTestable { id: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an unexpected format error
    pub fn unexpected_format(message: impl Into<String>) -> Self {
        Self::UnexpectedFormat {
            message: message.into(),
        }
    }

    /// Create an invalid item error
    pub fn invalid_item(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidItem {
            index,
            message: message.into(),
        }
    }

    /// Whether the error came from the HTTP layer rather than from the payload
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. }
        )
    }

    /// HTTP status code, if the server answered with a non-2xx status
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for the ARTIK Cloud client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Other(format!("{}: {}", message.into(), e.into())))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Other(format!("{}: {}", f(), e.into())))
    }
}
