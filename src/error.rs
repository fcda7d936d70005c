// Error types module

use std::fmt;

/// Centralized error type for the site server
///
/// Categorizes errors into the taxonomy used for HTTP status mapping:
/// configuration, local validation, upstream API failures, transport
/// faults, and response parsing.
#[derive(Debug, Clone)]
pub enum SiteError {
    /// Configuration errors (missing credentials, invalid YAML, etc.)
    Config(String),

    /// Request validation failures (unknown action, missing tag, empty id)
    Validation { param: String, message: String },

    /// Non-2xx response from the Cloudinary Admin API; body is kept verbatim
    Upstream { status: u16, body: String },

    /// Network-level failures talking to the Admin API
    Transport(String),

    /// Malformed JSON in an otherwise successful upstream response
    Parse(String),

    /// Anything unexpected at the handler boundary
    Internal(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SiteError::Validation { param, message } => {
                write!(f, "Invalid parameter '{}': {}", param, message)
            }
            SiteError::Upstream { status, body } => {
                write!(f, "Cloudinary API error: {} {}", status, body)
            }
            SiteError::Transport(msg) => write!(f, "Transport error: {}", msg),
            SiteError::Parse(msg) => write!(f, "Response parse error: {}", msg),
            SiteError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for SiteError {}

impl SiteError {
    /// Maps errors to HTTP status codes
    ///
    /// Status mapping:
    /// - Validation → 400 (Bad Request)
    /// - Upstream → the upstream status, forwarded as-is
    /// - Config, Transport, Parse, Internal → 500
    pub fn to_http_status(&self) -> u16 {
        match self {
            SiteError::Validation { .. } => 400,
            SiteError::Upstream { status, .. } => *status,
            SiteError::Config(_)
            | SiteError::Transport(_)
            | SiteError::Parse(_)
            | SiteError::Internal(_) => 500,
        }
    }

    /// Short machine-readable label used in the error envelope
    pub fn kind(&self) -> &'static str {
        match self {
            SiteError::Config(_) => "configuration",
            SiteError::Validation { .. } => "validation",
            SiteError::Upstream { .. } => "upstream",
            SiteError::Transport(_) => "transport",
            SiteError::Parse(_) => "parse",
            SiteError::Internal(_) => "internal",
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        SiteError::Config(message.into())
    }

    pub fn validation(param: impl Into<String>, message: impl Into<String>) -> Self {
        SiteError::Validation {
            param: param.into(),
            message: message.into(),
        }
    }

    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        SiteError::Upstream {
            status,
            body: body.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        SiteError::Transport(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        SiteError::Parse(message.into())
    }
}
