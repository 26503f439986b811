use thiserror::Error;

/// Result type alias for httpbl operations
pub type Result<T> = std::result::Result<T, HttpblError>;

/// Errors that can occur when using the http:BL client
#[derive(Error, Debug)]
pub enum HttpblError {
    /// The input target could not be resolved to an IPv4 address
    #[error("could not resolve target to an IPv4 address: {0}")]
    Resolution(String),

    /// Configuration error - missing or empty API key
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level DNS failure reported by a resolver backend
    ///
    /// Inside a reputation check this is collapsed into "not listed"; it
    /// only surfaces from direct resolver calls.
    #[error("DNS resolution failed: {0}")]
    Dns(String),

    /// A query hostname did not match the expected encoding
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl HttpblError {
    /// Returns true if the error indicates an unusable input target
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }

    /// Returns true if the error is due to client configuration
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
