use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid query: {0}")]
    InvalidQuerySpec(String),

    #[error("Transport error on source port {port}: {reason}")]
    Transport { port: u16, reason: String },

    #[error("Malformed DNS response: {0}")]
    MalformedResponse(String),

    #[error("Failed to resolve target: {0}")]
    ResolutionFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
