//! Error types for sms-assist.

/// Top-level error type for the assistant.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session store error: {0}")]
    Store(#[from] StoreError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Session-store errors.
///
/// Every variant is retryable from the caller's point of view: a failed
/// load or save leaves the stored session exactly as it was, so the turn
/// can be replayed against the committed state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to open session store: {0}")]
    Open(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Session record for {phone} is corrupt: {reason}")]
    Corrupt { phone: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Outbound-channel errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Failed to send message on channel {name}: {reason}")]
    SendFailed { name: String, reason: String },

    #[error("Channel {name} rejected the message: {reason}")]
    Rejected { name: String, reason: String },
}

/// Opportunity-catalog errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Opportunity {id} has unparsable deadline {deadline:?} (expected YYYY-MM-DD)")]
    InvalidDeadline { id: String, deadline: String },
}

/// Result type alias for the assistant.
pub type Result<T> = std::result::Result<T, Error>;
