/// Structured error types for tablectl-core.
///
/// Uses `thiserror` so library callers can match on failure kinds.
/// The binary (tablectl-cli) wraps these in `anyhow` at its boundary.

use thiserror::Error;

/// Main error type for tablectl-core operations
#[derive(Error, Debug)]
pub enum ProbeError {
    /// A query or connection attempt failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A schema, table or column name cannot be used as an identifier
    #[error("invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: &'static str },

    /// Configuration is missing or malformed
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// A row could not be turned into a record
    #[error("failed to decode row from {table}: {source}")]
    Decode {
        table: String,
        source: serde_json::Error,
    },
}

/// Result type alias for tablectl-core operations
pub type Result<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
            reason,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a decode error
    pub fn decode(table: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            table: table.into(),
            source,
        }
    }
}
