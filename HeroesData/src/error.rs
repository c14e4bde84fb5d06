//! Error types for `HeroesData`

use thiserror::Error;

/// The error type for `HeroesData` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Argument Errors ====================
    /// A required key or id argument was empty.
    ///
    /// Raised before any lookup is attempted.
    #[error("argument '{name}' must not be empty")]
    EmptyArgument {
        /// The name of the offending argument.
        name: &'static str,
    },

    // ==================== Lookup Errors ====================
    /// No record matched the requested key.
    #[error("{kind} not found by {key_kind}: {key}")]
    NotFound {
        /// The entity kind that was searched (e.g., "hero").
        kind: &'static str,
        /// Which key was used ("id", "hyperlinkId", ...).
        key_kind: &'static str,
        /// The key value that was not found.
        key: String,
    },

    /// The entity kind cannot be looked up by this alternate key.
    #[error("{kind} documents have no '{key}' index")]
    UnsupportedAlternateKey {
        /// The entity kind.
        kind: &'static str,
        /// The JSON field name of the alternate key.
        key: &'static str,
    },

    /// The document was closed and its tree released.
    #[error("document is closed")]
    DocumentClosed,

    // ==================== Document Errors ====================
    /// The document root is not the expected JSON shape.
    #[error("invalid document root: expected {expected}")]
    InvalidDocumentRoot {
        /// Description of the expected root shape.
        expected: &'static str,
    },

    /// A record under the document root is not a JSON object.
    #[error("record '{id}' is not an object")]
    InvalidRecord {
        /// The primary id of the record.
        id: String,
    },

    /// A locale tag did not match any supported locale.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// An ability/talent identity key could not be parsed.
    #[error("invalid identity key: {0}")]
    InvalidIdentityKey(String),

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for the recoverable not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// A specialized Result type for `HeroesData` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fails fast on an empty key argument.
pub(crate) fn require_key<'a>(value: &'a str, name: &'static str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::EmptyArgument { name });
    }
    Ok(value)
}
