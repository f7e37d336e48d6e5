//! Error type for the simulation core and its data loaders

use thiserror::Error;

/// Errors raised by the crate.
///
/// Contract violations (`TypeKind`) abort the operation that hit them. Level parsing
/// itself never fails: unknown or unconstructible symbols are skipped.
#[derive(Debug, Error)]
pub enum SimError {
    /// An argument did not satisfy the capability the operation requires
    #[error("expected {expected}, got {found}")]
    TypeKind { expected: &'static str, found: String },

    /// A configuration value is out of range
    #[error("invalid setting {field}: {value}")]
    InvalidSetting { field: &'static str, value: String },

    #[error("malformed JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SimError {
    pub(crate) fn type_kind(expected: &'static str, found: impl std::fmt::Debug) -> Self {
        SimError::TypeKind {
            expected,
            found: format!("{found:?}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
