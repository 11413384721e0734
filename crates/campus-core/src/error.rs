//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant.

use thiserror::Error;

/// Errors raised by `campus-core` parsing and validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown classification label: {0:?}")]
    UnknownKind(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
