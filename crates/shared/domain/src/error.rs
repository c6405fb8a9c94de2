//! Domain-level errors.
//!
//! Parse failures of stored or submitted spellings. They are independent of
//! infrastructure concerns (HTTP, database).
//! Lifecycle rejections are not errors; see [`crate::lifecycle::Rejection`].

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Unknown user role spelling
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Unknown donation status spelling
    #[error("Unknown donation status: {0}")]
    UnknownStatus(String),
}
