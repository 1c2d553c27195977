// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Storage-engine integrity failures, tagged so the HTTP boundary can
/// pattern-match exhaustively instead of probing ad hoc fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    /// Malformed identifier or type mismatch (Postgres 22P02, or a
    /// non-numeric id in a request path).
    #[error("invalid identifier")]
    InvalidIdentifier,
    /// Not-null violation (Postgres 23502).
    #[error("missing required column")]
    MissingRequired,
    /// Foreign-key violation (Postgres 23503).
    #[error("referenced row not found")]
    ForeignKey,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    Constraint(ConstraintViolation),
    #[error("persistence error: {0}")]
    Persistence(String),
}
