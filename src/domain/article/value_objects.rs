use crate::domain::errors::{ConstraintViolation, DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    /// Parse an identifier from raw request text. A non-numeric value is the
    /// same class of failure as the storage engine's type-mismatch error and
    /// is tagged accordingly so the boundary maps both to one response.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::Constraint(ConstraintViolation::InvalidIdentifier))
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
