use crate::domain::errors::{ConstraintViolation, DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::Constraint(ConstraintViolation::InvalidIdentifier))
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
