use crate::domain::errors::{ConstraintViolation, DomainError};

// Postgres SQLSTATE codes the classifier recognises.
const CODE_INVALID_TEXT: &str = "22P02";
const CODE_NOT_NULL: &str = "23502";
const CODE_FOREIGN_KEY: &str = "23503";

/// Single translation boundary from sqlx failures into the tagged domain
/// taxonomy. Recognised integrity codes become `Constraint` variants;
/// anything else stays unclassified as `Persistence` and falls through to
/// the generic 500 at the HTTP boundary.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                if let Some(kind) = classify_code(code.as_ref()) {
                    return DomainError::Constraint(kind);
                }
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn classify_code(code: &str) -> Option<ConstraintViolation> {
    match code {
        CODE_INVALID_TEXT => Some(ConstraintViolation::InvalidIdentifier),
        CODE_NOT_NULL => Some(ConstraintViolation::MissingRequired),
        CODE_FOREIGN_KEY => Some(ConstraintViolation::ForeignKey),
        _ => None,
    }
}
