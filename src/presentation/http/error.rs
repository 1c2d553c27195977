use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::{ConstraintViolation, DomainError, DomainResult};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

// The constraint-stage messages are fixed wire contract. The first one reads
// "not found" for what is actually a malformed identifier; clients depend on
// the exact text, so it stays.
const MSG_INVALID_ID: &str = "ID not found. Please check your id number and try again";
const MSG_MISSING_FIELDS: &str = "Don't forget to include your username and comment body!";
const MSG_BAD_REFERENCE: &str = "Input not found. Please try again";
const MSG_SERVER_ERROR: &str = "Server Error!";

/// The single place a failure becomes a status code and message. Three
/// stages: domain errors carry their own message, tagged constraint
/// violations map through a fixed table, everything else falls through to a
/// generic 500.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
            ApplicationError::Infrastructure(detail) => Self::fallback(&detail),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Constraint(kind) => Self::from_constraint(kind),
            DomainError::Persistence(detail) => Self::fallback(&detail),
        }
    }

    fn from_constraint(kind: ConstraintViolation) -> Self {
        match kind {
            ConstraintViolation::InvalidIdentifier => {
                Self::new(StatusCode::BAD_REQUEST, MSG_INVALID_ID.into())
            }
            ConstraintViolation::MissingRequired => {
                Self::new(StatusCode::BAD_REQUEST, MSG_MISSING_FIELDS.into())
            }
            ConstraintViolation::ForeignKey => {
                Self::new(StatusCode::NOT_FOUND, MSG_BAD_REFERENCE.into())
            }
        }
    }

    /// Unclassified failures: log the detail server-side, leak nothing.
    fn fallback(detail: &str) -> Self {
        tracing::error!(error = %detail, "unhandled failure");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, MSG_SERVER_ERROR.into())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        // The 500 fallback responds with a bare string body; every other
        // failure shares the `{ "message": … }` shape.
        if self.status == StatusCode::INTERNAL_SERVER_ERROR {
            return (self.status, self.message).into_response();
        }
        (self.status, Json(ErrorBody { message: self.message })).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

impl<T> IntoHttpResult<T> for DomainResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(|err| HttpError::from_error(err.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_stage_passes_status_and_message_verbatim() {
        let err = HttpError::from_error(ApplicationError::validation("Invalid sort query"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid sort query");

        let err = HttpError::from_error(ApplicationError::not_found("Article not found"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Article not found");
    }

    #[test]
    fn invalid_identifier_maps_to_400_with_fixed_message() {
        let err = HttpError::from_error(
            DomainError::Constraint(ConstraintViolation::InvalidIdentifier).into(),
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), MSG_INVALID_ID);
    }

    #[test]
    fn not_null_violation_maps_to_400_with_fixed_message() {
        let err = HttpError::from_error(
            DomainError::Constraint(ConstraintViolation::MissingRequired).into(),
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), MSG_MISSING_FIELDS);
    }

    #[test]
    fn foreign_key_violation_maps_to_404_with_fixed_message() {
        let err =
            HttpError::from_error(DomainError::Constraint(ConstraintViolation::ForeignKey).into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), MSG_BAD_REFERENCE);
    }

    #[test]
    fn unclassified_failures_fall_through_to_500() {
        let err =
            HttpError::from_error(DomainError::Persistence("connection reset".into()).into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), MSG_SERVER_ERROR);

        let err = HttpError::from_error(ApplicationError::infrastructure("pool exhausted"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), MSG_SERVER_ERROR);
    }
}
