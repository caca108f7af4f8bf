//! Mapping of planning failures to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::types::ErrorResponse;
use crate::error::PlanError;

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// The service failed for reasons unrelated to the request.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Plan(PlanError::InvalidRequest(_)) => StatusCode::BAD_REQUEST,
            Self::Plan(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "production plan failed"),
            Self::Plan(PlanError::InvalidRequest(_)) => {
                tracing::debug!(error = %self, "rejected invalid request");
            }
            Self::Plan(_) => tracing::warn!(error = %self, "request cannot be satisfied"),
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn invalid_request_is_bad_request() {
        let err = ApiError::from(PlanError::InvalidRequest("missing load".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unsatisfiable_and_unsupported_are_unprocessable() {
        let errors = [
            PlanError::LoadBelowMinimum {
                load: dec!(1),
                minimum: dec!(2),
            },
            PlanError::LoadAboveCapacity {
                load: dec!(9),
                capacity: dec!(2),
            },
            PlanError::NoFeasibleCombination { load: dec!(3) },
            PlanError::UnsupportedUnitKind {
                name: "n".into(),
                kind: "nuclear".into(),
            },
            PlanError::SearchTooLarge {
                elements: 64,
                cells: 65_000_000_065,
                limit: 25_000_000,
            },
        ];
        for err in errors {
            assert_eq!(
                ApiError::from(err).status_code(),
                StatusCode::UNPROCESSABLE_ENTITY
            );
        }
    }

    #[test]
    fn internal_is_server_error() {
        let err = ApiError::Internal("worker panicked".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn plan_error_message_is_passed_through() {
        let err = ApiError::from(PlanError::NoFeasibleCombination { load: dec!(15) });
        assert_eq!(
            err.to_string(),
            "no combination of power plants can generate load: 15 MWh"
        );
    }
}
