//! Mapping of domain errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::ExpenseError;

use super::pages;

/// Error returned by request handlers
#[derive(Debug)]
pub struct ApiError(pub ExpenseError);

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ExpenseError::Validation(_) => StatusCode::BAD_REQUEST,
            ExpenseError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ExpenseError> for ApiError {
    fn from(err: ExpenseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!(
                target: "expense_tracker",
                status = status.as_u16(),
                error = %self.0,
                "request_failed"
            );
            "Something went wrong while handling this request.".to_string()
        } else {
            tracing::warn!(
                target: "expense_tracker",
                status = status.as_u16(),
                error = %self.0,
                "request_rejected"
            );
            self.0.to_string()
        };

        (status, Html(pages::error_page(status, &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let validation = ApiError(ExpenseError::Validation("bad date".into()));
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let storage = ApiError(ExpenseError::Storage("disk gone".into()));
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let missing = ApiError(ExpenseError::expense_not_found("exp-9"));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_io_error_is_internal() {
        let response = ApiError(ExpenseError::Io("/secret/path".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
