//! Error types and HTTP error response handling.
//!
//! All application errors are collected in [AppError]. Each variant maps to
//! an HTTP status code; unhandled errors render as an HTML error page since
//! this service serves pages, not JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::views;

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed.
    ///
    /// Wraps any `sqlx::Error`. Details are logged server-side and never
    /// shown to the client.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A referenced account does not exist.
    #[error("account not found")]
    AccountNotFound,

    /// The sender's balance does not cover the transfer.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Form input or parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    /// The HTTP status code this error responds with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::AccountNotFound => StatusCode::NOT_FOUND,
            AppError::InsufficientFunds => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Render the error as a full HTML page with the mapped status code.
///
/// Handlers that want a softer failure mode (an alert on the page that
/// submitted the form) catch the error themselves before it reaches this.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Database(error) => {
                tracing::error!("database error: {error}");
                "An internal error occurred. Check the server logs.".to_string()
            }
            other => other.to_string(),
        };

        (status, views::error_page(status, &message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};

    use super::AppError;

    #[test]
    fn maps_errors_to_status_codes() {
        let cases = [
            (
                AppError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AppError::AccountNotFound, StatusCode::NOT_FOUND),
            (AppError::InsufficientFunds, StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::InvalidRequest("bad amount".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, want_status) in cases {
            assert_eq!(
                error.status_code(),
                want_status,
                "wrong status for {error:?}"
            );
        }
    }

    #[tokio::test]
    async fn database_error_page_hides_details() {
        let response = AppError::Database(sqlx::Error::RowNotFound).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("could not read response body");
        let body = String::from_utf8(body.to_vec()).expect("body was not UTF-8");

        assert!(!body.contains("RowNotFound"));
        assert!(body.contains("An internal error occurred"));
    }

    #[tokio::test]
    async fn business_error_page_shows_message() {
        let response = AppError::InsufficientFunds.into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("could not read response body");
        let body = String::from_utf8(body.to_vec()).expect("body was not UTF-8");

        assert!(body.contains("insufficient funds"));
    }
}
