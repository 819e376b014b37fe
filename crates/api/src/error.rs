//! Problem-style error responses.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use fxrate_shared::AppError;
use serde::Serialize;
use tracing::{debug, error};

/// Content type of every error body.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Detail shown to clients in place of server-side error messages.
const UNEXPECTED_ERROR_DETAIL: &str = "An unexpected error has occurred";

/// Body of an error response.
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    /// Short summary of the error class.
    pub title: String,
    /// Machine-readable error code, e.g. `NOT_FOUND`.
    pub code: &'static str,
    /// Human-readable explanation.
    pub detail: String,
    /// Request path that produced the error.
    pub instance: String,
    /// HTTP status code.
    pub status: u16,
}

/// An application error bound to the request path it occurred on.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    instance: String,
}

impl ApiError {
    /// Wraps an error for the given request URI.
    pub fn new(error: impl Into<AppError>, uri: &Uri) -> Self {
        Self {
            error: error.into(),
            instance: uri.path().to_string(),
        }
    }

    /// Returns the wrapped application error.
    pub const fn error(&self) -> &AppError {
        &self.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let detail = if self.error.is_client_error() {
            debug!(instance = %self.instance, error = %self.error, "Request rejected");
            self.error.to_string()
        } else {
            error!(instance = %self.instance, error = %self.error, "An unexpected error occurred");
            UNEXPECTED_ERROR_DETAIL.to_string()
        };

        let body = ProblemResponse {
            title: self.error.title().to_string(),
            code: self.error.error_code(),
            detail,
            instance: self.instance,
            status: status.as_u16(),
        };

        let mut response = (status, Json(body)).into_response();
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri() -> Uri {
        Uri::from_static("/currency/exchange/rate/from/XYZ/to/EUR")
    }

    #[test]
    fn test_not_found_response() {
        let response =
            ApiError::new(AppError::NotFound("No currency found for XYZ".into()), &uri())
                .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            APPLICATION_PROBLEM_JSON
        );
    }

    #[test]
    fn test_instance_is_path_only() {
        let uri = Uri::from_static("http://localhost:8080/exchange/linkTo/EUR-USD1?x=1");
        let error = ApiError::new(AppError::NotFound(String::new()), &uri);
        assert_eq!(error.instance, "/exchange/linkTo/EUR-USD1");
    }

    #[test]
    fn test_internal_error_status() {
        let response =
            ApiError::new(AppError::Internal("secret".into()), &uri()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
