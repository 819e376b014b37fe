//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied input is missing or blank.
    #[error("{0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// A path or query parameter could not be parsed into its expected type.
    #[error("{0}")]
    TypeMismatch(String),

    /// The static currency data could not be loaded.
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::TypeMismatch(_) => 422,
            Self::DataSource(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::TypeMismatch(_) => "TYPE_MISMATCH",
            Self::DataSource(_) => "DATA_SOURCE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the short, human-readable title used in problem responses.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Invalid currencies",
            Self::NotFound(_) => "Currency Not found",
            Self::TypeMismatch(_) => "Parameter type mismatch",
            Self::DataSource(_) | Self::Internal(_) => "Failed:",
        }
    }

    /// Returns true if the error detail may be shown to clients verbatim.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Validation(String::new()), 400, "VALIDATION_ERROR")]
    #[case(AppError::NotFound(String::new()), 404, "NOT_FOUND")]
    #[case(AppError::TypeMismatch(String::new()), 422, "TYPE_MISMATCH")]
    #[case(AppError::DataSource(String::new()), 500, "DATA_SOURCE_ERROR")]
    #[case(AppError::Internal(String::new()), 500, "INTERNAL_ERROR")]
    fn test_error_status_and_code(
        #[case] error: AppError,
        #[case] status: u16,
        #[case] code: &str,
    ) {
        assert_eq!(error.status_code(), status);
        assert_eq!(error.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("The given from can't be null or empty".into()).to_string(),
            "The given from can't be null or empty"
        );
        assert_eq!(
            AppError::NotFound("No currency found for XYZ".into()).to_string(),
            "No currency found for XYZ"
        );
        assert_eq!(
            AppError::DataSource("msg".into()).to_string(),
            "Data source error: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn test_error_titles() {
        assert_eq!(AppError::Validation(String::new()).title(), "Invalid currencies");
        assert_eq!(AppError::NotFound(String::new()).title(), "Currency Not found");
        assert_eq!(
            AppError::TypeMismatch(String::new()).title(),
            "Parameter type mismatch"
        );
        assert_eq!(AppError::Internal(String::new()).title(), "Failed:");
    }

    #[test]
    fn test_client_errors() {
        assert!(AppError::Validation(String::new()).is_client_error());
        assert!(AppError::TypeMismatch(String::new()).is_client_error());
        assert!(!AppError::DataSource(String::new()).is_client_error());
    }
}
