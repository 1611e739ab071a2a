/// Error types for Post Service
///
/// Expected business outcomes (not-found, unauthorized, duplicate like, ...)
/// never travel through these types; they are returned as [`crate::Outcome`]
/// envelopes. `AppError` carries the unexpected tier only: storage failures,
/// unclassifiable media, broken configuration.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

/// Result type for post-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Database operation failed
    DatabaseError(String),

    /// Uploaded file has a MIME type outside the image/video sets
    UnsupportedMediaType(String),

    /// Media storage backend failed
    MediaStore(String),

    /// Unauthorized access (missing or invalid credentials)
    Unauthorized(String),

    /// Bad request
    BadRequest(String),

    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Fallback text used when an error was constructed without a message.
    fn default_message(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "Database operation failed",
            AppError::UnsupportedMediaType(_) => "Invalid file type",
            AppError::MediaStore(_) => "Media storage operation failed",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::BadRequest(_) => "Bad request",
            AppError::Internal(_) => "Internal server error",
        }
    }

    fn message(&self) -> &str {
        let msg = match self {
            AppError::DatabaseError(m)
            | AppError::UnsupportedMediaType(m)
            | AppError::MediaStore(m)
            | AppError::Unauthorized(m)
            | AppError::BadRequest(m)
            | AppError::Internal(m) => m,
        };
        if msg.is_empty() {
            self.default_message()
        } else {
            msg
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(_) => write!(f, "Database error: {}", self.message()),
            AppError::UnsupportedMediaType(_) => {
                write!(f, "Unsupported media type: {}", self.message())
            }
            AppError::MediaStore(_) => write!(f, "Media store error: {}", self.message()),
            AppError::Unauthorized(_) => write!(f, "Unauthorized: {}", self.message()),
            AppError::BadRequest(_) => write!(f, "Bad request: {}", self.message()),
            AppError::Internal(_) => write!(f, "Internal error: {}", self.message()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UnsupportedMediaType(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MediaStore(_) => StatusCode::BAD_GATEWAY,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_falls_back_to_default() {
        let err = AppError::UnsupportedMediaType(String::new());
        assert_eq!(err.to_string(), "Unsupported media type: Invalid file type");
    }

    #[test]
    fn explicit_message_is_kept() {
        let err = AppError::MediaStore("bucket unreachable".to_string());
        assert_eq!(err.to_string(), "Media store error: bucket unreachable");
    }
}
