/// Result envelope for expected business outcomes
///
/// Services return `Outcome<T>` for everything a client can plausibly cause:
/// missing posts, failed authorization checks, duplicate likes, validation
/// rejections. The envelope carries the HTTP status, a success flag, a human
/// readable message and an optional payload, and is serialized as the
/// response body unchanged.
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Outcome<T> {
    pub status: u16,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    /// 200 success with payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: 200,
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// 201 success with payload
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: 201,
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// 200 success with a message only
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            status: 200,
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Failure with the given status and no payload
    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            success: false,
            message: message.into(),
            data: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(404, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::failure(403, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::failure(400, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::failure(409, message)
    }
}

impl<T: Serialize> Outcome<T> {
    /// Render the envelope as an HTTP response carrying its own status.
    pub fn into_response(self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_carries_payload() {
        let out = Outcome::ok("Post liked!", 42);
        assert!(out.success);
        assert_eq!(out.status, 200);
        assert_eq!(out.message, "Post liked!");
        assert_eq!(out.data, Some(42));
    }

    #[test]
    fn failure_envelope_has_no_payload() {
        let out: Outcome<()> = Outcome::conflict("Error! You have already liked this post!");
        assert!(!out.success);
        assert_eq!(out.status, 409);
        assert!(out.data.is_none());
    }
}
