//! Drive API error codes and error-envelope decoding.

use serde::Deserialize;

use crate::error::DriveError;

/// Drive API error classes, keyed by HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Malformed request or invalid query
    BadRequest = 400,
    /// Missing or expired credentials
    Unauthorized = 401,
    /// Insufficient permissions or quota exceeded
    Forbidden = 403,
    /// File or folder does not exist
    NotFound = 404,
    /// Request conflicts with current state
    Conflict = 409,
    /// Precondition on the request failed
    PreconditionFailed = 412,
    /// Too many requests
    RateLimit = 429,
    /// Backend error
    Internal = 500,
    /// Service temporarily unavailable
    Unavailable = 503,
    /// Unknown error
    Unknown = 0,
}

impl From<u16> for ApiErrorCode {
    fn from(status: u16) -> Self {
        match status {
            400 => ApiErrorCode::BadRequest,
            401 => ApiErrorCode::Unauthorized,
            403 => ApiErrorCode::Forbidden,
            404 => ApiErrorCode::NotFound,
            409 => ApiErrorCode::Conflict,
            412 => ApiErrorCode::PreconditionFailed,
            429 => ApiErrorCode::RateLimit,
            500 => ApiErrorCode::Internal,
            503 => ApiErrorCode::Unavailable,
            _ => ApiErrorCode::Unknown,
        }
    }
}

impl ApiErrorCode {
    /// Get human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ApiErrorCode::BadRequest => "Bad request",
            ApiErrorCode::Unauthorized => "Invalid credentials",
            ApiErrorCode::Forbidden => "Access denied",
            ApiErrorCode::NotFound => "Resource does not exist",
            ApiErrorCode::Conflict => "Conflict",
            ApiErrorCode::PreconditionFailed => "Precondition failed",
            ApiErrorCode::RateLimit => "Rate limit exceeded",
            ApiErrorCode::Internal => "Backend error",
            ApiErrorCode::Unavailable => "Temporarily unavailable",
            ApiErrorCode::Unknown => "Unknown error",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<u16>,
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    reason: Option<String>,
}

/// Turn a non-success response into a `DriveError`.
///
/// Bodies carrying Google's JSON error envelope become `ApiError`; anything
/// else falls back to `HttpError` with the bare status.
pub(crate) fn decode_error(status: u16, body: &str) -> DriveError {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return DriveError::HttpError(status);
    };

    let code = envelope.error.code.unwrap_or(status);
    let reason = envelope
        .error
        .errors
        .into_iter()
        .find_map(|item| item.reason)
        .unwrap_or_default();
    let message = envelope
        .error
        .message
        .unwrap_or_else(|| ApiErrorCode::from(code).description().to_string());

    DriveError::ApiError {
        code,
        reason,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_conversion() {
        assert_eq!(ApiErrorCode::from(400), ApiErrorCode::BadRequest);
        assert_eq!(ApiErrorCode::from(401), ApiErrorCode::Unauthorized);
        assert_eq!(ApiErrorCode::from(403), ApiErrorCode::Forbidden);
        assert_eq!(ApiErrorCode::from(404), ApiErrorCode::NotFound);
        assert_eq!(ApiErrorCode::from(409), ApiErrorCode::Conflict);
        assert_eq!(ApiErrorCode::from(412), ApiErrorCode::PreconditionFailed);
        assert_eq!(ApiErrorCode::from(429), ApiErrorCode::RateLimit);
        assert_eq!(ApiErrorCode::from(500), ApiErrorCode::Internal);
        assert_eq!(ApiErrorCode::from(503), ApiErrorCode::Unavailable);

        assert_eq!(ApiErrorCode::from(418), ApiErrorCode::Unknown);
    }

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(ApiErrorCode::Unauthorized.description(), "Invalid credentials");
        assert_eq!(ApiErrorCode::NotFound.description(), "Resource does not exist");
        assert_eq!(ApiErrorCode::RateLimit.description(), "Rate limit exceeded");
        assert_eq!(ApiErrorCode::Unknown.description(), "Unknown error");
    }

    #[test]
    fn test_decode_envelope() {
        let body = r#"{
            "error": {
                "errors": [{"domain": "global", "reason": "notFound", "message": "File not found: abc"}],
                "code": 404,
                "message": "File not found: abc"
            }
        }"#;

        match decode_error(404, body) {
            DriveError::ApiError {
                code,
                reason,
                message,
            } => {
                assert_eq!(code, 404);
                assert_eq!(reason, "notFound");
                assert_eq!(message, "File not found: abc");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_envelope_without_message() {
        let body = r#"{"error": {"code": 401}}"#;
        match decode_error(401, body) {
            DriveError::ApiError {
                reason, message, ..
            } => {
                assert!(reason.is_empty());
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_decode_plain_body() {
        assert!(matches!(
            decode_error(502, "<html>Bad Gateway</html>"),
            DriveError::HttpError(502)
        ));
    }
}
