//! Unified client error handling
//!
//! Every endpoint operation resolves to `ApiResult<T>`. Server failures keep the
//! HTTP status and the message the backend supplied, so callers can surface it.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Backend unavailable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Error bodies the backend is known to send. Field precedence follows the
/// order below.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message
            .or(self.detail)
            .or(self.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

impl ClientError {
    /// Build an error from a non-success response status and its raw body.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| {
                format!(
                    "Request failed: {}",
                    status.canonical_reason().unwrap_or("unknown status")
                )
            });

        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::BadRequest(message),
            _ => Self::Server {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status associated with the failure, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::BadRequest(_) => Some(400),
            Self::Server { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::Encode(_) | Self::InvalidUrl(_) => None,
        }
    }

    /// Message fit for a notice. Server-supplied text is passed through;
    /// client-side failures get a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::BadRequest(msg) => msg.clone(),
            Self::Server { message, .. } => message.clone(),
            // Don't leak transport internals
            Self::Transport(_) => "Could not reach the server. Please try again.".to_string(),
            Self::Decode(_) | Self::Encode(_) | Self::InvalidUrl(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_extracted() {
        let err = ClientError::from_response(
            StatusCode::BAD_REQUEST,
            br#"{"message": "Survey number already exists"}"#,
        );
        assert!(matches!(err, ClientError::BadRequest(_)));
        assert_eq!(err.user_message(), "Survey number already exists");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn detail_field_is_used_when_message_missing() {
        let err = ClientError::from_response(StatusCode::FORBIDDEN, br#"{"detail": "Not allowed"}"#);
        assert_eq!(err.user_message(), "Not allowed");
    }

    #[test]
    fn non_json_body_falls_back_to_generic_message() {
        let err = ClientError::from_response(StatusCode::BAD_GATEWAY, b"<html>oops</html>");
        match err {
            ClientError::Server { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Request failed: Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
