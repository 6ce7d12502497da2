//! Transient notices shown after submits and deletes

use serde::Serialize;
use tracing::{info, warn};

use crate::error::ClientError;
use crate::forms::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::logged(NoticeLevel::Success, message.into())
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::logged(NoticeLevel::Info, message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::logged(NoticeLevel::Error, message.into())
    }

    /// Notice for a finished operation: `success_message` on success, the
    /// error's user-facing text otherwise.
    pub fn from_result<T, E: IntoNotice>(result: &Result<T, E>, success_message: &str) -> Self {
        match result {
            Ok(_) => Self::success(success_message),
            Err(e) => e.to_notice(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    fn logged(level: NoticeLevel, message: String) -> Self {
        match level {
            NoticeLevel::Error => warn!(message = %message, "Error notice"),
            _ => info!(level = ?level, message = %message, "Notice"),
        }
        Self { level, message }
    }
}

/// Errors that can be shown to the user as a notice.
pub trait IntoNotice {
    fn to_notice(&self) -> Notice;
}

impl IntoNotice for ClientError {
    fn to_notice(&self) -> Notice {
        Notice::error(self.user_message())
    }
}

impl IntoNotice for FormError {
    fn to_notice(&self) -> Notice {
        Notice::error(self.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;
    use reqwest::StatusCode;

    #[test]
    fn success_result_uses_given_message() {
        let result: Result<(), ClientError> = Ok(());
        let notice = Notice::from_result(&result, "Land bank updated successfully");
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Land bank updated successfully");
    }

    #[test]
    fn server_message_is_passed_through() {
        let err = ClientError::from_response(
            StatusCode::BAD_REQUEST,
            br#"{"message": "Survey number already exists"}"#,
        );
        let notice = Notice::from_result(&Err::<(), _>(err), "saved");
        assert!(notice.is_error());
        assert_eq!(notice.message, "Survey number already exists");
    }

    #[test]
    fn form_errors_become_error_notices() {
        let notice = FormError::Locked(Status::Approved).to_notice();
        assert!(notice.is_error());
        assert_eq!(notice.message, "This record is Approved and cannot be modified.");
    }
}
