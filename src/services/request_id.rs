//! Request ID tagging for backend correlation

use reqwest::header::HeaderMap;
use uuid::Uuid;

/// Header name for request ID
pub const X_REQUEST_ID: &str = "x-request-id";

/// Fresh request ID (UUID v4) for one outgoing request.
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Extension trait for reading the request ID a backend echoes back
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&str>;
}

impl RequestIdExt for HeaderMap {
    fn request_id(&self) -> Option<&str> {
        self.get(X_REQUEST_ID)?.to_str().ok()
    }
}
