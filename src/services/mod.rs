//! Backend communication: HTTP client, request bodies and response shapes.

pub mod api_client;
pub mod payload;
pub mod request_id;
pub mod response;

pub use api_client::{ApiClient, ApiRequest, RequestBody};
pub use payload::{MultipartPayload, PartValue, PendingFile};
pub use response::MessageResponse;
