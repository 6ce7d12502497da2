//! Response body shapes returned by the backend

use serde::{Deserialize, Serialize};

/// Most endpoints wrap their payload as `{ "message": ..., "data": ... }`,
/// some return the payload bare. Both decode to the same `T`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped {
        data: T,
        #[serde(default)]
        #[allow(dead_code)]
        message: Option<String>,
    },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        match self {
            Self::Wrapped { data, .. } => data,
            Self::Bare(data) => data,
        }
    }
}

/// Simple message response, used by deletes and status requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn wrapped_and_bare_bodies_decode_alike() {
        let wrapped: Envelope<Vec<Row>> =
            serde_json::from_str(r#"{"message": "ok", "data": [{"id": 1}]}"#).unwrap();
        let bare: Envelope<Vec<Row>> = serde_json::from_str(r#"[{"id": 1}]"#).unwrap();
        assert_eq!(wrapped.into_data(), bare.into_data());
    }

    #[test]
    fn message_only_body_decodes() {
        let body: Envelope<MessageResponse> =
            serde_json::from_str(r#"{"message": "Deleted"}"#).unwrap();
        assert_eq!(body.into_data(), MessageResponse::new("Deleted"));
    }
}
