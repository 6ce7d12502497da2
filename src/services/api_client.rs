//! HTTP client for the administration backend.
//!
//! Every endpoint binding funnels through [`ApiClient::send`], which:
//! - resolves the path against the configured base URL
//! - attaches the session bearer token read from the request context
//! - tags the request with an `x-request-id`
//! - encodes the body as JSON or multipart
//! - maps non-success statuses to [`ClientError`] with the server's message

use anyhow::Context;
use reqwest::{header::AUTHORIZATION, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;

use super::payload::MultipartPayload;
use super::request_id::{new_request_id, RequestIdExt, X_REQUEST_ID};
use super::response::Envelope;
use crate::auth::RequestContext;
use crate::error::{ApiResult, ClientError};

/// Body encoding strategy of one request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartPayload),
}

impl RequestBody {
    pub fn json<T: Serialize>(body: &T) -> ApiResult<Self> {
        serde_json::to_value(body)
            .map(Self::Json)
            .map_err(|e| ClientError::Encode(e.to_string()))
    }
}

/// A resolved operation: method, relative path, query string and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> ApiResult<Self> {
        self.body = RequestBody::json(body)?;
        Ok(self)
    }

    pub fn multipart(mut self, payload: MultipartPayload) -> Self {
        self.body = RequestBody::Multipart(payload);
        self
    }
}

/// Client for the backend REST API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    context: Arc<RequestContext>,
}

impl ApiClient {
    /// Create a new backend client.
    pub fn new(base_url: Url, timeout_seconds: u64, context: Arc<RequestContext>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(base_url = %base_url, "API client initialized");

        Ok(Self {
            client,
            base_url,
            context,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Request context holding the session token.
    pub fn context(&self) -> &Arc<RequestContext> {
        &self.context
    }

    /// Resolve an endpoint path relative to the base URL.
    pub fn url(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Resolve an attachment link. Absolute links are kept as they are,
    /// relative ones resolve against the backend origin.
    pub fn attachment_url(&self, link: &str) -> ApiResult<Url> {
        match Url::parse(link) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(self.base_url.join(link)?),
            Err(e) => Err(e.into()),
        }
    }

    /// Execute a request and decode the response body.
    pub async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<R> {
        let url = self.url(&request.path)?;
        let request_id = new_request_id();
        let method = request.method.clone();

        let mut req = self
            .client
            .request(request.method, url.clone())
            .header(X_REQUEST_ID, &request_id);

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        // Read per request so a refreshed token applies immediately
        if let Some(bearer) = self.context.bearer() {
            req = req.header(AUTHORIZATION, bearer);
        }

        req = match request.body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req.json(&value),
            RequestBody::Multipart(payload) => req.multipart(payload.into_form()?),
        };

        debug!(method = %method, url = %url, request_id = %request_id, "Backend request");

        let response = req.send().await.map_err(|e| {
            error!(method = %method, url = %url, error = %e, "Backend request failed");
            ClientError::Transport(e)
        })?;

        let status = response.status();
        let echoed_id = response.headers().request_id().map(str::to_string);
        let body = response.bytes().await?;

        if status.is_success() {
            decode_body(&body).map_err(|e| {
                error!(method = %method, url = %url, error = %e, "Failed to parse backend response");
                e
            })
        } else {
            let err = ClientError::from_response(status, &body);
            warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                request_id = echoed_id.as_deref().unwrap_or(&request_id),
                error = %err,
                "Backend returned an error"
            );
            Err(err)
        }
    }
}

/// Decode a success body. Empty bodies (204 and friends) decode as `null`,
/// or as an empty object for message-style responses.
fn decode_body<R: DeserializeOwned>(body: &[u8]) -> ApiResult<R> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(serde_json::Value::Null)
            .or_else(|_| serde_json::from_value(serde_json::json!({})))
            .map_err(|e| ClientError::Decode(format!("empty response body: {}", e)));
    }

    serde_json::from_slice::<Envelope<R>>(body)
        .map(Envelope::into_data)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::response::MessageResponse;

    fn client() -> ApiClient {
        ApiClient::new(
            Url::parse("https://erp.example.com/api/").unwrap(),
            5,
            RequestContext::new(None),
        )
        .unwrap()
    }

    #[test]
    fn paths_resolve_under_base_url() {
        let url = client().url("/project_module/create_main_project/7").unwrap();
        assert_eq!(
            url.as_str(),
            "https://erp.example.com/api/project_module/create_main_project/7"
        );
    }

    #[test]
    fn attachment_links_resolve_when_relative() {
        let c = client();
        assert_eq!(
            c.attachment_url("/media/a.pdf").unwrap().as_str(),
            "https://erp.example.com/media/a.pdf"
        );
        assert_eq!(
            c.attachment_url("https://cdn.example.com/b.pdf").unwrap().as_str(),
            "https://cdn.example.com/b.pdf"
        );
    }

    #[test]
    fn empty_bodies_decode_for_unit_and_message() {
        decode_body::<()>(b"").unwrap();
        let msg: MessageResponse = decode_body(b"  ").unwrap();
        assert_eq!(msg, MessageResponse::default());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let result: ApiResult<Vec<i64>> = decode_body(b"{not json");
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn request_builder_collects_query_and_json() {
        let req = ApiRequest::get("/project_module/create_expense_data").query("project_id", 12);
        assert_eq!(req.query, vec![("project_id".to_string(), "12".to_string())]);

        let req = ApiRequest::put("/x/1")
            .json(&serde_json::json!({"status": "Approved"}))
            .unwrap();
        assert!(matches!(req.body, RequestBody::Json(_)));
    }
}
