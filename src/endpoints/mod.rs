//! REST endpoint bindings, one module per entity.
//!
//! Each binding names its base path once and exposes the operations the
//! screens use. Method, path and body encoding are resolved here; transport,
//! auth header and error mapping live in [`ApiClient`].

pub mod categories;
pub mod clients;
pub mod expenses;
pub mod internal_audit;
pub mod land_bank;
pub mod locations;
pub mod projects;
pub mod sfa;
pub mod work_orders;

pub use categories::LandCategoryApi;
pub use clients::ClientDetailsApi;
pub use expenses::ExpenseApi;
pub use internal_audit::InternalAuditApi;
pub use land_bank::LandBankApi;
pub use locations::LocationApi;
pub use projects::ProjectApi;
pub use sfa::SfaAssessmentApi;
pub use work_orders::WorkOrderApi;

use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;

use crate::domain::{RecordId, StatusChangeRequest};
use crate::error::ApiResult;
use crate::services::{ApiClient, ApiRequest, MessageResponse, MultipartPayload};

/// Mutation used by edit-with-attachments forms.
#[allow(async_fn_in_trait)]
pub trait UpdateWithAttachments {
    type Record;

    async fn update_with_attachments(
        &self,
        id: RecordId,
        payload: MultipartPayload,
    ) -> ApiResult<Self::Record>;
}

/// Mutation used by multipart create forms.
#[allow(async_fn_in_trait)]
pub trait CreateWithAttachments {
    type Record;

    async fn create_with_attachments(&self, payload: MultipartPayload) -> ApiResult<Self::Record>;
}

/// Mutations used by JSON create/edit forms.
#[allow(async_fn_in_trait)]
pub trait SaveJson {
    type Fields;
    type Record;

    async fn create_json(&self, fields: &Self::Fields) -> ApiResult<Self::Record>;

    async fn update_json(&self, id: RecordId, fields: &Self::Fields) -> ApiResult<Self::Record>;
}

/// CRUD operations on one resource path.
pub struct Resource<'a, R> {
    client: &'a ApiClient,
    path: &'static str,
    _record: PhantomData<fn() -> R>,
}

impl<'a, R> Clone for Resource<'a, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R> Copy for Resource<'a, R> {}

impl<'a, R: DeserializeOwned> Resource<'a, R> {
    pub fn new(client: &'a ApiClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn item_path(&self, id: RecordId) -> String {
        format!("{}/{}", self.path.trim_end_matches('/'), id)
    }

    pub async fn list(&self) -> ApiResult<Vec<R>> {
        self.client.send(ApiRequest::get(self.path)).await
    }

    /// List filtered by one query parameter, e.g. `?project_id=4`.
    pub async fn list_by(&self, key: &str, value: impl ToString) -> ApiResult<Vec<R>> {
        self.client
            .send(ApiRequest::get(self.path).query(key, value))
            .await
    }

    pub async fn get(&self, id: RecordId) -> ApiResult<R> {
        self.client.send(ApiRequest::get(self.item_path(id))).await
    }

    pub async fn create_json<B: Serialize>(&self, body: &B) -> ApiResult<R> {
        self.client
            .send(ApiRequest::post(self.path).json(body)?)
            .await
    }

    pub async fn create_multipart(&self, payload: MultipartPayload) -> ApiResult<R> {
        self.client
            .send(ApiRequest::post(self.path).multipart(payload))
            .await
    }

    pub async fn update_json<B: Serialize>(&self, id: RecordId, body: &B) -> ApiResult<R> {
        self.client
            .send(ApiRequest::put(self.item_path(id)).json(body)?)
            .await
    }

    pub async fn update_multipart(&self, id: RecordId, payload: MultipartPayload) -> ApiResult<R> {
        self.client
            .send(ApiRequest::put(self.item_path(id)).multipart(payload))
            .await
    }

    /// Ask the server for a workflow transition. The returned message is
    /// informational; callers refetch to see the new status.
    pub async fn request_status(
        &self,
        id: RecordId,
        change: &StatusChangeRequest,
    ) -> ApiResult<MessageResponse> {
        self.client
            .send(ApiRequest::patch(self.item_path(id)).json(change)?)
            .await
    }

    pub async fn delete(&self, id: RecordId) -> ApiResult<MessageResponse> {
        self.client
            .send(ApiRequest::delete(self.item_path(id)))
            .await
    }
}
