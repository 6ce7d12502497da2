use tracing::instrument;

use super::{CreateWithAttachments, Resource, UpdateWithAttachments};
use crate::domain::{LandBank, RecordId, StatusChangeRequest};
use crate::error::ApiResult;
use crate::services::{ApiClient, MessageResponse, MultipartPayload};

const PATH: &str = "/land_bank/land_bank_data";

/// Land bank master records.
#[derive(Clone, Copy)]
pub struct LandBankApi<'a> {
    resource: Resource<'a, LandBank>,
}

impl<'a> LandBankApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: Resource::new(client, PATH),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<LandBank>> {
        self.resource.list().await
    }

    /// Land banks registered under one location.
    pub async fn list_by_location(&self, location_id: RecordId) -> ApiResult<Vec<LandBank>> {
        self.resource.list_by("location_id", location_id).await
    }

    pub async fn get(&self, id: RecordId) -> ApiResult<LandBank> {
        self.resource.get(id).await
    }

    #[instrument(skip(self, payload), fields(parts = payload.len()))]
    pub async fn create(&self, payload: MultipartPayload) -> ApiResult<LandBank> {
        self.resource.create_multipart(payload).await
    }

    #[instrument(skip(self, payload), fields(parts = payload.len()))]
    pub async fn update(&self, id: RecordId, payload: MultipartPayload) -> ApiResult<LandBank> {
        self.resource.update_multipart(id, payload).await
    }

    #[instrument(skip(self))]
    pub async fn request_status(
        &self,
        id: RecordId,
        change: &StatusChangeRequest,
    ) -> ApiResult<MessageResponse> {
        self.resource.request_status(id, change).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> ApiResult<MessageResponse> {
        self.resource.delete(id).await
    }
}

impl CreateWithAttachments for LandBankApi<'_> {
    type Record = LandBank;

    async fn create_with_attachments(&self, payload: MultipartPayload) -> ApiResult<LandBank> {
        self.create(payload).await
    }
}

impl UpdateWithAttachments for LandBankApi<'_> {
    type Record = LandBank;

    async fn update_with_attachments(
        &self,
        id: RecordId,
        payload: MultipartPayload,
    ) -> ApiResult<LandBank> {
        self.update(id, payload).await
    }
}
