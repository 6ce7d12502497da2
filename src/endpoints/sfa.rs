use tracing::instrument;

use super::{CreateWithAttachments, Resource, UpdateWithAttachments};
use crate::domain::{RecordId, SfaAssessment, StatusChangeRequest};
use crate::error::ApiResult;
use crate::services::{ApiClient, MessageResponse, MultipartPayload};

const PATH: &str = "/land_bank/sfa_data";

/// Site feasibility assessments of land banks.
#[derive(Clone, Copy)]
pub struct SfaAssessmentApi<'a> {
    resource: Resource<'a, SfaAssessment>,
}

impl<'a> SfaAssessmentApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: Resource::new(client, PATH),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<SfaAssessment>> {
        self.resource.list().await
    }

    pub async fn list_for_land_bank(&self, land_bank_id: RecordId) -> ApiResult<Vec<SfaAssessment>> {
        self.resource.list_by("land_bank", land_bank_id).await
    }

    pub async fn get(&self, id: RecordId) -> ApiResult<SfaAssessment> {
        self.resource.get(id).await
    }

    #[instrument(skip(self, payload), fields(parts = payload.len()))]
    pub async fn create(&self, payload: MultipartPayload) -> ApiResult<SfaAssessment> {
        self.resource.create_multipart(payload).await
    }

    #[instrument(skip(self, payload), fields(parts = payload.len()))]
    pub async fn update(&self, id: RecordId, payload: MultipartPayload) -> ApiResult<SfaAssessment> {
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

impl CreateWithAttachments for SfaAssessmentApi<'_> {
    type Record = SfaAssessment;

    async fn create_with_attachments(&self, payload: MultipartPayload) -> ApiResult<SfaAssessment> {
        self.create(payload).await
    }
}

impl UpdateWithAttachments for SfaAssessmentApi<'_> {
    type Record = SfaAssessment;

    async fn update_with_attachments(
        &self,
        id: RecordId,
        payload: MultipartPayload,
    ) -> ApiResult<SfaAssessment> {
        self.update(id, payload).await
    }
}
