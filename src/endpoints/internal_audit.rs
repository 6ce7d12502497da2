use tracing::instrument;

use super::{CreateWithAttachments, Resource, UpdateWithAttachments};
use crate::domain::{InternalAuditReport, RecordId, StatusChangeRequest};
use crate::error::ApiResult;
use crate::services::{ApiClient, MessageResponse, MultipartPayload};

const PATH: &str = "/hse_module/internal_audit_report";

/// HSE internal audit reports.
#[derive(Clone, Copy)]
pub struct InternalAuditApi<'a> {
    resource: Resource<'a, InternalAuditReport>,
}

impl<'a> InternalAuditApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: Resource::new(client, PATH),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<InternalAuditReport>> {
        self.resource.list().await
    }

    pub async fn list_for_project(&self, project_id: RecordId) -> ApiResult<Vec<InternalAuditReport>> {
        self.resource.list_by("project_id", project_id).await
    }

    pub async fn get(&self, id: RecordId) -> ApiResult<InternalAuditReport> {
        self.resource.get(id).await
    }

    #[instrument(skip(self, payload), fields(parts = payload.len()))]
    pub async fn create(&self, payload: MultipartPayload) -> ApiResult<InternalAuditReport> {
        self.resource.create_multipart(payload).await
    }

    #[instrument(skip(self, payload), fields(parts = payload.len()))]
    pub async fn update(
        &self,
        id: RecordId,
        payload: MultipartPayload,
    ) -> ApiResult<InternalAuditReport> {
        self.resource.update_multipart(id, payload).await
    }

    /// Close or reopen an audit finding.
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

impl CreateWithAttachments for InternalAuditApi<'_> {
    type Record = InternalAuditReport;

    async fn create_with_attachments(
        &self,
        payload: MultipartPayload,
    ) -> ApiResult<InternalAuditReport> {
        self.create(payload).await
    }
}

impl UpdateWithAttachments for InternalAuditApi<'_> {
    type Record = InternalAuditReport;

    async fn update_with_attachments(
        &self,
        id: RecordId,
        payload: MultipartPayload,
    ) -> ApiResult<InternalAuditReport> {
        self.update(id, payload).await
    }
}
