use tracing::instrument;

use super::{CreateWithAttachments, Resource, UpdateWithAttachments};
use crate::domain::{RecordId, StatusChangeRequest, WorkOrderPurchaseOrder};
use crate::error::ApiResult;
use crate::services::{ApiClient, MessageResponse, MultipartPayload};

const PATH: &str = "/project_module/wo_po_data";

/// Work orders and purchase orders raised against a project.
#[derive(Clone, Copy)]
pub struct WorkOrderApi<'a> {
    resource: Resource<'a, WorkOrderPurchaseOrder>,
}

impl<'a> WorkOrderApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: Resource::new(client, PATH),
        }
    }

    pub async fn list_for_project(&self, project_id: RecordId) -> ApiResult<Vec<WorkOrderPurchaseOrder>> {
        self.resource.list_by("project_id", project_id).await
    }

    pub async fn get(&self, id: RecordId) -> ApiResult<WorkOrderPurchaseOrder> {
        self.resource.get(id).await
    }

    #[instrument(skip(self, payload), fields(parts = payload.len()))]
    pub async fn create(&self, payload: MultipartPayload) -> ApiResult<WorkOrderPurchaseOrder> {
        self.resource.create_multipart(payload).await
    }

    #[instrument(skip(self, payload), fields(parts = payload.len()))]
    pub async fn update(
        &self,
        id: RecordId,
        payload: MultipartPayload,
    ) -> ApiResult<WorkOrderPurchaseOrder> {
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

impl CreateWithAttachments for WorkOrderApi<'_> {
    type Record = WorkOrderPurchaseOrder;

    async fn create_with_attachments(
        &self,
        payload: MultipartPayload,
    ) -> ApiResult<WorkOrderPurchaseOrder> {
        self.create(payload).await
    }
}

impl UpdateWithAttachments for WorkOrderApi<'_> {
    type Record = WorkOrderPurchaseOrder;

    async fn update_with_attachments(
        &self,
        id: RecordId,
        payload: MultipartPayload,
    ) -> ApiResult<WorkOrderPurchaseOrder> {
        self.update(id, payload).await
    }
}
