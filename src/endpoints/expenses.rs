use tracing::instrument;

use super::{CreateWithAttachments, Resource, UpdateWithAttachments};
use crate::domain::{Expense, RecordId, StatusChangeRequest};
use crate::error::ApiResult;
use crate::services::{ApiClient, MessageResponse, MultipartPayload};

const PATH: &str = "/project_module/create_expense_data";

/// Project expenses. Listing is always scoped to one project.
#[derive(Clone, Copy)]
pub struct ExpenseApi<'a> {
    resource: Resource<'a, Expense>,
}

impl<'a> ExpenseApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: Resource::new(client, PATH),
        }
    }

    /// `GET /project_module/create_expense_data?project_id=<id>`
    pub async fn list_for_project(&self, project_id: RecordId) -> ApiResult<Vec<Expense>> {
        self.resource.list_by("project_id", project_id).await
    }

    pub async fn get(&self, id: RecordId) -> ApiResult<Expense> {
        self.resource.get(id).await
    }

    #[instrument(skip(self, payload), fields(parts = payload.len()))]
    pub async fn create(&self, payload: MultipartPayload) -> ApiResult<Expense> {
        self.resource.create_multipart(payload).await
    }

    #[instrument(skip(self, payload), fields(parts = payload.len()))]
    pub async fn update(&self, id: RecordId, payload: MultipartPayload) -> ApiResult<Expense> {
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

impl CreateWithAttachments for ExpenseApi<'_> {
    type Record = Expense;

    async fn create_with_attachments(&self, payload: MultipartPayload) -> ApiResult<Expense> {
        self.create(payload).await
    }
}

impl UpdateWithAttachments for ExpenseApi<'_> {
    type Record = Expense;

    async fn update_with_attachments(
        &self,
        id: RecordId,
        payload: MultipartPayload,
    ) -> ApiResult<Expense> {
        self.update(id, payload).await
    }
}
