use tracing::instrument;

use super::{Resource, SaveJson};
use crate::domain::{Project, ProjectFields, RecordId, StatusChangeRequest};
use crate::error::ApiResult;
use crate::services::{ApiClient, MessageResponse};

const PATH: &str = "/project_module/create_main_project";

/// Main projects. Bodies are plain JSON.
#[derive(Clone, Copy)]
pub struct ProjectApi<'a> {
    resource: Resource<'a, Project>,
}

impl<'a> ProjectApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: Resource::new(client, PATH),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<Project>> {
        self.resource.list().await
    }

    pub async fn list_for_client(&self, client_id: RecordId) -> ApiResult<Vec<Project>> {
        self.resource.list_by("client", client_id).await
    }

    pub async fn get(&self, id: RecordId) -> ApiResult<Project> {
        self.resource.get(id).await
    }

    #[instrument(skip(self, body), fields(project_name = %body.project_name))]
    pub async fn create(&self, body: &ProjectFields) -> ApiResult<Project> {
        self.resource.create_json(body).await
    }

    /// `PUT /project_module/create_main_project/{id}`
    #[instrument(skip(self, body))]
    pub async fn update(&self, id: RecordId, body: &ProjectFields) -> ApiResult<Project> {
        self.resource.update_json(id, body).await
    }

    #[instrument(skip(self))]
    pub async fn request_status(
        &self,
        id: RecordId,
        change: &StatusChangeRequest,
    ) -> ApiResult<MessageResponse> {
        self.resource.request_status(id, change).await
    }

    /// `DELETE /project_module/create_main_project/{id}`
    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> ApiResult<MessageResponse> {
        self.resource.delete(id).await
    }
}

impl SaveJson for ProjectApi<'_> {
    type Fields = ProjectFields;
    type Record = Project;

    async fn create_json(&self, fields: &ProjectFields) -> ApiResult<Project> {
        self.create(fields).await
    }

    async fn update_json(&self, id: RecordId, fields: &ProjectFields) -> ApiResult<Project> {
        self.update(id, fields).await
    }
}
