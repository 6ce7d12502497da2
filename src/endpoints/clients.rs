use tracing::instrument;

use super::{Resource, SaveJson};
use crate::domain::{ClientDetails, ClientFields, RecordId};
use crate::error::ApiResult;
use crate::services::{ApiClient, MessageResponse};

const PATH: &str = "/project_module/client_details";

/// Client (off-taker) master data.
#[derive(Clone, Copy)]
pub struct ClientDetailsApi<'a> {
    resource: Resource<'a, ClientDetails>,
}

impl<'a> ClientDetailsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: Resource::new(client, PATH),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<ClientDetails>> {
        self.resource.list().await
    }

    pub async fn get(&self, id: RecordId) -> ApiResult<ClientDetails> {
        self.resource.get(id).await
    }

    #[instrument(skip(self, body), fields(client_name = %body.client_name))]
    pub async fn create(&self, body: &ClientFields) -> ApiResult<ClientDetails> {
        self.resource.create_json(body).await
    }

    #[instrument(skip(self, body))]
    pub async fn update(&self, id: RecordId, body: &ClientFields) -> ApiResult<ClientDetails> {
        self.resource.update_json(id, body).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> ApiResult<MessageResponse> {
        self.resource.delete(id).await
    }
}

impl SaveJson for ClientDetailsApi<'_> {
    type Fields = ClientFields;
    type Record = ClientDetails;

    async fn create_json(&self, fields: &ClientFields) -> ApiResult<ClientDetails> {
        self.create(fields).await
    }

    async fn update_json(&self, id: RecordId, fields: &ClientFields) -> ApiResult<ClientDetails> {
        self.update(id, fields).await
    }
}
