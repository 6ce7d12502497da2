use tracing::instrument;

use super::{Resource, SaveJson};
use crate::domain::{Location, LocationFields, RecordId};
use crate::error::ApiResult;
use crate::services::{ApiClient, MessageResponse};

const PATH: &str = "/land_bank/location";

#[derive(Clone, Copy)]
pub struct LocationApi<'a> {
    resource: Resource<'a, Location>,
}

impl<'a> LocationApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: Resource::new(client, PATH),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<Location>> {
        self.resource.list().await
    }

    pub async fn get(&self, id: RecordId) -> ApiResult<Location> {
        self.resource.get(id).await
    }

    #[instrument(skip(self, body), fields(name = %body.name))]
    pub async fn create(&self, body: &LocationFields) -> ApiResult<Location> {
        self.resource.create_json(body).await
    }

    #[instrument(skip(self, body))]
    pub async fn update(&self, id: RecordId, body: &LocationFields) -> ApiResult<Location> {
        self.resource.update_json(id, body).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> ApiResult<MessageResponse> {
        self.resource.delete(id).await
    }
}

impl SaveJson for LocationApi<'_> {
    type Fields = LocationFields;
    type Record = Location;

    async fn create_json(&self, fields: &LocationFields) -> ApiResult<Location> {
        self.create(fields).await
    }

    async fn update_json(&self, id: RecordId, fields: &LocationFields) -> ApiResult<Location> {
        self.update(id, fields).await
    }
}
