use super::Resource;
use crate::domain::LandCategory;
use crate::error::ApiResult;
use crate::services::ApiClient;

const PATH: &str = "/land_bank/land_category";

/// Read-only land category lookup.
#[derive(Clone, Copy)]
pub struct LandCategoryApi<'a> {
    resource: Resource<'a, LandCategory>,
}

impl<'a> LandCategoryApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            resource: Resource::new(client, PATH),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<LandCategory>> {
        self.resource.list().await
    }
}
