use std::sync::Arc;

use crate::auth::RequestContext;
use crate::config::Settings;
use crate::endpoints::{
    ClientDetailsApi, ExpenseApi, InternalAuditApi, LandBankApi, LandCategoryApi, LocationApi,
    ProjectApi, SfaAssessmentApi, WorkOrderApi,
};
use crate::listing::ListView;
use crate::services::ApiClient;

/// Entry point of the console: configuration, the shared session and the
/// backend client every endpoint binding borrows.
#[derive(Clone)]
pub struct Console {
    settings: Settings,
    client: ApiClient,
}

impl Console {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let context = RequestContext::new(settings.api_token.clone());
        let client = ApiClient::new(
            settings.api_base_url.clone(),
            settings.api_timeout_seconds,
            context,
        )?;

        tracing::info!(
            env = ?settings.env,
            base_url = %settings.api_base_url,
            authenticated = client.context().is_authenticated(),
            "Console ready"
        );

        Ok(Self { settings, client })
    }

    /// Load `.env`, read settings from the environment and build the console.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::new(Settings::from_env()?)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Session shared by every request; set a token here after login.
    pub fn session(&self) -> &Arc<RequestContext> {
        self.client.context()
    }

    pub fn land_banks(&self) -> LandBankApi<'_> {
        LandBankApi::new(&self.client)
    }

    pub fn land_categories(&self) -> LandCategoryApi<'_> {
        LandCategoryApi::new(&self.client)
    }

    pub fn locations(&self) -> LocationApi<'_> {
        LocationApi::new(&self.client)
    }

    pub fn projects(&self) -> ProjectApi<'_> {
        ProjectApi::new(&self.client)
    }

    pub fn clients(&self) -> ClientDetailsApi<'_> {
        ClientDetailsApi::new(&self.client)
    }

    pub fn expenses(&self) -> ExpenseApi<'_> {
        ExpenseApi::new(&self.client)
    }

    pub fn sfa_assessments(&self) -> SfaAssessmentApi<'_> {
        SfaAssessmentApi::new(&self.client)
    }

    pub fn work_orders(&self) -> WorkOrderApi<'_> {
        WorkOrderApi::new(&self.client)
    }

    pub fn internal_audits(&self) -> InternalAuditApi<'_> {
        InternalAuditApi::new(&self.client)
    }

    /// Empty listing state sized by `LIST_PAGE_SIZE`.
    pub fn list_view<T>(&self) -> ListView<T> {
        ListView::new(self.settings.list_page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_carries_configured_token_and_page_size() {
        let mut settings = Settings::for_base_url("http://localhost:9000/api").unwrap();
        settings.api_token = Some("abc".to_string());
        settings.list_page_size = 10;

        let console = Console::new(settings).unwrap();
        assert_eq!(console.session().bearer().as_deref(), Some("Bearer abc"));
        assert_eq!(console.list_view::<()>().page_request().page_size, 10);
        assert_eq!(console.client().base_url().as_str(), "http://localhost:9000/api/");
    }
}
