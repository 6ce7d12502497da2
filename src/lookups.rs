//! Dropdown reference data for the entity forms

use serde::Serialize;
use tracing::debug;

use crate::app::Console;
use crate::domain::{ClientDetails, LandBank, LandCategory, Location, RecordId};
use crate::error::ApiResult;

/// One `<option>` of a select control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: RecordId,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: RecordId, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Lookup collections a land bank or project form needs before it opens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub categories: Vec<LandCategory>,
    pub land_banks: Vec<LandBank>,
    pub locations: Vec<Location>,
    pub clients: Vec<ClientDetails>,
}

impl ReferenceData {
    /// Fetch all lookups concurrently. Fails as a whole if any query fails.
    pub async fn load(console: &Console) -> ApiResult<Self> {
        let (category_api, land_bank_api, location_api, client_api) = (
            console.land_categories(),
            console.land_banks(),
            console.locations(),
            console.clients(),
        );
        let (categories, land_banks, locations, clients) = futures::try_join!(
            category_api.list(),
            land_bank_api.list(),
            location_api.list(),
            client_api.list(),
        )?;

        debug!(
            categories = categories.len(),
            land_banks = land_banks.len(),
            locations = locations.len(),
            clients = clients.len(),
            "Reference data loaded"
        );

        Ok(Self {
            categories,
            land_banks,
            locations,
            clients,
        })
    }

    pub fn category_options(&self) -> Vec<SelectOption> {
        self.categories
            .iter()
            .map(|c| SelectOption::new(c.id, c.name.as_str()))
            .collect()
    }

    pub fn land_bank_options(&self) -> Vec<SelectOption> {
        self.land_banks
            .iter()
            .map(|l| SelectOption::new(l.id, l.land_name.as_str()))
            .collect()
    }

    pub fn location_options(&self) -> Vec<SelectOption> {
        self.locations
            .iter()
            .map(|l| SelectOption::new(l.id, l.name.as_str()))
            .collect()
    }

    pub fn client_options(&self) -> Vec<SelectOption> {
        self.clients
            .iter()
            .map(|c| SelectOption::new(c.id, c.client_name.as_str()))
            .collect()
    }

    /// Display name for a location id, for list columns that only carry the id.
    pub fn location_name(&self, id: RecordId) -> Option<&str> {
        self.locations
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.name.as_str())
    }

    pub fn category_name(&self, id: RecordId) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_and_names_follow_fetched_order() {
        let data = ReferenceData {
            categories: vec![
                LandCategory { id: 2, name: "Agricultural".into() },
                LandCategory { id: 1, name: "Government".into() },
            ],
            locations: vec![Location {
                id: 7,
                name: "Bhuj".into(),
                district: Some("Kutch".into()),
                state: Some("Gujarat".into()),
                remarks: None,
            }],
            ..Default::default()
        };

        assert_eq!(
            data.category_options(),
            vec![
                SelectOption::new(2, "Agricultural"),
                SelectOption::new(1, "Government")
            ]
        );
        assert_eq!(data.location_name(7), Some("Bhuj"));
        assert_eq!(data.category_name(9), None);
        assert!(data.client_options().is_empty());
    }
}
