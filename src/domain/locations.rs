use serde::{Deserialize, Serialize};

use super::{Record, RecordId};
use crate::forms::{FormFields, ValidationErrors};
use crate::listing::Filterable;

/// Location master entry used by land banks and projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationFields {
    pub name: String,
    pub district: String,
    pub state: String,
    pub remarks: String,
}

impl FormFields for LocationFields {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require_text("name", "Location name", &self.name);
        errors.require_text("state", "State", &self.state);
        errors
    }
}

impl From<&Location> for LocationFields {
    fn from(l: &Location) -> Self {
        Self {
            name: l.name.clone(),
            district: l.district.clone().unwrap_or_default(),
            state: l.state.clone().unwrap_or_default(),
            remarks: l.remarks.clone().unwrap_or_default(),
        }
    }
}

impl Record for Location {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Filterable for Location {
    fn filter_key(&self) -> &str {
        &self.name
    }
}
