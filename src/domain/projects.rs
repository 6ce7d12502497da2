use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{HasStatus, Record, RecordId, Status};
use crate::forms::{FormFields, ValidationErrors};
use crate::listing::Filterable;

/// Generation technology of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Solar,
    Wind,
    Hybrid,
}

/// Main project entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub project_name: String,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub capacity_mw: Option<Decimal>,
    #[serde(default)]
    pub client: Option<RecordId>,
    #[serde(default)]
    pub land_bank: Option<RecordId>,
    #[serde(default)]
    pub location: Option<RecordId>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub progress_percent: Option<Decimal>,
    #[serde(default)]
    pub status: Status,
}

/// Request body for creating or updating a project
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectFields {
    pub project_name: String,
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_mw: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_bank: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<Decimal>,
}

impl FormFields for ProjectFields {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require_text("project_name", "Project name", &self.project_name);
        errors.require("project_type", "Project type", &self.project_type);
        if let Some(capacity) = self.capacity_mw {
            errors.check(capacity > Decimal::ZERO, "capacity_mw", "Capacity must be greater than zero");
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            errors.check(end >= start, "end_date", "End date cannot be before start date");
        }
        if let Some(progress) = self.progress_percent {
            errors.check(
                (Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(&progress),
                "progress_percent",
                "Progress must be between 0 and 100",
            );
        }
        errors
    }
}

impl From<&Project> for ProjectFields {
    fn from(p: &Project) -> Self {
        Self {
            project_name: p.project_name.clone(),
            project_type: p.project_type,
            capacity_mw: p.capacity_mw,
            client: p.client,
            land_bank: p.land_bank,
            location: p.location,
            start_date: p.start_date,
            end_date: p.end_date,
            progress_percent: p.progress_percent,
        }
    }
}

impl Record for Project {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl HasStatus for Project {
    fn status(&self) -> &Status {
        &self.status
    }
}

impl Filterable for Project {
    fn filter_key(&self) -> &str {
        &self.project_name
    }
}
