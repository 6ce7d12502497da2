//! Land bank domain types
//!
//! Parcels under acquisition, with survey and approval documents.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Attachment, HasStatus, Record, RecordId, Status};
use crate::forms::{EditableRecord, FormFields, MultipartFields, ValidationErrors};
use crate::listing::Filterable;
use crate::services::MultipartPayload;

pub const LAND_LOCATION_FILES: &str = "land_location_files";
pub const SURVEY_NUMBER_FILES: &str = "survey_number_files";
pub const KEY_PLAN_FILES: &str = "key_plan_files";
pub const APPROVAL_FILES: &str = "approval_files";

/// Land bank entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandBank {
    pub id: RecordId,
    pub land_name: String,
    #[serde(default)]
    pub location: Option<RecordId>,
    #[serde(default)]
    pub category: Option<RecordId>,
    #[serde(default)]
    pub survey_number: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub taluka: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub total_area_acres: Option<Decimal>,
    #[serde(default)]
    pub land_cost: Option<Decimal>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub land_location_files: Vec<Attachment>,
    #[serde(default)]
    pub survey_number_files: Vec<Attachment>,
    #[serde(default)]
    pub key_plan_files: Vec<Attachment>,
    #[serde(default)]
    pub approval_files: Vec<Attachment>,
}

/// Editable fields of a land bank record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandBankFields {
    pub land_name: String,
    pub location: Option<RecordId>,
    pub category: Option<RecordId>,
    pub survey_number: String,
    pub village: String,
    pub taluka: String,
    pub district: String,
    pub state: String,
    pub total_area_acres: Option<Decimal>,
    pub land_cost: Option<Decimal>,
    pub remarks: String,
}

impl FormFields for LandBankFields {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require_text("land_name", "Land name", &self.land_name);
        errors.require("location", "Location", &self.location);
        errors.require("category", "Land category", &self.category);
        errors.require_text("survey_number", "Survey number", &self.survey_number);
        errors.require_positive("total_area_acres", "Total area", &self.total_area_acres);
        if let Some(cost) = self.land_cost {
            errors.check(cost >= Decimal::ZERO, "land_cost", "Land cost cannot be negative");
        }
        errors
    }
}

impl MultipartFields for LandBankFields {
    const SLOTS: &'static [&'static str] = &[
        LAND_LOCATION_FILES,
        SURVEY_NUMBER_FILES,
        KEY_PLAN_FILES,
        APPROVAL_FILES,
    ];
    const REQUIRED_SLOTS: &'static [&'static str] = &[LAND_LOCATION_FILES, SURVEY_NUMBER_FILES];

    fn write_to(&self, payload: &mut MultipartPayload) {
        payload
            .text("land_name", self.land_name.trim())
            .text_or_empty("location", self.location)
            .text_or_empty("category", self.category)
            .text("survey_number", self.survey_number.trim())
            .text("village", self.village.trim())
            .text("taluka", self.taluka.trim())
            .text("district", self.district.trim())
            .text("state", self.state.trim())
            .text_or_empty("total_area_acres", self.total_area_acres)
            .text_or_empty("land_cost", self.land_cost)
            .text("remarks", self.remarks.trim());
    }
}

impl Record for LandBank {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl HasStatus for LandBank {
    fn status(&self) -> &Status {
        &self.status
    }
}

impl EditableRecord for LandBank {
    type Fields = LandBankFields;

    fn fields(&self) -> LandBankFields {
        LandBankFields {
            land_name: self.land_name.clone(),
            location: self.location,
            category: self.category,
            survey_number: self.survey_number.clone().unwrap_or_default(),
            village: self.village.clone().unwrap_or_default(),
            taluka: self.taluka.clone().unwrap_or_default(),
            district: self.district.clone().unwrap_or_default(),
            state: self.state.clone().unwrap_or_default(),
            total_area_acres: self.total_area_acres,
            land_cost: self.land_cost,
            remarks: self.remarks.clone().unwrap_or_default(),
        }
    }

    fn attachments(&self, slot: &str) -> &[Attachment] {
        match slot {
            LAND_LOCATION_FILES => &self.land_location_files,
            SURVEY_NUMBER_FILES => &self.survey_number_files,
            KEY_PLAN_FILES => &self.key_plan_files,
            APPROVAL_FILES => &self.approval_files,
            _ => &[],
        }
    }

    fn workflow_status(&self) -> Option<&Status> {
        Some(&self.status)
    }
}

impl Filterable for LandBank {
    fn filter_key(&self) -> &str {
        &self.land_name
    }
}
