//! Site feasibility assessment (SFA) domain types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Attachment, HasStatus, Record, RecordId, Status};
use crate::forms::{EditableRecord, FormFields, MultipartFields, ValidationErrors};
use crate::listing::Filterable;
use crate::services::MultipartPayload;

pub const SFA_REPORT_FILES: &str = "sfa_report_files";
pub const SITE_PHOTO_FILES: &str = "site_photo_files";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfaAssessment {
    pub id: RecordId,
    pub land_bank: RecordId,
    #[serde(default)]
    pub land_name: Option<String>,
    #[serde(default)]
    pub assessment_date: Option<NaiveDate>,
    #[serde(default)]
    pub assessor: Option<String>,
    #[serde(default)]
    pub feasibility: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub sfa_report_files: Vec<Attachment>,
    #[serde(default)]
    pub site_photo_files: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SfaFields {
    pub land_bank: Option<RecordId>,
    pub assessment_date: Option<NaiveDate>,
    pub assessor: String,
    pub feasibility: String,
    pub remarks: String,
}

impl FormFields for SfaFields {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("land_bank", "Land bank", &self.land_bank);
        errors.require("assessment_date", "Assessment date", &self.assessment_date);
        errors.require_text("assessor", "Assessor", &self.assessor);
        errors
    }
}

impl MultipartFields for SfaFields {
    const SLOTS: &'static [&'static str] = &[SFA_REPORT_FILES, SITE_PHOTO_FILES];
    const REQUIRED_SLOTS: &'static [&'static str] = &[SFA_REPORT_FILES];

    fn write_to(&self, payload: &mut MultipartPayload) {
        payload
            .text_or_empty("land_bank", self.land_bank)
            .text_or_empty("assessment_date", self.assessment_date)
            .text("assessor", self.assessor.trim())
            .text("feasibility", self.feasibility.trim())
            .text("remarks", self.remarks.trim());
    }
}

impl Record for SfaAssessment {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl HasStatus for SfaAssessment {
    fn status(&self) -> &Status {
        &self.status
    }
}

impl EditableRecord for SfaAssessment {
    type Fields = SfaFields;

    fn fields(&self) -> SfaFields {
        SfaFields {
            land_bank: Some(self.land_bank),
            assessment_date: self.assessment_date,
            assessor: self.assessor.clone().unwrap_or_default(),
            feasibility: self.feasibility.clone().unwrap_or_default(),
            remarks: self.remarks.clone().unwrap_or_default(),
        }
    }

    fn attachments(&self, slot: &str) -> &[Attachment] {
        match slot {
            SFA_REPORT_FILES => &self.sfa_report_files,
            SITE_PHOTO_FILES => &self.site_photo_files,
            _ => &[],
        }
    }

    fn workflow_status(&self) -> Option<&Status> {
        Some(&self.status)
    }
}

impl Filterable for SfaAssessment {
    fn filter_key(&self) -> &str {
        self.land_name.as_deref().unwrap_or("")
    }
}
