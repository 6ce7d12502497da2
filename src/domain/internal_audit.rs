//! HSE internal audit report domain types
//!
//! An audit report carries three attachment sections: evidence for the
//! observations, proof of corrective action, and closure documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Attachment, HasStatus, Record, RecordId, Status};
use crate::forms::{EditableRecord, FormFields, MultipartFields, ValidationErrors};
use crate::listing::Filterable;
use crate::services::MultipartPayload;

pub const OBSERVATION_FILES: &str = "observation_files";
pub const CORRECTIVE_ACTION_FILES: &str = "corrective_action_files";
pub const CLOSURE_FILES: &str = "closure_files";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalAuditReport {
    pub id: RecordId,
    pub project_id: RecordId,
    #[serde(default)]
    pub audit_date: Option<NaiveDate>,
    #[serde(default)]
    pub auditor: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default)]
    pub corrective_action: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub observation_files: Vec<Attachment>,
    #[serde(default)]
    pub corrective_action_files: Vec<Attachment>,
    #[serde(default)]
    pub closure_files: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternalAuditFields {
    pub project_id: Option<RecordId>,
    pub audit_date: Option<NaiveDate>,
    pub auditor: String,
    pub area: String,
    pub observations: String,
    pub corrective_action: String,
}

impl InternalAuditFields {
    pub fn for_project(project_id: RecordId) -> Self {
        Self {
            project_id: Some(project_id),
            ..Self::default()
        }
    }
}

impl FormFields for InternalAuditFields {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("project_id", "Project", &self.project_id);
        errors.require("audit_date", "Audit date", &self.audit_date);
        errors.require_text("auditor", "Auditor", &self.auditor);
        errors.require_text("area", "Audit area", &self.area);
        errors.require_text("observations", "Observations", &self.observations);
        errors
    }
}

impl MultipartFields for InternalAuditFields {
    const SLOTS: &'static [&'static str] =
        &[OBSERVATION_FILES, CORRECTIVE_ACTION_FILES, CLOSURE_FILES];
    const REQUIRED_SLOTS: &'static [&'static str] = &[OBSERVATION_FILES];

    fn write_to(&self, payload: &mut MultipartPayload) {
        payload
            .text_or_empty("project_id", self.project_id)
            .text_or_empty("audit_date", self.audit_date)
            .text("auditor", self.auditor.trim())
            .text("area", self.area.trim())
            .text("observations", self.observations.trim())
            .text("corrective_action", self.corrective_action.trim());
    }
}

impl Record for InternalAuditReport {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl HasStatus for InternalAuditReport {
    fn status(&self) -> &Status {
        &self.status
    }
}

impl EditableRecord for InternalAuditReport {
    type Fields = InternalAuditFields;

    fn fields(&self) -> InternalAuditFields {
        InternalAuditFields {
            project_id: Some(self.project_id),
            audit_date: self.audit_date,
            auditor: self.auditor.clone().unwrap_or_default(),
            area: self.area.clone().unwrap_or_default(),
            observations: self.observations.clone().unwrap_or_default(),
            corrective_action: self.corrective_action.clone().unwrap_or_default(),
        }
    }

    fn attachments(&self, slot: &str) -> &[Attachment] {
        match slot {
            OBSERVATION_FILES => &self.observation_files,
            CORRECTIVE_ACTION_FILES => &self.corrective_action_files,
            CLOSURE_FILES => &self.closure_files,
            _ => &[],
        }
    }

    fn workflow_status(&self) -> Option<&Status> {
        Some(&self.status)
    }
}

impl Filterable for InternalAuditReport {
    fn filter_key(&self) -> &str {
        self.area.as_deref().unwrap_or("")
    }
}
