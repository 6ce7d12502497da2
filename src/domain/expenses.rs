//! Project expense domain types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Attachment, HasStatus, Record, RecordId, Status};
use crate::forms::{EditableRecord, FormFields, MultipartFields, ValidationErrors};
use crate::listing::Filterable;
use crate::services::MultipartPayload;

pub const EXPENSE_FILES: &str = "expense_files";

/// Expense entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    pub project_id: RecordId,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: Decimal,
    #[serde(default)]
    pub expense_date: Option<NaiveDate>,
    #[serde(default)]
    pub paid_to: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub expense_files: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFields {
    pub project_id: Option<RecordId>,
    pub category: String,
    pub description: String,
    pub amount: Option<Decimal>,
    pub expense_date: Option<NaiveDate>,
    pub paid_to: String,
}

impl ExpenseFields {
    /// Blank expense pre-assigned to a project.
    pub fn for_project(project_id: RecordId) -> Self {
        Self {
            project_id: Some(project_id),
            ..Self::default()
        }
    }
}

impl FormFields for ExpenseFields {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("project_id", "Project", &self.project_id);
        errors.require_text("category", "Expense category", &self.category);
        errors.require_positive("amount", "Amount", &self.amount);
        errors.require("expense_date", "Expense date", &self.expense_date);
        errors
    }
}

impl MultipartFields for ExpenseFields {
    const SLOTS: &'static [&'static str] = &[EXPENSE_FILES];
    const REQUIRED_SLOTS: &'static [&'static str] = &[EXPENSE_FILES];

    fn write_to(&self, payload: &mut MultipartPayload) {
        payload
            .text_or_empty("project_id", self.project_id)
            .text("category", self.category.trim())
            .text("description", self.description.trim())
            .text_or_empty("amount", self.amount)
            .text_or_empty("expense_date", self.expense_date)
            .text("paid_to", self.paid_to.trim());
    }
}

impl Record for Expense {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl HasStatus for Expense {
    fn status(&self) -> &Status {
        &self.status
    }
}

impl EditableRecord for Expense {
    type Fields = ExpenseFields;

    fn fields(&self) -> ExpenseFields {
        ExpenseFields {
            project_id: Some(self.project_id),
            category: self.category.clone(),
            description: self.description.clone().unwrap_or_default(),
            amount: Some(self.amount),
            expense_date: self.expense_date,
            paid_to: self.paid_to.clone().unwrap_or_default(),
        }
    }

    fn attachments(&self, slot: &str) -> &[Attachment] {
        match slot {
            EXPENSE_FILES => &self.expense_files,
            _ => &[],
        }
    }

    fn workflow_status(&self) -> Option<&Status> {
        Some(&self.status)
    }
}

impl Filterable for Expense {
    fn filter_key(&self) -> &str {
        &self.category
    }
}
