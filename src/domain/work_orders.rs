//! Work order / purchase order (WO/PO) domain types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Attachment, HasStatus, Record, RecordId, Status};
use crate::forms::{EditableRecord, FormFields, MultipartFields, ValidationErrors};
use crate::listing::Filterable;
use crate::services::MultipartPayload;

pub const ORDER_FILES: &str = "order_files";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderKind {
    #[serde(rename = "WO", alias = "wo")]
    WorkOrder,
    #[serde(rename = "PO", alias = "po")]
    PurchaseOrder,
}

impl OrderKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::WorkOrder => "WO",
            Self::PurchaseOrder => "PO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderPurchaseOrder {
    pub id: RecordId,
    pub project_id: RecordId,
    pub order_kind: OrderKind,
    pub order_number: String,
    pub vendor_name: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub order_files: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkOrderFields {
    pub project_id: Option<RecordId>,
    pub order_kind: Option<OrderKind>,
    pub order_number: String,
    pub vendor_name: String,
    pub amount: Option<Decimal>,
    pub issue_date: Option<NaiveDate>,
}

impl WorkOrderFields {
    pub fn for_project(project_id: RecordId) -> Self {
        Self {
            project_id: Some(project_id),
            ..Self::default()
        }
    }
}

impl FormFields for WorkOrderFields {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("project_id", "Project", &self.project_id);
        errors.require("order_kind", "Order type", &self.order_kind);
        errors.require_text("order_number", "Order number", &self.order_number);
        errors.require_text("vendor_name", "Vendor name", &self.vendor_name);
        errors.require_positive("amount", "Order amount", &self.amount);
        errors.require("issue_date", "Issue date", &self.issue_date);
        errors
    }
}

impl MultipartFields for WorkOrderFields {
    const SLOTS: &'static [&'static str] = &[ORDER_FILES];
    const REQUIRED_SLOTS: &'static [&'static str] = &[ORDER_FILES];

    fn write_to(&self, payload: &mut MultipartPayload) {
        payload
            .text_or_empty("project_id", self.project_id)
            .text_or_empty("order_kind", self.order_kind.map(|k| k.code()))
            .text("order_number", self.order_number.trim())
            .text("vendor_name", self.vendor_name.trim())
            .text_or_empty("amount", self.amount)
            .text_or_empty("issue_date", self.issue_date);
    }
}

impl Record for WorkOrderPurchaseOrder {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl HasStatus for WorkOrderPurchaseOrder {
    fn status(&self) -> &Status {
        &self.status
    }
}

impl EditableRecord for WorkOrderPurchaseOrder {
    type Fields = WorkOrderFields;

    fn fields(&self) -> WorkOrderFields {
        WorkOrderFields {
            project_id: Some(self.project_id),
            order_kind: Some(self.order_kind),
            order_number: self.order_number.clone(),
            vendor_name: self.vendor_name.clone(),
            amount: self.amount,
            issue_date: self.issue_date,
        }
    }

    fn attachments(&self, slot: &str) -> &[Attachment] {
        match slot {
            ORDER_FILES => &self.order_files,
            _ => &[],
        }
    }

    fn workflow_status(&self) -> Option<&Status> {
        Some(&self.status)
    }
}

impl Filterable for WorkOrderPurchaseOrder {
    fn filter_key(&self) -> &str {
        &self.vendor_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_kind_uses_short_codes() {
        let kind: OrderKind = serde_json::from_str(r#""po""#).unwrap();
        assert_eq!(kind, OrderKind::PurchaseOrder);
        assert_eq!(serde_json::to_string(&OrderKind::WorkOrder).unwrap(), r#""WO""#);
    }
}
