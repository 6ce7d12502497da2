use std::future::Future;
use tracing::{info, warn};

use super::slots::AttachmentSlot;
use super::{validation_error, FormError, MultipartFields, PendingSubmit, ValidationErrors};
use crate::domain::Record;
use crate::endpoints::CreateWithAttachments;
use crate::error::ApiResult;
use crate::services::{MultipartPayload, PendingFile};

/// Create dialog for a file-bearing entity.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateForm<F: MultipartFields> {
    initial: F,
    fields: F,
    slots: Vec<AttachmentSlot>,
    errors: ValidationErrors,
    in_flight: bool,
}

impl<F: MultipartFields> Default for CreateForm<F> {
    fn default() -> Self {
        Self::with_fields(F::default())
    }
}

impl<F: MultipartFields> CreateForm<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from prefilled values (e.g. the project an expense belongs to).
    /// The form returns to these values after a successful submit.
    pub fn with_fields(initial: F) -> Self {
        Self {
            fields: initial.clone(),
            initial,
            slots: F::SLOTS
                .iter()
                .map(|&name| AttachmentSlot::new(name, Vec::new()))
                .collect(),
            errors: ValidationErrors::new(),
            in_flight: false,
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    pub fn slots(&self) -> &[AttachmentSlot] {
        &self.slots
    }

    pub fn slot(&self, name: &str) -> Option<&AttachmentSlot> {
        self.slots.iter().find(|s| s.name() == name)
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut AttachmentSlot, FormError> {
        self.slots
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| validation_error(name, "Unknown attachment field"))
    }

    pub fn select_files(
        &mut self,
        slot: &str,
        files: impl IntoIterator<Item = PendingFile>,
    ) -> Result<(), FormError> {
        self.slot_mut(slot)?.add_files(files);
        Ok(())
    }

    pub fn unselect_file(&mut self, slot: &str, index: usize) -> Result<Option<PendingFile>, FormError> {
        Ok(self.slot_mut(slot)?.unselect(index))
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Field checks plus the at-least-one-file rule for required slots.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = self.fields.validate();
        for &required in F::REQUIRED_SLOTS {
            let has_file = self
                .slot(required)
                .map_or(false, |s| !s.added().is_empty());
            errors.check(has_file, required, "At least one file is required");
        }
        errors
    }

    pub fn build_payload(&self) -> MultipartPayload {
        let mut payload = MultipartPayload::new();
        self.fields.write_to(&mut payload);
        for slot in &self.slots {
            for file in slot.added() {
                payload.file(slot.name(), file.clone());
            }
        }
        payload
    }

    pub fn begin_submit(&mut self) -> Result<PendingSubmit<MultipartPayload>, FormError> {
        if self.in_flight {
            return Err(FormError::InFlight);
        }
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(FormError::Validation(errors));
        }
        self.errors = ValidationErrors::new();

        let body = self.build_payload();
        self.in_flight = true;
        Ok(PendingSubmit { id: None, body })
    }

    /// Settle a submission. Success resets the form to its initial values;
    /// failure keeps everything the user entered.
    pub fn finish_submit<R: Record>(&mut self, result: ApiResult<R>) -> Result<R, FormError> {
        self.in_flight = false;
        match result {
            Ok(created) => {
                info!(record_id = created.id(), "Record created");
                self.reset();
                Ok(created)
            }
            Err(e) => {
                warn!(error = %e, "Record creation failed");
                Err(FormError::Api(e))
            }
        }
    }

    pub fn cancel_submit(&mut self) {
        self.in_flight = false;
    }

    /// Back to the initial values with no staged files.
    pub fn reset(&mut self) {
        self.fields = self.initial.clone();
        self.slots.iter_mut().for_each(AttachmentSlot::clear_pending);
        self.errors = ValidationErrors::new();
    }

    pub async fn submit_with<R, S, Fut>(&mut self, send: S) -> Result<R, FormError>
    where
        R: Record,
        S: FnOnce(MultipartPayload) -> Fut,
        Fut: Future<Output = ApiResult<R>>,
    {
        let pending = self.begin_submit()?;
        let result = send(pending.body).await;
        self.finish_submit(result)
    }

    pub async fn submit<A>(&mut self, api: &A) -> Result<A::Record, FormError>
    where
        A: CreateWithAttachments,
        A::Record: Record,
    {
        self.submit_with(|payload| api.create_with_attachments(payload))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Expense, ExpenseFields, Status, EXPENSE_FILES};
    use crate::error::ClientError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn filled(project_id: i64) -> CreateForm<ExpenseFields> {
        let mut form = CreateForm::with_fields(ExpenseFields::for_project(project_id));
        let fields = form.fields_mut();
        fields.category = "Civil".to_string();
        fields.amount = Some(Decimal::new(250_000, 2));
        fields.expense_date = NaiveDate::from_ymd_opt(2025, 3, 14);
        form
    }

    fn expense(id: i64) -> Expense {
        Expense {
            id,
            project_id: 4,
            category: "Civil".to_string(),
            description: None,
            amount: Decimal::new(250_000, 2),
            expense_date: NaiveDate::from_ymd_opt(2025, 3, 14),
            paid_to: None,
            status: Status::Pending,
            expense_files: Vec::new(),
        }
    }

    #[test]
    fn required_slot_needs_a_file() {
        let mut form = filled(4);
        let err = form.begin_submit().unwrap_err();
        assert_eq!(
            err.validation().unwrap().get(EXPENSE_FILES),
            Some("At least one file is required")
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn payload_carries_fields_and_files() {
        let mut form = filled(4);
        form.select_files(EXPENSE_FILES, [PendingFile::new("bill.jpg", b"jpg".to_vec())])
            .unwrap();

        let pending = form.begin_submit().unwrap();
        assert_eq!(pending.id, None);
        assert_eq!(pending.body.text_value("project_id"), Some("4"));
        assert_eq!(pending.body.text_value("amount"), Some("2500.00"));
        assert_eq!(pending.body.text_value("expense_date"), Some("2025-03-14"));
        assert_eq!(pending.body.files(EXPENSE_FILES).len(), 1);
    }

    #[tokio::test]
    async fn success_resets_to_prefilled_values() {
        let mut form = filled(4);
        form.select_files(EXPENSE_FILES, [PendingFile::new("bill.jpg", b"jpg".to_vec())])
            .unwrap();

        let created = form
            .submit_with(|_| async { Ok(expense(31)) })
            .await
            .unwrap();

        assert_eq!(created.id, 31);
        assert_eq!(form.fields(), &ExpenseFields::for_project(4));
        assert!(form.slot(EXPENSE_FILES).unwrap().added().is_empty());
    }

    #[tokio::test]
    async fn failure_keeps_entered_values() {
        let mut form = filled(4);
        form.select_files(EXPENSE_FILES, [PendingFile::new("bill.jpg", b"jpg".to_vec())])
            .unwrap();
        let before = form.clone();

        let result: Result<Expense, _> = form
            .submit_with(|_| async { Err(ClientError::BadRequest("Invalid amount".into())) })
            .await;

        assert_eq!(result.unwrap_err().user_message(), "Invalid amount");
        assert_eq!(form, before);
    }
}
