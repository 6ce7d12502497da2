use std::future::Future;
use tracing::{info, warn};

use super::slots::AttachmentSlot;
use super::{
    validation_error, EditableRecord, FormError, FormFields, MultipartFields, PendingSubmit,
    ValidationErrors,
};
use crate::domain::RecordId;
use crate::endpoints::UpdateWithAttachments;
use crate::error::ApiResult;
use crate::services::{MultipartPayload, PendingFile};

/// Edit-with-attachments form.
///
/// Submitting sends only the delta for attachments: new files under the slot
/// name and a `<slot>_to_remove` field for slots with marked ids. Scalar
/// fields are always sent in full.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm<R: EditableRecord> {
    record: Option<R>,
    fields: R::Fields,
    slots: Vec<AttachmentSlot>,
    errors: ValidationErrors,
    in_flight: bool,
}

impl<R: EditableRecord> Default for EditForm<R> {
    fn default() -> Self {
        Self {
            record: None,
            fields: R::Fields::default(),
            slots: empty_slots::<R>(),
            errors: ValidationErrors::new(),
            in_flight: false,
        }
    }
}

fn empty_slots<R: EditableRecord>() -> Vec<AttachmentSlot> {
    R::Fields::SLOTS
        .iter()
        .map(|&name| AttachmentSlot::new(name, Vec::new()))
        .collect()
}

impl<R: EditableRecord> EditForm<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_record(record: R) -> Self {
        let mut form = Self::default();
        form.load_record(record);
        form
    }

    /// Populate fields and existing attachments from `record`, discarding any
    /// staged files, removal marks and validation messages.
    pub fn load_record(&mut self, record: R) {
        self.fields = record.fields();
        self.slots = R::Fields::SLOTS
            .iter()
            .map(|&name| AttachmentSlot::new(name, record.attachments(name).to_vec()))
            .collect();
        self.errors = ValidationErrors::new();
        self.record = Some(record);
    }

    pub fn record(&self) -> Option<&R> {
        self.record.as_ref()
    }

    pub fn record_id(&self) -> Option<RecordId> {
        self.record.as_ref().map(|r| r.id())
    }

    pub fn fields(&self) -> &R::Fields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut R::Fields {
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

    /// Stage newly chosen files. Nothing is uploaded until submit.
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

    /// Mark or unmark an existing attachment for removal. Returns whether it
    /// is marked afterwards.
    pub fn toggle_removal(&mut self, slot: &str, id: RecordId) -> Result<bool, FormError> {
        self.slot_mut(slot)?
            .toggle_removal(id)
            .ok_or_else(|| validation_error(slot, "Attachment does not belong to this record"))
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Whether submit should be offered: a record is loaded, its status
    /// allows edits and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        !self.in_flight
            && self
                .record
                .as_ref()
                .map(|r| r.workflow_status().map_or(true, |s| s.can_edit()))
                .unwrap_or(false)
    }

    pub fn has_changes(&self) -> bool {
        let fields_changed = self
            .record
            .as_ref()
            .map_or(true, |r| r.fields() != self.fields);
        fields_changed || self.slots.iter().any(AttachmentSlot::has_changes)
    }

    /// Field checks plus the rule that a required slot keeps at least one
    /// file once pending removals apply.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = self.fields.validate();
        for &required in R::Fields::REQUIRED_SLOTS {
            let kept = self.slot(required).map_or(0, AttachmentSlot::kept_count);
            errors.check(kept > 0, required, "At least one file is required");
        }
        errors
    }

    /// Assemble the multipart body from the current state.
    pub fn build_payload(&self) -> MultipartPayload {
        let mut payload = MultipartPayload::new();
        self.fields.write_to(&mut payload);
        for slot in &self.slots {
            for file in slot.added() {
                payload.file(slot.name(), file.clone());
            }
            if let Some(ids) = slot.removal_value() {
                payload.text(slot.removal_field(), ids);
            }
        }
        payload
    }

    /// Validate and mark the form as submitting. Local state is otherwise
    /// untouched, so a failed send can simply be retried.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit<MultipartPayload>, FormError> {
        if self.in_flight {
            return Err(FormError::InFlight);
        }
        let record = self.record.as_ref().ok_or(FormError::NoRecord)?;
        if let Some(status) = record.workflow_status() {
            if !status.can_edit() {
                return Err(FormError::Locked(status.clone()));
            }
        }
        let id = record.id();

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(FormError::Validation(errors));
        }
        self.errors = ValidationErrors::new();

        let body = self.build_payload();
        self.in_flight = true;
        Ok(PendingSubmit { id: Some(id), body })
    }

    /// Settle a submission. On success the form reloads from the record the
    /// server returned; on failure every staged change is kept.
    pub fn finish_submit(&mut self, result: ApiResult<R>) -> Result<R, FormError> {
        self.in_flight = false;
        match result {
            Ok(updated) => {
                info!(record_id = updated.id(), "Record updated");
                self.load_record(updated.clone());
                Ok(updated)
            }
            Err(e) => {
                warn!(record_id = ?self.record_id(), error = %e, "Record update failed");
                Err(FormError::Api(e))
            }
        }
    }

    /// Release the in-flight mark of a submission that was abandoned.
    pub fn cancel_submit(&mut self) {
        self.in_flight = false;
    }

    /// Validate, send through `send` and settle.
    pub async fn submit_with<F, Fut>(&mut self, send: F) -> Result<R, FormError>
    where
        F: FnOnce(RecordId, MultipartPayload) -> Fut,
        Fut: Future<Output = ApiResult<R>>,
    {
        let pending = self.begin_submit()?;
        let id = pending.id.ok_or(FormError::NoRecord)?;
        let result = send(id, pending.body).await;
        self.finish_submit(result)
    }

    /// Submit through an endpoint binding.
    pub async fn submit<A>(&mut self, api: &A) -> Result<R, FormError>
    where
        A: UpdateWithAttachments<Record = R>,
    {
        self.submit_with(|id, payload| api.update_with_attachments(id, payload))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Attachment, LandBank, LandBankFields, Status, APPROVAL_FILES, KEY_PLAN_FILES,
        LAND_LOCATION_FILES, SURVEY_NUMBER_FILES,
    };
    use crate::error::ClientError;
    use crate::forms::REMOVAL_SUFFIX;
    use rust_decimal::Decimal;

    fn attachment(id: RecordId, url: &str) -> Attachment {
        Attachment {
            id,
            url: url.to_string(),
        }
    }

    fn land_bank(status: Status) -> LandBank {
        LandBank {
            id: 11,
            land_name: "Kutch Parcel A".to_string(),
            location: Some(3),
            category: Some(1),
            survey_number: Some("SN-44/2".to_string()),
            village: Some("Khavda".to_string()),
            taluka: None,
            district: Some("Kutch".to_string()),
            state: Some("Gujarat".to_string()),
            total_area_acres: Some(Decimal::new(1205, 1)),
            land_cost: None,
            remarks: None,
            status,
            land_location_files: vec![attachment(1, "/a.pdf"), attachment(2, "/b.pdf")],
            survey_number_files: vec![attachment(5, "/survey.pdf")],
            key_plan_files: Vec::new(),
            approval_files: Vec::new(),
        }
    }

    fn removal_fields(payload: &MultipartPayload) -> Vec<&str> {
        payload
            .field_names()
            .filter(|name| name.ends_with(REMOVAL_SUFFIX))
            .collect()
    }

    #[test]
    fn marked_attachment_is_sent_as_removal_field() {
        let mut form = EditForm::for_record(land_bank(Status::Pending));
        assert!(form.toggle_removal(LAND_LOCATION_FILES, 1).unwrap());

        let pending = form.begin_submit().unwrap();
        assert_eq!(pending.id, Some(11));
        assert_eq!(
            pending.body.text_value("land_location_files_to_remove"),
            Some("1")
        );
        assert_eq!(removal_fields(&pending.body), vec!["land_location_files_to_remove"]);
    }

    #[test]
    fn unchanged_form_sends_no_removals_or_files() {
        let mut form = EditForm::for_record(land_bank(Status::Pending));
        assert!(!form.has_changes());

        let pending = form.begin_submit().unwrap();
        assert!(removal_fields(&pending.body).is_empty());
        for slot in LandBankFields::SLOTS {
            assert!(pending.body.files(slot).is_empty());
        }
        assert_eq!(pending.body.text_value("land_name"), Some("Kutch Parcel A"));
    }

    #[test]
    fn double_toggle_restores_removal_set() {
        let mut form = EditForm::for_record(land_bank(Status::Pending));
        let before = form.slot(LAND_LOCATION_FILES).unwrap().removed_ids().clone();

        form.toggle_removal(LAND_LOCATION_FILES, 2).unwrap();
        form.toggle_removal(LAND_LOCATION_FILES, 2).unwrap();

        assert_eq!(form.slot(LAND_LOCATION_FILES).unwrap().removed_ids(), &before);
        assert!(!form.has_changes());
    }

    #[test]
    fn toggling_foreign_attachment_is_rejected() {
        let mut form = EditForm::for_record(land_bank(Status::Pending));
        let err = form.toggle_removal(SURVEY_NUMBER_FILES, 1).unwrap_err();
        assert!(err.validation().is_some());
        assert!(form.toggle_removal("not_a_slot", 1).is_err());
    }

    #[test]
    fn selected_file_appears_once_under_its_slot() {
        let mut form = EditForm::for_record(land_bank(Status::Pending));
        form.select_files(KEY_PLAN_FILES, [PendingFile::new("plan.pdf", b"%PDF".to_vec())])
            .unwrap();

        let payload = form.build_payload();
        let files = payload.files(KEY_PLAN_FILES);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "plan.pdf");
        for other in [LAND_LOCATION_FILES, SURVEY_NUMBER_FILES, APPROVAL_FILES] {
            assert!(payload.files(other).is_empty());
        }
    }

    #[tokio::test]
    async fn missing_required_field_never_reaches_the_network() {
        let mut form = EditForm::for_record(land_bank(Status::Pending));
        form.fields_mut().land_name = "   ".to_string();
        let mut calls = 0;

        let result = form
            .submit_with(|_, _| {
                calls += 1;
                async { Ok(land_bank(Status::Pending)) }
            })
            .await;

        assert_eq!(calls, 0);
        let err = result.unwrap_err();
        assert!(err.validation().unwrap().get("land_name").is_some());
        assert!(form.errors().get("land_name").is_some());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn failed_submit_keeps_every_staged_change() {
        let mut form = EditForm::for_record(land_bank(Status::Rejected));
        form.fields_mut().remarks = "Boundary corrected".to_string();
        form.toggle_removal(LAND_LOCATION_FILES, 1).unwrap();
        form.select_files(APPROVAL_FILES, [PendingFile::new("noc.pdf", b"noc".to_vec())])
            .unwrap();
        let before = form.clone();

        let result = form
            .submit_with(|_, _| async {
                Err(ClientError::Server {
                    status: 500,
                    message: "Storage unavailable".to_string(),
                })
            })
            .await;

        assert!(matches!(result, Err(FormError::Api(_))));
        assert_eq!(form, before);
    }

    #[tokio::test]
    async fn successful_submit_reloads_from_server_record() {
        let mut form = EditForm::for_record(land_bank(Status::Pending));
        form.toggle_removal(LAND_LOCATION_FILES, 1).unwrap();
        form.select_files(KEY_PLAN_FILES, [PendingFile::new("plan.pdf", b"x".to_vec())])
            .unwrap();

        let mut saved = land_bank(Status::Pending);
        saved.land_location_files = vec![attachment(2, "/b.pdf")];
        saved.key_plan_files = vec![attachment(9, "/plan.pdf")];
        let returned = saved.clone();

        let updated = form
            .submit_with(|id, payload| {
                assert_eq!(id, 11);
                assert_eq!(payload.files(KEY_PLAN_FILES).len(), 1);
                async move { Ok(returned) }
            })
            .await
            .unwrap();

        assert_eq!(updated, saved);
        assert_eq!(form.record(), Some(&saved));
        assert!(!form.has_changes());
        assert!(form.slot(KEY_PLAN_FILES).unwrap().added().is_empty());
        assert_eq!(form.slot(KEY_PLAN_FILES).unwrap().existing().len(), 1);
    }

    #[test]
    fn approved_record_is_locked() {
        let mut form = EditForm::for_record(land_bank(Status::Approved));
        assert!(!form.can_submit());
        assert!(matches!(
            form.begin_submit(),
            Err(FormError::Locked(Status::Approved))
        ));
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut form = EditForm::for_record(land_bank(Status::Pending));
        form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert!(matches!(form.begin_submit(), Err(FormError::InFlight)));

        form.cancel_submit();
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn empty_form_has_nothing_to_submit() {
        let mut form: EditForm<LandBank> = EditForm::new();
        assert!(!form.can_submit());
        assert!(matches!(form.begin_submit(), Err(FormError::NoRecord)));
    }

    #[test]
    fn removing_every_file_of_a_required_slot_is_refused() {
        let mut form = EditForm::for_record(land_bank(Status::Pending));
        form.toggle_removal(LAND_LOCATION_FILES, 1).unwrap();
        form.toggle_removal(LAND_LOCATION_FILES, 2).unwrap();

        let err = form.begin_submit().unwrap_err();
        assert_eq!(
            err.validation().unwrap().get(LAND_LOCATION_FILES),
            Some("At least one file is required")
        );
        assert!(!form.is_submitting());

        form.select_files(LAND_LOCATION_FILES, [PendingFile::new("new.pdf", b"x".to_vec())])
            .unwrap();
        let pending = form.begin_submit().unwrap();
        assert_eq!(
            pending.body.text_value("land_location_files_to_remove"),
            Some("1,2")
        );
    }

    #[test]
    fn cleared_optional_value_is_sent_empty() {
        let mut record = land_bank(Status::Pending);
        record.land_cost = Some(Decimal::new(5000, 0));
        let mut form = EditForm::for_record(record);
        assert_eq!(form.build_payload().text_value("land_cost"), Some("5000"));

        form.fields_mut().land_cost = None;
        let pending = form.begin_submit().unwrap();
        assert_eq!(pending.body.text_value("land_cost"), Some(""));
        assert_eq!(pending.body.text_value("taluka"), Some(""));
    }
}
