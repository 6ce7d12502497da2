//! Form state for create and edit dialogs.
//!
//! Forms hold typed field values and staged attachment changes locally,
//! validate before any network call, and turn into a request body only on
//! submit. A failed submit never touches the staged state.

pub mod create;
pub mod edit;
pub mod json;
pub mod slots;
pub mod validation;

pub use create::CreateForm;
pub use edit::EditForm;
pub use json::JsonForm;
pub use slots::{AttachmentSlot, AttachmentView, REMOVAL_SUFFIX};
pub use validation::ValidationErrors;

use thiserror::Error;

use crate::domain::{Attachment, Record, RecordId, Status};
use crate::error::ClientError;
use crate::services::MultipartPayload;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Please correct the highlighted fields: {0}")]
    Validation(ValidationErrors),

    #[error("A submission is already in progress")]
    InFlight,

    #[error("No record is loaded")]
    NoRecord,

    #[error("Record is {0} and can no longer be changed")]
    Locked(Status),

    #[error(transparent)]
    Api(#[from] ClientError),
}

impl FormError {
    /// Field messages to render inline, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(_) => "Please fill in all required fields.".to_string(),
            Self::InFlight => "Please wait, the previous submission is still in progress.".to_string(),
            Self::NoRecord => "Nothing to save.".to_string(),
            Self::Locked(status) => format!("This record is {} and cannot be modified.", status),
            Self::Api(e) => e.user_message(),
        }
    }
}

/// Typed field values of one entity form.
pub trait FormFields: Clone + Default + std::fmt::Debug + PartialEq {
    /// Required-field and consistency checks. Empty means valid.
    fn validate(&self) -> ValidationErrors;
}

/// Fields submitted as multipart together with attachment slots.
pub trait MultipartFields: FormFields {
    /// Attachment slots of the entity, in display order.
    const SLOTS: &'static [&'static str] = &[];

    /// Slots that must hold at least one file, on create and after edits.
    const REQUIRED_SLOTS: &'static [&'static str] = &[];

    /// Append every scalar field. Unset optional values are written empty.
    fn write_to(&self, payload: &mut MultipartPayload);
}

/// A fetched record that can be loaded into an [`EditForm`].
pub trait EditableRecord: Record + Clone + std::fmt::Debug + PartialEq {
    type Fields: MultipartFields;

    fn fields(&self) -> Self::Fields;

    fn attachments(&self, slot: &str) -> &[Attachment];

    /// Workflow status gating edits, for entities that have one.
    fn workflow_status(&self) -> Option<&Status> {
        None
    }
}

/// A validated submission, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmit<B> {
    pub id: Option<RecordId>,
    pub body: B,
}

pub(crate) fn validation_error(field: &str, message: &str) -> FormError {
    let mut errors = ValidationErrors::new();
    errors.add(field, message);
    FormError::Validation(errors)
}
