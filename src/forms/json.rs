use serde::Serialize;
use std::future::Future;
use tracing::{info, warn};

use super::{FormError, FormFields, PendingSubmit, ValidationErrors};
use crate::domain::{HasStatus, Record, RecordId, Status};
use crate::endpoints::SaveJson;
use crate::error::ApiResult;

/// Create/edit dialog for entities saved with a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonForm<F: FormFields + Serialize> {
    target: Option<RecordId>,
    status: Option<Status>,
    initial: F,
    fields: F,
    errors: ValidationErrors,
    in_flight: bool,
}

impl<F: FormFields + Serialize> Default for JsonForm<F> {
    fn default() -> Self {
        Self::for_create(F::default())
    }
}

impl<F: FormFields + Serialize> JsonForm<F> {
    pub fn for_create(initial: F) -> Self {
        Self {
            target: None,
            status: None,
            fields: initial.clone(),
            initial,
            errors: ValidationErrors::new(),
            in_flight: false,
        }
    }

    /// Edit form for an entity without a workflow status.
    pub fn for_edit(id: RecordId, fields: F) -> Self {
        Self {
            target: Some(id),
            ..Self::for_create(fields)
        }
    }

    /// Edit form for a workflow record; submit is refused unless its status
    /// allows edits.
    pub fn for_edit_record<R>(record: &R) -> Self
    where
        R: Record + HasStatus,
        F: for<'r> From<&'r R>,
    {
        Self {
            target: Some(record.id()),
            status: Some(record.status().clone()),
            ..Self::for_create(F::from(record))
        }
    }

    /// Id being edited, `None` when creating.
    pub fn target(&self) -> Option<RecordId> {
        self.target
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.status.as_ref().map_or(true, Status::can_edit)
    }

    pub fn has_changes(&self) -> bool {
        self.fields != self.initial
    }

    pub fn begin_submit(&mut self) -> Result<PendingSubmit<F>, FormError> {
        if self.in_flight {
            return Err(FormError::InFlight);
        }
        if let Some(status) = self.status.as_ref().filter(|s| !s.can_edit()) {
            return Err(FormError::Locked(status.clone()));
        }
        let errors = self.fields.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(FormError::Validation(errors));
        }
        self.errors = ValidationErrors::new();
        self.in_flight = true;
        Ok(PendingSubmit {
            id: self.target,
            body: self.fields.clone(),
        })
    }

    /// On success a create form resets, an edit form adopts the saved values
    /// as its new baseline.
    pub fn finish_submit<R: Record>(&mut self, result: ApiResult<R>) -> Result<R, FormError> {
        self.in_flight = false;
        match result {
            Ok(saved) => {
                info!(record_id = saved.id(), created = self.target.is_none(), "Record saved");
                if self.target.is_some() {
                    self.initial = self.fields.clone();
                } else {
                    self.fields = self.initial.clone();
                }
                Ok(saved)
            }
            Err(e) => {
                warn!(record_id = ?self.target, error = %e, "Record save failed");
                Err(FormError::Api(e))
            }
        }
    }

    pub fn cancel_submit(&mut self) {
        self.in_flight = false;
    }

    pub async fn submit_with<R, S, Fut>(&mut self, send: S) -> Result<R, FormError>
    where
        R: Record,
        S: FnOnce(Option<RecordId>, F) -> Fut,
        Fut: Future<Output = ApiResult<R>>,
    {
        let pending = self.begin_submit()?;
        let result = send(pending.id, pending.body).await;
        self.finish_submit(result)
    }

    pub async fn submit<A>(&mut self, api: &A) -> Result<A::Record, FormError>
    where
        A: SaveJson<Fields = F>,
        A::Record: Record,
    {
        let pending = self.begin_submit()?;
        let result = match pending.id {
            Some(id) => api.update_json(id, &pending.body).await,
            None => api.create_json(&pending.body).await,
        };
        self.finish_submit(result)
    }
}
