use std::collections::BTreeSet;

use crate::domain::{Attachment, RecordId};
use crate::services::PendingFile;

/// Suffix of the companion field that lists attachment ids to delete.
pub const REMOVAL_SUFFIX: &str = "_to_remove";

/// One named attachment collection of a record being edited.
///
/// `existing` is never pruned locally: marking an id only records intent, and
/// the file keeps showing (struck through) until the server confirms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentSlot {
    name: &'static str,
    existing: Vec<Attachment>,
    added: Vec<PendingFile>,
    removed_ids: BTreeSet<RecordId>,
}

/// Existing attachment as it should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentView<'a> {
    pub attachment: &'a Attachment,
    pub marked_for_removal: bool,
}

impl AttachmentSlot {
    pub fn new(name: &'static str, existing: Vec<Attachment>) -> Self {
        Self {
            name,
            existing,
            added: Vec::new(),
            removed_ids: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the companion removal field, e.g. `survey_number_files_to_remove`.
    pub fn removal_field(&self) -> String {
        format!("{}{}", self.name, REMOVAL_SUFFIX)
    }

    pub fn existing(&self) -> &[Attachment] {
        &self.existing
    }

    pub fn added(&self) -> &[PendingFile] {
        &self.added
    }

    pub fn removed_ids(&self) -> &BTreeSet<RecordId> {
        &self.removed_ids
    }

    pub fn add_files(&mut self, files: impl IntoIterator<Item = PendingFile>) {
        self.added.extend(files);
    }

    /// Drop a newly selected file before it is ever sent.
    pub fn unselect(&mut self, index: usize) -> Option<PendingFile> {
        (index < self.added.len()).then(|| self.added.remove(index))
    }

    pub fn contains_existing(&self, id: RecordId) -> bool {
        self.existing.iter().any(|a| a.id == id)
    }

    /// Flip the removal mark of an existing attachment. Returns whether the
    /// id is marked afterwards, or `None` if it is not an existing attachment.
    pub fn toggle_removal(&mut self, id: RecordId) -> Option<bool> {
        if !self.contains_existing(id) {
            return None;
        }
        if self.removed_ids.remove(&id) {
            Some(false)
        } else {
            self.removed_ids.insert(id);
            Some(true)
        }
    }

    pub fn is_marked(&self, id: RecordId) -> bool {
        self.removed_ids.contains(&id)
    }

    /// Comma-joined ids for the removal field, or `None` when nothing is
    /// marked. An empty-but-present field would clear the slot server-side.
    pub fn removal_value(&self) -> Option<String> {
        if self.removed_ids.is_empty() {
            return None;
        }
        let ids: Vec<String> = self.removed_ids.iter().map(|id| id.to_string()).collect();
        Some(ids.join(","))
    }

    pub fn view(&self) -> Vec<AttachmentView<'_>> {
        self.existing
            .iter()
            .map(|attachment| AttachmentView {
                attachment,
                marked_for_removal: self.is_marked(attachment.id),
            })
            .collect()
    }

    /// Attachments that will remain once pending removals are applied.
    pub fn kept_count(&self) -> usize {
        self.existing.len() - self.removed_ids.len() + self.added.len()
    }

    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed_ids.is_empty()
    }

    pub(crate) fn clear_pending(&mut self) {
        self.added.clear();
        self.removed_ids.clear();
    }
}
