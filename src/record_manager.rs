//! The record manager: owns the contact list, the draft and the editing
//! context, and turns user events into state transitions.
//!
//! Every operation here is total. Validation happens before
//! [`RecordManager::submit_draft`] is reached (see [`crate::validation`]).

use log::debug;
use serde::Serialize;

use crate::draft::Draft;
use crate::record::{IdGenerator, Record, RecordField};

/// Whether a submission adds a record or updates one.
///
/// ```text
/// Idle --begin_edit(r)--> Editing(r.id)
/// Editing(id) --submit_draft--> Idle
/// ```
///
/// There is no cancel transition. Deleting the record under edit leaves the
/// context pointing at the removed id.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EditingContext {
    #[default]
    Idle,
    Editing(i64),
}

impl EditingContext {
    pub fn target(&self) -> Option<i64> {
        match self {
            EditingContext::Idle => None,
            EditingContext::Editing(id) => Some(*id),
        }
    }
}

/// What a call to [`RecordManager::submit_draft`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmitOutcome {
    Added(Record),
    Updated(Record),
    /// The edit target was gone; nothing in the collection changed.
    Unmatched(i64),
}

#[derive(Debug, Default)]
pub struct RecordManager {
    records: Vec<Record>,
    draft: Draft,
    editing: EditingContext,
    ids: IdGenerator,
}

impl RecordManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn find(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing(&self) -> EditingContext {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.editing, EditingContext::Editing(_))
    }

    /// Label of the form's submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Add"
        }
    }

    pub fn update_draft_field(&mut self, field: RecordField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Commits the draft.
    ///
    /// In `Editing(id)` the matching record gets the draft's full name, email,
    /// phone and location; its `id`, `age` and position are kept. Otherwise a
    /// new record built from all five fields is appended. Either way the draft
    /// is reset and the context returns to `Idle`.
    ///
    /// ```rust
    /// use contact_crud_core::record::RecordField;
    /// use contact_crud_core::record_manager::{RecordManager, SubmitOutcome};
    ///
    /// let mut manager = RecordManager::new();
    /// manager.update_draft_field(RecordField::FullName, "Alice");
    /// manager.update_draft_field(RecordField::Age, "30");
    ///
    /// let outcome = manager.submit_draft();
    /// assert!(matches!(outcome, SubmitOutcome::Added(_)));
    /// assert_eq!(manager.len(), 1);
    /// assert!(manager.draft().is_empty());
    /// ```
    pub fn submit_draft(&mut self) -> SubmitOutcome {
        let draft = std::mem::take(&mut self.draft);

        match std::mem::take(&mut self.editing) {
            EditingContext::Editing(target) => {
                match self.records.iter_mut().find(|record| record.id == target) {
                    Some(record) => {
                        draft.apply_to(record);
                        debug!("Updated record {target}");
                        SubmitOutcome::Updated(record.clone())
                    }
                    None => {
                        debug!("Edit target {target} no longer exists; update skipped");
                        SubmitOutcome::Unmatched(target)
                    }
                }
            }
            EditingContext::Idle => {
                let record = draft.into_record(self.ids.next_id());
                debug!("Added record {}", record.id);
                self.records.push(record.clone());
                SubmitOutcome::Added(record)
            }
        }
    }

    /// Loads `record` into the draft (age excluded) and enters `Editing`.
    pub fn begin_edit(&mut self, record: &Record) {
        self.draft = Draft::for_edit(record);
        self.editing = EditingContext::Editing(record.id);
        debug!("Editing record {}", record.id);
    }

    /// [`begin_edit`](Self::begin_edit) on the stored record with `id`.
    ///
    /// Returns `false`, with no state change, when no such record exists.
    pub fn begin_edit_by_id(&mut self, id: i64) -> bool {
        match self.find(id).cloned() {
            Some(record) => {
                self.begin_edit(&record);
                true
            }
            None => false,
        }
    }

    /// Removes the record with `id`, returning it. No match is a no-op.
    ///
    /// The editing context is left alone even if it targets `id`.
    pub fn delete_record(&mut self, id: i64) -> Option<Record> {
        let position = self.records.iter().position(|record| record.id == id)?;
        debug!("Deleted record {id}");
        Some(self.records.remove(position))
    }
}
