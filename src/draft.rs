//! In-progress form input.

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordField};

/// Transient mirror of a record's editable fields, bound to the form inputs.
///
/// Every field starts empty and goes back to empty after each submission.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub age: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::FullName => &self.full_name,
            RecordField::Email => &self.email,
            RecordField::Phone => &self.phone,
            RecordField::Location => &self.location,
            RecordField::Age => &self.age,
        }
    }

    /// Overwrites one field, leaving the rest untouched.
    pub fn set(&mut self, field: RecordField, value: impl Into<String>) {
        let slot = match field {
            RecordField::FullName => &mut self.full_name,
            RecordField::Email => &mut self.email,
            RecordField::Phone => &mut self.phone,
            RecordField::Location => &mut self.location,
            RecordField::Age => &mut self.age,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Draft::default();
    }

    pub fn is_empty(&self) -> bool {
        RecordField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Draft pre-filled for editing `record`. Age is left blank.
    pub fn for_edit(record: &Record) -> Self {
        Self {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            location: record.location.clone(),
            age: String::new(),
        }
    }

    pub(crate) fn into_record(self, id: i64) -> Record {
        Record {
            id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            location: self.location,
            age: self.age,
        }
    }

    /// Copies the updatable fields onto `record`; `id` and `age` are kept.
    pub(crate) fn apply_to(&self, record: &mut Record) {
        record.full_name = self.full_name.clone();
        record.email = self.email.clone();
        record.phone = self.phone.clone();
        record.location = self.location.clone();
    }
}
