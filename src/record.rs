//! Record definitions for the contact list.
//!
//! A [`Record`] is one stored contact entry. Its `id` is the only key used to
//! match records for update and delete, and it never changes after creation.
//! The remaining fields are kept exactly as typed into the form, `age`
//! included: it is stored as text and never coerced to a number.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One stored contact entry.
///
/// Serializes with the camelCase keys the front end binds to:
///
/// ```rust
/// use contact_crud_core::record::Record;
///
/// let record = Record {
///     id: 1_700_000_000_000,
///     full_name: "Alice".to_string(),
///     email: "a@x.com".to_string(),
///     phone: "123".to_string(),
///     location: "NYC".to_string(),
///     age: "30".to_string(),
/// };
///
/// let json = serde_json::to_value(&record)?;
/// assert_eq!(json["fullName"], "Alice");
/// assert_eq!(json["age"], "30");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Timestamp-derived identifier, unique within a manager.
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Raw text from the numeric input.
    pub age: String,
}

impl Record {
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::FullName => &self.full_name,
            RecordField::Email => &self.email,
            RecordField::Phone => &self.phone,
            RecordField::Location => &self.location,
            RecordField::Age => &self.age,
        }
    }
}

/// The editable fields of a record, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    FullName,
    Email,
    Phone,
    Location,
    Age,
}

impl RecordField {
    pub const ALL: [RecordField; 5] = [
        RecordField::FullName,
        RecordField::Email,
        RecordField::Phone,
        RecordField::Location,
        RecordField::Age,
    ];

    /// Fields an update copies onto the stored record. `Age` is not one of them.
    pub const UPDATABLE: [RecordField; 4] = [
        RecordField::FullName,
        RecordField::Email,
        RecordField::Phone,
        RecordField::Location,
    ];

    /// Name used by the form input and the JSON key.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordField::FullName => "fullName",
            RecordField::Email => "email",
            RecordField::Phone => "phone",
            RecordField::Location => "location",
            RecordField::Age => "age",
        }
    }
}

impl Display for RecordField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl Display for UnknownField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown field name: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for RecordField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Hands out millisecond timestamps as record ids.
///
/// Two requests inside the same millisecond (or across a clock step
/// backwards) still get distinct, increasing ids: the generator falls back to
/// `last + 1`.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> i64 {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    /// Id for a request observed at `now_ms`.
    pub fn next_at(&mut self, now_ms: i64) -> i64 {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        id
    }
}
