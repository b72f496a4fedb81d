//! Form checks that run before a submission reaches the record manager.
//!
//! These are the checks a browser applies to the original form: every input
//! is required, the email input must hold a well-formed address and the age
//! input must hold a number. Nothing beyond that is sanitized.

use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

use regex::Regex;

use crate::app_response::AppResponse;
use crate::draft::Draft;
use crate::record::RecordField;

/// HTML "valid e-mail address" grammar.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

/// HTML "valid floating-point number" grammar.
const NUMBER_PATTERN: &str = r"^-?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
static NUMBER_RE: OnceLock<Option<Regex>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    Missing,
    InvalidEmail,
    NotANumber,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: RecordField,
    pub kind: ValidationKind,
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ValidationKind::Missing => write!(f, "{} is required", self.field),
            ValidationKind::InvalidEmail => {
                write!(f, "{} must be a valid email address", self.field)
            }
            ValidationKind::NotANumber => write!(f, "{} must be a number", self.field),
        }
    }
}

impl From<ValidationIssue> for AppResponse {
    fn from(issue: ValidationIssue) -> Self {
        AppResponse::ValidationError(issue.to_string())
    }
}

fn matches_pattern(cell: &'static OnceLock<Option<Regex>>, pattern: &str, value: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

pub fn is_valid_email(value: &str) -> bool {
    matches_pattern(&EMAIL_RE, EMAIL_PATTERN, value.trim())
}

pub fn is_valid_number(value: &str) -> bool {
    matches_pattern(&NUMBER_RE, NUMBER_PATTERN, value)
        && value.parse::<f64>().is_ok_and(|n| n.is_finite())
}

/// Checks one field's value the way its input type would.
pub fn validate_field(field: RecordField, value: &str) -> Result<(), ValidationIssue> {
    // Email inputs strip surrounding whitespace before the required check.
    let value = match field {
        RecordField::Email => value.trim(),
        _ => value,
    };

    let kind = if value.is_empty() {
        Some(ValidationKind::Missing)
    } else {
        match field {
            RecordField::Email if !is_valid_email(value) => Some(ValidationKind::InvalidEmail),
            RecordField::Age if !is_valid_number(value) => Some(ValidationKind::NotANumber),
            _ => None,
        }
    };

    match kind {
        Some(kind) => Err(ValidationIssue { field, kind }),
        None => Ok(()),
    }
}

/// Validates the draft for the submission it is about to make.
///
/// An add checks all five fields. An update only writes full name, email,
/// phone and location, so only those are checked; the age input is blank
/// while editing and is not carried into the record.
///
/// The first failing field in form order is reported.
pub fn validate_draft(draft: &Draft, editing: bool) -> Result<(), ValidationIssue> {
    let fields: &[RecordField] = if editing {
        &RecordField::UPDATABLE
    } else {
        &RecordField::ALL
    };

    fields
        .iter()
        .try_for_each(|field| validate_field(*field, draft.get(*field)))
}
