//! # Contact CRUD Core
//!
//! State core for a contact list screen: an in-memory, ordered list of
//! records (full name, email, phone, location, age), a draft bound to the
//! form inputs, and an add/update editing context. A host UI such as Flutter
//! or a webview drives it through C-compatible functions and renders the form
//! and table from the view model it returns.
//!
//! ## Features
//!
//! - **In-memory only**: state lives as long as the manager handle
//! - **FFI-first**: one `extern "C"` function per user event
//! - **Browser-style validation**: required fields, email format and numeric
//!   age are checked before a submission is applied
//! - **Safe error handling**: no `unwrap()` calls in production code
//!
//! ## Quick Start
//!
//! ```
//! use contact_crud_core::{create_manager, update_draft_field, submit_draft, free_response, destroy_manager};
//! use std::ffi::CString;
//!
//! let manager = create_manager();
//!
//! for (field, value) in [("fullName", "Alice"), ("email", "a@x.com"), ("phone", "123"), ("location", "NYC"), ("age", "30")] {
//!     let field = CString::new(field).unwrap();
//!     let value = CString::new(value).unwrap();
//!     free_response(update_draft_field(manager, field.as_ptr(), value.as_ptr()));
//! }
//!
//! let result = submit_draft(manager);
//! free_response(result);
//! free_response(destroy_manager(manager));
//! ```
//!
//! ## FFI Functions
//!
//! - [`create_manager`] - Create a manager with an empty list and draft
//! - [`update_draft_field`] - Overwrite one draft field
//! - [`submit_draft`] - Validate the draft, then add or update a record
//! - [`begin_edit`] - Load a record into the draft and switch to update mode
//! - [`delete_record`] - Remove a record by id
//! - [`get_all_records`] - All records in display order
//! - [`get_draft`] - Current draft
//! - [`render_view`] - Form and table view model as JSON
//! - [`render_html`] - Form and table as HTML
//! - [`destroy_manager`] - Release the manager
//! - [`free_response`] - Release a string returned by any function above

pub mod app_response;
pub mod draft;
pub mod record;
pub mod record_manager;
pub mod validation;
pub mod view;

use crate::app_response::AppResponse;
use crate::record::RecordField;
use crate::record_manager::{RecordManager, SubmitOutcome};
use crate::view::PageView;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use log::{info, warn};

/// Creates a new manager with an empty record list, an empty draft and no
/// record under edit.
///
/// # Returns
///
/// A pointer to the boxed [`RecordManager`]. The caller owns it and must
/// release it with [`destroy_manager`].
///
/// # Examples
///
/// ```
/// use contact_crud_core::{create_manager, destroy_manager, free_response};
///
/// let manager = create_manager();
/// assert!(!manager.is_null());
/// free_response(destroy_manager(manager));
/// ```
#[no_mangle]
pub extern "C" fn create_manager() -> *mut RecordManager {
    info!("Record manager created");
    Box::into_raw(Box::new(RecordManager::new()))
}

/// Overwrites one field of the draft.
///
/// # Parameters
///
/// * `state` - Pointer to the manager
/// * `field_ptr` - Field name: `fullName`, `email`, `phone`, `location` or `age`
/// * `value_ptr` - New value for the field
///
/// # Returns
///
/// `Ok` with the updated draft as JSON, or `BadRequest` for null pointers,
/// invalid UTF-8 or an unknown field name. No validation happens here.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn update_draft_field(
    state: *mut RecordManager,
    field_ptr: *const c_char,
    value_ptr: *const c_char,
) -> *const c_char {
    let manager = match unsafe { state.as_mut() } {
        Some(m) => m,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to update_draft_field".to_string());
            return response_to_c_string(&error);
        }
    };

    let field_name = match c_ptr_to_string(field_ptr, "field") {
        Ok(name) => name,
        Err(err) => return err,
    };

    let value = match c_ptr_to_string(value_ptr, "value") {
        Ok(value) => value,
        Err(err) => return err,
    };

    let field: RecordField = match field_name.parse() {
        Ok(field) => field,
        Err(e) => {
            warn!("Rejected draft update: {e}");
            return response_to_c_string(&AppResponse::BadRequest(e.to_string()));
        }
    };

    manager.update_draft_field(field, value);
    response_to_c_string(&AppResponse::json(manager.draft()))
}

/// Submits the draft.
///
/// The draft is validated first, the way the browser validates the form:
/// when adding, all five fields are required, `email` must be an email
/// address and `age` a number; when updating, the four fields the update
/// writes are checked. A failing draft is reported as `ValidationError` and
/// the state is left untouched.
///
/// A valid draft is committed: a new record is appended, or the record
/// under edit receives the draft's full name, email, phone and location.
/// The draft is then reset.
///
/// # Returns
///
/// `Ok` with the JSON-serialized [`SubmitOutcome`]: `{"Added":{...}}`,
/// `{"Updated":{...}}`, or `{"Unmatched":id}` when the record under edit has
/// been deleted in the meantime.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn submit_draft(state: *mut RecordManager) -> *const c_char {
    let manager = match unsafe { state.as_mut() } {
        Some(m) => m,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to submit_draft".to_string());
            return response_to_c_string(&error);
        }
    };

    if let Err(issue) = validation::validate_draft(manager.draft(), manager.is_editing()) {
        warn!("Submission blocked: {issue}");
        return response_to_c_string(&AppResponse::from(issue));
    }

    let outcome = manager.submit_draft();
    if let SubmitOutcome::Unmatched(id) = outcome {
        warn!("Record {id} was deleted while being edited; nothing updated");
    }
    response_to_c_string(&AppResponse::json(&outcome))
}

/// Loads the record with `id` into the draft and switches the submit action
/// to "Update".
///
/// The record's age is not copied; the draft's age is left blank.
///
/// # Returns
///
/// `Ok` with the draft as JSON, or `NotFound` if no record has that id.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn begin_edit(state: *mut RecordManager, id: i64) -> *const c_char {
    let manager = match unsafe { state.as_mut() } {
        Some(m) => m,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to begin_edit".to_string());
            return response_to_c_string(&error);
        }
    };

    if manager.begin_edit_by_id(id) {
        response_to_c_string(&AppResponse::json(manager.draft()))
    } else {
        let error = AppResponse::NotFound(format!("No record found with id: {id}"));
        response_to_c_string(&error)
    }
}

/// Deletes the record with `id`.
///
/// A missing id is not an error: the list is left as is and `Ok` is still
/// returned. The editing context is not touched, even when it targets `id`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn delete_record(state: *mut RecordManager, id: i64) -> *const c_char {
    let manager = match unsafe { state.as_mut() } {
        Some(m) => m,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to delete_record".to_string());
            return response_to_c_string(&error);
        }
    };

    let response = match manager.delete_record(id) {
        Some(_) => AppResponse::success("Record deleted successfully"),
        None => AppResponse::success(format!("No record found with id: {id}; nothing deleted")),
    };
    response_to_c_string(&response)
}

/// Returns every record, in display order, as a JSON array.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_all_records(state: *mut RecordManager) -> *const c_char {
    let manager = match unsafe { state.as_ref() } {
        Some(m) => m,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to get_all_records".to_string());
            return response_to_c_string(&error);
        }
    };

    response_to_c_string(&AppResponse::json(manager.records()))
}

/// Returns the current draft as JSON.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_draft(state: *mut RecordManager) -> *const c_char {
    let manager = match unsafe { state.as_ref() } {
        Some(m) => m,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to get_draft".to_string());
            return response_to_c_string(&error);
        }
    };

    response_to_c_string(&AppResponse::json(manager.draft()))
}

/// Returns the [`PageView`] for the current state as JSON.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn render_view(state: *mut RecordManager) -> *const c_char {
    let manager = match unsafe { state.as_ref() } {
        Some(m) => m,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to render_view".to_string());
            return response_to_c_string(&error);
        }
    };

    response_to_c_string(&AppResponse::json(&PageView::render(manager)))
}

/// Returns the page markup for the current state.
///
/// The markup is wrapped in `Ok` like every other response.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn render_html(state: *mut RecordManager) -> *const c_char {
    let manager = match unsafe { state.as_ref() } {
        Some(m) => m,
        None => {
            let error = AppResponse::BadRequest("Null state pointer passed to render_html".to_string());
            return response_to_c_string(&error);
        }
    };

    let html = PageView::render(manager).to_html();
    response_to_c_string(&AppResponse::Ok(html))
}

/// Releases a manager created by [`create_manager`]. All records and the
/// draft are dropped with it.
///
/// # Safety
///
/// `state` must come from [`create_manager`] and must not be used again.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn destroy_manager(state: *mut RecordManager) -> *const c_char {
    if state.is_null() {
        let error = AppResponse::BadRequest("Null state pointer passed to destroy_manager".to_string());
        return response_to_c_string(&error);
    }

    let manager = unsafe { Box::from_raw(state) };
    info!("Record manager destroyed with {} records", manager.len());
    drop(manager);

    response_to_c_string(&AppResponse::success("Record manager destroyed"))
}

/// Releases a string returned by any function of this crate. Null is ignored.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn free_response(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(ptr as *mut c_char));
    }
}

/// Serializes `response` to JSON and hands it out as a C string.
///
/// Returns a null pointer if serialization or C string creation fails.
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Converts a C string pointer to a Rust `String`.
///
/// On a null pointer or invalid UTF-8 the error side carries a ready-made
/// `BadRequest` response naming `field_name`.
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}
