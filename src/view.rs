//! View model for the record manager's screen: a form bound to the draft and
//! a table of stored records.
//!
//! Hosts that draw their own widgets consume [`PageView`] as JSON. Hosts
//! that embed a webview can use [`PageView::to_html`] instead.

use std::fmt::Write as _;

use serde::Serialize;

use crate::record::RecordField;
use crate::record_manager::RecordManager;

pub const PAGE_TITLE: &str = "CRUD Operations";
pub const ITEMS_HEADING: &str = "Items";
pub const TABLE_HEADERS: [&str; 6] = ["Full Name", "Email", "Phone", "Location", "age", "Actions"];
pub const ROW_ACTIONS: [RowAction; 2] = [RowAction::Edit, RowAction::Delete];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Email,
    Tel,
    Number,
}

impl InputType {
    pub fn for_field(field: RecordField) -> Self {
        match field {
            RecordField::FullName | RecordField::Location => InputType::Text,
            RecordField::Email => InputType::Email,
            RecordField::Phone => InputType::Tel,
            RecordField::Age => InputType::Number,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Number => "number",
        }
    }
}

fn placeholder(field: RecordField) -> &'static str {
    match field {
        RecordField::FullName => "Full Name",
        RecordField::Email => "Email",
        RecordField::Phone => "Phone",
        RecordField::Location => "Location",
        RecordField::Age => "age",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputView {
    pub name: RecordField,
    pub input_type: InputType,
    pub placeholder: &'static str,
    pub value: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub inputs: Vec<InputView>,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// Record id, stable across updates.
    pub key: i64,
    pub cells: Vec<String>,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub title: &'static str,
    pub form: FormView,
    pub items_heading: &'static str,
    pub table: TableView,
}

impl PageView {
    pub fn render(manager: &RecordManager) -> Self {
        let draft = manager.draft();
        let inputs = RecordField::ALL
            .iter()
            .map(|field| InputView {
                name: *field,
                input_type: InputType::for_field(*field),
                placeholder: placeholder(*field),
                value: draft.get(*field).to_string(),
                required: true,
            })
            .collect();

        let rows = manager
            .records()
            .iter()
            .map(|record| RowView {
                key: record.id,
                cells: RecordField::ALL
                    .iter()
                    .map(|field| record.field(*field).to_string())
                    .collect(),
                actions: ROW_ACTIONS.to_vec(),
            })
            .collect();

        Self {
            title: PAGE_TITLE,
            form: FormView {
                inputs,
                submit_label: manager.submit_label(),
            },
            items_heading: ITEMS_HEADING,
            table: TableView {
                headers: TABLE_HEADERS.to_vec(),
                rows,
            },
        }
    }

    /// Renders the page as HTML.
    ///
    /// Action buttons carry `data-action` and `data-id` attributes so the host
    /// can route clicks back to `begin_edit` / `delete_record`.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) -> std::fmt::Result {
        write!(out, "<div><h1>{}</h1><form>", escape_html(self.title))?;
        for input in &self.form.inputs {
            write!(
                out,
                "<input type=\"{}\" name=\"{}\" placeholder=\"{}\" value=\"{}\"{} /><br />",
                input.input_type.as_str(),
                input.name.as_str(),
                escape_html(input.placeholder),
                escape_html(&input.value),
                if input.required { " required" } else { "" },
            )?;
        }
        write!(
            out,
            "<button type=\"submit\">{}</button></form>",
            escape_html(self.form.submit_label)
        )?;

        write!(
            out,
            "<div><h2>{}</h2><table border=\"1\" cellpadding=\"8\" cellspacing=\"0\"><thead><tr>",
            escape_html(self.items_heading)
        )?;
        for header in &self.table.headers {
            write!(out, "<th>{}</th>", escape_html(header))?;
        }
        out.push_str("</tr></thead><tbody>");

        for row in &self.table.rows {
            write!(out, "<tr data-key=\"{}\">", row.key)?;
            for cell in &row.cells {
                write!(out, "<td>{}</td>", escape_html(cell))?;
            }
            out.push_str("<td>");
            for action in &row.actions {
                write!(
                    out,
                    "<button data-action=\"{}\" data-id=\"{}\">{}</button>",
                    action.label().to_lowercase(),
                    row.key,
                    action.label()
                )?;
            }
            out.push_str("</td></tr>");
        }

        out.push_str("</tbody></table></div></div>");
        Ok(())
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
