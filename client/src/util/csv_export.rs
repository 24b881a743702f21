//! CSV export for tabular bot replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! `build_csv` is a pure function so the output is testable byte for byte.
//! `export_csv` adds the browser side effects: a Blob download on success, an
//! alert notice on failure. Both side effects are hydrate-only.
//!
//! FORMAT
//! ======
//! - Header: field names of the first record, in the order they appear in the
//!   response, unquoted.
//! - Cells: always quoted, embedded quotes doubled.
//! - Rows joined with `\n`, no trailing newline.
//! - Prefixed with a UTF-8 BOM so spreadsheet apps detect the encoding.

#[cfg(test)]
#[path = "csv_export_test.rs"]
mod csv_export_test;

use std::fmt;

use serde_json::Value;

pub const DEFAULT_FILENAME: &str = "chatbot_result.csv";
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";
const BOM: char = '\u{FEFF}';

/// Why a payload could not be exported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportError {
    /// Payload absent or zero rows.
    Empty,
    /// First row is not a JSON object.
    NotTabular,
}

impl ExportError {
    /// User-facing notice for this failure.
    pub fn notice(self) -> &'static str {
        match self {
            Self::Empty => "내보낼 데이터가 없습니다.",
            Self::NotTabular => "표 형식의 데이터가 아닙니다.",
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no records to export"),
            Self::NotTabular => f.write_str("records are not objects"),
        }
    }
}

/// Render records as BOM-prefixed CSV text.
///
/// # Errors
///
/// Returns [`ExportError::Empty`] for `None` or an empty slice, and
/// [`ExportError::NotTabular`] when the first element is not an object.
pub fn build_csv(records: Option<&[Value]>) -> Result<String, ExportError> {
    let records = records.filter(|rows| !rows.is_empty()).ok_or(ExportError::Empty)?;
    let first = records[0].as_object().ok_or(ExportError::NotTabular)?;

    // Derived once so every row uses the same column order.
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(headers.join(","));
    for record in records {
        let row = record.as_object();
        let cells: Vec<String> = headers
            .iter()
            .map(|key| quote_cell(&cell_text(row.and_then(|r| r.get(*key)))))
            .collect();
        lines.push(cells.join(","));
    }

    let mut out = String::new();
    out.push(BOM);
    out.push_str(&lines.join("\n"));
    Ok(out)
}

/// Text form of a single value. Missing and `null` become empty cells;
/// nested arrays and objects are written as compact JSON.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn quote_cell(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Build the CSV for `records` and hand it to the browser as a download.
///
/// On failure the user sees a notice and no file is produced.
///
/// # Errors
///
/// Returns the [`ExportError`] that was shown to the user.
pub fn export_csv(records: Option<&[Value]>, filename: &str) -> Result<(), ExportError> {
    let csv = match build_csv(records) {
        Ok(csv) => csv,
        Err(err) => {
            leptos::logging::warn!("csv export rejected: {err}");
            notify(err.notice());
            return Err(err);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = trigger_download(&csv, filename) {
            leptos::logging::warn!("csv download failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (csv, filename);
    }
    Ok(())
}

fn notify(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

#[cfg(feature = "hydrate")]
fn trigger_download(content: &str, filename: &str) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(CSV_MIME);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)
}
