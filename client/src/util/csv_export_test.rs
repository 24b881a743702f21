use serde_json::json;

use super::*;

fn body_of(csv: &str) -> &str {
    csv.strip_prefix('\u{FEFF}').expect("missing BOM")
}

#[test]
fn build_csv_rejects_missing_payload() {
    assert_eq!(build_csv(None), Err(ExportError::Empty));
}

#[test]
fn build_csv_rejects_empty_payload() {
    assert_eq!(build_csv(Some(Vec::<Value>::new().as_slice())), Err(ExportError::Empty));
}

#[test]
fn build_csv_rejects_non_object_rows() {
    let rows = vec![json!(42), json!("x")];
    assert_eq!(build_csv(Some(rows.as_slice())), Err(ExportError::NotTabular));
}

#[test]
fn build_csv_rejects_null_first_row() {
    let rows = vec![json!(null), json!({ "a": 1 })];
    assert_eq!(build_csv(Some(rows.as_slice())), Err(ExportError::NotTabular));
}

#[test]
fn build_csv_quotes_cells_and_doubles_quotes() {
    let rows = vec![json!({ "a": 1, "b": "x,y" }), json!({ "a": 2, "b": "He said \"hi\"" })];
    let csv = build_csv(Some(rows.as_slice())).unwrap();
    assert!(csv.starts_with('\u{FEFF}'));
    assert_eq!(body_of(&csv), "a,b\n\"1\",\"x,y\"\n\"2\",\"He said \"\"hi\"\"\"");
}

#[test]
fn build_csv_header_follows_first_record_order() {
    let rows = vec![json!({ "zeta": 1, "alpha": 2 }), json!({ "alpha": 3, "zeta": 4 })];
    let csv = build_csv(Some(rows.as_slice())).unwrap();
    assert_eq!(body_of(&csv), "zeta,alpha\n\"1\",\"2\"\n\"4\",\"3\"");
}

#[test]
fn build_csv_missing_and_null_fields_are_empty_cells() {
    let rows = vec![json!({ "a": 1, "b": null }), json!({ "a": 2 })];
    let csv = build_csv(Some(rows.as_slice())).unwrap();
    assert_eq!(body_of(&csv), "a,b\n\"1\",\"\"\n\"2\",\"\"");
}

#[test]
fn build_csv_ignores_fields_absent_from_first_record() {
    let rows = vec![json!({ "a": 1 }), json!({ "a": 2, "extra": "x" })];
    let csv = build_csv(Some(rows.as_slice())).unwrap();
    assert_eq!(body_of(&csv), "a\n\"1\"\n\"2\"");
}

#[test]
fn build_csv_non_object_later_row_yields_empty_cells() {
    let rows = vec![json!({ "a": 1, "b": 2 }), json!(7)];
    let csv = build_csv(Some(rows.as_slice())).unwrap();
    assert_eq!(body_of(&csv), "a,b\n\"1\",\"2\"\n\"\",\"\"");
}

#[test]
fn build_csv_keeps_unicode_and_newlines_inside_quotes() {
    let rows = vec![json!({ "동정균주명": "E. coli\nESBL", "판정": "R" })];
    let csv = build_csv(Some(rows.as_slice())).unwrap();
    assert_eq!(body_of(&csv), "동정균주명,판정\n\"E. coli\nESBL\",\"R\"");
}

#[test]
fn build_csv_is_deterministic() {
    let rows = vec![json!({ "a": 1.5, "b": true }), json!({ "a": [1, 2], "b": { "k": "v" } })];
    let first = build_csv(Some(rows.as_slice())).unwrap();
    let second = build_csv(Some(rows.as_slice())).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn cell_text_stringifies_scalars_and_nested_values() {
    assert_eq!(cell_text(None), "");
    assert_eq!(cell_text(Some(&json!(null))), "");
    assert_eq!(cell_text(Some(&json!("plain"))), "plain");
    assert_eq!(cell_text(Some(&json!(12))), "12");
    assert_eq!(cell_text(Some(&json!(false))), "false");
    assert_eq!(cell_text(Some(&json!([1, "a"]))), "[1,\"a\"]");
    assert_eq!(cell_text(Some(&json!({ "k": 1 }))), "{\"k\":1}");
}

#[test]
fn export_error_notices_are_distinct() {
    assert_ne!(ExportError::Empty.notice(), ExportError::NotTabular.notice());
}

#[test]
fn export_csv_reports_precondition_failures() {
    assert_eq!(export_csv(None, DEFAULT_FILENAME), Err(ExportError::Empty));
    let rows = vec![json!("x")];
    assert_eq!(export_csv(Some(rows.as_slice()), DEFAULT_FILENAME), Err(ExportError::NotTabular));
}

#[test]
fn export_csv_accepts_tabular_payload() {
    let rows = vec![json!({ "id": 1 })];
    assert_eq!(export_csv(Some(rows.as_slice()), DEFAULT_FILENAME), Ok(()));
}
