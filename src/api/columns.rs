//! Column Requests

use serde::Serialize;

use super::{request_empty, request_json, send_json};
use crate::models::Column;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateColumnArgs<'a> {
    name: &'a str,
}

#[derive(Serialize, Default)]
pub struct UpdateColumnArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done_column: Option<bool>,
}

#[derive(Serialize)]
struct ReorderArgs<'a> {
    column_ids: &'a [String],
}

// ========================
// Requests
// ========================

/// Full board: every column with its (position-sorted, non-archived) cards
pub async fn fetch_columns() -> Result<Vec<Column>, String> {
    request_json("GET", "/columns", "fetch columns").await
}

pub async fn create_column(name: &str) -> Result<Column, String> {
    send_json("POST", "/columns", &CreateColumnArgs { name }, "create column").await
}

pub async fn update_column(id: &str, args: &UpdateColumnArgs<'_>) -> Result<Column, String> {
    send_json("PATCH", &format!("/columns/{id}"), args, "update column").await
}

pub async fn delete_column(id: &str) -> Result<(), String> {
    request_empty("DELETE", &format!("/columns/{id}"), "delete column").await
}

/// Sends the complete ordered id list; the service recomputes dense
/// positions and returns the resulting board.
pub async fn reorder_columns(column_ids: &[String]) -> Result<Vec<Column>, String> {
    send_json(
        "PUT",
        "/columns/reorder",
        &ReorderArgs { column_ids },
        "reorder columns",
    )
    .await
}
