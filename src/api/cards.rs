//! Card Requests

use serde::Serialize;

use super::{request_empty, request_json, send_json};
use crate::models::Card;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateCardArgs<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<&'a [String]>,
}

/// Partial update; unset fields are omitted so the server leaves them alone.
/// The tag set is replaced wholesale when present, never diffed.
#[derive(Serialize, Default)]
pub struct UpdateCardArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<&'a [String]>,
}

#[derive(Serialize)]
struct MoveCardArgs<'a> {
    card_id: &'a str,
    target_column_id: &'a str,
    position: i32,
}

// ========================
// Requests
// ========================

/// Appends a new card to the end of the named column.
pub async fn create_card(column_id: &str, args: &CreateCardArgs<'_>) -> Result<Card, String> {
    send_json(
        "POST",
        &format!("/columns/{column_id}/cards"),
        args,
        "create card",
    )
    .await
}

pub async fn update_card(id: &str, args: &UpdateCardArgs<'_>) -> Result<Card, String> {
    send_json("PATCH", &format!("/cards/{id}"), args, "update card").await
}

pub async fn delete_card(id: &str) -> Result<(), String> {
    request_empty("DELETE", &format!("/cards/{id}"), "delete card").await
}

pub async fn move_card(
    card_id: &str,
    target_column_id: &str,
    position: i32,
) -> Result<Card, String> {
    send_json(
        "PUT",
        "/cards/move",
        &MoveCardArgs {
            card_id,
            target_column_id,
            position,
        },
        "move card",
    )
    .await
}

pub async fn archive_card(id: &str) -> Result<Card, String> {
    request_json("POST", &format!("/cards/{id}/archive"), "archive card").await
}

/// Restores an archived card; the server reinserts it at the end of its
/// original column, falling back to the first column when that one is gone.
pub async fn restore_card(id: &str) -> Result<Card, String> {
    request_json("POST", &format!("/cards/{id}/restore"), "restore card").await
}
