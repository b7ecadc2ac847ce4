//! Board Settings Requests

use serde::Serialize;

use super::{request_json, send_json};
use crate::models::BoardSettings;

#[derive(Serialize, Default)]
pub struct UpdateBoardSettingsArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'a str>,
}

pub async fn get_board_settings() -> Result<BoardSettings, String> {
    request_json("GET", "/board-settings", "fetch board settings").await
}

pub async fn update_board_settings(
    args: &UpdateBoardSettingsArgs<'_>,
) -> Result<BoardSettings, String> {
    send_json("PATCH", "/board-settings", args, "update board settings").await
}
