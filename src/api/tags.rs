//! Tag Requests

use serde::Serialize;

use super::{request_empty, request_json, send_json};
use crate::models::Tag;

/// Tag creation accepts either a named palette key or an explicit
/// bg/fg color pair; unset fields are omitted.
#[derive(Serialize, Default)]
pub struct CreateTagArgs<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg_color: Option<&'a str>,
}

pub async fn fetch_tags() -> Result<Vec<Tag>, String> {
    request_json("GET", "/tags", "fetch tags").await
}

pub async fn create_tag(args: &CreateTagArgs<'_>) -> Result<Tag, String> {
    send_json("POST", "/tags", args, "create tag").await
}

pub async fn delete_tag(id: &str) -> Result<(), String> {
    request_empty("DELETE", &format!("/tags/{id}"), "delete tag").await
}
