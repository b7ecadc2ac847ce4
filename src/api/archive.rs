//! Archive Requests

use super::{request_empty, request_json};
use crate::models::{ArchivePage, Card};

/// Archived cards, most recently archived first.
///
/// With `recent_limit` set the service ignores pagination and returns only
/// the N most recent items; `total` still counts the whole (filtered) set.
pub async fn fetch_archive(
    page: u32,
    q: Option<&str>,
    recent_limit: Option<u32>,
) -> Result<ArchivePage, String> {
    let action = "fetch archive";
    let params = web_sys::UrlSearchParams::new().map_err(|_| format!("Failed to {action}"))?;
    params.append("page", &page.to_string());
    if let Some(q) = q {
        if !q.is_empty() {
            params.append("q", q);
        }
    }
    if let Some(limit) = recent_limit {
        params.append("recent_limit", &limit.to_string());
    }
    let query = String::from(params.to_string());
    request_json("GET", &format!("/archive?{query}"), action).await
}

/// Restores every archived card in one server-side operation.
pub async fn restore_all() -> Result<Vec<Card>, String> {
    request_json("POST", "/archive/restore-all", "restore all cards").await
}

/// Permanently deletes every archived card.
pub async fn clear_archive() -> Result<(), String> {
    request_empty("POST", "/archive/clear", "clear archive").await
}
