//! Card Search Requests

use super::request_json;
use crate::models::Card;

/// Server-side title search over non-archived cards.
pub async fn search_cards(q: &str) -> Result<Vec<Card>, String> {
    let action = "search cards";
    let params = web_sys::UrlSearchParams::new().map_err(|_| format!("Failed to {action}"))?;
    params.append("q", q);
    let query = String::from(params.to_string());
    request_json("GET", &format!("/search?{query}"), action).await
}
