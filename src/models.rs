//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Tag data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    /// Named palette key, used when no explicit color pair is set
    pub color: String,
    pub bg_color: Option<String>,
    pub fg_color: Option<String>,
    pub created_at: String,
}

/// Card data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    /// None while the card is archived
    pub column_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub position: i32,
    pub is_archived: bool,
    pub archived_at: Option<String>,
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Column data structure (matches backend)
/// Cards arrive position-sorted with archived cards already excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub name: String,
    pub position: i32,
    pub is_done_column: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// One page of archived cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivePage {
    pub items: Vec<Card>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
}

/// Board settings singleton (editable title/subtitle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSettings {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub created_at: String,
    pub updated_at: String,
}
