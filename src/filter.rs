//! Search Filtering
//!
//! Helpers for restricting the board view to server search results.

use crate::models::{Card, Column};

/// Restrict each column's cards to the ones present in the search results.
/// `None` means no active search: columns pass through untouched.
pub fn filter_columns(columns: &[Column], results: Option<&[Card]>) -> Vec<Column> {
    match results {
        None => columns.to_vec(),
        Some(results) => columns
            .iter()
            .map(|col| {
                let mut col = col.clone();
                col.cards.retain(|c| results.iter().any(|r| r.id == c.id));
                col
            })
            .collect(),
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub fn make_card(id: &str, position: i32) -> Card {
        Card {
            id: id.to_string(),
            column_id: Some("col".to_string()),
            title: format!("Card {}", id),
            description: None,
            image_url: None,
            position,
            is_archived: false,
            archived_at: None,
            due_date: None,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
            tags: vec![],
        }
    }

    pub fn make_column(id: &str, cards: Vec<Card>) -> Column {
        Column {
            id: id.to_string(),
            name: format!("Column {}", id),
            position: 0,
            is_done_column: false,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
            cards,
        }
    }

    #[test]
    fn no_active_search_passes_columns_through() {
        let columns = vec![make_column("a", vec![make_card("c1", 0), make_card("c2", 1)])];
        let shown = filter_columns(&columns, None);
        assert_eq!(shown, columns);
    }

    #[test]
    fn active_search_keeps_only_the_intersection() {
        let columns = vec![
            make_column("a", vec![make_card("c1", 0), make_card("c2", 1)]),
            make_column("b", vec![make_card("c3", 0)]),
        ];
        let results = vec![make_card("c2", 1), make_card("c3", 0)];
        let shown = filter_columns(&columns, Some(&results));
        assert_eq!(shown[0].cards.len(), 1);
        assert_eq!(shown[0].cards[0].id, "c2");
        assert_eq!(shown[1].cards.len(), 1);
    }

    #[test]
    fn result_for_a_card_no_longer_on_the_board_shows_nothing() {
        // e.g. the card was archived between search and reload
        let columns = vec![make_column("a", vec![make_card("c1", 0)])];
        let results = vec![make_card("gone", 0)];
        let shown = filter_columns(&columns, Some(&results));
        assert!(shown[0].cards.is_empty());
    }

    #[test]
    fn empty_results_empty_every_column() {
        let columns = vec![
            make_column("a", vec![make_card("c1", 0)]),
            make_column("b", vec![make_card("c2", 0)]),
        ];
        let shown = filter_columns(&columns, Some(&[]));
        assert!(shown.iter().all(|c| c.cards.is_empty()));
    }
}
