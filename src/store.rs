//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! only owner of the board's column/card collection; presentation components
//! read it and dispatch intents through the mutation methods below, never
//! mutating fields directly.

use leptos::prelude::*;
use leptos_kanban_dnd::MoveIntent;
use reactive_stores::Store;

use crate::api::{self, CreateCardArgs, CreateTagArgs, UpdateCardArgs, UpdateColumnArgs};
use crate::models::{Card, Column, Tag};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Columns in board order, each holding its position-sorted cards
    pub columns: Vec<Column>,
    /// All tags, for badges and the card editor
    pub tags: Vec<Tag>,
    /// Board fetch in flight
    pub loading: bool,
    /// A mutation (request + reload) is in flight; mutation affordances
    /// are disabled while set
    pub busy: bool,
    /// Last failed operation, shown in the error banner
    pub error: Option<String>,
}

/// Command handle around the store: every board mutation goes through these
/// methods, which sync with the gateway and re-fetch the board.
///
/// There is no request queue or cancellation. Two mutations overlapping on
/// the same state are last-write-wins on whichever reload resolves last;
/// the `busy` flag keeps the UI from issuing that second mutation.
#[derive(Clone, Copy)]
pub struct BoardStore {
    pub state: Store<BoardState>,
}

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

impl BoardStore {
    pub fn new() -> Self {
        Self {
            state: Store::new(BoardState {
                loading: true,
                ..Default::default()
            }),
        }
    }

    fn report(self, error: &str) {
        web_sys::console::error_1(&format!("[BOARD] {}", error).into());
        self.state.error().set(Some(error.to_string()));
    }

    pub fn clear_error(self) {
        self.state.error().set(None);
    }

    /// Discard local columns and re-fetch the full board.
    pub async fn load(self) {
        self.state.loading().set(true);
        match api::fetch_columns().await {
            Ok(columns) => *self.state.columns().write() = columns,
            Err(e) => self.report(&e),
        }
        self.state.loading().set(false);
    }

    /// Reload on success, surface the failure otherwise. Failed mutations
    /// leave the previous board state visible.
    async fn finish(self, result: Result<(), String>) -> Result<(), String> {
        match result {
            Ok(()) => {
                self.load().await;
                Ok(())
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    /// Creates a column at the end of the board ordering. Callers trim and
    /// discard empty names before calling.
    pub async fn add_column(self, name: &str) -> Result<(), String> {
        self.state.busy().set(true);
        let res = self.finish(api::create_column(name).await.map(|_| ())).await;
        self.state.busy().set(false);
        res
    }

    pub async fn edit_column(self, id: &str, args: &UpdateColumnArgs<'_>) -> Result<(), String> {
        self.state.busy().set(true);
        let res = self.finish(api::update_column(id, args).await.map(|_| ())).await;
        self.state.busy().set(false);
        res
    }

    /// Deletes a column. What happens to its cards is the server's contract
    /// (the service archives them); the reload picks up the result.
    pub async fn remove_column(self, id: &str) -> Result<(), String> {
        self.state.busy().set(true);
        let res = self.finish(api::delete_column(id).await).await;
        self.state.busy().set(false);
        res
    }

    /// Sends the full ordered column id list. The server recomputes dense
    /// positions and its response replaces local columns directly; this is
    /// the one mutation that skips the follow-up reload.
    pub async fn reorder(self, column_ids: Vec<String>) -> Result<(), String> {
        self.state.busy().set(true);
        let res = match api::reorder_columns(&column_ids).await {
            Ok(columns) => {
                *self.state.columns().write() = columns;
                Ok(())
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        };
        self.state.busy().set(false);
        res
    }

    /// Appends a new card to the end of the named column.
    pub async fn add_card(self, column_id: &str, args: &CreateCardArgs<'_>) -> Result<(), String> {
        self.state.busy().set(true);
        let res = self
            .finish(api::create_card(column_id, args).await.map(|_| ()))
            .await;
        self.state.busy().set(false);
        res
    }

    pub async fn edit_card(self, id: &str, args: &UpdateCardArgs<'_>) -> Result<(), String> {
        self.state.busy().set(true);
        let res = self.finish(api::update_card(id, args).await.map(|_| ())).await;
        self.state.busy().set(false);
        res
    }

    pub async fn remove_card(self, id: &str) -> Result<(), String> {
        self.state.busy().set(true);
        let res = self.finish(api::delete_card(id).await).await;
        self.state.busy().set(false);
        res
    }

    /// Removes the card from board ordering and marks it archived.
    pub async fn archive_card_by_id(self, id: &str) -> Result<(), String> {
        self.state.busy().set(true);
        let res = self.finish(api::archive_card(id).await.map(|_| ())).await;
        self.state.busy().set(false);
        res
    }

    pub async fn move_card_to(self, intent: MoveIntent) -> Result<(), String> {
        self.state.busy().set(true);
        let res = self
            .finish(
                api::move_card(&intent.card_id, &intent.target_column_id, intent.position)
                    .await
                    .map(|_| ()),
            )
            .await;
        self.state.busy().set(false);
        res
    }

    pub async fn load_tags(self) {
        match api::fetch_tags().await {
            Ok(tags) => *self.state.tags().write() = tags,
            Err(e) => self.report(&e),
        }
    }

    pub async fn create_tag(self, args: &CreateTagArgs<'_>) -> Result<Tag, String> {
        match api::create_tag(args).await {
            Ok(tag) => {
                self.load_tags().await;
                Ok(tag)
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    pub async fn remove_tag(self, id: &str) -> Result<(), String> {
        match api::delete_tag(id).await {
            Ok(()) => {
                self.load_tags().await;
                Ok(())
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    /// Current card count of a column, for append-position drops
    pub fn column_card_count(self, column_id: &str) -> Option<usize> {
        self.state
            .columns()
            .get_untracked()
            .iter()
            .find(|c| c.id == column_id)
            .map(|c| c.cards.len())
    }

    pub fn find_card(self, card_id: &str) -> Option<Card> {
        find_card_in(&self.state.columns().get_untracked(), card_id)
    }
}

/// Look a card up across all columns.
pub fn find_card_in(columns: &[Column], card_id: &str) -> Option<Card> {
    columns
        .iter()
        .flat_map(|c| c.cards.iter())
        .find(|c| c.id == card_id)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::{make_card, make_column};

    #[test]
    fn find_card_searches_every_column() {
        let columns = vec![
            make_column("a", vec![make_card("c1", 0)]),
            make_column("b", vec![make_card("c2", 0), make_card("c3", 1)]),
        ];
        assert_eq!(find_card_in(&columns, "c3").unwrap().id, "c3");
        assert!(find_card_in(&columns, "missing").is_none());
    }
}
