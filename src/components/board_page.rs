//! Board Page Component
//!
//! Loading gate around the board, plus the card edit modal and the
//! delete-card confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{BoardContent, CardEditModal, ConfirmDialog};
use crate::models::Card;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn BoardPage() -> impl IntoView {
    let store = use_board_store();

    let (editing_card, set_editing_card) = signal(None::<Card>);
    let (confirm_delete, set_confirm_delete) = signal(None::<String>);

    let on_edit_card = Callback::new(move |card_id: String| {
        if let Some(card) = store.find_card(&card_id) {
            set_editing_card.set(Some(card));
        }
    });

    let on_delete_card = Callback::new(move |card_id: String| {
        set_confirm_delete.set(Some(card_id));
        set_editing_card.set(None);
    });

    let confirm_delete_open = Signal::derive(move || confirm_delete.get().is_some());

    view! {
        <Show
            when=move || !store.state.loading().get()
            fallback=|| view! {
                <div class="board-loading">
                    <p>"Loading..."</p>
                </div>
            }
        >
            <BoardContent on_edit_card=on_edit_card />
        </Show>

        {move || editing_card.get().map(|card| view! {
            <CardEditModal
                card=card
                on_close=Callback::new(move |_| set_editing_card.set(None))
                on_delete=on_delete_card
            />
        })}

        <ConfirmDialog
            open=confirm_delete_open
            title="Delete Card"
            message="This will permanently delete this card. This action cannot be undone."
            confirm_label="Delete"
            on_confirm=Callback::new(move |_| {
                if let Some(card_id) = confirm_delete.get_untracked() {
                    spawn_local(async move {
                        let _ = store.remove_card(&card_id).await;
                    });
                }
                set_confirm_delete.set(None);
            })
            on_cancel=Callback::new(move |_| set_confirm_delete.set(None))
        />
    }
}
