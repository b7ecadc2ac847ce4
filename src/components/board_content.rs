//! Board Content Component
//!
//! Columns with drag-and-drop wiring, the floating drag preview, and the
//! search-filtered column view.

use leptos::prelude::*;
use leptos_kanban_dnd::DndSignals;

use crate::components::{AddColumnPlaceholder, BoardHeader, KanbanColumn, TagBadge};
use crate::filter::filter_columns;
use crate::models::Card;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn BoardContent(#[prop(into)] on_edit_card: Callback<String>) -> impl IntoView {
    let store = use_board_store();
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");

    let (search_results, set_search_results) = signal(None::<Vec<Card>>);

    // Columns restricted to the active search, untouched when none
    let display_columns = move || {
        let columns = store.state.columns().get();
        let results = search_results.get();
        filter_columns(&columns, results.as_deref())
    };

    // Card carried by the floating preview while dragging
    let active_card = move || {
        dnd.dragging_id_read
            .get()
            .and_then(|id| store.find_card(&id))
    };

    view! {
        <BoardHeader set_search_results=set_search_results />

        <div class="board-scroll">
            <div class="board-columns">
                <For
                    each=display_columns
                    key=|col| {
                        // Tuple of all rendered fields so reloads re-render
                        (
                            col.id.clone(),
                            col.name.clone(),
                            col.is_done_column,
                            col.cards
                                .iter()
                                .map(|c| (c.id.clone(), c.position, c.updated_at.clone()))
                                .collect::<Vec<_>>(),
                        )
                    }
                    children=move |column| {
                        view! {
                            <KanbanColumn column=column on_edit_card=on_edit_card />
                        }
                    }
                />
                <AddColumnPlaceholder />
            </div>
        </div>

        // Floating copy following the pointer; discarded on drop no matter
        // where the gesture ends
        {move || active_card().map(|card| {
            let x = dnd.pointer_x_read.get();
            let y = dnd.pointer_y_read.get();
            view! {
                <div
                    class="drag-overlay"
                    style=format!("left: {}px; top: {}px;", x + 8, y + 8)
                >
                    {(!card.tags.is_empty()).then(|| view! {
                        <div class="card-tags">
                            {card.tags.iter().map(|tag| view! {
                                <TagBadge tag=tag.clone() />
                            }).collect_view()}
                        </div>
                    })}
                    <p class="card-title">{card.title.clone()}</p>
                </div>
            }
        })}
    }
}
