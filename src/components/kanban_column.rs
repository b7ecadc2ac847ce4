//! Kanban Column Component
//!
//! One board column: header, card list and inline add form. The card
//! surface registers as a `column-<id>` droppable so cards can be dropped
//! onto the column itself (append), including when it is empty.

use leptos::prelude::*;
use leptos_kanban_dnd::{
    register_droppable, unregister_droppable, DndSignals, DropData, COLUMN_ZONE_PREFIX,
};

use crate::components::{AddCardButton, ColumnHeader, KanbanCard};
use crate::models::Column;

#[component]
pub fn KanbanColumn(column: Column, #[prop(into)] on_edit_card: Callback<String>) -> impl IntoView {
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");

    let zone_id = format!("{}{}", COLUMN_ZONE_PREFIX, column.id);
    let surface_ref = NodeRef::<leptos::html::Div>::new();

    {
        let zone_id = zone_id.clone();
        let column_id = column.id.clone();
        let card_count = column.cards.len();
        Effect::new(move |_| {
            if let Some(el) = surface_ref.get() {
                register_droppable(
                    &dnd,
                    zone_id.clone(),
                    web_sys::Element::from(el),
                    Some(DropData::Column {
                        column_id: column_id.clone(),
                        card_count,
                    }),
                );
            }
        });
    }
    on_cleanup({
        let zone_id = zone_id.clone();
        move || unregister_droppable(&dnd, &zone_id)
    });

    let is_drop_target = {
        let zone_id = zone_id.clone();
        move || dnd.drop_target_read.get().as_deref() == Some(zone_id.as_str())
    };
    let column_class = move || {
        if is_drop_target() {
            "kanban-column drop-target"
        } else {
            "kanban-column"
        }
    };

    let column_id = column.id.clone();
    let is_done = column.is_done_column;

    view! {
        <div class=column_class>
            <ColumnHeader
                column_id=column.id.clone()
                name=column.name.clone()
                is_done_column=column.is_done_column
                card_count=column.cards.len()
            />
            <div class="column-cards" node_ref=surface_ref>
                {column
                    .cards
                    .iter()
                    .map(|card| {
                        view! {
                            <KanbanCard
                                card=card.clone()
                                column_id=column_id.clone()
                                is_done_column=is_done
                                on_edit=on_edit_card
                            />
                        }
                    })
                    .collect_view()}
                <AddCardButton column_id=column.id.clone() />
            </div>
        </div>
    }
}
