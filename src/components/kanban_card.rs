//! Kanban Card Component
//!
//! A draggable card: image, tags, title, due/created date chip and the
//! hover archive action. Also registers itself as a droppable so other
//! cards can be dropped onto it (insert before).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_kanban_dnd::{
    make_on_mousedown, register_droppable, unregister_droppable, DndSignals, DropData,
};

use crate::components::TagBadge;
use crate::dates;
use crate::models::Card;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn KanbanCard(
    card: Card,
    column_id: String,
    is_done_column: bool,
    #[prop(into)] on_edit: Callback<String>,
) -> impl IntoView {
    let store = use_board_store();
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");

    let id = card.id.clone();
    let node_ref = NodeRef::<leptos::html::Div>::new();

    {
        let id = id.clone();
        let column_id = column_id.clone();
        let position = card.position;
        Effect::new(move |_| {
            if let Some(el) = node_ref.get() {
                register_droppable(
                    &dnd,
                    id.clone(),
                    web_sys::Element::from(el),
                    Some(DropData::Card {
                        card_id: id.clone(),
                        column_id: column_id.clone(),
                        position,
                    }),
                );
            }
        });
    }
    on_cleanup({
        let id = id.clone();
        move || unregister_droppable(&dnd, &id)
    });

    let on_mousedown = make_on_mousedown(dnd, id.clone());

    let is_dragging = {
        let id = id.clone();
        move || dnd.dragging_id_read.get().as_deref() == Some(id.as_str())
    };
    let is_drop_target = {
        let id = id.clone();
        move || dnd.drop_target_read.get().as_deref() == Some(id.as_str())
    };

    let card_class = move || {
        let mut c = String::from("kanban-card");
        if is_done_column {
            c.push_str(" done");
        }
        // The original stays in place but visually suppressed while its
        // floating copy follows the pointer
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    let open_editor = {
        let id = id.clone();
        move |_| {
            // A drop should not double as a click on the card under it
            if dnd.drag_just_ended_read.get_untracked() {
                return;
            }
            on_edit.run(id.clone());
        }
    };

    let archive = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            let id = id.clone();
            spawn_local(async move {
                let _ = store.archive_card_by_id(&id).await;
            });
        }
    };

    let date_chip = if is_done_column {
        view! {
            <div class="date-chip completed">
                <span class="material-symbols-outlined">"check_circle"</span>
                <p>"Completed"</p>
            </div>
        }
        .into_any()
    } else if let Some(due) = card.due_date.clone() {
        match dates::days_until(&due) {
            Some(days) => {
                let status = dates::classify_due(days);
                let label = match status {
                    dates::DueStatus::Overdue => format!("Overdue: {}", dates::format_short_date(&due)),
                    dates::DueStatus::Soon => format!("Due: {}", dates::format_short_date(&due)),
                    dates::DueStatus::Upcoming => dates::format_short_date(&due),
                };
                view! {
                    <div class=dates::due_class(status)>
                        <span class="material-symbols-outlined">{dates::due_icon(status)}</span>
                        <p>{label}</p>
                    </div>
                }
                .into_any()
            }
            None => view! { <div class="date-chip"></div> }.into_any(),
        }
    } else {
        view! {
            <div class="date-chip created">
                <span class="material-symbols-outlined">"calendar_today"</span>
                <p>{dates::format_short_date(&card.created_at)}</p>
            </div>
        }
        .into_any()
    };

    view! {
        <div
            class=card_class
            node_ref=node_ref
            on:mousedown=on_mousedown
            on:click=open_editor
        >
            {card.image_url.clone().map(|url| view! {
                <div
                    class="card-image"
                    style=format!("background-image: url(\"{}\");", url)
                ></div>
            })}
            <div class="card-body">
                {(!card.tags.is_empty()).then(|| view! {
                    <div class="card-tags">
                        {card.tags.iter().map(|tag| view! {
                            <TagBadge tag=tag.clone() />
                        }).collect_view()}
                    </div>
                })}
                <p class="card-title">{card.title.clone()}</p>
                <div class="card-footer">
                    {date_chip}
                    <button
                        class="archive-btn"
                        disabled=move || store.state.busy().get()
                        on:click=archive
                    >
                        "Archive"
                    </button>
                </div>
            </div>
        </div>
    }
}
