//! Add Card Button Component
//!
//! Inline form at the bottom of a column for creating a card.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::CreateCardArgs;
use crate::store::use_board_store;

#[component]
pub fn AddCardButton(column_id: String) -> impl IntoView {
    let store = use_board_store();

    let (adding, set_adding) = signal(false);
    let (title, set_title) = signal(String::new());

    let create_card = {
        let column_id = column_id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let text = title.get();
            let trimmed = text.trim().to_string();
            // Whitespace-only input is discarded, never sent
            if trimmed.is_empty() {
                return;
            }
            let column_id = column_id.clone();
            spawn_local(async move {
                let args = CreateCardArgs {
                    title: &trimmed,
                    description: None,
                    tag_ids: None,
                };
                if store.add_card(&column_id, &args).await.is_ok() {
                    set_title.set(String::new());
                    set_adding.set(false);
                }
            });
        }
    };

    view! {
        <Show when=move || !adding.get()>
            <button class="add-card-btn" on:click=move |_| set_adding.set(true)>
                "+ Add Card"
            </button>
        </Show>
        <Show when=move || adding.get()>
            <form class="add-card-form" on:submit=create_card.clone()>
                <input
                    type="text"
                    placeholder="Card title..."
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
                <div class="add-card-actions">
                    <button type="submit">"Add"</button>
                    <button
                        type="button"
                        on:click=move |_| {
                            set_title.set(String::new());
                            set_adding.set(false);
                        }
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}
