//! Add Column Placeholder Component
//!
//! Trailing placeholder on the board for creating a new column.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::store::use_board_store;

#[component]
pub fn AddColumnPlaceholder() -> impl IntoView {
    let store = use_board_store();

    let (adding, set_adding) = signal(false);
    let (name, set_name) = signal(String::new());

    let create_column = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = name.get();
        let trimmed = text.trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        spawn_local(async move {
            if store.add_column(&trimmed).await.is_ok() {
                set_name.set(String::new());
                set_adding.set(false);
            }
        });
    };

    view! {
        <div class="add-column-placeholder">
            <Show when=move || !adding.get()>
                <button class="add-column-btn" on:click=move |_| set_adding.set(true)>
                    "+ Add Column"
                </button>
            </Show>
            <Show when=move || adding.get()>
                <form class="add-column-form" on:submit=create_column>
                    <input
                        type="text"
                        placeholder="Column name..."
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_name.set(input.value());
                        }
                    />
                    <div class="add-column-actions">
                        <button type="submit">"Add"</button>
                        <button
                            type="button"
                            on:click=move |_| {
                                set_name.set(String::new());
                                set_adding.set(false);
                            }
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
