//! Board Header Component
//!
//! Editable board title/subtitle (board settings) and the debounced
//! card search box.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, UpdateBoardSettingsArgs};
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE_MS};
use crate::models::{BoardSettings, Card};

#[component]
pub fn BoardHeader(
    /// Board search results; None clears the active search
    set_search_results: WriteSignal<Option<Vec<Card>>>,
) -> impl IntoView {
    let (settings, set_settings) = signal(None::<BoardSettings>);
    let (editing, set_editing) = signal(false);
    let (title_input, set_title_input) = signal(String::new());
    let (subtitle_input, set_subtitle_input) = signal(String::new());
    let (query, set_query) = signal(String::new());
    let debouncer = Debouncer::new();

    // Load board settings on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(loaded) = api::get_board_settings().await {
                set_settings.set(Some(loaded));
            }
        });
    });

    // Each keystroke issues a fresh token, cancelling the pending query;
    // only a token still live after the quiet period reaches the network.
    let run_search = move |q: String| {
        let token = debouncer.issue();
        let trimmed = q.trim().to_string();
        if trimmed.is_empty() {
            set_search_results.set(None);
            return;
        }
        spawn_local(async move {
            if !token.settle(SEARCH_DEBOUNCE_MS).await {
                return;
            }
            match api::search_cards(&trimmed).await {
                Ok(cards) => set_search_results.set(Some(cards)),
                Err(e) => web_sys::console::error_1(&format!("[SEARCH] {}", e).into()),
            }
        });
    };

    let start_editing = move |_| {
        if let Some(s) = settings.get() {
            set_title_input.set(s.title);
            set_subtitle_input.set(s.subtitle);
            set_editing.set(true);
        }
    };

    let save_settings = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title_input.get();
        if title.trim().is_empty() {
            return;
        }
        let subtitle = subtitle_input.get();
        spawn_local(async move {
            let args = UpdateBoardSettingsArgs {
                title: Some(title.trim()),
                subtitle: Some(subtitle.trim()),
            };
            if let Ok(updated) = api::update_board_settings(&args).await {
                set_settings.set(Some(updated));
                set_editing.set(false);
            }
        });
    };

    view! {
        <div class="board-header">
            {move || if editing.get() {
                view! {
                    <form class="board-settings-form" on:submit=save_settings>
                        <input
                            type="text"
                            class="settings-title-input"
                            prop:value=move || title_input.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title_input.set(input.value());
                            }
                        />
                        <input
                            type="text"
                            class="settings-subtitle-input"
                            prop:value=move || subtitle_input.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_subtitle_input.set(input.value());
                            }
                        />
                        <button type="submit">"Save"</button>
                        <button type="button" on:click=move |_| set_editing.set(false)>
                            "Cancel"
                        </button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <div class="board-titles" on:dblclick=start_editing>
                        <h1 class="board-title">
                            {move || settings.get().map(|s| s.title).unwrap_or_default()}
                        </h1>
                        <p class="board-subtitle">
                            {move || settings.get().map(|s| s.subtitle).unwrap_or_default()}
                        </p>
                    </div>
                }.into_any()
            }}

            <div class="board-search">
                <span class="material-symbols-outlined">"search"</span>
                <input
                    type="text"
                    placeholder="Search tasks..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        let value = input.value();
                        set_query.set(value.clone());
                        run_search(value);
                    }
                />
            </div>
        </div>
    }
}
