//! Tag Create Dialog Component
//!
//! Creates a tag with an explicit bg/fg color pair and a live preview.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn TagCreateDialog(
    /// (name, bg_color, fg_color)
    #[prop(into)]
    on_save: Callback<(String, String, String)>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (bg_color, set_bg_color) = signal("#93c5fd".to_string());
    let (fg_color, set_fg_color) = signal("#1e3a8a".to_string());

    let save = move |_| {
        let value = name.get();
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        on_save.run((trimmed, bg_color.get(), fg_color.get()));
    };

    let input_value = |ev: &web_sys::Event| -> String {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        input.value()
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal tag-create-dialog">
                <div class="modal-header">
                    <h3 class="modal-title">"Create New Tag"</h3>
                    <button class="close-btn" on:click=move |_| on_close.run(())>
                        <span class="material-symbols-outlined">"close"</span>
                    </button>
                </div>

                <div class="modal-fields">
                    <label>
                        "Tag Name"
                        <input
                            type="text"
                            placeholder="e.g., High Priority, Bug Fix..."
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(input_value(&ev))
                        />
                    </label>

                    <div class="color-row">
                        <label>
                            "Background"
                            <input
                                type="color"
                                prop:value=move || bg_color.get()
                                on:input=move |ev| set_bg_color.set(input_value(&ev))
                            />
                        </label>
                        <label>
                            "Text"
                            <input
                                type="color"
                                prop:value=move || fg_color.get()
                                on:input=move |ev| set_fg_color.set(input_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="tag-preview">
                        <span
                            class="tag-badge"
                            style=move || format!(
                                "background-color: {}; color: {};",
                                bg_color.get(),
                                fg_color.get(),
                            )
                        >
                            {move || {
                                let value = name.get();
                                if value.trim().is_empty() {
                                    "TAG PREVIEW".to_string()
                                } else {
                                    value
                                }
                            }}
                        </span>
                    </div>
                </div>

                <div class="modal-actions">
                    <button class="btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn-primary" on:click=save>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
