//! Card Edit Modal Component
//!
//! Edits a card's title, description and tag set. The tag set is replaced
//! wholesale on save. New tags with custom colors can be created inline.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{CreateTagArgs, UpdateCardArgs};
use crate::components::{TagBadge, TagCreateDialog};
use crate::models::Card;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn CardEditModal(
    card: Card,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let store = use_board_store();

    let card_id = card.id.clone();
    let (title, set_title) = signal(card.title.clone());
    let (description, set_description) = signal(card.description.clone().unwrap_or_default());
    let (selected_tag_ids, set_selected_tag_ids) =
        signal(card.tags.iter().map(|t| t.id.clone()).collect::<Vec<String>>());
    let (show_tag_dialog, set_show_tag_dialog) = signal(false);

    let toggle_tag = move |tag_id: String| {
        set_selected_tag_ids.update(|ids| {
            if ids.contains(&tag_id) {
                ids.retain(|id| id != &tag_id);
            } else {
                ids.push(tag_id);
            }
        });
    };

    let save = {
        let card_id = card_id.clone();
        move |_| {
            let text = title.get();
            let trimmed = text.trim().to_string();
            if trimmed.is_empty() {
                return;
            }
            let card_id = card_id.clone();
            let description = description.get();
            let tag_ids = selected_tag_ids.get();
            spawn_local(async move {
                let args = UpdateCardArgs {
                    title: Some(&trimmed),
                    description: Some(&description),
                    tag_ids: Some(&tag_ids),
                    ..Default::default()
                };
                if store.edit_card(&card_id, &args).await.is_ok() {
                    on_close.run(());
                }
            });
        }
    };

    // Creating a tag from the dialog selects it right away
    let create_tag = Callback::new(move |(name, bg, fg): (String, String, String)| {
        spawn_local(async move {
            let args = CreateTagArgs {
                name: &name,
                bg_color: Some(&bg),
                fg_color: Some(&fg),
                ..Default::default()
            };
            if let Ok(tag) = store.create_tag(&args).await {
                set_selected_tag_ids.update(|ids| ids.push(tag.id));
                set_show_tag_dialog.set(false);
            }
        });
    });

    let delete = {
        let card_id = card_id.clone();
        move |_| on_delete.run(card_id.clone())
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal card-edit-modal">
                <div class="modal-header">
                    <h3 class="modal-title">"Edit Card"</h3>
                    <button class="close-btn" on:click=move |_| on_close.run(())>
                        <span class="material-symbols-outlined">"close"</span>
                    </button>
                </div>

                <div class="modal-fields">
                    <label>
                        "Title"
                        <input
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                        />
                    </label>

                    <label>
                        "Description"
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_description.set(input.value());
                            }
                        ></textarea>
                    </label>

                    <div class="tag-picker">
                        <span class="field-label">"Tags"</span>
                        <div class="tag-picker-row">
                            <For
                                each=move || store.state.tags().get()
                                key=|tag| tag.id.clone()
                                children=move |tag| {
                                    let tag_id = tag.id.clone();
                                    let selected = {
                                        let tag_id = tag_id.clone();
                                        move || selected_tag_ids.get().contains(&tag_id)
                                    };
                                    view! {
                                        <button
                                            class=move || if selected() { "tag-toggle selected" } else { "tag-toggle" }
                                            on:click=move |_| toggle_tag(tag_id.clone())
                                        >
                                            <TagBadge tag=tag.clone() />
                                        </button>
                                    }
                                }
                            />
                            <button
                                class="new-tag-btn"
                                on:click=move |_| set_show_tag_dialog.set(true)
                            >
                                <span class="material-symbols-outlined">"add"</span>
                                "NEW TAG"
                            </button>
                        </div>
                    </div>
                </div>

                <div class="modal-actions spread">
                    <button class="btn-danger-ghost" on:click=delete>
                        "Delete Card"
                    </button>
                    <div class="modal-actions">
                        <button class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="btn-primary"
                            disabled=move || store.state.busy().get()
                            on:click=save
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || show_tag_dialog.get()>
                <TagCreateDialog
                    on_save=create_tag
                    on_close=Callback::new(move |_| set_show_tag_dialog.set(false))
                />
            </Show>
        </div>
    }
}
