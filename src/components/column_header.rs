//! Column Header Component
//!
//! Column name with click-to-rename, done-column toggle, left/right
//! reordering and inline delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::UpdateColumnArgs;
use crate::components::DeleteConfirmButton;
use crate::store::{use_board_store, BoardStateStoreFields};

/// Board column order with `column_id` shifted one slot left or right.
/// None when the column is already at that edge.
fn shifted_order(column_ids: &[String], column_id: &str, delta: i32) -> Option<Vec<String>> {
    let index = column_ids.iter().position(|id| id == column_id)?;
    let target = index as i32 + delta;
    if target < 0 || target as usize >= column_ids.len() {
        return None;
    }
    let mut ids = column_ids.to_vec();
    ids.swap(index, target as usize);
    Some(ids)
}

#[component]
pub fn ColumnHeader(
    column_id: String,
    name: String,
    is_done_column: bool,
    card_count: usize,
) -> impl IntoView {
    let store = use_board_store();

    let (renaming, set_renaming) = signal(false);
    let (name_input, set_name_input) = signal(String::new());

    let busy = move || store.state.busy().get();

    let start_rename = {
        let name = name.clone();
        move |_| {
            set_name_input.set(name.clone());
            set_renaming.set(true);
        }
    };

    let submit_rename = {
        let column_id = column_id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let new_name = name_input.get();
            let trimmed = new_name.trim().to_string();
            set_renaming.set(false);
            // Empty rename is discarded, never sent
            if trimmed.is_empty() {
                return;
            }
            let column_id = column_id.clone();
            spawn_local(async move {
                let args = UpdateColumnArgs {
                    name: Some(&trimmed),
                    ..Default::default()
                };
                let _ = store.edit_column(&column_id, &args).await;
            });
        }
    };

    let toggle_done = {
        let column_id = column_id.clone();
        move |_| {
            let column_id = column_id.clone();
            spawn_local(async move {
                let args = UpdateColumnArgs {
                    is_done_column: Some(!is_done_column),
                    ..Default::default()
                };
                let _ = store.edit_column(&column_id, &args).await;
            });
        }
    };

    let shift = {
        let column_id = column_id.clone();
        move |delta: i32| {
            let ids: Vec<String> = store
                .state
                .columns()
                .get_untracked()
                .iter()
                .map(|c| c.id.clone())
                .collect();
            if let Some(order) = shifted_order(&ids, &column_id, delta) {
                spawn_local(async move {
                    let _ = store.reorder(order).await;
                });
            }
        }
    };
    let shift_left = shift.clone();
    let shift_right = shift;

    let delete_column = {
        let column_id = column_id.clone();
        Callback::new(move |_| {
            let column_id = column_id.clone();
            spawn_local(async move {
                let _ = store.remove_column(&column_id).await;
            });
        })
    };

    view! {
        <div class="column-header">
            {move || if renaming.get() {
                view! {
                    <form class="column-rename-form" on:submit=submit_rename.clone()>
                        <input
                            type="text"
                            prop:value=move || name_input.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_name_input.set(input.value());
                            }
                        />
                    </form>
                }.into_any()
            } else {
                view! {
                    <span class="column-name" on:click=start_rename.clone()>
                        {name.clone()}
                        <span class="card-count">{card_count}</span>
                    </span>
                }.into_any()
            }}

            <div class="column-actions">
                <button
                    class="column-shift-btn"
                    disabled=busy
                    on:click=move |_| shift_left(-1)
                >
                    "◀"
                </button>
                <button
                    class="column-shift-btn"
                    disabled=busy
                    on:click=move |_| shift_right(1)
                >
                    "▶"
                </button>
                <button
                    class=move || if is_done_column { "done-toggle active" } else { "done-toggle" }
                    disabled=busy
                    on:click=toggle_done
                >
                    "✓"
                </button>
                <DeleteConfirmButton
                    button_class="column-delete-btn"
                    on_confirm=delete_column
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn shifts_swap_with_the_neighbor() {
        let order = ids(&["a", "b", "c"]);
        assert_eq!(shifted_order(&order, "b", 1), Some(ids(&["a", "c", "b"])));
        assert_eq!(shifted_order(&order, "b", -1), Some(ids(&["b", "a", "c"])));
    }

    #[test]
    fn shifting_past_an_edge_is_rejected() {
        let order = ids(&["a", "b"]);
        assert_eq!(shifted_order(&order, "a", -1), None);
        assert_eq!(shifted_order(&order, "b", 1), None);
    }

    #[test]
    fn unknown_column_is_rejected() {
        let order = ids(&["a", "b"]);
        assert_eq!(shifted_order(&order, "zz", 1), None);
    }
}
