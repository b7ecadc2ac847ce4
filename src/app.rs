//! TaskFlow Frontend App
//!
//! Main application component: sidebar plus the active page, with the
//! board store, app context and drag-and-drop machinery provided once for
//! the whole tree.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_kanban_dnd::{bind_global_mouseup, create_dnd_signals, resolve_drop};

use crate::components::{ArchivePage, BoardPage, Sidebar};
use crate::context::{AppContext, Page};
use crate::store::{BoardStateStoreFields, BoardStore};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Board);
    provide_context(AppContext::new((page, set_page)));

    let store = BoardStore::new();
    provide_context(store);

    // Load board and tags on mount
    Effect::new(move |_| {
        spawn_local(async move {
            store.load().await;
            store.load_tags().await;
        });
    });

    // One global drop handler for the whole app: each completed gesture
    // resolves to at most one move call. Bound here because the board view
    // unmounts and remounts across reloads and page switches.
    let dnd = create_dnd_signals();
    provide_context(dnd);
    bind_global_mouseup(dnd, move |dragged_id, over_id, data| {
        let intent = resolve_drop(&dragged_id, Some((over_id.as_str(), data.as_ref())), |id| {
            store.column_card_count(id)
        });
        match intent {
            Some(intent) => {
                web_sys::console::log_1(
                    &format!(
                        "[DND] move {} -> {} @ {}",
                        intent.card_id, intent.target_column_id, intent.position
                    )
                    .into(),
                );
                spawn_local(async move {
                    let _ = store.move_card_to(intent).await;
                });
            }
            None => web_sys::console::log_1(&"[DND] drop abandoned".into()),
        }
    });

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">
                {move || match page.get() {
                    Page::Board => view! { <BoardPage /> }.into_any(),
                    Page::Archive => view! { <ArchivePage /> }.into_any(),
                }}
            </main>

            {move || store.state.error().get().map(|e| view! {
                <div class="error-banner" on:click=move |_| store.clear_error()>
                    {e}
                    <span class="dismiss">"×"</span>
                </div>
            })}
        </div>
    }
}
