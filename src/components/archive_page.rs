//! Archive Page Component
//!
//! Browses archived cards in two tabs ("all" with load-more pagination,
//! "recent" as a single fixed-size fetch), with debounced server-side
//! search and the bulk restore/clear operations.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::archive::{ArchiveBrowser, ArchiveTab};
use crate::components::{ConfirmDialog, TagBadge};
use crate::dates;
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE_MS};

#[component]
pub fn ArchivePage() -> impl IntoView {
    let browser = ArchiveBrowser::new();

    let (search_input, set_search_input) = signal(String::new());
    let (confirm_clear, set_confirm_clear) = signal(false);
    let debouncer = Debouncer::new();

    // Initial fetch
    Effect::new(move |_| {
        spawn_local(async move {
            browser.load().await;
        });
    });

    let run_search = move |q: String| {
        let token = debouncer.issue();
        spawn_local(async move {
            if !token.settle(SEARCH_DEBOUNCE_MS).await {
                return;
            }
            browser.search(q).await;
        });
    };

    let select_tab = move |tab: ArchiveTab| {
        spawn_local(async move {
            browser.set_tab(tab).await;
        });
    };

    let tab_class = move |tab: ArchiveTab| {
        if browser.tab.get() == tab {
            "archive-tab active"
        } else {
            "archive-tab"
        }
    };

    let is_empty = move || browser.items.with(|items| items.is_empty()) && !browser.loading.get();

    view! {
        <div class="archive-page">
            <div class="archive-header">
                <div class="archive-titles">
                    <h1>"Archived Tasks"</h1>
                    <p>
                        "Review and manage your archived workspace items. Restore tasks \
                         to bring them back to your active board."
                    </p>
                </div>
                <div class="archive-bulk-actions">
                    <button
                        class="btn-primary"
                        on:click=move |_| {
                            spawn_local(async move {
                                browser.restore_all().await;
                            });
                        }
                    >
                        <span class="material-symbols-outlined">"restore"</span>
                        "Restore All"
                    </button>
                    <button
                        class="btn-danger-ghost"
                        title="Clear Archive"
                        on:click=move |_| set_confirm_clear.set(true)
                    >
                        <span class="material-symbols-outlined">"delete_sweep"</span>
                    </button>
                </div>
            </div>

            {move || browser.error.get().map(|e| view! {
                <div class="error-banner" on:click=move |_| browser.error.set(None)>
                    {e}
                </div>
            })}

            <div class="archive-toolbar">
                <div class="archive-tabs">
                    <button
                        class=move || tab_class(ArchiveTab::All)
                        on:click=move |_| select_tab(ArchiveTab::All)
                    >
                        "All Tasks"
                        <span class="tab-badge">{move || browser.total.get()}</span>
                    </button>
                    <button
                        class=move || tab_class(ArchiveTab::Recent)
                        on:click=move |_| select_tab(ArchiveTab::Recent)
                    >
                        "Recently Archived"
                        {move || {
                            let count = browser.items.with(|items| items.len());
                            (browser.tab.get() == ArchiveTab::Recent && count > 0).then(|| view! {
                                <span class="tab-badge">{count}</span>
                            })
                        }}
                    </button>
                </div>
                <div class="archive-search">
                    <span class="material-symbols-outlined">"search"</span>
                    <input
                        type="text"
                        placeholder="Search archive..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            set_search_input.set(value.clone());
                            run_search(value);
                        }
                    />
                </div>
            </div>

            {move || is_empty().then(|| view! {
                <div class="archive-empty">
                    <span class="material-symbols-outlined">"inventory_2"</span>
                    <p>
                        {move || if browser.tab.get() == ArchiveTab::Recent {
                            "No recently archived tasks"
                        } else {
                            "No archived tasks"
                        }}
                    </p>
                </div>
            })}

            <div class="archive-grid">
                <For
                    each=move || browser.items.get()
                    key=|card| card.id.clone()
                    children=move |card| {
                        let restore_id = card.id.clone();
                        let remove_id = card.id.clone();
                        let archived_label = card
                            .archived_at
                            .as_deref()
                            .map(dates::format_long_date)
                            .unwrap_or_default();
                        view! {
                            <div class="archive-card">
                                <div class="archive-card-top">
                                    <div>
                                        <h3 class="card-title">{card.title.clone()}</h3>
                                        <p class="archived-at">{format!("Archived {}", archived_label)}</p>
                                    </div>
                                    <button
                                        class="delete-btn"
                                        on:click=move |_| {
                                            let id = remove_id.clone();
                                            spawn_local(async move {
                                                browser.remove(&id).await;
                                            });
                                        }
                                    >
                                        <span class="material-symbols-outlined">"delete"</span>
                                    </button>
                                </div>
                                {(!card.tags.is_empty()).then(|| view! {
                                    <div class="card-tags">
                                        {card.tags.iter().map(|tag| view! {
                                            <TagBadge tag=tag.clone() />
                                        }).collect_view()}
                                    </div>
                                })}
                                <div class="archive-card-bottom">
                                    <button
                                        class="restore-btn"
                                        on:click=move |_| {
                                            let id = restore_id.clone();
                                            spawn_local(async move {
                                                browser.restore(&id).await;
                                            });
                                        }
                                    >
                                        <span class="material-symbols-outlined">"unarchive"</span>
                                        "Restore"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            {move || browser.has_more().then(|| view! {
                <div class="load-more-row">
                    <button
                        class="load-more-btn"
                        on:click=move |_| {
                            spawn_local(async move {
                                browser.load_more().await;
                            });
                        }
                    >
                        "Load More Tasks"
                        <span class="material-symbols-outlined">"expand_more"</span>
                    </button>
                </div>
            })}

            <ConfirmDialog
                open=confirm_clear
                title="Clear Archive"
                message="This will permanently delete all archived cards. This cannot be undone."
                confirm_label="Clear All"
                on_confirm=Callback::new(move |_| {
                    spawn_local(async move {
                        browser.clear_all().await;
                    });
                    set_confirm_clear.set(false);
                })
                on_cancel=Callback::new(move |_| set_confirm_clear.set(false))
            />
        </div>
    }
}
