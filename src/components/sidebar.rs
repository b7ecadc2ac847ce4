//! Sidebar Component
//!
//! Brand, view navigation and profile footer.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let nav_class = move |page: Page| {
        if ctx.page.get() == page {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <aside class="sidebar">
            <div class="brand">
                <span class="brand-mark"></span>
                <h2 class="brand-name">"TaskFlow"</h2>
            </div>

            <nav class="sidebar-nav">
                <button
                    class=move || nav_class(Page::Board)
                    on:click=move |_| ctx.goto(Page::Board)
                >
                    <span class="material-symbols-outlined">"grid_view"</span>
                    <span>"Current Board"</span>
                </button>
                <button
                    class=move || nav_class(Page::Archive)
                    on:click=move |_| ctx.goto(Page::Archive)
                >
                    <span class="material-symbols-outlined">"archive"</span>
                    <span>"Archived Tasks"</span>
                </button>
            </nav>

            <div class="sidebar-footer">
                <div class="avatar">"AM"</div>
                <div class="profile">
                    <span class="profile-name">"Alex Morgan"</span>
                    <span class="profile-role">"Admin"</span>
                </div>
            </div>
        </aside>
    }
}
