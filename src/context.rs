//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Top-level views, switched by the sidebar (no router)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Page {
    Board,
    Archive,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active top-level view - read
    pub page: ReadSignal<Page>,
    /// Active top-level view - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch the active view
    pub fn goto(&self, page: Page) {
        self.set_page.set(page);
    }
}
