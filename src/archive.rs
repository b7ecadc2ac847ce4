//! Archive Browser State
//!
//! Two browsing modes over the archived-card collection: "all" accumulates
//! offset pages client-side, "recent" is a single fixed-size fetch of the
//! most recently archived cards. Switching modes or changing the search
//! resets pagination before re-fetching.

use leptos::prelude::*;

use crate::api;
use crate::models::Card;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArchiveTab {
    All,
    Recent,
}

/// Fetch size for the "recent" tab (server caps recent_limit at 100)
pub const RECENT_LIMIT: u32 = 10;

/// Page-1 loads replace accumulated items; later pages append.
fn merge_page(existing: &mut Vec<Card>, page: u32, fetched: Vec<Card>) {
    if page <= 1 {
        *existing = fetched;
    } else {
        existing.extend(fetched);
    }
}

/// Whether a further page exists. The recent tab never paginates.
pub fn has_more(tab: ArchiveTab, items_len: usize, total: usize) -> bool {
    tab == ArchiveTab::All && items_len < total
}

#[derive(Clone, Copy)]
pub struct ArchiveBrowser {
    pub items: RwSignal<Vec<Card>>,
    pub total: RwSignal<usize>,
    pub page: RwSignal<u32>,
    pub query: RwSignal<String>,
    pub tab: RwSignal<ArchiveTab>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ArchiveBrowser {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            page: RwSignal::new(1),
            query: RwSignal::new(String::new()),
            tab: RwSignal::new(ArchiveTab::All),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    fn report(self, error: String) {
        web_sys::console::error_1(&format!("[ARCHIVE] {}", error).into());
        self.error.set(Some(error));
    }

    fn reset(self) {
        self.page.set(1);
        self.items.set(Vec::new());
    }

    pub async fn load(self) {
        self.loading.set(true);
        let tab = self.tab.get_untracked();
        let query = self.query.get_untracked();
        let q = query.trim();
        let q = (!q.is_empty()).then_some(q);
        let (page, recent_limit) = match tab {
            ArchiveTab::All => (self.page.get_untracked(), None),
            ArchiveTab::Recent => (1, Some(RECENT_LIMIT)),
        };
        match api::fetch_archive(page, q, recent_limit).await {
            Ok(data) => {
                self.items.update(|items| merge_page(items, page, data.items));
                self.total.set(data.total);
            }
            Err(e) => self.report(e),
        }
        self.loading.set(false);
    }

    pub async fn set_tab(self, tab: ArchiveTab) {
        if self.tab.get_untracked() == tab {
            return;
        }
        self.tab.set(tab);
        self.total.set(0);
        self.reset();
        self.load().await;
    }

    /// Server-side search; always restarts from page 1, discarding
    /// accumulated items.
    pub async fn search(self, q: String) {
        self.reset();
        self.query.set(q);
        self.load().await;
    }

    pub async fn load_more(self) {
        self.page.update(|p| *p += 1);
        self.load().await;
    }

    pub async fn restore(self, id: &str) {
        match api::restore_card(id).await {
            Ok(_) => {
                self.reset();
                self.load().await;
            }
            Err(e) => self.report(e),
        }
    }

    pub async fn remove(self, id: &str) {
        match api::delete_card(id).await {
            Ok(()) => {
                self.reset();
                self.load().await;
            }
            Err(e) => self.report(e),
        }
    }

    /// Whole-collection restore; trusts the operation to be exhaustive and
    /// empties local state without a follow-up fetch.
    pub async fn restore_all(self) {
        match api::restore_all().await {
            Ok(_) => {
                self.items.set(Vec::new());
                self.total.set(0);
            }
            Err(e) => self.report(e),
        }
    }

    pub async fn clear_all(self) {
        match api::clear_archive().await {
            Ok(()) => {
                self.items.set(Vec::new());
                self.total.set(0);
            }
            Err(e) => self.report(e),
        }
    }

    pub fn has_more(self) -> bool {
        has_more(self.tab.get(), self.items.with(|i| i.len()), self.total.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::make_card;

    #[test]
    fn first_page_replaces_accumulated_items() {
        let mut items = vec![make_card("old", 0)];
        merge_page(&mut items, 1, vec![make_card("new", 0)]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "new");
    }

    #[test]
    fn later_pages_append() {
        let mut items = vec![make_card("a", 0)];
        merge_page(&mut items, 2, vec![make_card("b", 1), make_card("c", 2)]);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[2].id, "c");
    }

    #[test]
    fn more_pages_exist_while_fewer_items_than_total() {
        assert!(has_more(ArchiveTab::All, 0, 5));
        assert!(has_more(ArchiveTab::All, 4, 5));
        assert!(!has_more(ArchiveTab::All, 5, 5));
    }

    #[test]
    fn recent_tab_never_paginates() {
        assert!(!has_more(ArchiveTab::Recent, 0, 5));
    }
}
