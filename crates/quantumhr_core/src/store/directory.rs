//! Directory collection store: source list, filtered view, pagination.
//!
//! # Responsibility
//! - Hold the fetched user collection and the active search query.
//! - Recompute the filtered view synchronously on every mutation.
//! - Expose paginated access built on the pagination helpers.
//!
//! # Invariants
//! - `filtered` is a pure function of (`users`, `query`): a subsequence
//!   of `users` in source order, equal to `users` for a blank query.
//! - A new query always resets `page` to 1 so a narrowing search cannot
//!   strand the view on an empty out-of-range page.
//! - `set_page` stores the requested page verbatim; clamping happens at
//!   read time inside the slicing helper.

use crate::model::user::User;
use crate::pagination::{page_items, page_meta, total_pages, PageMeta, DEFAULT_PAGE_SIZE};
use log::debug;

/// Single-instance store for the dashboard's user collection.
#[derive(Debug)]
pub struct DirectoryStore {
    users: Vec<User>,
    filtered: Vec<User>,
    query: String,
    page: usize,
    page_size: usize,
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryStore {
    /// Creates an empty store with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Creates an empty store with an explicit page size.
    ///
    /// The page size is fixed for the store's lifetime.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            users: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            page: 1,
            page_size,
        }
    }

    /// Replaces the full collection wholesale.
    ///
    /// The existing query keeps applying: the filtered view is recomputed
    /// against the new collection immediately. Neither `query` nor `page`
    /// is touched; callers wanting a clean slate call [`refresh`] first.
    ///
    /// [`refresh`]: DirectoryStore::refresh
    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
        self.recompute_filtered();
        debug!(
            "event=collection_replaced module=store count={} filtered={}",
            self.users.len(),
            self.filtered.len()
        );
    }

    /// Sets the search query, recomputes the filtered view and returns
    /// the view to page 1.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute_filtered();
        self.page = 1;
    }

    /// Stores the requested page verbatim.
    ///
    /// An out-of-range request is not an error here; the read path yields
    /// an empty slice for it.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Resets the query and page for a fresh remote fetch, leaving the
    /// current collection intact until `set_users` replaces it.
    pub fn refresh(&mut self) {
        self.query.clear();
        self.recompute_filtered();
        self.page = 1;
    }

    /// Returns the slice of the filtered view for the current page.
    pub fn current_page_items(&self) -> &[User] {
        page_items(&self.filtered, self.page, self.page_size)
    }

    /// Returns the page count over the filtered view.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    /// Returns display metadata for the current page over the filtered
    /// view.
    pub fn page_meta(&self) -> PageMeta {
        page_meta(self.filtered.len(), self.page, self.page_size)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn filtered(&self) -> &[User] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn recompute_filtered(&mut self) {
        let needle = self.query.trim().to_lowercase();
        self.filtered = if needle.is_empty() {
            self.users.clone()
        } else {
            self.users
                .iter()
                .filter(|user| user.full_name().to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };
    }
}
