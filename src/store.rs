//! Listing State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::search::{self, QueryState, VisibleSet};

/// Query inputs and the debounced result of the listing view
#[derive(Clone, Debug, Default, Store)]
pub struct ListingState {
    /// Search box text
    pub search: String,
    /// Selected filter key, at most one
    pub filter: Option<String>,
    /// Last computed visible set
    pub visible: VisibleSet,
}

impl ListingState {
    /// Start with every project visible
    pub fn new(project_count: usize) -> Self {
        Self {
            visible: VisibleSet::all(project_count),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ListingStore = Store<ListingState>;

// ========================
// Store Helper Functions
// ========================

/// Tracked snapshot of the live query
pub fn store_query(store: &ListingStore) -> QueryState {
    QueryState {
        text: store.search().get(),
        filter: store.filter().get(),
    }
}

pub fn store_set_search(store: &ListingStore, text: String) {
    store.search().set(text);
}

/// Select `key`, or clear it if it is already selected
pub fn store_toggle_filter(store: &ListingStore, key: &str) {
    let current = store.filter().get_untracked();
    store.filter().set(search::toggle_filter(current, key));
}

pub fn store_set_visible(store: &ListingStore, visible: VisibleSet) {
    store.visible().set(visible);
}
