//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Items and tags
//! here are the local copy; they only change after the server confirmed a write.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ItemScope;
use crate::list_view;
use crate::models::{Item, ItemList, Tag};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items in the current scope, sorted by content
    pub items: Vec<Item>,
    /// All tags, sorted by name
    pub tags: Vec<Tag>,
    /// List new items go to and that is being shown
    pub list: ItemList,
    /// Tag filter (None = all items)
    pub selected_tag: Option<String>,
    /// Search box text
    pub search: String,
    /// false = only unchecked items
    pub show_all: bool,
    /// Error banner text
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            show_all: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Scope the item list is currently loaded for
pub fn store_scope(store: &AppStore) -> ItemScope {
    ItemScope {
        list: store.list().get(),
        tag_id: store.selected_tag().get(),
    }
}

/// Replace all items after a load
pub fn store_set_items(store: &AppStore, mut items: Vec<Item>) {
    list_view::sort_items(&mut items);
    store.items().set(items);
}

/// Add a created item
pub fn store_add_item(store: &AppStore, item: Item) {
    list_view::insert_item(&mut store.items().write(), item);
}

/// Update an item in the store with the server's copy
pub fn store_update_item(store: &AppStore, updated_item: Item) {
    list_view::replace_item(&mut store.items().write(), updated_item);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: &str) {
    list_view::remove_item(&mut store.items().write(), item_id);
}

/// Replace all tags after a load
pub fn store_set_tags(store: &AppStore, mut tags: Vec<Tag>) {
    tags.sort_by_key(|t| t.name.to_lowercase());
    store.tags().set(tags);
}

/// Add a tag to the store
pub fn store_add_tag(store: &AppStore, tag: Tag) {
    let tags_field = store.tags();
    let mut tags = tags_field.write();
    tags.push(tag);
    tags.sort_by_key(|t| t.name.to_lowercase());
}

/// Remove a tag from the store by ID, clearing the filter if it was selected
pub fn store_remove_tag(store: &AppStore, tag_id: &str) {
    store.tags().write().retain(|tag| tag.id != tag_id);
    if store.selected_tag().get_untracked().as_deref() == Some(tag_id) {
        store.selected_tag().set(None);
    }
}
