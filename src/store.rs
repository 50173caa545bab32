//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Components reach the inventory only through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::error::StoreResult;
use crate::inventory::Inventory;
use crate::models::{Item, ItemDraft, ItemEdit, ItemId};
use crate::storage::BrowserStorage;

/// Global application state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// Item sequence mirrored to local storage
    pub inventory: Inventory<BrowserStorage>,
    /// Row currently shown as an inline edit form
    pub editing: Option<ItemId>,
    /// Last message shown under the header
    pub notice: Option<String>,
    pub config: AppConfig,
}

impl AppState {
    /// Load items from local storage under the configured key
    pub fn new(config: AppConfig) -> Self {
        let inventory = Inventory::load(BrowserStorage, config.storage_key.clone());
        Self {
            inventory,
            editing: None,
            notice: None,
            config,
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

/// Log and show a failed mutation; returns whether the change took effect
fn report<T>(store: &AppStore, action: &str, result: StoreResult<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            log::error!("[STORE] {} failed: {}", action, e);
            *store.notice().write() = Some(format!("{}に失敗しました: {}", action, e));
            e.was_applied()
        }
    }
}

/// Append a new item; true when it was appended, even if not yet saved
pub fn store_create_item(store: &AppStore, draft: ItemDraft) -> bool {
    let result = store.inventory().write().create(draft);
    report(store, "追加", result)
}

/// Show the inline edit form for one row, closing any other
pub fn store_begin_edit(store: &AppStore, id: ItemId) {
    *store.editing().write() = Some(id);
}

/// Close the inline edit form without saving
pub fn store_cancel_edit(store: &AppStore) {
    *store.editing().write() = None;
}

/// Save the inline edit form back into the item
pub fn store_save_edit(store: &AppStore, id: ItemId, edit: ItemEdit) {
    let result = store.inventory().write().update(id, edit);
    report(store, "保存", result);
    *store.editing().write() = None;
}

/// Remove an item
pub fn store_delete_item(store: &AppStore, id: ItemId) {
    let result = store.inventory().write().delete(id);
    if report(store, "削除", result) && store.editing().get_untracked() == Some(id) {
        *store.editing().write() = None;
    }
}

/// Replace every item with the contents of a backup
pub fn store_restore(store: &AppStore, items: Vec<Item>) {
    let count = items.len();
    let result = store.inventory().write().restore(items);
    let saved = result.is_ok();
    if report(store, "復元", result) {
        *store.editing().write() = None;
    }
    if saved {
        *store.notice().write() = Some(format!("{}件を復元しました", count));
    }
}

pub fn store_set_notice(store: &AppStore, message: impl Into<String>) {
    *store.notice().write() = Some(message.into());
}

pub fn store_clear_notice(store: &AppStore) {
    *store.notice().write() = None;
}
