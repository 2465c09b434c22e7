//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos_reorder::DropCandidate;
use reactive_stores::Store;

use crate::error::ListError;
use crate::list::TodoList;
use crate::models::{Filter, Theme};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Item sequence and drag mark
    pub list: TodoList,
    /// Active filter
    pub filter: Filter,
    pub theme: Theme,
}

impl TodoState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<TodoState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append an item from user input
pub fn store_add_item(store: &AppStore, label: &str) -> Result<u32, ListError> {
    let id = store.list().write().add(label)?;
    log::debug!("[STORE] added item {}", id);
    Ok(id)
}

/// Flip an item's completion state
pub fn store_toggle_item(store: &AppStore, item_id: u32) -> Result<bool, ListError> {
    let completed = store.list().write().toggle(item_id)?;
    store_settle_filter(store);
    Ok(completed)
}

/// Start the delete animation for an item
pub fn store_mark_leaving(store: &AppStore, item_id: u32) -> Result<(), ListError> {
    store.list().write().mark_leaving(item_id)
}

/// Remove an item once its delete animation finished
pub fn store_remove_item(store: &AppStore, item_id: u32) -> Result<(), ListError> {
    store.list().write().remove(item_id)?;
    log::debug!("[STORE] removed item {}", item_id);
    store_settle_filter(store);
    Ok(())
}

/// Fall back to `All` when the selected filter no longer matches anything
fn store_settle_filter(store: &AppStore) {
    let current = store.filter().get_untracked();
    let settled = store.list().read_untracked().settle_filter(current);
    if settled != current {
        log::debug!("[STORE] filter {:?} is empty, showing {:?}", current, settled);
        *store.filter().write() = settled;
    }
}

/// Start the delete animation on every completed item
pub fn store_clear_completed(store: &AppStore) -> usize {
    store.list().write().clear_completed()
}

/// Switch filter unless it would show nothing; the filter is unchanged on error
pub fn store_set_filter(store: &AppStore, filter: Filter) -> Result<(), ListError> {
    store.list().read_untracked().check_filter(filter)?;
    *store.filter().write() = filter;
    Ok(())
}

pub fn store_toggle_theme(store: &AppStore) -> Theme {
    let next = store.theme().get_untracked().toggled();
    *store.theme().write() = next;
    next
}

/// Mark the dragged item
pub fn store_begin_drag(store: &AppStore, item_id: u32) -> Result<(), ListError> {
    let field = store.list();
    let mut list = field.write();
    list.begin_drag(item_id)?;
    log::debug!("[STORE] dragging {} over {} candidates", item_id, list.candidates().count());
    Ok(())
}

/// Apply a provisional placement during a drag
pub fn store_apply_drop(store: &AppStore, dragged: u32, placement: DropCandidate<u32>) -> Result<bool, ListError> {
    // Skip the write (and the re-render) when nothing moves
    let mut next = store.list().get_untracked();
    if !next.apply_drop(dragged, placement)? {
        return Ok(false);
    }
    *store.list().write() = next;
    Ok(true)
}

/// Clear the drag mark; the current order is the committed one
pub fn store_end_drag(store: &AppStore) -> Option<u32> {
    store.list().write().end_drag()
}
