//! Todo Row Component
//!
//! Checkbox, label and delete button of a single item.

use leptos::prelude::*;

use crate::models::TodoItem;
use crate::store::{store_mark_leaving, store_toggle_item, use_app_store, TodoStateStoreFields};

/// A single item row
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let completed = move || store.list().read().find(id).is_some_and(|i| i.completed);

    let toggle = move || {
        if let Err(e) = store_toggle_item(&store, id) {
            log::warn!("[ROW] toggle: {}", e);
        }
    };

    view! {
        <label class="check-label">
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| toggle()
            />
            <span class="check-round"></span>
        </label>

        <span class="todo" on:click=move |_| toggle()>{item.label}</span>

        <button
            class="btn delete"
            on:click=move |ev| {
                ev.stop_propagation();
                if let Err(e) = store_mark_leaving(&store, id) {
                    log::warn!("[ROW] delete: {}", e);
                }
            }
        >
            <img src="./images/icon-cross.svg" alt="delete" />
        </button>
    }
}
