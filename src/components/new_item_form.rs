//! New Item Form Component
//!
//! Text input for appending items to the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::ListError;
use crate::store::{store_add_item, use_app_store};

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_add_item(&store, &new_text.get_untracked()) {
            Ok(_) => set_new_text.set(String::new()),
            // Blank input is silently ignored
            Err(ListError::EmptyLabel) => {}
            Err(e) => log::warn!("[FORM] {}", e),
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <span class="check-round placeholder"></span>
            <input
                id="todo-input"
                type="text"
                placeholder="Create a new todo..."
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                        set_new_text.set(input.value());
                    }
                }
            />
            <button type="submit" class="add-todo">"Add"</button>
        </form>
    }
}
