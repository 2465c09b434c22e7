//! Actions Bar Component
//!
//! Active counter, the inline filter bar on wide screens, and
//! clear-completed.

use leptos::prelude::*;

use crate::components::FilterBar;
use crate::context::AppContext;
use crate::models::Layout;
use crate::store::{store_clear_completed, use_app_store, TodoStateStoreFields};

#[component]
pub fn ActionsBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let active_count = move || store.list().read().active_count();

    let clear_completed = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let cleared = store_clear_completed(&store);
        log::debug!("[ACTIONS] clearing {} completed items", cleared);
    };

    view! {
        <div class="actions">
            <span class="count-label">
                <span id="count">{active_count}</span>
                {move || if active_count() == 1 { " item left" } else { " items left" }}
            </span>

            <Show when=move || ctx.layout.get() == Layout::Wide>
                <FilterBar inline=true />
            </Show>

            <button class="clear-completed-btn" on:click=clear_completed>
                "Clear Completed"
            </button>
        </div>
    }
}
