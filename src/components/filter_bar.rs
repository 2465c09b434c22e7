//! Filter Bar Component
//!
//! All / Active / Completed switch.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Filter;
use crate::store::{store_set_filter, use_app_store, TodoStateStoreFields};

#[component]
pub fn FilterBar(
    /// Extra class when rendered inside the actions bar
    #[prop(optional)]
    inline: bool,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <div class=if inline { "filters clear-margin" } else { "filters" }>
            {Filter::ALL.iter().map(|filter| {
                let filter = *filter;
                let is_active = move || store.filter().get() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |ev| {
                            ev.prevent_default();
                            if let Err(e) = store_set_filter(&store, filter) {
                                ctx.notify(&e);
                            }
                        }
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
