//! Todo List View Component
//!
//! Displays the filtered items with drag-to-reorder support.
//! The container measures rows on every `dragover` and moves the dragged
//! item live, so there is nothing left to do on drop.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::store::{
    store_apply_drop, store_begin_drag, store_end_drag, store_remove_item, use_app_store, TodoStateStoreFields,
};

use leptos_reorder::*;

/// Item list with DnD support
#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Create DnD signals
    let dnd = create_dnd_signals();

    let on_reorder = Callback::new(move |(dragged, placement): (u32, DropCandidate<u32>)| {
        match store_apply_drop(&store, dragged, placement) {
            Ok(true) => log::trace!("[DND] moved {} -> {:?}", dragged, placement),
            Ok(false) => {}
            Err(e) => log::warn!("[DND] reorder: {}", e),
        }
    });
    let on_start = Callback::new(move |dragged: u32| {
        if let Err(e) = store_begin_drag(&store, dragged) {
            log::warn!("[DND] dragstart: {}", e);
        }
    });
    let on_end = Callback::new(move |dragged: u32| {
        store_end_drag(&store);
        log::debug!("[DND] committed order after dragging {}", dragged);
    });

    // The list state owns the drag mark
    let dragging = Signal::derive(move || store.list().read().dragging());

    let on_dragover = make_on_dragover(dnd, MidpointEngine, dragging, on_reorder);
    let on_drop = make_on_drop();

    let visible_items = move || {
        let filter = store.filter().get();
        store.list().read().visible(filter)
    };

    view! {
        <div class="todos" on:dragover=on_dragover on:drop=on_drop>
            <For
                each=visible_items
                key=|item| item.id
                children=move |item| {
                    let id = item.id;

                    let on_dragstart = make_on_dragstart(dnd, id, on_start);
                    let on_dragend = make_on_dragend(dnd, id, on_end);

                    // Visual state
                    let is_completed = move || store.list().read().find(id).is_some_and(|i| i.completed);
                    let is_leaving = move || store.list().read().find(id).is_some_and(|i| i.leaving);

                    let item_class = move || {
                        let mut c = String::from("todo-item");
                        if is_completed() { c.push_str(" strike"); }
                        if dragging.get() == Some(id) { c.push_str(" ondrag"); }
                        if is_leaving() { c.push_str(" slide"); }
                        c
                    };

                    view! {
                        <div
                            class=item_class
                            draggable="true"
                            data-reorder-key=id.to_string()
                            on:dragstart=on_dragstart
                            on:dragend=on_dragend
                            on:animationend=move |_| {
                                let leaving = store.list().read_untracked().find(id).is_some_and(|i| i.leaving);
                                if leaving {
                                    if let Err(e) = store_remove_item(&store, id) {
                                        log::warn!("[ROW] remove: {}", e);
                                    }
                                }
                            }
                        >
                            <TodoRow item=item />
                        </div>
                    }
                }
            />

            <Show when=move || store.list().read().is_empty()>
                <div class="empty-container">{ctx.empty_message()}</div>
            </Show>
        </div>
    }
}
