//! Todo App
//!
//! Main application component: header, entry form, list, actions and the
//! filter bar, which moves between the actions bar and its own row
//! depending on the viewport width.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActionsBar, FilterBar, NewItemForm, ThemeToggle, TodoListView};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::models::Layout;
use crate::store::TodoState;

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    let initial_layout = Layout::for_width(viewport_width(), config.breakpoint_px);
    let layout = signal(initial_layout);

    // Provide state to all children
    provide_context(Store::new(TodoState::new(config.initial_theme)));
    let ctx = AppContext::new(layout, config);
    provide_context(ctx);

    // Responsive filter placement; lives as long as the page
    let _ = window_event_listener(leptos::ev::resize, move |_| ctx.update_layout(viewport_width()));

    log::info!("[APP] mounted with {:?} layout", initial_layout);

    view! {
        <main class="wrapper">
            <header class="header">
                <h1>"TODO"</h1>
                <ThemeToggle />
            </header>

            <NewItemForm />

            <section class="list-card">
                <TodoListView />
                <ActionsBar />
            </section>

            <Show when=move || ctx.layout.get() == Layout::Narrow>
                <FilterBar />
            </Show>

            <p class="drag-help-info">"Drag and drop to reorder list"</p>
        </main>
    }
}
