//! Theme Toggle Component
//!
//! Light/dark switch in the header. The `data-theme` attribute on `<html>`
//! follows the store.

use leptos::prelude::*;

use crate::models::Theme;
use crate::store::{store_toggle_theme, use_app_store, TodoStateStoreFields};

/// Write the theme onto the document root
fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.data_attr());
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    Effect::new(move |_| apply_theme(store.theme().get()));

    let toggle_theme = move |_| {
        let theme = store_toggle_theme(&store);
        log::debug!("[THEME] -> {:?}", theme);
    };

    let btn_class = move || match store.theme().get() {
        Theme::Light => "btn theme-btn light",
        Theme::Dark => "btn theme-btn dark",
    };

    view! {
        <button class=btn_class on:click=toggle_theme>
            <img
                src=move || store.theme().get().icon().0
                alt=move || store.theme().get().icon().1
            />
        </button>
    }
}
