//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::error::ListError;
use crate::models::Layout;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Where the filter bar is rendered - read
    pub layout: ReadSignal<Layout>,
    /// Where the filter bar is rendered - write
    set_layout: WriteSignal<Layout>,
    config: StoredValue<UiConfig>,
}

impl AppContext {
    pub fn new(layout: (ReadSignal<Layout>, WriteSignal<Layout>), config: UiConfig) -> Self {
        Self {
            layout: layout.0,
            set_layout: layout.1,
            config: StoredValue::new(config),
        }
    }

    pub fn empty_message(&self) -> String {
        self.config.with_value(|c| c.empty_message.clone())
    }

    /// Recompute the layout for a viewport width
    pub fn update_layout(&self, width: f64) {
        let next = Layout::for_width(width, self.config.with_value(|c| c.breakpoint_px));
        if self.layout.get_untracked() != next {
            log::debug!("[APP] layout -> {:?} at {}px", next, width);
            self.set_layout.set(next);
        }
    }

    /// Tell the user why an action did nothing
    pub fn notify(&self, err: &ListError) {
        log::info!("[APP] {}", err);
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(&err.to_string());
        }
    }
}
