#![allow(warnings)]
//! Todo Reorder Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod list;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::UiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = UiConfig::load();
    logging::init(config.log_level());

    mount_to_body(move || view! { <App config=config /> });
}
