//! Frontend Errors

use thiserror::Error;

use crate::models::Filter;

/// Errors raised by list operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("no item with id {0}")]
    NotFound(u32),
    #[error("item label is empty")]
    EmptyLabel,
    #[error("{}", nothing_to_show_message(.0))]
    NothingToShow(Filter),
}

/// Errors raised while loading [`crate::config::UiConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("breakpoint must be a positive width, got {0}")]
    Breakpoint(f64),
}

fn nothing_to_show_message(filter: &Filter) -> &'static str {
    match filter {
        Filter::Completed => "No completed items left!",
        Filter::Active => "No active items left!",
        Filter::All => "No todo items left!",
    }
}
