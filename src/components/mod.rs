//! UI Components
//!
//! Reusable Leptos components.

mod todo_row;
mod new_item_form;
mod todo_list_view;
mod filter_bar;
mod actions_bar;
mod theme_toggle;

pub use todo_row::TodoRow;
pub use new_item_form::NewItemForm;
pub use todo_list_view::TodoListView;
pub use filter_bar::FilterBar;
pub use actions_bar::ActionsBar;
pub use theme_toggle::ThemeToggle;
