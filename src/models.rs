//! Frontend Models
//!
//! Plain data types shared by the list state and the components.

use serde::{Deserialize, Serialize};

/// One to-do entry
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: u32,
    pub label: String,
    pub completed: bool,
    /// 0-based rank in display order
    pub position: i32,
    /// Delete animation in flight; removed on `animationend`
    pub leaving: bool,
}

impl TodoItem {
    pub fn new(id: u32, label: String, position: i32) -> Self {
        Self {
            id,
            label,
            completed: false,
            position,
            leaving: false,
        }
    }
}

/// Which subset of the list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}

/// Color scheme applied to the document root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value for `data-theme` on `<html>`
    pub fn data_attr(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Toggle button icon: offers the opposite scheme
    pub fn icon(&self) -> (&'static str, &'static str) {
        match self {
            Theme::Light => ("./images/icon-moon.svg", "moon svg"),
            Theme::Dark => ("./images/icon-sun.svg", "sun svg"),
        }
    }
}

/// Where the filter bar is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Filter bar sits inside the actions bar
    Wide,
    /// Filter bar sits on its own row under the list
    Narrow,
}

impl Layout {
    pub fn for_width(width: f64, breakpoint_px: f64) -> Self {
        if width >= breakpoint_px {
            Layout::Wide
        } else {
            Layout::Narrow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        let mut item = TodoItem::new(1, "Walk".to_string(), 0);
        assert!(Filter::All.matches(&item));
        assert!(Filter::Active.matches(&item));
        assert!(!Filter::Completed.matches(&item));

        item.completed = true;
        assert!(Filter::All.matches(&item));
        assert!(!Filter::Active.matches(&item));
        assert!(Filter::Completed.matches(&item));
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.data_attr(), "theme-dark");
        assert_eq!(Theme::Light.icon().0, "./images/icon-moon.svg");
        assert_eq!(Theme::Dark.icon().0, "./images/icon-sun.svg");
    }

    #[test]
    fn test_layout_breakpoint() {
        assert_eq!(Layout::for_width(1180.0, 1180.0), Layout::Wide);
        assert_eq!(Layout::for_width(1179.5, 1180.0), Layout::Narrow);
        assert_eq!(Layout::for_width(375.0, 1180.0), Layout::Narrow);
    }
}
