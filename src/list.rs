//! Todo List State
//!
//! The ordered item sequence plus the drag mark. Every mutation keeps
//! `position` equal to the item's index, so the view can key rows by id and
//! trust the order of the backing vector.

use leptos_reorder::DropCandidate;

use crate::error::ListError;
use crate::models::{Filter, TodoItem};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    /// Item currently being dragged (at most one)
    dragging: Option<u32>,
    next_id: u32,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn index_of(&self, id: u32) -> Result<usize, ListError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ListError::NotFound(id))
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut TodoItem, ListError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ListError::NotFound(id))
    }

    fn reindex(&mut self) {
        for (pos, item) in self.items.iter_mut().enumerate() {
            item.position = pos as i32;
        }
    }

    // ========================
    // Item lifecycle
    // ========================

    /// Append a new item and return its id. Surrounding whitespace is
    /// dropped; a blank label is rejected.
    pub fn add(&mut self, label: &str) -> Result<u32, ListError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ListError::EmptyLabel);
        }
        let id = self.next_id;
        self.next_id += 1;
        let position = self.items.len() as i32;
        self.items.push(TodoItem::new(id, label.to_string(), position));
        Ok(id)
    }

    /// Flip completion state, returning the new value
    pub fn toggle(&mut self, id: u32) -> Result<bool, ListError> {
        let item = self.get_mut(id)?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    /// Start the delete animation for an item
    pub fn mark_leaving(&mut self, id: u32) -> Result<(), ListError> {
        self.get_mut(id)?.leaving = true;
        Ok(())
    }

    /// Drop an item from the sequence
    pub fn remove(&mut self, id: u32) -> Result<TodoItem, ListError> {
        let index = self.index_of(id)?;
        let removed = self.items.remove(index);
        if self.dragging == Some(id) {
            self.dragging = None;
        }
        self.reindex();
        Ok(removed)
    }

    /// Start the delete animation on every completed item; returns how many
    pub fn clear_completed(&mut self) -> usize {
        let mut count = 0;
        for item in self.items.iter_mut().filter(|item| item.completed) {
            item.leaving = true;
            count += 1;
        }
        count
    }

    // ========================
    // Counts & filtering
    // ========================

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.len() - self.active_count()
    }

    /// Reject a filter that would show nothing while items exist
    pub fn check_filter(&self, filter: Filter) -> Result<(), ListError> {
        let empty = match filter {
            Filter::All => false,
            Filter::Active => self.active_count() == 0,
            Filter::Completed => self.completed_count() == 0,
        };
        if empty {
            Err(ListError::NothingToShow(filter))
        } else {
            Ok(())
        }
    }

    /// The filter to keep showing after a mutation: `filter` itself, or
    /// `All` once it matches nothing while items remain
    pub fn settle_filter(&self, filter: Filter) -> Filter {
        if self.is_empty() || self.check_filter(filter).is_ok() {
            filter
        } else {
            Filter::All
        }
    }

    pub fn visible(&self, filter: Filter) -> Vec<TodoItem> {
        self.items.iter().filter(|item| filter.matches(item)).cloned().collect()
    }

    // ========================
    // Drag & reorder
    // ========================

    pub fn dragging(&self) -> Option<u32> {
        self.dragging
    }

    /// Idle -> Dragging(id)
    pub fn begin_drag(&mut self, id: u32) -> Result<(), ListError> {
        self.index_of(id)?;
        self.dragging = Some(id);
        Ok(())
    }

    /// Dragging -> Idle. The current order is already the committed one.
    pub fn end_drag(&mut self) -> Option<u32> {
        self.dragging.take()
    }

    /// Items eligible as an insertion anchor: everything but the dragged one
    pub fn candidates(&self) -> impl Iterator<Item = &TodoItem> + '_ {
        let dragging = self.dragging;
        self.items.iter().filter(move |item| Some(item.id) != dragging)
    }

    /// Move `dragged` immediately before the anchor, or to the end.
    /// Returns whether the order changed.
    pub fn apply_drop(&mut self, dragged: u32, placement: DropCandidate<u32>) -> Result<bool, ListError> {
        let from = self.index_of(dragged)?;
        if let DropCandidate::Before(anchor) = placement {
            self.index_of(anchor)?;
            if anchor == dragged {
                return Ok(false);
            }
        }

        let item = self.items.remove(from);
        let to = match placement {
            DropCandidate::Before(anchor) => self.index_of(anchor)?,
            DropCandidate::End => self.items.len(),
        };
        self.items.insert(to, item);
        self.reindex();
        Ok(to != from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_reorder::{compute_insertion_point, Extent};
    use pretty_assertions::assert_eq;

    fn list_of(labels: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for label in labels {
            list.add(label).unwrap();
        }
        list
    }

    fn labels(list: &TodoList) -> Vec<&str> {
        list.items().iter().map(|item| item.label.as_str()).collect()
    }

    fn assert_positions(list: &TodoList) {
        for (i, item) in list.items().iter().enumerate() {
            assert_eq!(item.position, i as i32, "position of {}", item.label);
        }
    }

    #[test]
    fn test_add_assigns_ids_and_positions() {
        let mut list = TodoList::new();
        let a = list.add("Buy milk").unwrap();
        let b = list.add("  Call mom  ").unwrap();
        assert_ne!(a, b);
        assert_eq!(labels(&list), vec!["Buy milk", "Call mom"]);
        assert_positions(&list);
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut list = TodoList::new();
        assert_eq!(list.add(""), Err(ListError::EmptyLabel));
        assert_eq!(list.add("   "), Err(ListError::EmptyLabel));
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut list = list_of(&["a", "b"]);
        let last = list.items()[1].id;
        list.remove(last).unwrap();
        let new_id = list.add("c").unwrap();
        assert_ne!(new_id, last);
    }

    #[test]
    fn test_toggle_and_counts() {
        let mut list = list_of(&["a", "b", "c"]);
        let b = list.items()[1].id;
        assert_eq!(list.toggle(b), Ok(true));
        assert_eq!(list.active_count(), 2);
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.toggle(b), Ok(false));
        assert_eq!(list.active_count(), 3);
        assert_eq!(list.toggle(99), Err(ListError::NotFound(99)));
    }

    #[test]
    fn test_remove_reindexes() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        let b = list.items()[1].id;
        let removed = list.remove(b).unwrap();
        assert_eq!(removed.label, "b");
        assert_eq!(labels(&list), vec!["a", "c", "d"]);
        assert_positions(&list);
        assert_eq!(list.remove(b), Err(ListError::NotFound(b)));
    }

    #[test]
    fn test_clear_completed_marks_leaving() {
        let mut list = list_of(&["a", "b", "c"]);
        let ids: Vec<u32> = list.items().iter().map(|i| i.id).collect();
        list.toggle(ids[0]).unwrap();
        list.toggle(ids[2]).unwrap();

        assert_eq!(list.clear_completed(), 2);
        let leaving: Vec<bool> = list.items().iter().map(|i| i.leaving).collect();
        assert_eq!(leaving, vec![true, false, true]);
        // Still present until the animation ends
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_clear_completed_with_none_completed() {
        let mut list = list_of(&["a"]);
        assert_eq!(list.clear_completed(), 0);
        assert!(!list.items()[0].leaving);
    }

    #[test]
    fn test_check_filter() {
        let mut list = list_of(&["a", "b"]);
        assert_eq!(list.check_filter(Filter::All), Ok(()));
        assert_eq!(list.check_filter(Filter::Active), Ok(()));
        assert_eq!(list.check_filter(Filter::Completed), Err(ListError::NothingToShow(Filter::Completed)));

        for id in [list.items()[0].id, list.items()[1].id] {
            list.toggle(id).unwrap();
        }
        assert_eq!(list.check_filter(Filter::Active), Err(ListError::NothingToShow(Filter::Active)));
        assert_eq!(list.check_filter(Filter::Completed), Ok(()));
    }

    #[test]
    fn test_leaving_item_counts_until_removed() {
        let mut list = list_of(&["a", "b"]);
        let a = list.items()[0].id;
        list.mark_leaving(a).unwrap();
        assert!(list.find(a).unwrap().leaving);
        assert_eq!(list.active_count(), 2);
        assert_eq!(list.visible(Filter::Active).len(), 2);

        list.remove(a).unwrap();
        assert_eq!(list.active_count(), 1);
        assert_eq!(list.mark_leaving(a), Err(ListError::NotFound(a)));
    }

    #[test]
    fn test_settle_filter_falls_back_when_nothing_matches() {
        let mut list = list_of(&["a", "b"]);
        let a = list.items()[0].id;
        assert_eq!(list.settle_filter(Filter::Active), Filter::Active);
        assert_eq!(list.settle_filter(Filter::Completed), Filter::All);

        list.toggle(a).unwrap();
        assert_eq!(list.settle_filter(Filter::Completed), Filter::Completed);

        // Empty list keeps the choice; the placeholder is shown instead
        assert_eq!(TodoList::new().settle_filter(Filter::Active), Filter::Active);
    }

    #[test]
    fn test_visible_respects_filter_and_order() {
        let mut list = list_of(&["a", "b", "c"]);
        let b = list.items()[1].id;
        list.toggle(b).unwrap();

        let active: Vec<String> = list.visible(Filter::Active).into_iter().map(|i| i.label).collect();
        let done: Vec<String> = list.visible(Filter::Completed).into_iter().map(|i| i.label).collect();
        assert_eq!(active, vec!["a", "c"]);
        assert_eq!(done, vec!["b"]);
        assert_eq!(list.visible(Filter::All).len(), 3);
    }

    #[test]
    fn test_drag_lifecycle_excludes_dragged() {
        let mut list = list_of(&["a", "b", "c"]);
        let b = list.items()[1].id;
        assert_eq!(list.dragging(), None);
        assert_eq!(list.candidates().count(), 3);

        list.begin_drag(b).unwrap();
        assert_eq!(list.dragging(), Some(b));
        let ids: Vec<&str> = list.candidates().map(|i| i.label.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        assert_eq!(list.end_drag(), Some(b));
        assert_eq!(list.dragging(), None);
        assert_eq!(list.begin_drag(42), Err(ListError::NotFound(42)));
    }

    #[test]
    fn test_apply_drop_before_anchor() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        let ids: Vec<u32> = list.items().iter().map(|i| i.id).collect();

        assert_eq!(list.apply_drop(ids[3], DropCandidate::Before(ids[1])), Ok(true));
        assert_eq!(labels(&list), vec!["a", "d", "b", "c"]);
        assert_positions(&list);

        assert_eq!(list.apply_drop(ids[0], DropCandidate::Before(ids[2])), Ok(true));
        assert_eq!(labels(&list), vec!["d", "b", "a", "c"]);
        assert_positions(&list);
    }

    #[test]
    fn test_apply_drop_to_end() {
        let mut list = list_of(&["a", "b", "c"]);
        let a = list.items()[0].id;
        assert_eq!(list.apply_drop(a, DropCandidate::End), Ok(true));
        assert_eq!(labels(&list), vec!["b", "c", "a"]);
        assert_eq!(list.apply_drop(a, DropCandidate::End), Ok(false));
        assert_positions(&list);
    }

    #[test]
    fn test_apply_drop_is_idempotent() {
        let mut list = list_of(&["a", "b", "c"]);
        let ids: Vec<u32> = list.items().iter().map(|i| i.id).collect();
        assert_eq!(list.apply_drop(ids[2], DropCandidate::Before(ids[0])), Ok(true));
        let after_first = list.clone();
        assert_eq!(list.apply_drop(ids[2], DropCandidate::Before(ids[0])), Ok(false));
        assert_eq!(list, after_first);
    }

    #[test]
    fn test_apply_drop_on_self_or_unknown() {
        let mut list = list_of(&["a", "b"]);
        let a = list.items()[0].id;
        assert_eq!(list.apply_drop(a, DropCandidate::Before(a)), Ok(false));
        assert_eq!(list.apply_drop(a, DropCandidate::Before(77)), Err(ListError::NotFound(77)));
        assert_eq!(list.apply_drop(77, DropCandidate::End), Err(ListError::NotFound(77)));
        assert_eq!(labels(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_drag_gesture_reorders_live() {
        // Rows 40px tall starting at y=0; "a" is dragged downwards
        let mut list = list_of(&["a", "b", "c", "d"]);
        let a = list.items()[0].id;
        list.begin_drag(a).unwrap();

        let extents = |list: &TodoList| -> Vec<(u32, Extent)> {
            // Layout reflects the current sequence, dragged row included
            list.items()
                .iter()
                .enumerate()
                .filter(|(_, item)| Some(item.id) != list.dragging())
                .map(|(i, item)| (item.id, Extent::new(40.0 * i as f64, 40.0)))
                .collect()
        };

        for pointer_y in [30.0, 70.0, 110.0] {
            let placement = compute_insertion_point(extents(&list), pointer_y).into();
            list.apply_drop(a, placement).unwrap();
        }
        assert_eq!(labels(&list), vec!["b", "c", "a", "d"]);

        let placement = compute_insertion_point(extents(&list), 400.0).into();
        list.apply_drop(a, placement).unwrap();
        assert_eq!(list.end_drag(), Some(a));
        assert_eq!(labels(&list), vec!["b", "c", "d", "a"]);
        assert_positions(&list);
    }

    #[test]
    fn test_remove_dragged_clears_mark() {
        let mut list = list_of(&["a", "b"]);
        let a = list.items()[0].id;
        list.begin_drag(a).unwrap();
        list.remove(a).unwrap();
        assert_eq!(list.dragging(), None);
    }
}
