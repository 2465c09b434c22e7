//! Leptos Reorder Utilities
//!
//! Drag-to-reorder for Leptos lists using native HTML5 drag events.
//! The placement decision lives in [`engine`] and never touches the DOM;
//! the handlers here only measure rows and forward the result.

pub mod engine;
pub mod measure;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub use engine::{compute_insertion_point, DropCandidate, Extent, MidpointEngine, ReorderEngine};
pub use measure::{measure_candidates, KEY_ATTR};

/// DnD state signals
///
/// The dragged row itself is owned by the caller's list state and handed to
/// [`make_on_dragover`] as a signal; this bundle only remembers the last
/// placement so repeated `dragover` events at the same spot are dropped.
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Last placement applied during the current drag
    pub drop_target_read: ReadSignal<Option<DropCandidate<u32>>>,
    pub drop_target_write: WriteSignal<Option<DropCandidate<u32>>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (drop_target_read, drop_target_write) = signal(None::<DropCandidate<u32>>);
    DndSignals {
        drop_target_read,
        drop_target_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.drop_target_write.set(None);
}

/// Create dragstart handler for a draggable row
///
/// `on_start` receives the row id so the caller can mark it as dragged.
pub fn make_on_dragstart(dnd: DndSignals, item_id: u32, on_start: Callback<u32>) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        log::debug!("[DND] dragstart id={}", item_id);
        if let Some(dt) = ev.data_transfer() {
            // Firefox refuses to start a drag without payload
            let _ = dt.set_data("text/plain", &item_id.to_string());
            dt.set_effect_allowed("move");
        }
        dnd.drop_target_write.set(None);
        on_start.run(item_id);
    }
}

/// Create dragend handler for a draggable row
pub fn make_on_dragend(dnd: DndSignals, item_id: u32, on_end: Callback<u32>) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        end_drag(&dnd);
        log::debug!("[DND] dragend id={}", item_id);
        on_end.run(item_id);
    }
}

/// Create dragover handler for the list container
///
/// Measures the keyed children of the element the handler is attached to,
/// skipping the row `dragging` reports, asks `engine` where that row belongs
/// and reports the placement through `on_reorder` whenever it differs from
/// the last one.
pub fn make_on_dragover<E>(
    dnd: DndSignals,
    engine: E,
    dragging: Signal<Option<u32>>,
    on_reorder: Callback<(u32, DropCandidate<u32>)>,
) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    E: ReorderEngine + Copy + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let Some(dragging) = dragging.get_untracked() else {
            return;
        };
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        let Some(container) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };

        let candidates = measure_candidates(&container, dragging);
        let placement = engine.insertion_point(candidates, ev.client_y() as f64);

        if dnd.drop_target_read.get_untracked() != Some(placement) {
            dnd.drop_target_write.set(Some(placement));
            on_reorder.run((dragging, placement));
        }
    }
}

/// Create drop handler for the list container
///
/// The order is already applied while dragging; this only accepts the drop
/// so the browser does not treat it as a navigation.
pub fn make_on_drop() -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
    }
}
