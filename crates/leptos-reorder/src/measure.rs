//! DOM Geometry
//!
//! Reads candidate rows and their rendered extents out of a list container.

use wasm_bindgen::JsCast;

use crate::engine::Extent;

/// Attribute carrying the row key on every reorderable child
pub const KEY_ATTR: &str = "data-reorder-key";

/// Collect `(key, extent)` for every keyed child of `container` except
/// `dragging`, in document order. Each row is measured once.
pub fn measure_candidates(container: &web_sys::Element, dragging: u32) -> Vec<(u32, Extent)> {
    let selector = format!("[{}]", KEY_ATTR);
    let Ok(nodes) = container.query_selector_all(&selector) else {
        return Vec::new();
    };

    let mut candidates = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let Some(key) = parse_key(el.get_attribute(KEY_ATTR).as_deref()) else {
            continue;
        };
        if key == dragging {
            continue;
        }
        let rect = el.get_bounding_client_rect();
        candidates.push((key, Extent::new(rect.top(), rect.height())));
    }
    candidates
}

fn parse_key(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse().ok()
}
