//! Reorder Engine
//!
//! Pure placement query: given the rendered extents of every candidate row
//! and the pointer's Y coordinate, decide where the dragged row belongs.

/// Rendered vertical geometry of a row, in the pointer's coordinate space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Signed distance from `pointer_y` to this row's vertical midpoint.
    /// Negative means the pointer is above the midpoint.
    pub fn midpoint_offset(&self, pointer_y: f64) -> f64 {
        pointer_y - self.top - self.height / 2.0
    }
}

/// Result of a placement query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropCandidate<K> {
    /// Insert the dragged row immediately before this one
    Before(K),
    /// Append the dragged row after every other row
    End,
}

impl<K> From<Option<K>> for DropCandidate<K> {
    fn from(anchor: Option<K>) -> Self {
        match anchor {
            Some(key) => DropCandidate::Before(key),
            None => DropCandidate::End,
        }
    }
}

impl<K> DropCandidate<K> {
    pub fn anchor(self) -> Option<K> {
        match self {
            DropCandidate::Before(key) => Some(key),
            DropCandidate::End => None,
        }
    }
}

/// Find the nearest candidate whose midpoint lies below the pointer.
///
/// `candidates` must be in display order and must not contain the dragged
/// row. Returns `None` when the pointer is below every midpoint (or there
/// are no candidates), meaning "append at the end". Equal offsets resolve to
/// the earlier candidate.
pub fn compute_insertion_point<K, I>(candidates: I, pointer_y: f64) -> Option<K>
where
    I: IntoIterator<Item = (K, Extent)>,
{
    candidates
        .into_iter()
        .fold(None::<(f64, K)>, |closest, (key, extent)| {
            let offset = extent.midpoint_offset(pointer_y);
            match closest {
                Some((best, _)) if offset < 0.0 && offset > best => Some((offset, key)),
                None if offset < 0.0 => Some((offset, key)),
                other => other,
            }
        })
        .map(|(_, key)| key)
}

/// Placement strategy used by the drag bindings
pub trait ReorderEngine {
    fn insertion_point<K, I>(&self, candidates: I, pointer_y: f64) -> DropCandidate<K>
    where
        I: IntoIterator<Item = (K, Extent)>;
}

/// Midpoint comparison, as described on [`compute_insertion_point`]
#[derive(Clone, Copy, Debug, Default)]
pub struct MidpointEngine;

impl ReorderEngine for MidpointEngine {
    fn insertion_point<K, I>(&self, candidates: I, pointer_y: f64) -> DropCandidate<K>
    where
        I: IntoIterator<Item = (K, Extent)>,
    {
        compute_insertion_point(candidates, pointer_y).into()
    }
}
