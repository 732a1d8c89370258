use std::collections::BTreeSet;

use crate::ShapeMask;

pub type ObjectId = u32;
pub type ExampleId = u32;

/// Deterministic object id from its provenance.
///
/// Component indices start at 1; a 30x30 grid holds at most 900 components of
/// one color, so the `color * 1_000` band never overflows.
pub fn object_id(example_id: ExampleId, color: u8, component_index: u32) -> ObjectId {
    example_id * 10_000 + u32::from(color) * 1_000 + component_index
}

/// Bounding box in grid coordinates, `(x, y)` top-left inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// One extracted connected component of a single color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridObject {
    pub id: ObjectId,
    pub example_id: ExampleId,
    pub color: u8,
    pub shape: ShapeMask,
    pub bbox: BBox,
    pub adjacency: BTreeSet<ObjectId>,
}
