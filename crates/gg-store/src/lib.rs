//! Typed per-task graph store.
//!
//! One store instance belongs to exactly one puzzle task. The lifecycle is
//! create → populate → query: [`GraphStore::create_schema`] must run once
//! before any write, a second call on the same instance is a typed error, and
//! a new task gets a fresh store rather than a reset.
//!
//! Nodes live in four tables (`input_object`, `output_object`, `input_group`,
//! `output_group`) keyed by id; duplicate ids within a table are rejected.
//! Edges (`adjacent_to`, `same_shape_as`, `input_contains`/`output_contains`)
//! are appended in insertion order and returned verbatim by
//! [`GraphStore::get_graph`].
//!
//! Query failures propagate as [`gg_core::Error`]; an example with no objects
//! is not a failure and yields empty result sets.

mod property;
mod records;
mod store;

pub use property::{Property, PropertySet};
pub use records::{
    EdgeClass, EdgeRecord, GraphListing, GroupRecord, NodeClass, NodeEntry, ObjectRecord,
    SharedProperties, Side,
};
pub use store::GraphStore;
