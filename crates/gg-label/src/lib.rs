//! Connected-component labeling and dilation-based adjacency.
//!
//! Labeling runs once per non-background color: the color's pixel mask is
//! decomposed into connected components under the configured
//! [`Connectivity`](gg_core::Connectivity), and each component receives the
//! deterministic id `example_id * 10_000 + color * 1_000 + component_index`.
//! Component indices follow row-major discovery order, so re-running on the
//! same grid reproduces identical label grids.
//!
//! Adjacency dilates each object's binary mask by one pass of a (possibly
//! different) structuring pattern and collects the labels under the dilated
//! region, excluding background and the object itself. Single-sided dilation
//! does not guarantee symmetric neighbor sets (the diagonal pattern has no
//! center cell), so neighbor sets are mirrored at write time by default.

mod adjacency;
mod extract;
mod label;
mod morph;

pub use adjacency::{AdjacencyConfig, object_adjacency};
pub use extract::{ExtractConfig, extract_objects};
pub use label::{LabelConfig, label_components};
pub use morph::dilate_binary;
