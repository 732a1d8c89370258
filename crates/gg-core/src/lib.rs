//! Foundational primitives for grid-puzzle object analysis.
//!
//! ## Grids
//! A [`Grid`] is a dense row-major raster of small non-negative integers.
//! Cell value `0` is always background. Coordinates are `(x, y)` with `x`
//! the column and `y` the row; `(0, 0)` is the top-left cell.
//!
//! ## Connectivity
//! Pixel neighborhoods come in three flavors ([`Connectivity`]): the
//! 4-neighbor cross, the 4 diagonal corners only, and the full 8-neighbor
//! ring. The same structuring patterns drive both component labeling and
//! adjacency dilation.
//!
//! ## Identifiers
//! Object ids are deterministic:
//! `example_id * 10_000 + color * 1_000 + component_index`, with component
//! indices starting at 1 in row-major discovery order. Group ids are
//! sequential from `example_id * 10_000 + 1`. Re-running extraction on the
//! same task reproduces identical ids.

mod connectivity;
mod error;
mod grid;
mod group;
mod mask;
mod object;

pub use connectivity::Connectivity;
pub use error::Error;
pub use grid::Grid;
pub use group::{GroupId, GroupType, ObjectGroup};
pub use mask::ShapeMask;
pub use object::{BBox, ExampleId, GridObject, ObjectId, object_id};
