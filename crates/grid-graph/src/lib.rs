//! Umbrella crate for the `grid-graph` workspace.
//!
//! Re-exports the foundational crates and adds the task-level ingestion
//! pipeline that turns a list of puzzle examples into a populated
//! [`GraphStore`].

pub use gg_core::*;
pub use gg_group::*;
pub use gg_label::*;
pub use gg_match::*;
pub use gg_shape::*;
pub use gg_store::*;

mod ingest;

pub use ingest::{Example, IngestConfig, ingest_task};
