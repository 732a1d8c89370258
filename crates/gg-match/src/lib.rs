//! Cross-grid object correspondence.
//!
//! Consumes the bipartite similarity records produced by
//! [`gg_store::GraphStore::get_shared_properties`] and computes either ranked
//! pair lists or an optimal one-to-one assignment.
//!
//! The assignment builds a dense similarity matrix over the sorted unique
//! input and output ids, zero-pads it to a square of size
//! `max(#inputs, #outputs)` so a perfect matching always exists, negates it
//! (the solver minimizes cost), and solves with the Hungarian algorithm.
//! Matches below the similarity threshold are reclassified as unmatched, and
//! every output not covered by an accepted match is emitted as an explicit
//! unmatched record. "No good matches" therefore surfaces as all-unmatched
//! records, never as an error.

mod assign;
mod hungarian;
mod pairs;

pub use assign::{
    Assignment, MatchStatus, UnsharedProperties, optimal_one_to_one_assignment,
    unshared_properties,
};
pub use hungarian::minimum_cost_assignment;
pub use pairs::{
    highest_similarity_pairs, top_n_pairs_exact, top_n_pairs_unique_output,
    top_pairs_across_examples,
};

/// Default acceptance threshold for the optimal assignment.
pub const DEFAULT_ASSIGNMENT_THRESHOLD: f64 = 0.2;

/// Default filter threshold for ranked pair lists.
pub const DEFAULT_PAIR_THRESHOLD: f64 = 0.1;
