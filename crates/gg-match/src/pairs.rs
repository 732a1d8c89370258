use std::collections::{BTreeMap, BTreeSet};

use gg_core::ObjectId;
use gg_store::SharedProperties;

/// Sorts descending by similarity, breaking ties by ascending
/// `(input_id, output_id)` so equal-similarity pairs come out in a stable
/// order.
fn sort_by_similarity(pairs: &mut [SharedProperties]) {
    pairs.sort_by(|a, b| {
        b.similarity
            .total_cmp(&a.similarity)
            .then(a.input_id.cmp(&b.input_id))
            .then(a.output_id.cmp(&b.output_id))
    });
}

/// Top `n` pairs with similarity at or above `threshold`, best first.
///
/// The same input or output object may appear in several returned pairs.
pub fn top_n_pairs_exact(
    records: &[SharedProperties],
    n: usize,
    threshold: f64,
) -> Vec<SharedProperties> {
    let mut pairs: Vec<SharedProperties> = records
        .iter()
        .filter(|r| r.similarity >= threshold)
        .copied()
        .collect();
    sort_by_similarity(&mut pairs);
    pairs.truncate(n);
    pairs
}

/// Like [`top_n_pairs_exact`], but each output object appears at most once:
/// walking the ranked list, a pair is skipped when its output id was already
/// claimed by a better pair.
pub fn top_n_pairs_unique_output(
    records: &[SharedProperties],
    n: usize,
    threshold: f64,
) -> Vec<SharedProperties> {
    let mut pairs: Vec<SharedProperties> = records
        .iter()
        .filter(|r| r.similarity >= threshold)
        .copied()
        .collect();
    sort_by_similarity(&mut pairs);

    let mut seen = BTreeSet::new();
    let mut picked = Vec::new();
    for pair in pairs {
        if picked.len() == n {
            break;
        }
        if seen.insert(pair.output_id) {
            picked.push(pair);
        }
    }
    picked
}

/// Best-scoring pair for every input object that has at least one record.
///
/// Ties keep the first record encountered, which for records in
/// `(input_id, output_id)` order means the lowest output id wins.
pub fn highest_similarity_pairs(
    records: &[SharedProperties],
) -> BTreeMap<ObjectId, SharedProperties> {
    let mut best: BTreeMap<ObjectId, SharedProperties> = BTreeMap::new();
    for record in records {
        match best.get(&record.input_id) {
            Some(current) if record.similarity <= current.similarity => {}
            _ => {
                best.insert(record.input_id, *record);
            }
        }
    }
    best
}

/// Merges record sets from several examples and returns the overall top `n`
/// pairs at or above `threshold`.
pub fn top_pairs_across_examples(
    record_sets: &[Vec<SharedProperties>],
    n: usize,
    threshold: f64,
) -> Vec<SharedProperties> {
    let mut pairs: Vec<SharedProperties> = record_sets
        .iter()
        .flatten()
        .filter(|r| r.similarity >= threshold)
        .copied()
        .collect();
    sort_by_similarity(&mut pairs);
    pairs.truncate(n);
    pairs
}
