use std::collections::{BTreeMap, BTreeSet};

use gg_core::ObjectId;
use gg_store::{PropertySet, SharedProperties};

use crate::hungarian::minimum_cost_assignment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    Matched,
    Unmatched,
}

/// One output object's verdict from the optimal assignment.
///
/// `input_id` is `None` exactly when `status` is
/// [`MatchStatus::Unmatched`]; unmatched outputs carry similarity `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    pub input_id: Option<ObjectId>,
    pub output_id: ObjectId,
    pub similarity: f64,
    pub status: MatchStatus,
}

/// Optimal one-to-one correspondence between input and output objects.
///
/// Builds a dense similarity matrix over the sorted unique ids found in
/// `records`, zero-pads it square, and solves a maximum-similarity perfect
/// matching. Accepted matches need similarity at or above `threshold`; every
/// other output object is reported as an explicit unmatched record, so each
/// output id appears in the result exactly once.
pub fn optimal_one_to_one_assignment(
    records: &[SharedProperties],
    threshold: f64,
) -> Vec<Assignment> {
    if records.is_empty() {
        return Vec::new();
    }

    let input_ids: Vec<ObjectId> = records
        .iter()
        .map(|r| r.input_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let output_ids: Vec<ObjectId> = records
        .iter()
        .map(|r| r.output_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let input_index: BTreeMap<ObjectId, usize> =
        input_ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let output_index: BTreeMap<ObjectId, usize> =
        output_ids.iter().enumerate().map(|(j, &id)| (id, j)).collect();

    // Pad to a square so a perfect matching always exists; padded cells keep
    // similarity 0 and are filtered out below.
    let n = input_ids.len().max(output_ids.len());
    let mut similarity = vec![0.0f64; n * n];
    for record in records {
        let i = input_index[&record.input_id];
        let j = output_index[&record.output_id];
        similarity[i * n + j] = record.similarity;
    }

    let cost: Vec<f64> = similarity.iter().map(|s| -s).collect();
    let columns = minimum_cost_assignment(&cost, n);

    let mut assignments = Vec::new();
    let mut covered = vec![false; output_ids.len()];
    for (i, &j) in columns.iter().enumerate() {
        if i >= input_ids.len() || j >= output_ids.len() {
            continue;
        }
        let sim = similarity[i * n + j];
        if sim >= threshold {
            covered[j] = true;
            assignments.push(Assignment {
                input_id: Some(input_ids[i]),
                output_id: output_ids[j],
                similarity: sim,
                status: MatchStatus::Matched,
            });
        }
    }

    for (j, &output_id) in output_ids.iter().enumerate() {
        if !covered[j] {
            assignments.push(Assignment {
                input_id: None,
                output_id,
                similarity: 0.0,
                status: MatchStatus::Unmatched,
            });
        }
    }
    assignments
}

/// Properties that differ within one accepted match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsharedProperties {
    pub input_id: ObjectId,
    pub output_id: ObjectId,
    pub unshared: PropertySet,
}

/// For each accepted match, the complement of its matching property set.
///
/// Pairs with no corresponding similarity record report every property as
/// unshared. Unmatched assignments are skipped.
pub fn unshared_properties(
    records: &[SharedProperties],
    assignments: &[Assignment],
) -> Vec<UnsharedProperties> {
    let by_pair: BTreeMap<(ObjectId, ObjectId), PropertySet> = records
        .iter()
        .map(|r| ((r.input_id, r.output_id), r.matching))
        .collect();

    assignments
        .iter()
        .filter_map(|a| {
            let input_id = a.input_id?;
            let matching = by_pair
                .get(&(input_id, a.output_id))
                .copied()
                .unwrap_or_else(PropertySet::empty);
            Some(UnsharedProperties {
                input_id,
                output_id: a.output_id,
                unshared: matching.complement(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use gg_store::Property;

    use super::*;

    fn pair(input_id: ObjectId, output_id: ObjectId, similarity: f64) -> SharedProperties {
        SharedProperties {
            input_id,
            output_id,
            matching: PropertySet::empty(),
            similarity,
        }
    }

    fn full_bipartite(inputs: &[ObjectId], outputs: &[ObjectId], diag: f64) -> Vec<SharedProperties> {
        let mut records = Vec::new();
        for (i, &input_id) in inputs.iter().enumerate() {
            for (j, &output_id) in outputs.iter().enumerate() {
                let sim = if i == j { diag } else { 0.1 };
                records.push(pair(input_id, output_id, sim));
            }
        }
        records
    }

    #[test]
    fn empty_records_yield_empty_result() {
        assert!(optimal_one_to_one_assignment(&[], 0.2).is_empty());
    }

    #[test]
    fn square_case_matches_everything() {
        let inputs = [11_001, 11_002, 12_001];
        let outputs = [11_001, 11_002, 12_001];
        let records = full_bipartite(&inputs, &outputs, 0.9);
        let assignments = optimal_one_to_one_assignment(&records, 0.2);
        assert_eq!(assignments.len(), 3);
        for a in &assignments {
            assert_eq!(a.status, MatchStatus::Matched);
            assert_eq!(a.input_id, Some(a.output_id));
            assert_eq!(a.similarity, 0.9);
        }
    }

    #[test]
    fn surplus_outputs_become_unmatched() {
        let inputs = [11_001, 11_002, 11_003];
        let outputs = [11_001, 11_002, 11_003, 12_001, 12_002];
        let records = full_bipartite(&inputs, &outputs, 0.8);
        let assignments = optimal_one_to_one_assignment(&records, 0.2);
        assert_eq!(assignments.len(), 5);

        let matched: Vec<_> = assignments
            .iter()
            .filter(|a| a.status == MatchStatus::Matched)
            .collect();
        let unmatched: Vec<_> = assignments
            .iter()
            .filter(|a| a.status == MatchStatus::Unmatched)
            .collect();
        assert_eq!(matched.len(), 3);
        assert_eq!(unmatched.len(), 2);
        for a in &unmatched {
            assert_eq!(a.input_id, None);
            assert_eq!(a.similarity, 0.0);
        }

        // Every output id appears exactly once across the result.
        let mut seen: Vec<ObjectId> = assignments.iter().map(|a| a.output_id).collect();
        seen.sort_unstable();
        assert_eq!(seen, outputs.to_vec());
    }

    #[test]
    fn below_threshold_matches_are_reclassified() {
        let records = vec![
            pair(11_001, 11_001, 0.9),
            pair(11_001, 11_002, 0.1),
            pair(11_002, 11_001, 0.1),
            pair(11_002, 11_002, 0.15),
        ];
        let assignments = optimal_one_to_one_assignment(&records, 0.2);
        assert_eq!(assignments.len(), 2);

        let matched: Vec<_> = assignments
            .iter()
            .filter(|a| a.status == MatchStatus::Matched)
            .collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].input_id, Some(11_001));
        assert_eq!(matched[0].output_id, 11_001);

        let unmatched: Vec<_> = assignments
            .iter()
            .filter(|a| a.status == MatchStatus::Unmatched)
            .collect();
        assert_eq!(unmatched.len(), 1);
        assert_eq!(unmatched[0].output_id, 11_002);
        assert_eq!(unmatched[0].input_id, None);
    }

    #[test]
    fn assignment_maximizes_total_similarity() {
        // Greedy would pair 11_001 with 11_001 (0.9) and leave 11_002 with
        // 0.0; the optimal pairing is the off-diagonal with total 1.5.
        let records = vec![
            pair(11_001, 11_001, 0.9),
            pair(11_001, 11_002, 0.7),
            pair(11_002, 11_001, 0.8),
            pair(11_002, 11_002, 0.0),
        ];
        let assignments = optimal_one_to_one_assignment(&records, 0.2);
        let matched: BTreeMap<_, _> = assignments
            .iter()
            .filter_map(|a| a.input_id.map(|i| (i, a.output_id)))
            .collect();
        assert_eq!(matched[&11_001], 11_002);
        assert_eq!(matched[&11_002], 11_001);
    }

    #[test]
    fn unshared_complements_the_matching_set() {
        let mut matching = PropertySet::empty();
        matching.insert(Property::Color);
        matching.insert(Property::Shape);
        let records = vec![SharedProperties {
            input_id: 11_001,
            output_id: 11_001,
            matching,
            similarity: 0.4,
        }];
        let assignments = optimal_one_to_one_assignment(&records, 0.2);
        let unshared = unshared_properties(&records, &assignments);
        assert_eq!(unshared.len(), 1);
        assert!(!unshared[0].unshared.contains(Property::Color));
        assert!(!unshared[0].unshared.contains(Property::Shape));
        assert!(unshared[0].unshared.contains(Property::BboxX));
        assert!(unshared[0].unshared.contains(Property::BboxY));
        assert!(unshared[0].unshared.contains(Property::BboxWidth));
        assert!(unshared[0].unshared.contains(Property::BboxHeight));
    }

    #[test]
    fn unshared_skips_unmatched_assignments() {
        let records = vec![pair(11_001, 11_001, 0.05)];
        let assignments = optimal_one_to_one_assignment(&records, 0.2);
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].status, MatchStatus::Unmatched);
        assert!(unshared_properties(&records, &assignments).is_empty());
    }
}
