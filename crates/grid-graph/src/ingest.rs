use gg_core::{Error, ExampleId, Grid, GridObject};
use gg_group::{GroupConfig, build_groups};
use gg_label::{ExtractConfig, extract_objects};
use gg_shape::is_same_shape;
use gg_store::{GraphStore, GroupRecord, ObjectRecord, Side};

/// One train pair of a puzzle task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub input: Grid<u8>,
    pub output: Grid<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestConfig {
    pub extract: ExtractConfig,
    pub group: GroupConfig,
}

/// Runs the full ingestion pipeline for one task: extracts objects and groups
/// from every example grid and populates a fresh [`GraphStore`].
///
/// Examples are numbered from 1 in list order, so ids are reproducible for a
/// given task. Both grids of an example share its example id; the store keeps
/// input and output nodes in separate tables.
pub fn ingest_task(examples: &[Example], cfg: &IngestConfig) -> Result<GraphStore, Error> {
    let mut store = GraphStore::new();
    store.create_schema()?;

    for (index, example) in examples.iter().enumerate() {
        let example_id = index as ExampleId + 1;
        ingest_grid(&mut store, Side::Input, &example.input, example_id, cfg)?;
        ingest_grid(&mut store, Side::Output, &example.output, example_id, cfg)?;
    }

    Ok(store)
}

fn ingest_grid(
    store: &mut GraphStore,
    side: Side,
    grid: &Grid<u8>,
    example_id: ExampleId,
    cfg: &IngestConfig,
) -> Result<(), Error> {
    let objects = extract_objects(grid, example_id, &cfg.extract);

    for obj in &objects {
        store.insert_object(side, ObjectRecord::from(obj))?;
    }

    // Adjacency sets are symmetric, so writing each directed entry once
    // covers both directions of every neighbor pair.
    for obj in &objects {
        for &neighbor in &obj.adjacency {
            store.insert_adjacency_edge(side, obj.id, neighbor)?;
        }
    }

    same_shape_edges(store, side, &objects)?;

    let groups = build_groups(&objects, example_id, &cfg.group);
    for group in &groups {
        store.insert_group(side, GroupRecord::from(group))?;
        for &member in &group.members {
            store.insert_contains_relationship(side, group.id, member)?;
        }
    }

    Ok(())
}

fn same_shape_edges(
    store: &mut GraphStore,
    side: Side,
    objects: &[GridObject],
) -> Result<(), Error> {
    for (i, a) in objects.iter().enumerate() {
        for b in objects.iter().skip(i + 1) {
            if is_same_shape(&a.shape, &b.shape) {
                store.insert_same_shape_edge(side, a.id, b.id)?;
                store.insert_same_shape_edge(side, b.id, a.id)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use gg_core::Grid;
    use gg_match::{MatchStatus, optimal_one_to_one_assignment};
    use gg_store::{EdgeClass, NodeClass};

    use super::{Example, IngestConfig, ingest_task};

    fn example(input: &[Vec<u8>], output: &[Vec<u8>]) -> Example {
        Example {
            input: Grid::from_rows(input).expect("valid input grid"),
            output: Grid::from_rows(output).expect("valid output grid"),
        }
    }

    #[test]
    fn populates_all_node_and_edge_classes() {
        // Input: a 3-pixel L of color 1 plus an isolated color-2 dot.
        // Output: the same L alone.
        let task = vec![example(
            &[vec![1, 1, 0], vec![1, 0, 0], vec![0, 0, 2]],
            &[vec![1, 1, 0], vec![1, 0, 0], vec![0, 0, 0]],
        )];
        let store = ingest_task(&task, &IngestConfig::default()).expect("ingest");
        let listing = store.get_graph().expect("listing");

        let count = |class: NodeClass| listing.nodes.iter().filter(|n| n.class == class).count();
        assert_eq!(count(NodeClass::InputObject), 2);
        assert_eq!(count(NodeClass::OutputObject), 1);
        // The dot falls below the pixel filter, so the L forms one group of
        // each kind except rotation (which needs two members).
        assert_eq!(count(NodeClass::InputGroup), 4);
        assert_eq!(count(NodeClass::OutputGroup), 4);

        let edges = |class: EdgeClass| listing.edges.iter().filter(|e| e.class == class).count();
        assert_eq!(edges(EdgeClass::AdjacentTo), 0);
        assert_eq!(edges(EdgeClass::SameShapeAs), 0);
        assert_eq!(edges(EdgeClass::InputContains), 4);
        assert_eq!(edges(EdgeClass::OutputContains), 4);
    }

    #[test]
    fn adjacency_and_same_shape_edges_come_in_pairs() {
        // Two touching 3-pixel bars of different colors, identical shape.
        let task = vec![example(
            &[vec![1, 1, 1], vec![2, 2, 2]],
            &[vec![0, 0, 0], vec![0, 0, 0]],
        )];
        let store = ingest_task(&task, &IngestConfig::default()).expect("ingest");
        let listing = store.get_graph().expect("listing");

        let adjacent: Vec<_> = listing
            .edges
            .iter()
            .filter(|e| e.class == EdgeClass::AdjacentTo)
            .collect();
        assert_eq!(adjacent.len(), 2);
        assert_eq!((adjacent[0].src, adjacent[0].dst), (11_001, 12_001));
        assert_eq!((adjacent[1].src, adjacent[1].dst), (12_001, 11_001));

        let same_shape: Vec<_> = listing
            .edges
            .iter()
            .filter(|e| e.class == EdgeClass::SameShapeAs)
            .collect();
        assert_eq!(same_shape.len(), 2);
    }

    #[test]
    fn examples_are_numbered_from_one() {
        let task = vec![
            example(&[vec![1, 1, 1]], &[vec![1, 1, 1]]),
            example(&[vec![2, 2, 2]], &[vec![2, 2, 2]]),
        ];
        let store = ingest_task(&task, &IngestConfig::default()).expect("ingest");
        let listing = store.get_graph().expect("listing");

        let input_ids: Vec<u32> = listing
            .nodes
            .iter()
            .filter(|n| n.class == NodeClass::InputObject)
            .map(|n| n.id)
            .collect();
        assert_eq!(input_ids, vec![11_001, 22_001]);
    }

    #[test]
    fn ingest_to_assignment_round_trip() {
        let task = vec![example(
            &[vec![1, 1, 0], vec![1, 0, 0], vec![0, 0, 2]],
            &[vec![1, 1, 0], vec![1, 0, 0], vec![0, 0, 0]],
        )];
        let store = ingest_task(&task, &IngestConfig::default()).expect("ingest");

        let records = store.get_shared_properties(1, 100).expect("query");
        // 2 inputs x 1 output.
        assert_eq!(records.len(), 2);

        let assignments = optimal_one_to_one_assignment(&records, 0.2);
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].status, MatchStatus::Matched);
        assert_eq!(assignments[0].input_id, Some(11_001));
        assert_eq!(assignments[0].output_id, 11_001);
        assert_eq!(assignments[0].similarity, 1.0);
    }

    #[test]
    fn empty_grids_ingest_cleanly() {
        let task = vec![example(&[vec![0, 0], vec![0, 0]], &[vec![0, 0], vec![0, 0]])];
        let store = ingest_task(&task, &IngestConfig::default()).expect("ingest");
        let listing = store.get_graph().expect("listing");
        assert!(listing.nodes.is_empty());
        assert!(listing.edges.is_empty());

        let records = store.get_shared_properties(1, 100).expect("query");
        assert!(records.is_empty());
    }
}
