use std::collections::BTreeMap;

use gg_core::{Error, ExampleId, GroupId, ObjectId};

use crate::property::{Property, PropertySet};
use crate::records::{
    EdgeClass, EdgeRecord, GraphListing, GroupRecord, NodeClass, NodeEntry, ObjectRecord,
    SharedProperties, Side,
};

/// Embedded, process-local graph store. One instance per task; writes happen
/// once during ingestion and records are never mutated afterwards.
#[derive(Debug, Default)]
pub struct GraphStore {
    schema_created: bool,
    input_objects: BTreeMap<ObjectId, ObjectRecord>,
    output_objects: BTreeMap<ObjectId, ObjectRecord>,
    input_groups: BTreeMap<GroupId, GroupRecord>,
    output_groups: BTreeMap<GroupId, GroupRecord>,
    edges: Vec<EdgeRecord>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepares the node and edge tables. Calling this twice on one instance
    /// is an error: a used store is never silently reused across tasks.
    pub fn create_schema(&mut self) -> Result<(), Error> {
        if self.schema_created {
            return Err(Error::SchemaAlreadyCreated);
        }
        self.schema_created = true;
        Ok(())
    }

    fn require_schema(&self) -> Result<(), Error> {
        if !self.schema_created {
            return Err(Error::SchemaNotCreated);
        }
        Ok(())
    }

    fn objects(&self, side: Side) -> &BTreeMap<ObjectId, ObjectRecord> {
        match side {
            Side::Input => &self.input_objects,
            Side::Output => &self.output_objects,
        }
    }

    fn groups(&self, side: Side) -> &BTreeMap<GroupId, GroupRecord> {
        match side {
            Side::Input => &self.input_groups,
            Side::Output => &self.output_groups,
        }
    }

    pub fn insert_object(&mut self, side: Side, record: ObjectRecord) -> Result<(), Error> {
        self.require_schema()?;

        let table = match side {
            Side::Input => &mut self.input_objects,
            Side::Output => &mut self.output_objects,
        };
        if table.contains_key(&record.id) {
            return Err(Error::DuplicateNode { id: record.id });
        }
        table.insert(record.id, record);
        Ok(())
    }

    pub fn insert_group(&mut self, side: Side, record: GroupRecord) -> Result<(), Error> {
        self.require_schema()?;

        let table = match side {
            Side::Input => &mut self.input_groups,
            Side::Output => &mut self.output_groups,
        };
        if table.contains_key(&record.id) {
            return Err(Error::DuplicateNode { id: record.id });
        }
        table.insert(record.id, record);
        Ok(())
    }

    /// Membership edge from a group to an object of the same side. Both
    /// endpoints must already exist.
    pub fn insert_contains_relationship(
        &mut self,
        side: Side,
        group_id: GroupId,
        object_id: ObjectId,
    ) -> Result<(), Error> {
        self.require_schema()?;

        if !self.groups(side).contains_key(&group_id) {
            return Err(Error::UnknownNode { id: group_id });
        }
        if !self.objects(side).contains_key(&object_id) {
            return Err(Error::UnknownNode { id: object_id });
        }

        let class = match side {
            Side::Input => EdgeClass::InputContains,
            Side::Output => EdgeClass::OutputContains,
        };
        self.edges.push(EdgeRecord {
            src: group_id,
            class,
            dst: object_id,
        });
        Ok(())
    }

    /// Directed adjacency edge between two objects of the same side.
    /// Symmetric intent: ingestion writes both directions.
    pub fn insert_adjacency_edge(
        &mut self,
        side: Side,
        from: ObjectId,
        to: ObjectId,
    ) -> Result<(), Error> {
        self.insert_object_edge(side, EdgeClass::AdjacentTo, from, to)
    }

    /// Directed same-shape edge between two objects of the same side.
    /// Symmetric intent: ingestion writes both directions.
    pub fn insert_same_shape_edge(
        &mut self,
        side: Side,
        from: ObjectId,
        to: ObjectId,
    ) -> Result<(), Error> {
        self.insert_object_edge(side, EdgeClass::SameShapeAs, from, to)
    }

    fn insert_object_edge(
        &mut self,
        side: Side,
        class: EdgeClass,
        from: ObjectId,
        to: ObjectId,
    ) -> Result<(), Error> {
        self.require_schema()?;

        for id in [from, to] {
            if !self.objects(side).contains_key(&id) {
                return Err(Error::UnknownNode { id });
            }
        }
        self.edges.push(EdgeRecord {
            src: from,
            class,
            dst: to,
        });
        Ok(())
    }

    /// Property overlap for every (input object, output object) pair of one
    /// example: the full bipartite pair set, in ascending (input, output) id
    /// order. `batch_size` is the flush granularity of the row accumulator.
    pub fn get_shared_properties(
        &self,
        example_id: ExampleId,
        batch_size: usize,
    ) -> Result<Vec<SharedProperties>, Error> {
        self.require_schema()?;

        let inputs = self
            .input_objects
            .values()
            .filter(|o| o.example_id == example_id);

        let mut matches = Vec::new();
        let mut batch = Vec::new();
        let batch_size = batch_size.max(1);

        for input in inputs {
            let outputs = self
                .output_objects
                .values()
                .filter(|o| o.example_id == example_id);
            for output in outputs {
                batch.push(compare_records(input, output));
                if batch.len() >= batch_size {
                    matches.append(&mut batch);
                }
            }
        }

        matches.append(&mut batch);
        Ok(matches)
    }

    /// The same overlap computation between the *input* objects of two
    /// different examples. Comparing an example with itself yields nothing.
    pub fn shared_properties_across_input(
        &self,
        example_a: ExampleId,
        example_b: ExampleId,
        batch_size: usize,
    ) -> Result<Vec<SharedProperties>, Error> {
        self.require_schema()?;

        if example_a == example_b {
            return Ok(Vec::new());
        }

        let left = self
            .input_objects
            .values()
            .filter(|o| o.example_id == example_a);

        let mut matches = Vec::new();
        let mut batch = Vec::new();
        let batch_size = batch_size.max(1);

        for a in left {
            let right = self
                .input_objects
                .values()
                .filter(|o| o.example_id == example_b);
            for b in right {
                batch.push(compare_records(a, b));
                if batch.len() >= batch_size {
                    matches.append(&mut batch);
                }
            }
        }

        matches.append(&mut batch);
        Ok(matches)
    }

    /// Complete node and edge listing: objects first, then groups, with edges
    /// in insertion order.
    pub fn get_graph(&self) -> Result<GraphListing, Error> {
        self.require_schema()?;

        let mut nodes = Vec::new();
        for (&id, _) in &self.input_objects {
            nodes.push(NodeEntry {
                id,
                class: NodeClass::InputObject,
            });
        }
        for (&id, _) in &self.output_objects {
            nodes.push(NodeEntry {
                id,
                class: NodeClass::OutputObject,
            });
        }
        for (&id, _) in &self.input_groups {
            nodes.push(NodeEntry {
                id,
                class: NodeClass::InputGroup,
            });
        }
        for (&id, _) in &self.output_groups {
            nodes.push(NodeEntry {
                id,
                class: NodeClass::OutputGroup,
            });
        }

        Ok(GraphListing {
            nodes,
            edges: self.edges.clone(),
        })
    }
}

fn compare_records(a: &ObjectRecord, b: &ObjectRecord) -> SharedProperties {
    let mut matching = PropertySet::empty();
    if a.color == b.color {
        matching.insert(Property::Color);
    }
    if a.bbox.x == b.bbox.x {
        matching.insert(Property::BboxX);
    }
    if a.bbox.y == b.bbox.y {
        matching.insert(Property::BboxY);
    }
    if a.bbox.width == b.bbox.width {
        matching.insert(Property::BboxWidth);
    }
    if a.bbox.height == b.bbox.height {
        matching.insert(Property::BboxHeight);
    }
    if a.shape == b.shape {
        matching.insert(Property::Shape);
    }

    SharedProperties {
        input_id: a.id,
        output_id: b.id,
        matching,
        similarity: matching.similarity(),
    }
}
