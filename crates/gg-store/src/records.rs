use gg_core::{BBox, ExampleId, GridObject, GroupId, GroupType, ObjectGroup, ObjectId, ShapeMask};

use crate::PropertySet;

/// Which grid of the example a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    InputObject,
    OutputObject,
    InputGroup,
    OutputGroup,
}

impl NodeClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InputObject => "input_object",
            Self::OutputObject => "output_object",
            Self::InputGroup => "input_group",
            Self::OutputGroup => "output_group",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeClass {
    AdjacentTo,
    SameShapeAs,
    InputContains,
    OutputContains,
}

impl EdgeClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdjacentTo => "adjacent_to",
            Self::SameShapeAs => "same_shape_as",
            Self::InputContains => "input_contains",
            Self::OutputContains => "output_contains",
        }
    }
}

/// One row of an object node table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    pub id: ObjectId,
    pub example_id: ExampleId,
    pub color: u8,
    pub shape: ShapeMask,
    pub bbox: BBox,
    pub adjacency: Vec<ObjectId>,
}

impl From<&GridObject> for ObjectRecord {
    fn from(obj: &GridObject) -> Self {
        Self {
            id: obj.id,
            example_id: obj.example_id,
            color: obj.color,
            shape: obj.shape.clone(),
            bbox: obj.bbox,
            adjacency: obj.adjacency.iter().copied().collect(),
        }
    }
}

/// One row of a group node table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRecord {
    pub id: GroupId,
    pub example_id: ExampleId,
    pub kind: GroupType,
    pub size: usize,
}

impl From<&ObjectGroup> for GroupRecord {
    fn from(group: &ObjectGroup) -> Self {
        Self {
            id: group.id,
            example_id: group.example_id,
            kind: group.kind,
            size: group.size(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub src: u32,
    pub class: EdgeClass,
    pub dst: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeEntry {
    pub id: u32,
    pub class: NodeClass,
}

/// Complete node and edge listing for downstream inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphListing {
    pub nodes: Vec<NodeEntry>,
    pub edges: Vec<EdgeRecord>,
}

/// Property overlap of one (input object, output object) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedProperties {
    pub input_id: ObjectId,
    pub output_id: ObjectId,
    pub matching: PropertySet,
    /// Weighted similarity in `[0, 1]`.
    pub similarity: f64,
}

impl SharedProperties {
    pub fn num_matching(&self) -> usize {
        self.matching.len()
    }
}
