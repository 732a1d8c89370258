use std::collections::BTreeSet;

use crate::{ExampleId, ObjectId};

pub type GroupId = u32;

/// How a group's members were selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupType {
    Color,
    Shape,
    ShapeColor,
    Rotation,
    CompositeObject,
}

impl GroupType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Shape => "shape",
            Self::ShapeColor => "shape_color",
            Self::Rotation => "rotation",
            Self::CompositeObject => "composite_object",
        }
    }
}

/// A derived grouping over one example's object set.
///
/// Invariant: `members` is never empty. Rotation groups additionally hold at
/// least two members; composite groups may be singletons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectGroup {
    pub id: GroupId,
    pub example_id: ExampleId,
    pub kind: GroupType,
    pub members: BTreeSet<ObjectId>,
}

impl ObjectGroup {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}
