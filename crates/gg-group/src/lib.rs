//! Derives higher-order groupings from one example's object set.
//!
//! Five group kinds are produced, in this fixed order: color, shape,
//! shape+color, rotation, composite-object. Group ids are sequential from
//! `example_id * 10_000 + 1` across all kinds, so the numbering is
//! deterministic for a given object set.
//!
//! The minimum-pixel filter excludes trivially small objects from grouping;
//! the canonical default keeps objects with more than 2 pixels. Filtering
//! applies to group derivation only, never to object extraction.

use std::collections::{BTreeMap, BTreeSet};

use gg_core::{ExampleId, GridObject, GroupId, GroupType, ObjectGroup, ObjectId, ShapeMask};
use gg_shape::is_rotation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupConfig {
    /// Minimum set-cell count for an object to participate in grouping.
    pub min_pixels: usize,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self { min_pixels: 3 }
    }
}

/// Builds all five group kinds over `objects`.
///
/// Composite groups partition the (filtered) object set: every participating
/// object lands in exactly one, including singleton clusters. Rotation groups
/// are kept only when they hold at least two members.
pub fn build_groups(
    objects: &[GridObject],
    example_id: ExampleId,
    cfg: &GroupConfig,
) -> Vec<ObjectGroup> {
    let filtered: Vec<&GridObject> = objects
        .iter()
        .filter(|o| o.shape.count_ones() >= cfg.min_pixels)
        .collect();

    let kinds = [
        (GroupType::Color, color_groups(&filtered)),
        (GroupType::Shape, shape_groups(&filtered)),
        (GroupType::ShapeColor, shape_color_groups(&filtered)),
        (GroupType::Rotation, rotation_groups(&filtered)),
        (GroupType::CompositeObject, composite_groups(&filtered)),
    ];

    let mut groups = Vec::new();
    let mut next_id: GroupId = example_id * 10_000 + 1;
    for (kind, member_sets) in kinds {
        for members in member_sets {
            groups.push(ObjectGroup {
                id: next_id,
                example_id,
                kind,
                members,
            });
            next_id += 1;
        }
    }

    groups
}

fn color_groups(objects: &[&GridObject]) -> Vec<BTreeSet<ObjectId>> {
    let mut by_color: BTreeMap<u8, BTreeSet<ObjectId>> = BTreeMap::new();
    for obj in objects {
        by_color.entry(obj.color).or_default().insert(obj.id);
    }
    by_color.into_values().collect()
}

fn shape_groups(objects: &[&GridObject]) -> Vec<BTreeSet<ObjectId>> {
    let mut by_shape: BTreeMap<ShapeMask, BTreeSet<ObjectId>> = BTreeMap::new();
    for obj in objects {
        by_shape
            .entry(obj.shape.clone())
            .or_default()
            .insert(obj.id);
    }
    by_shape.into_values().collect()
}

fn shape_color_groups(objects: &[&GridObject]) -> Vec<BTreeSet<ObjectId>> {
    let mut by_key: BTreeMap<(ShapeMask, u8), BTreeSet<ObjectId>> = BTreeMap::new();
    for obj in objects {
        by_key
            .entry((obj.shape.clone(), obj.color))
            .or_default()
            .insert(obj.id);
    }
    by_key.into_values().collect()
}

/// Single greedy pass. Valid because true rotation equivalence is transitive:
/// once an object is absorbed into a group, no later seed can claim it.
fn rotation_groups(objects: &[&GridObject]) -> Vec<BTreeSet<ObjectId>> {
    let mut visited: BTreeSet<ObjectId> = BTreeSet::new();
    let mut groups = Vec::new();

    for (i, obj) in objects.iter().enumerate() {
        if visited.contains(&obj.id) {
            continue;
        }
        visited.insert(obj.id);

        let mut members = BTreeSet::from([obj.id]);
        for other in objects.iter().skip(i + 1) {
            if !visited.contains(&other.id) && is_rotation(&obj.shape, &other.shape) {
                members.insert(other.id);
                visited.insert(other.id);
            }
        }

        if members.len() >= 2 {
            groups.push(members);
        }
    }

    groups
}

/// Connected components of the adjacency graph via depth-first traversal,
/// restricted to the filtered object set.
fn composite_groups(objects: &[&GridObject]) -> Vec<BTreeSet<ObjectId>> {
    let adjacency: BTreeMap<ObjectId, &BTreeSet<ObjectId>> =
        objects.iter().map(|o| (o.id, &o.adjacency)).collect();

    let mut visited: BTreeSet<ObjectId> = BTreeSet::new();
    let mut groups = Vec::new();

    for &start in adjacency.keys() {
        if visited.contains(&start) {
            continue;
        }
        visited.insert(start);

        let mut component = BTreeSet::from([start]);
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            for &neighbor in adjacency[&id] {
                // Neighbors below the pixel filter are not part of any group.
                if adjacency.contains_key(&neighbor) && visited.insert(neighbor) {
                    component.insert(neighbor);
                    stack.push(neighbor);
                }
            }
        }

        groups.push(component);
    }

    groups
}
