use gg_core::{ExampleId, Grid, GridObject};
use gg_shape::extract_shapes;

use crate::adjacency::{AdjacencyConfig, object_adjacency};
use crate::label::{LabelConfig, label_components};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractConfig {
    pub label: LabelConfig,
    pub adjacency: AdjacencyConfig,
}

/// Runs the full per-grid pipeline: label, crop shapes, compute adjacency,
/// and assemble [`GridObject`] records sorted by id.
pub fn extract_objects(
    grid: &Grid<u8>,
    example_id: ExampleId,
    cfg: &ExtractConfig,
) -> Vec<GridObject> {
    let labels = label_components(grid, example_id, &cfg.label);
    let shapes = extract_shapes(&labels);
    let mut adjacency = object_adjacency(&labels, &cfg.adjacency);

    let mut objects = Vec::with_capacity(shapes.len());
    for (id, (bbox, shape)) in shapes {
        // Id encoding: color occupies the thousands band below the example band.
        let color = ((id % 10_000) / 1_000) as u8;
        let neighbors = adjacency.remove(&id).unwrap_or_default();

        objects.push(GridObject {
            id,
            example_id,
            color,
            shape,
            bbox,
            adjacency: neighbors,
        });
    }

    objects
}
