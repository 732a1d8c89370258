use gg_core::{Connectivity, ExampleId, Grid, ObjectId, object_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelConfig {
    pub connectivity: Connectivity,
}

/// Labels connected components per color.
///
/// Background (`0`) is preserved; every other cell receives its component's
/// object id. A color absent from the grid contributes nothing; isolated
/// pixels form singleton components.
pub fn label_components(
    grid: &Grid<u8>,
    example_id: ExampleId,
    cfg: &LabelConfig,
) -> Grid<ObjectId> {
    let (w, h) = (grid.width(), grid.height());
    let mut out = Grid::new_fill(w, h, 0 as ObjectId);
    if w == 0 || h == 0 {
        return out;
    }

    let offsets = cfg.connectivity.offsets();

    for color in grid.unique_values() {
        if color == 0 {
            continue;
        }

        let mut component_index = 0u32;
        let mut stack = Vec::new();

        for y in 0..h {
            for x in 0..w {
                if grid.get(x, y) != Some(&color) || out.get(x, y) != Some(&0) {
                    continue;
                }

                component_index += 1;
                let id = object_id(example_id, color, component_index);

                stack.clear();
                stack.push((x, y));
                *out.get_mut(x, y).expect("in-bounds seed cell") = id;

                while let Some((cx, cy)) = stack.pop() {
                    for &(dx, dy) in offsets {
                        let nx = cx as isize + dx;
                        let ny = cy as isize + dy;
                        if nx < 0 || ny < 0 {
                            continue;
                        }

                        let (nx, ny) = (nx as usize, ny as usize);
                        if grid.get(nx, ny) == Some(&color) && out.get(nx, ny) == Some(&0) {
                            *out.get_mut(nx, ny).expect("in-bounds neighbor cell") = id;
                            stack.push((nx, ny));
                        }
                    }
                }
            }
        }
    }

    out
}
