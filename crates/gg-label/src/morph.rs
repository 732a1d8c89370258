use gg_core::{Connectivity, Grid};

/// One-pass binary dilation under the given structuring pattern.
///
/// A cell is set in the output if it is set in `mask` or any of its
/// structuring neighbors is set. Cells are treated as binary with
/// threshold `> 0`; outputs are `0` or `1`.
pub fn dilate_binary(mask: &Grid<u8>, connectivity: Connectivity) -> Grid<u8> {
    let (w, h) = (mask.width(), mask.height());
    let mut out = Grid::new_fill(w, h, 0u8);
    if w == 0 || h == 0 {
        return out;
    }

    let offsets = connectivity.offsets();

    for y in 0..h {
        for x in 0..w {
            let mut any_set = mask.get(x, y).is_some_and(|&v| v != 0);

            if !any_set {
                for &(dx, dy) in offsets {
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    if nx < 0 || ny < 0 {
                        continue;
                    }

                    if mask.get(nx as usize, ny as usize).is_some_and(|&v| v != 0) {
                        any_set = true;
                        break;
                    }
                }
            }

            if any_set {
                *out.get_mut(x, y).expect("in-bounds write in dilate_binary") = 1;
            }
        }
    }

    out
}
