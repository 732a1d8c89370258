//! Shape extraction and shape-invariant predicates.
//!
//! Shapes are binary masks cropped tight to the object's bounding box
//! ([`gg_core::ShapeMask`]). Predicates compare masks by dimensions and
//! cell-wise values.
//!
//! Conventions:
//! - Two absent (`0x0`) shapes are equal to each other and never equal to a
//!   non-empty shape.
//! - [`is_rotation`] excludes the 0° identity, so it is `false` for any pair
//!   of identical masks, including fully symmetric ones.
//! - [`is_flip`] likewise excludes identity and covers the horizontal,
//!   vertical, main-diagonal and anti-diagonal reflections.
//! - [`is_scaled_quadratic`] is an exact nearest-neighbor 2x upscale check.

use std::collections::BTreeMap;

use gg_core::{BBox, Grid, ObjectId, ShapeMask};

/// Crops every labeled object of `labels` to its bounding box and returns
/// `(bbox, binary shape)` per object id. Background (`0`) contributes nothing.
pub fn extract_shapes(labels: &Grid<ObjectId>) -> BTreeMap<ObjectId, (BBox, ShapeMask)> {
    // (min_x, min_y, max_x, max_y) per label.
    let mut bounds: BTreeMap<ObjectId, (usize, usize, usize, usize)> = BTreeMap::new();

    for y in 0..labels.height() {
        for (x, &label) in labels.row(y).iter().enumerate() {
            if label == 0 {
                continue;
            }
            let entry = bounds.entry(label).or_insert((x, y, x, y));
            entry.0 = entry.0.min(x);
            entry.1 = entry.1.min(y);
            entry.2 = entry.2.max(x);
            entry.3 = entry.3.max(y);
        }
    }

    let mut shapes = BTreeMap::new();
    for (label, (min_x, min_y, max_x, max_y)) in bounds {
        let width = max_x - min_x + 1;
        let height = max_y - min_y + 1;

        let mut cells = Vec::with_capacity(width * height);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let set = labels.get(x, y).is_some_and(|&v| v == label);
                cells.push(u8::from(set));
            }
        }

        let mask = ShapeMask::from_vec(width, height, cells)
            .expect("bbox dimensions match collected cells");
        let bbox = BBox {
            x: min_x,
            y: min_y,
            width,
            height,
        };
        shapes.insert(label, (bbox, mask));
    }

    shapes
}

/// Rotates a mask 90° clockwise.
pub fn rotate90(mask: &ShapeMask) -> ShapeMask {
    let (w, h) = (mask.width(), mask.height());
    let mut cells = Vec::with_capacity(w * h);
    for y in 0..w {
        for x in 0..h {
            cells.push(mask.get(y, h - 1 - x).unwrap_or(0));
        }
    }
    ShapeMask::from_vec(h, w, cells).expect("rotated dimensions match")
}

/// Mirrors a mask left-right.
pub fn flip_horizontal(mask: &ShapeMask) -> ShapeMask {
    let (w, h) = (mask.width(), mask.height());
    let mut cells = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            cells.push(mask.get(w - 1 - x, y).unwrap_or(0));
        }
    }
    ShapeMask::from_vec(w, h, cells).expect("flipped dimensions match")
}

/// Mirrors a mask top-bottom.
pub fn flip_vertical(mask: &ShapeMask) -> ShapeMask {
    let (w, h) = (mask.width(), mask.height());
    let mut cells = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            cells.push(mask.get(x, h - 1 - y).unwrap_or(0));
        }
    }
    ShapeMask::from_vec(w, h, cells).expect("flipped dimensions match")
}

/// Reflects a mask across the main diagonal.
pub fn transpose(mask: &ShapeMask) -> ShapeMask {
    let (w, h) = (mask.width(), mask.height());
    let mut cells = Vec::with_capacity(w * h);
    for y in 0..w {
        for x in 0..h {
            cells.push(mask.get(y, x).unwrap_or(0));
        }
    }
    ShapeMask::from_vec(h, w, cells).expect("transposed dimensions match")
}

/// Reflects a mask across the anti-diagonal (180° rotation, then transpose).
pub fn anti_transpose(mask: &ShapeMask) -> ShapeMask {
    let (w, h) = (mask.width(), mask.height());
    let mut cells = Vec::with_capacity(w * h);
    for y in 0..w {
        for x in 0..h {
            cells.push(mask.get(w - 1 - y, h - 1 - x).unwrap_or(0));
        }
    }
    ShapeMask::from_vec(h, w, cells).expect("transposed dimensions match")
}

/// Equal dimensions and equal cells. Absent shapes are mutually equal and
/// never equal to a non-empty shape.
pub fn is_same_shape(a: &ShapeMask, b: &ShapeMask) -> bool {
    if a.is_empty() || b.is_empty() {
        return a.is_empty() && b.is_empty();
    }
    a == b
}

/// True iff `b` equals `a` rotated by 90°, 180° or 270°. The identity is
/// excluded: identical masks (including fully symmetric ones) never match.
pub fn is_rotation(a: &ShapeMask, b: &ShapeMask) -> bool {
    if a == b {
        return false;
    }

    let mut rotated = rotate90(a);
    for _ in 0..3 {
        if rotated == *b {
            return true;
        }
        rotated = rotate90(&rotated);
    }
    false
}

/// True iff `b` equals `a` reflected horizontally, vertically, or across
/// either diagonal. Identity excluded.
pub fn is_flip(a: &ShapeMask, b: &ShapeMask) -> bool {
    if a == b {
        return false;
    }

    flip_horizontal(a) == *b
        || flip_vertical(a) == *b
        || transpose(a) == *b
        || anti_transpose(a) == *b
}

/// True iff `b` is exactly the 2x nearest-neighbor upscale of `a`: both
/// dimensions doubled and every 2x2 block of `b` uniformly filled or empty
/// matching the corresponding cell of `a`.
pub fn is_scaled_quadratic(a: &ShapeMask, b: &ShapeMask) -> bool {
    if b.width() != 2 * a.width() || b.height() != 2 * a.height() {
        return false;
    }

    for y in 0..a.height() {
        for x in 0..a.width() {
            let want = a.get(x, y).unwrap_or(0);
            for dy in 0..2 {
                for dx in 0..2 {
                    if b.get(2 * x + dx, 2 * y + dy).unwrap_or(0) != want {
                        return false;
                    }
                }
            }
        }
    }
    true
}

/// [`is_scaled_quadratic`] with the roles swapped: `b` downscales onto `a`.
pub fn is_scaled_quadratic_inverse(a: &ShapeMask, b: &ShapeMask) -> bool {
    is_scaled_quadratic(b, a)
}

/// True iff the set-cell count of `a` is divisible by that of `b`.
/// A zero-sized `b` relates to nothing, so the result is `false`, not an error.
pub fn size_mod_is_zero(a: &ShapeMask, b: &ShapeMask) -> bool {
    let nb = b.count_ones();
    if nb == 0 {
        return false;
    }
    a.count_ones() % nb == 0
}
