use crate::Error;

/// Binary mask cropped to an object's bounding box.
///
/// Cells are stored as `0`/`1` row-major. A `0x0` mask is the canonical
/// "absent shape"; extraction never produces a non-empty mask without at
/// least one set cell, since the crop is tight.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeMask {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ShapeMask {
    /// Builds a mask from raw cells; any nonzero value is normalized to `1`.
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        let data = data.into_iter().map(|v| u8::from(v != 0)).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// The absent shape.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Number of set cells.
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Mean `(x, y)` of set cells, or `None` for a mask with no set cells.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        let mut n = 0usize;
        let mut sx = 0.0;
        let mut sy = 0.0;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.data[y * self.width + x] != 0 {
                    n += 1;
                    sx += x as f64;
                    sy += y as f64;
                }
            }
        }

        if n == 0 {
            return None;
        }
        Some((sx / n as f64, sy / n as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::ShapeMask;

    #[test]
    fn normalizes_nonzero_cells() {
        let m = ShapeMask::from_vec(2, 1, vec![5, 0]).expect("valid mask");
        assert_eq!(m.data(), &[1, 0]);
        assert_eq!(m.count_ones(), 1);
    }

    #[test]
    fn empty_mask_properties() {
        let m = ShapeMask::empty();
        assert!(m.is_empty());
        assert_eq!(m.count_ones(), 0);
        assert_eq!(m.centroid(), None);
    }

    #[test]
    fn centroid_of_symmetric_mask() {
        let m = ShapeMask::from_vec(3, 3, vec![1, 0, 1, 0, 0, 0, 1, 0, 1]).expect("valid mask");
        assert_eq!(m.centroid(), Some((1.0, 1.0)));
    }
}
