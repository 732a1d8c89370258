use crate::Error;

/// Dense row-major 2D raster. `0` is background by convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
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

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }
}

impl<T: Clone> Grid<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let len = width.checked_mul(height).expect("grid size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }
}

impl<T: Copy> Grid<T> {
    /// Builds a grid from nested rows, e.g. parsed puzzle JSON.
    /// All rows must have the same length; an empty row list yields a 0x0 grid.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRows { row: y });
            }
            data.extend_from_slice(row);
        }

        Self::from_vec(width, height, data)
    }
}

impl<T: Copy + PartialEq> Grid<T> {
    /// Distinct cell values in ascending order.
    pub fn unique_values(&self) -> Vec<T>
    where
        T: Ord,
    {
        let mut vals: Vec<T> = self.data.clone();
        vals.sort_unstable();
        vals.dedup();
        vals
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::Error;

    #[test]
    fn from_vec_validates_length() {
        let err = Grid::from_vec(3, 2, vec![1u8; 5]).expect_err("wrong length");
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn row_and_get_indexing() {
        let g = Grid::from_vec(3, 2, vec![1u8, 2, 3, 4, 5, 6]).expect("valid grid");
        assert_eq!(g.row(0), &[1, 2, 3]);
        assert_eq!(g.row(1), &[4, 5, 6]);
        assert_eq!(g.get(2, 1), Some(&6));
        assert_eq!(g.get(3, 0), None);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![1u8, 2], vec![3]];
        let err = Grid::from_rows(&rows).expect_err("ragged rows");
        assert_eq!(err, Error::RaggedRows { row: 1 });
    }

    #[test]
    fn unique_values_sorted() {
        let g = Grid::from_vec(2, 2, vec![3u8, 0, 3, 1]).expect("valid grid");
        assert_eq!(g.unique_values(), vec![0, 1, 3]);
    }
}
