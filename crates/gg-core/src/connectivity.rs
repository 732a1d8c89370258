const OFFSETS_DIRECT: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const OFFSETS_DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
const OFFSETS_EIGHT_WAY: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Structuring pattern for component labeling and mask dilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Orthogonal neighbors only (4-neighbor cross).
    #[default]
    Direct,
    /// The four diagonal corners only.
    Diagonal,
    /// All eight neighbors.
    EightWay,
}

impl Connectivity {
    /// Neighbor offsets as `(dx, dy)` pairs.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Self::Direct => &OFFSETS_DIRECT,
            Self::Diagonal => &OFFSETS_DIAGONAL,
            Self::EightWay => &OFFSETS_EIGHT_WAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Connectivity;

    #[test]
    fn offset_counts() {
        assert_eq!(Connectivity::Direct.offsets().len(), 4);
        assert_eq!(Connectivity::Diagonal.offsets().len(), 4);
        assert_eq!(Connectivity::EightWay.offsets().len(), 8);
    }

    #[test]
    fn diagonal_has_no_orthogonal_offsets() {
        for &(dx, dy) in Connectivity::Diagonal.offsets() {
            assert!(dx != 0 && dy != 0);
        }
    }
}
