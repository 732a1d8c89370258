use std::collections::{BTreeMap, BTreeSet};

use gg_core::{Connectivity, Grid, ObjectId};

use crate::morph::dilate_binary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyConfig {
    pub connectivity: Connectivity,
    /// Mirror every neighbor relation before returning. Single-sided dilation
    /// does not guarantee symmetry by construction.
    pub symmetrize: bool,
}

impl Default for AdjacencyConfig {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::Direct,
            symmetrize: true,
        }
    }
}

/// Neighbor set per object: dilate the object's mask by one structuring pass
/// and collect the labels present underneath, excluding background and self.
pub fn object_adjacency(
    labels: &Grid<ObjectId>,
    cfg: &AdjacencyConfig,
) -> BTreeMap<ObjectId, BTreeSet<ObjectId>> {
    let (w, h) = (labels.width(), labels.height());

    let mut adjacency: BTreeMap<ObjectId, BTreeSet<ObjectId>> = BTreeMap::new();
    for label in labels.unique_values() {
        if label != 0 {
            adjacency.insert(label, BTreeSet::new());
        }
    }

    let ids: Vec<ObjectId> = adjacency.keys().copied().collect();
    for &label in &ids {
        let mut mask = Grid::new_fill(w, h, 0u8);
        for y in 0..h {
            for (x, &v) in labels.row(y).iter().enumerate() {
                if v == label {
                    *mask.get_mut(x, y).expect("in-bounds mask cell") = 1;
                }
            }
        }

        let dilated = dilate_binary(&mask, cfg.connectivity);

        let neighbors = adjacency.get_mut(&label).expect("label seeded above");
        for y in 0..h {
            for (x, &covered) in dilated.row(y).iter().enumerate() {
                if covered == 0 {
                    continue;
                }
                let under = *labels.get(x, y).expect("in-bounds label cell");
                if under != 0 && under != label {
                    neighbors.insert(under);
                }
            }
        }
    }

    if cfg.symmetrize {
        let pairs: Vec<(ObjectId, ObjectId)> = adjacency
            .iter()
            .flat_map(|(&a, nbrs)| nbrs.iter().map(move |&b| (b, a)))
            .collect();
        for (a, b) in pairs {
            adjacency.entry(a).or_default().insert(b);
        }
    }

    adjacency
}
