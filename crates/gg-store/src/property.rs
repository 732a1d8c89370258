/// The canonical object properties compared by the overlap query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Property {
    Color,
    BboxX,
    BboxY,
    BboxWidth,
    BboxHeight,
    Shape,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::Color,
        Property::BboxX,
        Property::BboxY,
        Property::BboxWidth,
        Property::BboxHeight,
        Property::Shape,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::BboxX => "bbox_x",
            Self::BboxY => "bbox_y",
            Self::BboxWidth => "bbox_width",
            Self::BboxHeight => "bbox_height",
            Self::Shape => "shape",
        }
    }

    /// Similarity weight. Position and identity properties dominate; the two
    /// extent properties together carry the weight of one.
    pub fn weight(self) -> f64 {
        match self {
            Self::Color | Self::BboxX | Self::BboxY | Self::Shape => 5.0,
            Self::BboxWidth | Self::BboxHeight => 2.5,
        }
    }

    /// Sum of all property weights; the similarity normalizer.
    pub fn total_weight() -> f64 {
        Self::ALL.iter().map(|p| p.weight()).sum()
    }

    fn bit(self) -> u8 {
        match self {
            Self::Color => 1 << 0,
            Self::BboxX => 1 << 1,
            Self::BboxY => 1 << 2,
            Self::BboxWidth => 1 << 3,
            Self::BboxHeight => 1 << 4,
            Self::Shape => 1 << 5,
        }
    }
}

/// A set of [`Property`] values, compact enough to copy freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropertySet(u8);

impl PropertySet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        let mut set = Self::empty();
        for p in Property::ALL {
            set.insert(p);
        }
        set
    }

    pub fn insert(&mut self, property: Property) {
        self.0 |= property.bit();
    }

    pub fn contains(self, property: Property) -> bool {
        self.0 & property.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Property> {
        Property::ALL.into_iter().filter(move |p| self.contains(*p))
    }

    /// Properties of the canonical set that are *not* in `self`; the
    /// "what changed" complement for matched pairs.
    pub fn complement(self) -> PropertySet {
        let mut out = Self::empty();
        for p in Property::ALL {
            if !self.contains(p) {
                out.insert(p);
            }
        }
        out
    }

    /// Weighted similarity of this match set, normalized to `[0, 1]`.
    pub fn similarity(self) -> f64 {
        let sum: f64 = self.iter().map(Property::weight).sum();
        sum / Property::total_weight()
    }
}
