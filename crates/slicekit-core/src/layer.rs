//! Layer structures: raw input and partitioned output.

use crate::path::{Path, Paths};
use serde::{Deserialize, Serialize};

/// The raw input of one slice: an unordered set of closed contours
/// that may overlap, self-intersect, or contain near-duplicate points.
/// No outline/hole structure is assumed.
pub type Layer = Paths;

/// One solid region of a layer: exactly one outline contour plus the
/// holes directly nested inside it.
///
/// By convention the outline winds counter-clockwise and each hole
/// clockwise. Holes never overlap each other and lie fully inside the
/// outline; a solid island floating inside a hole is a separate
/// [`LayerPart`], not a child of this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerPart {
    outline: Path,
    holes: Paths,
}

impl LayerPart {
    /// Creates a part from its outline, with no holes yet.
    pub fn new(outline: Path) -> Self {
        Self {
            outline,
            holes: Paths::new(),
        }
    }

    /// The outer boundary contour.
    pub fn outline(&self) -> &Path {
        &self.outline
    }

    /// The direct holes of the outline.
    pub fn holes(&self) -> &Paths {
        &self.holes
    }

    /// Adds a direct hole.
    pub fn add_hole(&mut self, hole: Path) {
        self.holes.push(hole);
    }
}

/// An ordered collection of [`LayerPart`]s.
///
/// The order is not semantically meaningful but is stable within one
/// partitioning run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionedLayer {
    parts: Vec<LayerPart>,
}

impl PartitionedLayer {
    /// Creates an empty partition.
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// The parts of this layer.
    pub fn parts(&self) -> &[LayerPart] {
        &self.parts
    }

    /// Appends a part.
    pub fn push(&mut self, part: LayerPart) {
        self.parts.push(part);
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayerPart> {
        self.parts.iter()
    }
}

impl<'a> IntoIterator for &'a PartitionedLayer {
    type Item = &'a LayerPart;
    type IntoIter = std::slice::Iter<'a, LayerPart>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::MicroPoint;

    #[test]
    fn test_part_holes() {
        let outline = Path::from(vec![
            MicroPoint::new(0, 0),
            MicroPoint::new(100, 0),
            MicroPoint::new(100, 100),
            MicroPoint::new(0, 100),
        ]);
        let mut part = LayerPart::new(outline.clone());
        assert!(part.holes().is_empty());

        part.add_hole(Path::from(vec![
            MicroPoint::new(20, 20),
            MicroPoint::new(20, 80),
            MicroPoint::new(80, 80),
            MicroPoint::new(80, 20),
        ]));
        assert_eq!(part.holes().len(), 1);
        assert_eq!(part.outline(), &outline);
    }

    #[test]
    fn test_partition_serde_round_trip() {
        let mut layer = PartitionedLayer::new();
        layer.push(LayerPart::new(Path::from(vec![
            MicroPoint::new(0, 0),
            MicroPoint::new(10, 0),
            MicroPoint::new(5, 9),
        ])));

        let json = serde_json::to_string(&layer).unwrap();
        let back: PartitionedLayer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layer);
    }
}
