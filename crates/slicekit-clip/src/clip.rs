//! The public clipping surface.

use serde::{Deserialize, Serialize};
use slicekit_core::{Layer, LayerPart, Micrometer, PartitionedLayer, Paths};

use crate::error::Result;
use crate::inset::PartInsets;
use crate::{fill, inset, partition};

/// Tunables for the clipping algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipConfig {
    /// Points closer than this to the last retained point of the same
    /// path are dropped before the union step.
    pub min_point_distance: Micrometer,
    /// Wiggle below this tolerance is removed from inset contours.
    pub simplify_tolerance: Micrometer,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            min_point_distance: 100,
            simplify_tolerance: 10,
        }
    }
}

/// Layer clipping operations.
///
/// [`partition`](Clip::partition) must run before insetting; insets
/// and fills of distinct parts are independent and may run on separate
/// worker threads, since every engine interaction is scoped to the
/// call that makes it.
pub trait Clip {
    /// Partitions the raw layer into solid parts with direct holes.
    ///
    /// Fails only if the polygon engine cannot complete the union. An
    /// empty layer partitions successfully into zero parts.
    fn partition(&self, layer: &Layer) -> Result<PartitionedLayer>;

    /// Generates insets for every part of the layer, in part order.
    fn inset_layer(
        &self,
        layer: &PartitionedLayer,
        offset: Micrometer,
        inset_count: usize,
    ) -> Vec<PartInsets>;

    /// Generates up to `inset_count` concentric inward offsets of one
    /// part. See [`PartInsets`] for the indexing contract.
    fn inset(&self, part: &LayerPart, offset: Micrometer, inset_count: usize) -> PartInsets;

    /// Generates a zigzag scanline fill clipped to `region`, with
    /// lines spaced `line_width` apart and pulled inward so they
    /// overlap the neighboring wall by `overlap_percentage` percent.
    fn fill(&self, region: &Paths, line_width: Micrometer, overlap_percentage: i64) -> Paths;
}

/// [`Clip`] implementation backed by the Clipper2 polygon engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipperClip {
    config: ClipConfig,
}

impl ClipperClip {
    /// Creates a clipper with default tunables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipper with explicit tunables.
    pub fn with_config(config: ClipConfig) -> Self {
        Self { config }
    }

    /// The active tunables.
    pub fn config(&self) -> &ClipConfig {
        &self.config
    }
}

impl Clip for ClipperClip {
    fn partition(&self, layer: &Layer) -> Result<PartitionedLayer> {
        partition::partition(layer, self.config.min_point_distance)
    }

    fn inset_layer(
        &self,
        layer: &PartitionedLayer,
        offset: Micrometer,
        inset_count: usize,
    ) -> Vec<PartInsets> {
        layer
            .iter()
            .map(|part| self.inset(part, offset, inset_count))
            .collect()
    }

    fn inset(&self, part: &LayerPart, offset: Micrometer, inset_count: usize) -> PartInsets {
        inset::inset(part, offset, inset_count, self.config.simplify_tolerance)
    }

    fn fill(&self, region: &Paths, line_width: Micrometer, overlap_percentage: i64) -> Paths {
        fill::fill(region, line_width, overlap_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClipConfig::default();
        assert_eq!(config.min_point_distance, 100);
        assert_eq!(config.simplify_tolerance, 10);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = ClipConfig {
            min_point_distance: 50,
            simplify_tolerance: 5,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ClipConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
