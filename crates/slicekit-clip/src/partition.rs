//! Layer partitioning: raw polygon soup to outline/hole parts.

use slicekit_core::{Layer, LayerPart, Micrometer, PartitionedLayer, Path, Paths};
use std::collections::VecDeque;
use tracing::debug;

use crate::engine;
use crate::error::Result;

/// Drops points closer than `min_distance` to the most recently
/// retained point of the same path. The first point is always kept.
///
/// Distances accumulate against the last kept point, not the previous
/// input point, so a run of near-duplicates collapses to a single
/// vertex. This keeps the boolean engine's topology stable.
pub fn drop_near_points(path: &Path, min_distance: Micrometer) -> Path {
    let pts = path.points();
    let mut result = Path::new();
    let Some(&first) = pts.first() else {
        return result;
    };
    result.push(first);

    let mut last_kept = first;
    for &p in &pts[1..] {
        if (p - last_kept).shorter_than(min_distance) {
            continue;
        }
        result.push(p);
        last_kept = p;
    }
    result
}

/// Partitions a raw layer into solid parts with direct holes.
///
/// The preprocessed contours go through an even-odd union, and the
/// resulting contour hierarchy is walked with an index work queue:
/// each dequeued node becomes a part's outline, its children become
/// the part's holes, and each hole's own children (islands floating
/// inside the hole) are queued as future outlines. This flattens
/// solid/void/solid nesting of arbitrary depth into independent parts.
pub(crate) fn partition(layer: &Layer, min_distance: Micrometer) -> Result<PartitionedLayer> {
    let preprocessed: Paths = layer
        .iter()
        .map(|path| drop_near_points(path, min_distance))
        .collect();

    let tree = engine::union_tree(&preprocessed)?;

    let mut result = PartitionedLayer::new();
    let mut queue: VecDeque<usize> = tree.roots().iter().copied().collect();

    while let Some(outline_idx) = queue.pop_front() {
        let outline = tree.node(outline_idx);
        // Engine output winding is not part of its contract; parts
        // carry outlines counter-clockwise and holes clockwise.
        let mut contour = outline.contour.clone();
        if !contour.is_ccw() {
            contour.reverse();
        }
        let mut part = LayerPart::new(contour);

        for &hole_idx in &outline.children {
            let hole = tree.node(hole_idx);
            let mut contour = hole.contour.clone();
            if contour.is_ccw() {
                contour.reverse();
            }
            part.add_hole(contour);
            queue.extend(hole.children.iter().copied());
        }

        result.push(part);
    }

    debug!(
        "partitioned {} raw contours into {} parts",
        layer.len(),
        result.len()
    );
    Ok(result)
}
