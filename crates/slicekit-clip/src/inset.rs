//! Concentric wall inset generation for one layer part.

use slicekit_core::{LayerPart, Micrometer, Paths};
use tracing::debug;

use crate::engine;

/// Insets of one part, indexed `[wall][inset_level]`.
///
/// Wall 0 is the outermost perimeter. For every wall present after
/// generation, the level vector has one entry per inset level actually
/// attempted; entries are empty where that wall produced no contour at
/// that level.
pub type PartInsets = Vec<Vec<Paths>>;

/// Generates up to `inset_count` concentric inward offsets of `part`.
///
/// Level `i` offsets the outline and holes together by
/// `-(offset * i) - offset / 2`: the first wall is centered half a
/// line width inside the boundary, later walls step inward one full
/// line width each. `offset / 2` uses integer division; the formula is
/// a contract and is kept bit-for-bit.
///
/// Offsetting can merge or split walls as the geometry narrows, so a
/// wall index may first appear at a later level. Newly seen walls are
/// backfilled with empty path sets and, after each completed level,
/// every wall is padded to the level count, keeping wall indices
/// densely populated from level 0.
///
/// An empty result at the first level means the part is too thin to
/// wall; that returns zero walls and is not an error.
pub(crate) fn inset(
    part: &LayerPart,
    offset: Micrometer,
    inset_count: usize,
    simplify_tolerance: Micrometer,
) -> PartInsets {
    let mut insets: PartInsets = Vec::new();

    let mut subject = Paths::new();
    subject.push(part.outline().clone());
    for hole in part.holes() {
        subject.push(hole.clone());
    }

    for level in 0..inset_count {
        let delta = -((offset * level as Micrometer) as f64) - (offset / 2) as f64;
        let walls = engine::offset(&subject, delta);

        if walls.is_empty() {
            // Insufficient room; no further levels for this part.
            debug!("inset stopped at level {} of {}", level, inset_count);
            break;
        }

        for (wall_nr, wall) in walls.into_iter().enumerate() {
            if insets.len() <= wall_nr {
                insets.push(Vec::new());
            }
            // A wall index the engine did not emit before gets empty
            // sets for the earlier levels so level numbering holds.
            while insets[wall_nr].len() <= level {
                insets[wall_nr].push(Paths::new());
            }
            insets[wall_nr][level].push(engine::simplify_contour(wall, simplify_tolerance));
        }

        // Walls that vanished at this level get an empty entry too, so
        // every wall records the same number of levels.
        for wall_levels in insets.iter_mut() {
            while wall_levels.len() <= level {
                wall_levels.push(Paths::new());
            }
        }
    }

    insets
}
