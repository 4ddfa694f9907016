//! Zigzag scanline fill generation.

use slicekit_core::{Bounds, Micrometer, MicroPoint, Path, Paths};
use tracing::debug;

use crate::engine;

/// Generates vertical scanlines covering `bounds`, spaced by
/// `line_width`, spanning min to max x inclusive.
///
/// Line direction alternates: even-indexed lines run bottom-to-top,
/// odd-indexed top-to-bottom, so consecutive clipped segments form a
/// continuous zigzag when joined end to end.
pub fn scanlines(bounds: &Bounds, line_width: Micrometer) -> Paths {
    let mut lines = Paths::new();
    if line_width <= 0 {
        return lines;
    }

    let mut x = bounds.min.x;
    let mut num_line = 0usize;
    while x <= bounds.max.x {
        let line = if num_line % 2 == 1 {
            Path::from(vec![
                MicroPoint::new(x, bounds.max.y),
                MicroPoint::new(x, bounds.min.y),
            ])
        } else {
            Path::from(vec![
                MicroPoint::new(x, bounds.min.y),
                MicroPoint::new(x, bounds.max.y),
            ])
        };
        lines.push(line);
        num_line += 1;
        x += line_width;
    }
    lines
}

/// Fills `region` with a zigzag scanline pattern.
///
/// The fill boundary is each region contour offset inward by
/// `line_width * (100 - overlap_percentage) / 100`, so fill lines
/// overlap the neighboring wall by the configured percentage. Each
/// contour is offset and clipped independently; the spacing grid is
/// shared, so segments from different contours stay aligned.
///
/// A contour too thin to offset contributes no segments. An empty
/// region yields an empty result.
pub(crate) fn fill(region: &Paths, line_width: Micrometer, overlap_percentage: i64) -> Paths {
    let mut result = Paths::new();

    let Some(bounds) = region.bounds() else {
        return result;
    };
    if line_width <= 0 {
        return result;
    }

    let overlap = line_width as f64 * (100 - overlap_percentage) as f64 / 100.0;
    let lines = scanlines(&bounds, line_width);

    for contour in region {
        let boundary = engine::offset_contour(contour, -overlap);
        if boundary.is_empty() {
            continue;
        }
        result.extend(engine::clip_lines(&lines, &boundary));
    }

    debug!(
        "fill produced {} segments from {} scanlines over {} contours",
        result.len(),
        lines.len(),
        region.len()
    );
    result
}
