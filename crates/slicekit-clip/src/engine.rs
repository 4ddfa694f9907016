//! Boundary to the polygon geometry engine.
//!
//! Wraps the `clipper2` crate so the algorithm modules never touch
//! engine types directly. Three capabilities are exposed: an even-odd
//! union producing a contour hierarchy, closed-polygon offsetting with
//! square joins, and clipping of open line segments against closed
//! regions. Engine values are created per call and never retained, so
//! concurrent callers need no coordination.
//!
//! Coordinates cross this boundary as integer micrometers. The clipper
//! paths use a unit scaler, so the stored engine coordinates are
//! exactly the micrometer values and results round back losslessly.

use clipper2::{union, EndType, FillRule, JoinType, Paths as ClipperPaths, PointScaler};
use slicekit_core::{Micrometer, MicroPoint, Path, Paths};
use tracing::debug;

use crate::error::{ClipError, Result};

/// Offset join behavior: square joins with this miter limit, always.
const MITER_LIMIT: f64 = 2.0;

/// Identity coordinate scaler. Micrometer integers are already the
/// engine's fixed-point resolution, so no further scaling is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct UnitScale;

impl PointScaler for UnitScale {
    const MULTIPLIER: f64 = 1.0;
}

/// One contour of the union hierarchy. `children` are the directly
/// nested contours, one level deeper.
#[derive(Debug, Clone)]
pub(crate) struct TreeNode {
    pub contour: Path,
    pub children: Vec<usize>,
}

/// Hierarchy of union output contours, stored as an index arena.
///
/// Nodes at even depth below the synthetic root are solid outlines,
/// odd depth are holes. Consumers walk the tree by index; no node owns
/// another.
#[derive(Debug, Default)]
pub(crate) struct PolygonTree {
    nodes: Vec<TreeNode>,
    roots: Vec<usize>,
}

impl PolygonTree {
    /// Top-level solid contours (depth 1).
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn node(&self, idx: usize) -> &TreeNode {
        &self.nodes[idx]
    }

    /// Builds the hierarchy from flat, non-overlapping contours.
    ///
    /// Contours are inserted largest-area first; the direct parent of
    /// a contour is the smallest already-inserted contour containing
    /// its first vertex. Containment is used instead of winding so the
    /// result does not depend on the engine's orientation convention.
    fn build(contours: Vec<Path>) -> Self {
        let mut order: Vec<usize> = (0..contours.len())
            .filter(|&i| contours[i].len() >= 3)
            .collect();
        order.sort_by_key(|&i| std::cmp::Reverse(contours[i].area()));

        let mut tree = PolygonTree::default();
        let mut slots: Vec<Option<Path>> = contours.into_iter().map(Some).collect();

        for src in order {
            let contour = slots[src].take().filter(|c| !c.is_empty());
            let Some(contour) = contour else { continue };
            let probe = contour.points()[0];

            let parent = tree
                .nodes
                .iter()
                .enumerate()
                .filter(|(_, n)| n.contour.contains(probe))
                .min_by_key(|(_, n)| n.contour.area())
                .map(|(i, _)| i);

            let idx = tree.nodes.len();
            tree.nodes.push(TreeNode {
                contour,
                children: Vec::new(),
            });
            match parent {
                Some(p) => tree.nodes[p].children.push(idx),
                None => tree.roots.push(idx),
            }
        }

        tree
    }
}

fn to_clipper(paths: &Paths) -> Vec<Vec<(f64, f64)>> {
    paths
        .iter()
        .map(|path| {
            path.iter()
                .map(|p| (p.x as f64, p.y as f64))
                .collect()
        })
        .collect()
}

fn from_clipper(paths: ClipperPaths<UnitScale>) -> Paths {
    let tuples: Vec<Vec<(f64, f64)>> = paths.into();
    tuples
        .into_iter()
        .map(|path| {
            path.into_iter()
                .map(|(x, y)| MicroPoint::new(x.round() as Micrometer, y.round() as Micrometer))
                .collect()
        })
        .collect()
}

/// Even-odd union of all `paths` as one subject group.
///
/// Overlapping same-winding contours cancel rather than merge, which
/// is how coincident slicing artifacts are meant to behave. Returns
/// the nesting hierarchy of the result.
pub(crate) fn union_tree(paths: &Paths) -> Result<PolygonTree> {
    let subject = to_clipper(paths);
    if subject.iter().all(|p| p.is_empty()) {
        return Ok(PolygonTree::default());
    }

    let merged = union::<UnitScale>(subject, Vec::<Vec<(f64, f64)>>::new(), FillRule::EvenOdd)
        .map_err(|e| ClipError::Engine(format!("{:?}", e)))?;

    let contours = from_clipper(merged);
    debug!("union produced {} contours", contours.len());
    Ok(PolygonTree::build(contours.into_iter().collect()))
}

/// Offsets closed polygons by `delta` micrometers (negative = inward)
/// with square joins and a miter limit of 2.
///
/// An empty result means there was no room at this offset; that is a
/// valid outcome, not a failure.
pub(crate) fn offset(paths: &Paths, delta: f64) -> Paths {
    if paths.is_empty() {
        return Paths::new();
    }
    let subject: ClipperPaths<UnitScale> = to_clipper(paths).into();
    let result = subject.inflate(delta, JoinType::Square, EndType::Polygon, MITER_LIMIT);
    from_clipper(result)
}

/// Offsets a single closed contour. See [`offset`].
pub(crate) fn offset_contour(contour: &Path, delta: f64) -> Paths {
    let mut paths = Paths::new();
    paths.push(contour.clone());
    offset(&paths, delta)
}

/// Removes negligible wiggle below `tolerance` micrometers from one
/// contour. The contour keeps its identity: a result emptied by
/// simplification stays in place as an empty path so positional wall
/// indexing is undisturbed.
pub(crate) fn simplify_contour(contour: Path, tolerance: Micrometer) -> Path {
    if contour.len() < 3 {
        return contour;
    }
    let mut paths = Paths::new();
    paths.push(contour);
    let subject: ClipperPaths<UnitScale> = to_clipper(&paths).into();
    let simplified = from_clipper(subject.simplify(tolerance as f64, false));
    simplified.into_iter().next().unwrap_or_default()
}

/// Even-odd parity of `p` against a set of closed contours.
fn inside(clip: &Paths, p: MicroPoint) -> bool {
    clip.iter().filter(|c| c.contains(p)).count() % 2 == 1
}

/// Intersection parameter `t` of the infinite line through `p1`/`p2`
/// with the edge `e1`-`e2`, if the edge is crossed within its extent.
fn edge_intersection(p1: MicroPoint, p2: MicroPoint, e1: MicroPoint, e2: MicroPoint) -> Option<f64> {
    let d1x = (p2.x - p1.x) as f64;
    let d1y = (p2.y - p1.y) as f64;
    let d2x = (e2.x - e1.x) as f64;
    let d2y = (e2.y - e1.y) as f64;

    let cross = d1x * d2y - d1y * d2x;
    if cross.abs() < 1e-10 {
        return None;
    }

    let dx = (e1.x - p1.x) as f64;
    let dy = (e1.y - p1.y) as f64;

    let t = (dx * d2y - dy * d2x) / cross;
    let u = (dx * d1y - dy * d1x) / cross;

    if (0.0..=1.0).contains(&u) {
        Some(t)
    } else {
        None
    }
}

fn lerp(p1: MicroPoint, p2: MicroPoint, t: f64) -> MicroPoint {
    MicroPoint::new(
        (p1.x as f64 + t * (p2.x - p1.x) as f64).round() as Micrometer,
        (p1.y as f64 + t * (p2.y - p1.y) as f64).round() as Micrometer,
    )
}

/// Clips the segment `p1`-`p2` against `clip` under even-odd fill,
/// keeping the inside runs in traversal order.
fn clip_segment(p1: MicroPoint, p2: MicroPoint, clip: &Paths, out: &mut Paths) {
    let mut params: Vec<f64> = Vec::new();
    for path in clip {
        let pts = path.points();
        if pts.len() < 2 {
            continue;
        }
        for i in 0..pts.len() {
            let j = (i + 1) % pts.len();
            if let Some(t) = edge_intersection(p1, p2, pts[i], pts[j]) {
                if t > 0.0 && t < 1.0 {
                    params.push(t);
                }
            }
        }
    }

    if params.is_empty() {
        let mid = lerp(p1, p2, 0.5);
        if inside(clip, mid) {
            out.push(Path::from(vec![p1, p2]));
        }
        return;
    }

    params.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut is_in = inside(clip, p1);
    let mut start: Option<MicroPoint> = if is_in { Some(p1) } else { None };

    for t in params {
        let pt = lerp(p1, p2, t);
        if is_in {
            if let Some(s) = start.take() {
                if s != pt {
                    out.push(Path::from(vec![s, pt]));
                }
            }
        } else {
            start = Some(pt);
        }
        is_in = !is_in;
    }

    if is_in {
        if let Some(s) = start {
            if s != p2 {
                out.push(Path::from(vec![s, p2]));
            }
        }
    }
}

/// Intersects open subject lines against closed clip paths under the
/// even-odd rule, the open-path counterpart of the boolean engine.
///
/// Each emitted sub-path preserves the direction of the subject line
/// it came from, so alternating scanline order survives clipping.
pub(crate) fn clip_lines(lines: &Paths, clip: &Paths) -> Paths {
    let mut result = Paths::new();
    if clip.is_empty() {
        return result;
    }
    for line in lines {
        let pts = line.points();
        for pair in pts.windows(2) {
            clip_segment(pair[0], pair[1], clip, &mut result);
        }
    }
    result
}
