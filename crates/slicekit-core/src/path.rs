//! Point sequences and collections of them.
//!
//! A [`Path`] is an ordered point sequence. Whether it is treated as a
//! closed contour (implicit edge from last to first point) or an open
//! polyline is a usage contract of the consuming operation, not a
//! stored flag. A [`Paths`] is a collection of paths whose insertion
//! order carries no meaning except where an algorithm states otherwise.

use crate::point::MicroPoint;
use crate::units::Micrometer;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in micrometer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: MicroPoint,
    pub max: MicroPoint,
}

impl Bounds {
    /// Expands this box to contain `p`.
    pub fn expand(&mut self, p: MicroPoint) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Width of the box in micrometers.
    pub fn width(&self) -> Micrometer {
        self.max.x - self.min.x
    }

    /// Height of the box in micrometers.
    pub fn height(&self) -> Micrometer {
        self.max.y - self.min.y
    }
}

/// An ordered sequence of points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path(Vec<MicroPoint>);

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The points of this path in order.
    pub fn points(&self) -> &[MicroPoint] {
        &self.0
    }

    /// Appends a point.
    pub fn push(&mut self, p: MicroPoint) {
        self.0.push(p);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MicroPoint> {
        self.0.iter()
    }

    /// Twice the signed area of the closed polygon described by this
    /// path, accumulated in i128 so large coordinates cannot overflow.
    ///
    /// Positive means counter-clockwise in a Y-up coordinate system.
    pub fn signed_area_doubled(&self) -> i128 {
        let pts = &self.0;
        if pts.len() < 3 {
            return 0;
        }
        let mut sum: i128 = 0;
        let mut j = pts.len() - 1;
        for i in 0..pts.len() {
            sum += (pts[j].x as i128 + pts[i].x as i128)
                * (pts[j].y as i128 - pts[i].y as i128);
            j = i;
        }
        sum
    }

    /// Absolute area of the closed polygon, in square micrometers.
    pub fn area(&self) -> i128 {
        self.signed_area_doubled().abs() / 2
    }

    /// True if the closed polygon winds counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        self.signed_area_doubled() > 0
    }

    /// Even-odd containment test for `p` against this closed polygon.
    ///
    /// Crossing test is exact: the edge/ray comparison is done with
    /// integer cross products instead of a floating-point division.
    /// Points on the boundary may report either side.
    pub fn contains(&self, p: MicroPoint) -> bool {
        let pts = &self.0;
        if pts.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = pts.len() - 1;
        for i in 0..pts.len() {
            let pi = pts[i];
            let pj = pts[j];
            if (pi.y > p.y) != (pj.y > p.y) {
                let dy = (pj.y - pi.y) as i128;
                let cross = (pj.x - pi.x) as i128 * (p.y - pi.y) as i128
                    - (p.x - pi.x) as i128 * dy;
                if (cross > 0) == (dy > 0) {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Reverses the point order in place, flipping the winding of a
    /// closed polygon.
    pub fn reverse(&mut self) {
        self.0.reverse();
    }

    /// Returns a copy with the point order reversed.
    pub fn reversed(&self) -> Path {
        let mut path = self.clone();
        path.reverse();
        path
    }

    /// Bounding box of this path, or `None` if it has no points.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.0.first()?;
        let mut b = Bounds { min: first, max: first };
        for &p in &self.0[1..] {
            b.expand(p);
        }
        Some(b)
    }
}

impl From<Vec<MicroPoint>> for Path {
    fn from(points: Vec<MicroPoint>) -> Self {
        Self(points)
    }
}

impl FromIterator<MicroPoint> for Path {
    fn from_iter<I: IntoIterator<Item = MicroPoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a MicroPoint;
    type IntoIter = std::slice::Iter<'a, MicroPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A collection of paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paths(Vec<Path>);

impl Paths {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The contained paths.
    pub fn paths(&self) -> &[Path] {
        &self.0
    }

    /// Appends a path.
    pub fn push(&mut self, path: Path) {
        self.0.push(path);
    }

    /// Moves all paths from `other` into this collection.
    pub fn extend(&mut self, other: Paths) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.0.iter()
    }

    /// Bounding box of all member paths, or `None` if no points exist.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut acc: Option<Bounds> = None;
        for path in &self.0 {
            if let Some(b) = path.bounds() {
                match acc.as_mut() {
                    Some(t) => {
                        t.expand(b.min);
                        t.expand(b.max);
                    }
                    None => acc = Some(b),
                }
            }
        }
        acc
    }
}

impl From<Vec<Path>> for Paths {
    fn from(paths: Vec<Path>) -> Self {
        Self(paths)
    }
}

impl FromIterator<Path> for Paths {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Paths {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Paths {
    type Item = Path;
    type IntoIter = std::vec::IntoIter<Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
