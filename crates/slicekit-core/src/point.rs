//! Integer micrometer points.

use crate::units::Micrometer;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point in integer micrometer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MicroPoint {
    pub x: Micrometer,
    pub y: Micrometer,
}

impl MicroPoint {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: Micrometer, y: Micrometer) -> Self {
        Self { x, y }
    }

    /// Returns true if this point, treated as a vector, is strictly
    /// shorter than `len`.
    ///
    /// Compares squared lengths so the test is exact in integer
    /// arithmetic. Used to collapse near-duplicate vertices before
    /// boolean operations.
    pub fn shorter_than(&self, len: Micrometer) -> bool {
        self.x * self.x + self.y * self.y < len * len
    }
}

impl Add for MicroPoint {
    type Output = MicroPoint;

    fn add(self, other: MicroPoint) -> MicroPoint {
        MicroPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for MicroPoint {
    type Output = MicroPoint;

    fn sub(self, other: MicroPoint) -> MicroPoint {
        MicroPoint::new(self.x - other.x, self.y - other.y)
    }
}
