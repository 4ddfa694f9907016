//! # SliceKit Core
//!
//! Core geometry types and units for SliceKit layer processing.
//! Provides the fundamental data model shared by all layer algorithms:
//! integer micrometer coordinates, point sequences, and the
//! outline-plus-holes partitioning structures.
//!
//! All coordinates are integer micrometers. The polygon boolean engine
//! downstream relies on exact arithmetic, so no floating-point
//! coordinates ever enter this data model.

pub mod layer;
pub mod point;
pub mod path;
pub mod units;

pub use layer::{Layer, LayerPart, PartitionedLayer};
pub use path::{Bounds, Path, Paths};
pub use point::MicroPoint;
pub use units::{format_mm, micrometer_to_mm, mm_to_micrometer, Micrometer};
