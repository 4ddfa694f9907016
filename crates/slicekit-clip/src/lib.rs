//! # SliceKit Clip
//!
//! The geometric heart of a layer-based path planner: partitioning a
//! raw layer into structured solid parts, generating concentric wall
//! insets per part, and generating a zigzag scanline fill clipped to a
//! region.
//!
//! Data flows `Layer` → [`PartitionedLayer`][slicekit_core::PartitionedLayer]
//! → per-part insets; fills are generated independently for any path
//! region (typically the innermost wall). All coordinates are integer
//! micrometers; the polygon boolean engine (Clipper2) is wrapped
//! internally and instantiated fresh per operation.
//!
//! ```no_run
//! use slicekit_clip::{Clip, ClipperClip};
//! use slicekit_core::{Layer, MicroPoint, Path};
//!
//! let mut layer = Layer::new();
//! layer.push(Path::from(vec![
//!     MicroPoint::new(0, 0),
//!     MicroPoint::new(20_000, 0),
//!     MicroPoint::new(20_000, 20_000),
//!     MicroPoint::new(0, 20_000),
//! ]));
//!
//! let clip = ClipperClip::new();
//! let parts = clip.partition(&layer).unwrap();
//! for part in &parts {
//!     let walls = clip.inset(part, 400, 3);
//!     if let Some(innermost) = walls.first().and_then(|w| w.last()) {
//!         let _infill = clip.fill(innermost, 400, 20);
//!     }
//! }
//! ```

mod clip;
mod engine;
mod error;
mod fill;
mod inset;
mod partition;

pub use clip::{Clip, ClipConfig, ClipperClip};
pub use error::{ClipError, Result};
pub use fill::scanlines;
pub use inset::PartInsets;
pub use partition::drop_near_points;
