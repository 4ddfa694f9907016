//! Length units for layer geometry.
//!
//! All layer geometry is expressed in integer micrometers. The polygon
//! boolean engine depends on exact arithmetic (no missed intersections,
//! stable topology across repeated operations), so conversions to and
//! from millimeters happen only at the boundary of the system.

/// A length in micrometers (1/1000 mm).
///
/// Signed so that inward offsets and coordinate differences can be
/// expressed directly.
pub type Micrometer = i64;

/// Converts millimeters to micrometers, rounding to the nearest
/// representable coordinate.
pub fn mm_to_micrometer(mm: f64) -> Micrometer {
    (mm * 1000.0).round() as Micrometer
}

/// Converts micrometers to millimeters for display or export.
pub fn micrometer_to_mm(um: Micrometer) -> f64 {
    um as f64 / 1000.0
}

/// Formats a micrometer value as millimeters with three decimal places.
pub fn format_mm(um: Micrometer) -> String {
    format!("{:.3}", micrometer_to_mm(um))
}
