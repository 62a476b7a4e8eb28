//! Linear interpolation helpers shared by ramps and render surfaces.

use glam::Vec2;

/// Point at `progress` along the segment from `p0` to `p1`.
///
/// Callers clamp `progress` before calling; values outside [0, 1] simply
/// extrapolate along the segment. Never fails or produces NaN for finite
/// inputs.
#[inline]
#[must_use]
pub fn point_at(p0: Vec2, p1: Vec2, progress: f32) -> Vec2 {
    p0 + (p1 - p0) * progress
}

/// Scalar linear blend between `start` and `end`.
#[inline]
#[must_use]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Clamp a progress or opacity fraction to the unit interval.
#[inline]
#[must_use]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
