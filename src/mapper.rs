//! Conversions between pointer positions, dial angles and dial values.
//!
//! All functions are pure. Angles are bearings in degrees, clockwise from
//! vertical-up, in screen coordinates (y grows downward).

use crate::range::DialRange;

/// Pointers closer than this to the dial center have no usable bearing.
pub const CENTER_DEAD_RADIUS: f32 = 4.0;

/// Map a value linearly onto the dial arc.
///
/// Values outside the range extrapolate past the arc ends; callers clamp.
pub fn angle_for_value(value: i32, range: &DialRange) -> f32 {
    let fraction = (value - range.min()) as f32 / (range.max() - range.min()) as f32;
    range.start_angle() + fraction * range.span()
}

/// Map an arc angle back to the nearest integer value.
///
/// `angle` must already be inside `[start_angle, end_angle]`; run raw pointer
/// bearings through [`clamp_to_arc`] first.
pub fn value_for_angle(angle: f32, range: &DialRange) -> i32 {
    let fraction = (angle - range.start_angle()) / range.span();
    let value = range.min() as f32 + fraction * (range.max() - range.min()) as f32;
    value.round() as i32
}

/// Bearing of `(point_x, point_y)` seen from the dial center, in `[0, 360)`.
///
/// The bearing of the center itself is meaningless; [`value_for_pointer`]
/// filters such points out before calling this.
pub fn pointer_angle(center_x: f32, center_y: f32, point_x: f32, point_y: f32) -> f32 {
    let dx = point_x - center_x;
    let dy = point_y - center_y;
    let degrees = dx.atan2(-dy).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// Bring a raw `[0, 360)` bearing into the arc's frame and clamp it.
///
/// The bearing is first shifted into `[start_angle, start_angle + 360)`, which
/// removes the 0°/360° seam for arcs that straddle it. Bearings that then fall
/// in the dead zone past `end_angle` snap to whichever arc end is nearer.
pub fn clamp_to_arc(angle: f32, range: &DialRange) -> f32 {
    let start = range.start_angle();
    let end = range.end_angle();
    let normalized = (angle - start).rem_euclid(360.0) + start;
    if normalized <= end {
        return normalized.max(start);
    }

    let past_end = normalized - end;
    let before_start = start + 360.0 - normalized;
    if past_end <= before_start { end } else { start }
}

/// Full gesture path: pointer position to a value inside the range.
///
/// Returns `None` for pointers within [`CENTER_DEAD_RADIUS`] of the center.
pub fn value_for_pointer(
    center_x: f32,
    center_y: f32,
    point_x: f32,
    point_y: f32,
    range: &DialRange,
) -> Option<i32> {
    let distance = (point_x - center_x).hypot(point_y - center_y);
    if distance < CENTER_DEAD_RADIUS {
        return None;
    }
    let raw = pointer_angle(center_x, center_y, point_x, point_y);
    let angle = clamp_to_arc(raw, range);
    Some(range.clamp(value_for_angle(angle, range)))
}
