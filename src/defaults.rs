//! Default layout sizes and thresholds (all in canvas pixels).

/// Arc radius ramp: radius = ARC_RADIUS_BASE + (deg - ARC_RADIUS_PIVOT_DEG) * ARC_RADIUS_SLOPE,
/// clamped to [ARC_RADIUS_MIN, ARC_RADIUS_MAX]. Wider angles get wider arcs.
pub const ARC_RADIUS_BASE: f64 = 20.0;
pub const ARC_RADIUS_PIVOT_DEG: f64 = 30.0;
pub const ARC_RADIUS_SLOPE: f64 = 0.08;
pub const ARC_RADIUS_MIN: f64 = 16.0;
pub const ARC_RADIUS_MAX: f64 = 36.0;

/// Base distance of the angle-degree label from its vertex.
pub const ANGLE_LABEL_DIST: f64 = 48.0;
/// Extra distance ramp for sharp angles: clamp((PIVOT - deg) * SLOPE, 0, MAX).
pub const ANGLE_LABEL_PIVOT_DEG: f64 = 30.0;
pub const ANGLE_LABEL_EXTRA_SLOPE: f64 = 0.6;
pub const ANGLE_LABEL_EXTRA_MAX: f64 = 24.0;

/// Distance of the vertex-name label from its vertex, along the outward bisector.
pub const VERTEX_LABEL_DIST: f64 = 16.0;

/// Two angle labels closer than this get the later one nudged.
pub const LABEL_PROXIMITY: f64 = 26.0;
/// Nudge step along the label's own bisector direction.
pub const LABEL_NUDGE: f64 = 14.0;

/// Labels are kept at least this far from the canvas edge.
pub const CANVAS_MARGIN: f64 = 8.0;

/// Below this magnitude a bisector sum counts as degenerate (tunable, not
/// an invariant).
pub const DEGENERATE_EPS: f64 = 1e-6;

/// Default canvas edge length; the display surface is square.
pub const CANVAS_SIZE: f64 = 800.0;
