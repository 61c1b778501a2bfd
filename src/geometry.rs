//! Angle computation and arc geometry.
//!
//! All math happens on `glam::DVec2` in screen space: y grows downward, so
//! `angle_of` sweeps are mirrored relative to the usual math convention.
//! Every function here is total — degenerate inputs (coincident points,
//! zero-length directions) take a guard path and still produce a finite
//! result.

use glam::DVec2;

use crate::types::Angle;

/// Clamp `x` into `[lo, hi]`.
///
/// Unlike `f64::clamp` this does not panic when `lo > hi` (a canvas smaller
/// than twice the margin); the low bound wins.
#[inline]
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.min(hi).max(lo)
}

/// Direction angle of a vector in radians, `atan2(y, x)`.
///
/// Screen-space convention: positive angles turn toward +y, which is *down*.
#[inline]
pub fn angle_of(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

/// Interior angle at `vertex` between the rays toward `n1` and `n2`.
///
/// Computed from the normalized dot product. The divisor is substituted
/// with 1 when either ray has zero length, and the cosine is clamped to
/// `[-1, 1]` because floating-point drift can push the raw ratio just
/// outside the acos domain. Symmetric in `(n1, n2)`.
pub fn interior_angle(vertex: DVec2, n1: DVec2, n2: DVec2) -> Angle {
    let v1 = n1 - vertex;
    let v2 = n2 - vertex;
    let mut m = v1.length() * v2.length();
    if m == 0.0 {
        m = 1.0;
    }
    let cos_theta = clamp(v1.dot(v2) / m, -1.0, 1.0);
    Angle::from_radians(cos_theta.acos())
}

/// A circular arc of `radius` centered on a vertex, marking its angle.
///
/// `sweep` is the SVG sweep flag; construction always emits a positive
/// sweep and relies on start/end ordering to keep the arc minor (≤ π).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub start: DVec2,
    pub end: DVec2,
    pub radius: f64,
    pub sweep: bool,
}

/// Build the arc marking the angle at `vertex`, spanning the smaller of the
/// two arcs between the rays toward `n1` and `n2`.
pub fn arc_spec(vertex: DVec2, n1: DVec2, n2: DVec2, radius: f64) -> ArcSpec {
    let d1 = (n1 - vertex).normalize_or_zero();
    let d2 = (n2 - vertex).normalize_or_zero();

    let mut delta = angle_of(d2) - angle_of(d1);
    if delta < 0.0 {
        delta += std::f64::consts::TAU;
    }

    // Sweeping positively from d1 covers `delta`; if that is the major arc,
    // swap endpoints so the positive sweep traverses the minor arc instead.
    let (start, end) = if delta <= std::f64::consts::PI {
        (d1, d2)
    } else {
        (d2, d1)
    };

    ArcSpec {
        start: vertex + radius * start,
        end: vertex + radius * end,
        radius,
        sweep: true,
    }
}
