//! Strongly-typed primitives for trigon.
//!
//! Points are plain `glam::DVec2` in screen space (y increases downward);
//! everything with more meaning than "a pair of floats" gets a type here.

use std::fmt;

use glam::DVec2;
use thiserror::Error;

/// Error type for invalid numeric values at the API boundary.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    #[error("value is NaN")]
    NaN,
    #[error("value is infinite")]
    Infinite,
    #[error("value is not positive")]
    NotPositive,
}

/// An interior angle in radians, always in `[0, π]`.
///
/// The three angles of a triangle are computed independently per vertex
/// and are not renormalized to sum to exactly π.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Wrap a radian value. Callers guarantee the `[0, π]` range.
    #[inline]
    pub(crate) const fn from_radians(rad: f64) -> Angle {
        Angle(rad)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

/// Displays as the degree label drawn next to the angle arc, e.g. `62.4°`.
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.degrees())
    }
}

/// Canvas dimensions in pixels.
///
/// Validated on construction: the geometry core itself never fails, so bad
/// dimensions are rejected before any computation runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    /// Create a Canvas with validation (rejects NaN, infinite, non-positive).
    pub fn try_new(width: f64, height: f64) -> Result<Canvas, NumericError> {
        for dim in [width, height] {
            if dim.is_nan() {
                return Err(NumericError::NaN);
            } else if dim.is_infinite() {
                return Err(NumericError::Infinite);
            } else if dim <= 0.0 {
                return Err(NumericError::NotPositive);
            }
        }
        Ok(Canvas { width, height })
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.height
    }

    /// Clamp a point componentwise into `[margin, dim - margin]`.
    pub fn clamp_inside(self, p: DVec2, margin: f64) -> DVec2 {
        DVec2::new(
            crate::geometry::clamp(p.x, margin, self.width - margin),
            crate::geometry::clamp(p.y, margin, self.height - margin),
        )
    }
}

/// The three triangle vertices, in insertion order.
///
/// Order is significant for labeling only; the computed geometry does not
/// depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    /// Fixed iteration order: A, then B, then C.
    pub const ALL: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Vertex::A => "A",
            Vertex::B => "B",
            Vertex::C => "C",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Vertex::A => 0,
            Vertex::B => 1,
            Vertex::C => 2,
        }
    }

    /// The other two vertices, in A-B-C order.
    pub fn neighbors(self) -> (Vertex, Vertex) {
        match self {
            Vertex::A => (Vertex::B, Vertex::C),
            Vertex::B => (Vertex::A, Vertex::C),
            Vertex::C => (Vertex::A, Vertex::B),
        }
    }

    /// Parse a vertex name as typed on the command line.
    pub fn from_name(name: &str) -> Option<Vertex> {
        match name {
            "A" | "a" => Some(Vertex::A),
            "B" | "b" => Some(Vertex::B),
            "C" | "c" => Some(Vertex::C),
            _ => None,
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
