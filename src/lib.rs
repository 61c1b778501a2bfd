//! trigon — triangle interior-angle visualizer.
//!
//! Given three points A, B, C in screen space (y grows downward), trigon
//! computes the three interior angles, a minor arc marking each angle, and
//! de-overlapped placements for the degree and vertex-name labels, then
//! renders everything as a standalone SVG document.
//!
//! The geometry core ([`RenderModel::compute`]) is pure and total: it holds
//! no state, raises no errors, and maps degenerate input (collinear or
//! coincident points) to a finite, if collapsed, figure. Fallible surfaces
//! are the canvas validation at this crate's entry point and the persisted
//! [`PointStore`].

pub mod defaults;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod store;
pub mod svg;
pub mod types;

pub use geometry::{ArcSpec, arc_spec, interior_angle};
pub use model::{LabelSpec, RenderModel};
pub use store::{DEFAULT_POINTS, PointStore, StoreError};
pub use types::{Angle, Canvas, NumericError, Vertex};

use glam::DVec2;

/// Render three points as a labeled triangle SVG document.
///
/// Returns the SVG string, or an error when the canvas dimensions are not
/// positive finite numbers.
pub fn triangle_svg(
    points: [DVec2; 3],
    width: f64,
    height: f64,
) -> Result<String, NumericError> {
    let canvas = Canvas::try_new(width, height)?;
    let model = RenderModel::compute(points, canvas);
    Ok(svg::document(&model, canvas))
}
