//! The renderable triangle model.
//!
//! [`RenderModel::compute`] composes angle computation, arc geometry and
//! label layout for the three vertices in fixed A-B-C order. It is a pure
//! function of (points, canvas): no state is retained between calls and
//! every input, including degenerate point sets, yields a complete finite
//! model. Callers that want caching can memoize on the inputs themselves;
//! the computation is cheap enough to rerun on every change.

use glam::DVec2;

use crate::defaults;
use crate::geometry::{self, ArcSpec};
use crate::layout;
use crate::types::{Angle, Canvas, Vertex};

/// A positioned piece of text: either an angle-degree label or a
/// vertex-name label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSpec {
    pub pos: DVec2,
    pub text: String,
}

/// Everything the rendering layer needs to draw the figure.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderModel {
    /// The three points in insertion order (A, B, C).
    pub polygon: [DVec2; 3],
    /// Angle-marking arc per vertex.
    pub arcs: [ArcSpec; 3],
    /// Degree labels, de-overlapped and clamped to the canvas.
    pub angle_labels: [LabelSpec; 3],
    /// Vertex-name labels ("A", "B", "C"), clamped to the canvas.
    pub vertex_labels: [LabelSpec; 3],
}

/// Arc radius for an angle: wider angles get wider arcs, so arcs stay
/// readable at sharp vertices without crowding the figure.
pub fn arc_radius_for(angle: Angle) -> f64 {
    geometry::clamp(
        defaults::ARC_RADIUS_BASE
            + (angle.degrees() - defaults::ARC_RADIUS_PIVOT_DEG) * defaults::ARC_RADIUS_SLOPE,
        defaults::ARC_RADIUS_MIN,
        defaults::ARC_RADIUS_MAX,
    )
}

/// Distance of the degree label from its vertex: grows as the angle
/// shrinks, pushing the label out of the narrowing wedge.
pub fn angle_label_distance_for(angle: Angle) -> f64 {
    defaults::ANGLE_LABEL_DIST
        + geometry::clamp(
            (defaults::ANGLE_LABEL_PIVOT_DEG - angle.degrees()) * defaults::ANGLE_LABEL_EXTRA_SLOPE,
            0.0,
            defaults::ANGLE_LABEL_EXTRA_MAX,
        )
}

impl RenderModel {
    /// Compute the full renderable model for three points on a canvas.
    pub fn compute(points: [DVec2; 3], canvas: Canvas) -> RenderModel {
        // (vertex, neighbor1, neighbor2) per vertex, neighbors in A-B-C order.
        let rays: [(DVec2, DVec2, DVec2); 3] = std::array::from_fn(|i| {
            let (n1, n2) = Vertex::ALL[i].neighbors();
            (points[i], points[n1.index()], points[n2.index()])
        });

        let angles: [Angle; 3] =
            std::array::from_fn(|i| geometry::interior_angle(rays[i].0, rays[i].1, rays[i].2));

        tracing::debug!(
            a = angles[0].degrees(),
            b = angles[1].degrees(),
            c = angles[2].degrees(),
            "interior angles"
        );

        let arcs: [ArcSpec; 3] = std::array::from_fn(|i| {
            let (v, n1, n2) = rays[i];
            geometry::arc_spec(v, n1, n2, arc_radius_for(angles[i]))
        });

        let mut angle_positions: [DVec2; 3] = std::array::from_fn(|i| {
            let (v, n1, n2) = rays[i];
            layout::angle_label_position(v, n1, n2, angle_label_distance_for(angles[i]))
        });
        layout::spread_angle_labels(&mut angle_positions, &rays);

        let angle_labels: [LabelSpec; 3] = std::array::from_fn(|i| LabelSpec {
            pos: canvas.clamp_inside(angle_positions[i], defaults::CANVAS_MARGIN),
            text: angles[i].to_string(),
        });

        let vertex_labels: [LabelSpec; 3] = std::array::from_fn(|i| {
            let (v, n1, n2) = rays[i];
            let pos = layout::vertex_label_position(v, n1, n2, defaults::VERTEX_LABEL_DIST);
            LabelSpec {
                pos: canvas.clamp_inside(pos, defaults::CANVAS_MARGIN),
                text: Vertex::ALL[i].name().to_string(),
            }
        });

        RenderModel {
            polygon: points,
            arcs,
            angle_labels,
            vertex_labels,
        }
    }

    /// The three interior angles, recomputed from the stored polygon.
    pub fn angles(&self) -> [Angle; 3] {
        std::array::from_fn(|i| {
            let (n1, n2) = Vertex::ALL[i].neighbors();
            geometry::interior_angle(
                self.polygon[i],
                self.polygon[n1.index()],
                self.polygon[n2.index()],
            )
        })
    }
}
