//! Label placement: bisector positioning and the de-overlap pass.
//!
//! Angle labels sit on the inward bisector of their vertex, vertex-name
//! labels on the outward bisector. Both have fallback directions for
//! degenerate geometry (collinear or coincident points) that are visual
//! heuristics, not canonical constructions. A single greedy pass nudges
//! angle labels apart when two land too close; it does not iterate to
//! convergence, so residual overlap is possible.

use glam::DVec2;

use crate::defaults;

/// Inward bisector direction at `vertex`: the normalized sum of the unit
/// vectors toward each neighbor. Zero when the neighbors are diametrically
/// opposed through the vertex.
pub fn bisector_dir(vertex: DVec2, n1: DVec2, n2: DVec2) -> DVec2 {
    let d1 = (n1 - vertex).normalize_or_zero();
    let d2 = (n2 - vertex).normalize_or_zero();
    (d1 + d2).normalize_or_zero()
}

/// Position for the angle-degree label: `distance` along the inward
/// bisector. When the bisector sum is near zero (neighbors opposite each
/// other), fall back to the first neighbor's direction alone.
pub fn angle_label_position(vertex: DVec2, n1: DVec2, n2: DVec2, distance: f64) -> DVec2 {
    let d1 = (n1 - vertex).normalize_or_zero();
    let d2 = (n2 - vertex).normalize_or_zero();
    let sum = d1 + d2;
    let dir = if sum.length() < defaults::DEGENERATE_EPS {
        d1
    } else {
        sum.normalize()
    };
    vertex + dir * distance
}

/// Position for the vertex-name label: `distance` along the *outward*
/// bisector. In the degenerate case the outward direction is undefined, so
/// fall back to a perpendicular of the first neighbor direction, which at
/// least keeps the name off the triangle's edge.
pub fn vertex_label_position(vertex: DVec2, n1: DVec2, n2: DVec2, distance: f64) -> DVec2 {
    let d1 = (n1 - vertex).normalize_or_zero();
    let d2 = (n2 - vertex).normalize_or_zero();
    let inward = d1 + d2;
    let dir = if inward.length() < defaults::DEGENERATE_EPS {
        DVec2::new(-d1.y, d1.x).normalize_or_zero()
    } else {
        -inward.normalize()
    };
    vertex + dir * distance
}

/// Greedy de-overlap over the three angle labels.
///
/// `rays[i]` is `(vertex, n1, n2)` for label `i`. Pairs are checked in the
/// fixed order (0,1), (0,2), (1,2); when two labels are closer than
/// [`defaults::LABEL_PROXIMITY`], the second one is pushed
/// [`defaults::LABEL_NUDGE`] further out along its own vertex's bisector.
/// Order matters: an earlier nudge can change a later pair's verdict.
pub fn spread_angle_labels(positions: &mut [DVec2; 3], rays: &[(DVec2, DVec2, DVec2); 3]) {
    for (i, j) in [(0, 1), (0, 2), (1, 2)] {
        if positions[i].distance(positions[j]) < defaults::LABEL_PROXIMITY {
            let (vertex, n1, n2) = rays[j];
            positions[j] += bisector_dir(vertex, n1, n2) * defaults::LABEL_NUDGE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn approx_vec(a: DVec2, b: DVec2) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn angle_label_sits_on_inward_bisector() {
        let v = dvec2(0.0, 0.0);
        let pos = angle_label_position(v, dvec2(10.0, 0.0), dvec2(0.0, 10.0), 10.0);
        let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert!(approx_vec(pos, dvec2(10.0 * inv_sqrt2, 10.0 * inv_sqrt2)));
    }

    #[test]
    fn angle_label_degenerate_falls_back_to_first_neighbor() {
        // Neighbors diametrically opposed: bisector sum vanishes.
        let v = dvec2(5.0, 5.0);
        let pos = angle_label_position(v, dvec2(15.0, 5.0), dvec2(-5.0, 5.0), 8.0);
        assert!(approx_vec(pos, dvec2(13.0, 5.0)));
    }

    #[test]
    fn vertex_label_points_outward() {
        let v = dvec2(0.0, 0.0);
        let pos = vertex_label_position(v, dvec2(10.0, 0.0), dvec2(0.0, 10.0), 10.0);
        let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert!(approx_vec(pos, dvec2(-10.0 * inv_sqrt2, -10.0 * inv_sqrt2)));
    }

    #[test]
    fn vertex_label_degenerate_uses_perpendicular() {
        let v = dvec2(0.0, 0.0);
        let pos = vertex_label_position(v, dvec2(10.0, 0.0), dvec2(-10.0, 0.0), 6.0);
        // Perpendicular of (1, 0) is (0, 1) in screen space.
        assert!(approx_vec(pos, dvec2(0.0, 6.0)));
    }

    #[test]
    fn coincident_everything_stays_finite() {
        let v = dvec2(3.0, 3.0);
        let a = angle_label_position(v, v, v, 48.0);
        let b = vertex_label_position(v, v, v, 16.0);
        assert!(a.is_finite());
        assert!(b.is_finite());
        // All directions collapse to zero: labels land on the vertex.
        assert_eq!(a, v);
        assert_eq!(b, v);
    }

    #[test]
    fn spread_pushes_second_label_past_threshold() {
        // Vertex 1's bisector points straight down (+y); place label 1
        // 20px below label 0 so the nudge moves it directly away.
        let rays = [
            (dvec2(0.0, 0.0), dvec2(100.0, 0.0), dvec2(0.0, 100.0)),
            (dvec2(400.0, 0.0), dvec2(300.0, 100.0), dvec2(500.0, 100.0)),
            (dvec2(800.0, 800.0), dvec2(700.0, 700.0), dvec2(800.0, 700.0)),
        ];
        let mut positions = [
            dvec2(400.0, 40.0),
            dvec2(400.0, 60.0),
            dvec2(750.0, 750.0),
        ];
        assert!(positions[0].distance(positions[1]) < crate::defaults::LABEL_PROXIMITY);
        spread_angle_labels(&mut positions, &rays);
        assert!(positions[0].distance(positions[1]) >= crate::defaults::LABEL_PROXIMITY);
        // The far label was never touched.
        assert_eq!(positions[2], dvec2(750.0, 750.0));
    }

    #[test]
    fn spread_leaves_separated_labels_alone() {
        let rays = [
            (dvec2(0.0, 0.0), dvec2(100.0, 0.0), dvec2(0.0, 100.0)),
            (dvec2(400.0, 0.0), dvec2(300.0, 100.0), dvec2(500.0, 100.0)),
            (dvec2(0.0, 400.0), dvec2(100.0, 400.0), dvec2(0.0, 300.0)),
        ];
        let mut positions = [dvec2(50.0, 50.0), dvec2(400.0, 60.0), dvec2(60.0, 350.0)];
        let before = positions;
        spread_angle_labels(&mut positions, &rays);
        assert_eq!(positions, before);
    }

    #[test]
    fn spread_pair_order_is_fixed() {
        // Labels 0 and 1 are close; after 1 is nudged down it also ends up
        // close to 2, so the (1,2) check then fires: 2 is nudged as well.
        // Checking (1,2) before (0,1) would have left 2 in place.
        let rays = [
            (dvec2(400.0, 0.0), dvec2(300.0, 100.0), dvec2(500.0, 100.0)),
            (dvec2(400.0, 0.0), dvec2(300.0, 100.0), dvec2(500.0, 100.0)),
            (dvec2(400.0, 0.0), dvec2(300.0, 100.0), dvec2(500.0, 100.0)),
        ];
        let mut positions = [
            dvec2(400.0, 40.0),
            dvec2(400.0, 60.0),
            dvec2(400.0, 90.0),
        ];
        // 0-1 distance 20 < 26; 1-2 distance 30 initially fine.
        spread_angle_labels(&mut positions, &rays);
        // 1 nudged to y=74; 0-2 distance 50 fine; then 1-2 distance 16 < 26,
        // so 2 nudged to y=104.
        assert!((positions[1].y - 74.0).abs() < 1e-9);
        assert!((positions[2].y - 104.0).abs() < 1e-9);
    }
}
