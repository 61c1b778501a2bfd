//! End-to-end scenarios over the public API: store → model → SVG.

use std::f64::consts::PI;

use glam::dvec2;
use trigon::{Canvas, PointStore, RenderModel, Vertex, triangle_svg};

#[test]
fn end_to_end_scenario() {
    let points = [
        dvec2(200.0, 200.0),
        dvec2(600.0, 250.0),
        dvec2(350.0, 600.0),
    ];
    let canvas = Canvas::try_new(800.0, 800.0).unwrap();
    let model = RenderModel::compute(points, canvas);

    // Three finite angles summing to roughly π; the per-vertex computations
    // are independent, so only approximate agreement is guaranteed.
    let angles = model.angles();
    let sum: f64 = angles.iter().map(|a| a.radians()).sum();
    assert!(angles.iter().all(|a| a.radians().is_finite()));
    assert!((sum - PI).abs() < 1e-6);

    // Three valid arcs.
    for arc in &model.arcs {
        assert!(arc.start.is_finite());
        assert!(arc.end.is_finite());
        assert!(arc.radius > 0.0);
        assert!(arc.sweep);
    }

    // Six labels inside the margin band on both axes.
    for label in model.angle_labels.iter().chain(model.vertex_labels.iter()) {
        assert!((8.0..=792.0).contains(&label.pos.x), "{:?}", label);
        assert!((8.0..=792.0).contains(&label.pos.y), "{:?}", label);
    }
}

#[test]
fn degenerate_scenario_coincident_points() {
    // A == B: every guard in the core has to engage; the output is a
    // finite document, not a panic.
    let p = dvec2(250.0, 250.0);
    let points = [p, p, dvec2(400.0, 500.0)];
    let svg = triangle_svg(points, 800.0, 800.0).unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(!svg.contains("NaN"));
}

#[test]
fn store_feeds_the_renderer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("triangle_points.json");

    // Input surface: adjust one vertex, persisted on change.
    let mut store = PointStore::load(&path);
    store.set_point(Vertex::C, dvec2(420.0, 640.0)).unwrap();

    // Display surface: a fresh load sees the change and renders it.
    let store = PointStore::load(&path);
    assert_eq!(store.points()[2], dvec2(420.0, 640.0));

    let svg = triangle_svg(store.points(), 800.0, 800.0).unwrap();
    assert!(svg.contains("420,640"));
}
