//! SVG document emission.
//!
//! Maps a [`RenderModel`] onto SVG markup: polygon, vertex dots, angle
//! arcs, text labels. Pure presentation — all geometry decisions were made
//! by the model. Label text is digits, the degree sign and vertex names,
//! so no XML escaping is required.

use glam::DVec2;

use crate::model::RenderModel;
use crate::types::Canvas;

const TRIANGLE_FILL: &str = "#e6f2ff";
const TRIANGLE_STROKE: &str = "#1f6feb";
const TRIANGLE_STROKE_WIDTH: f64 = 2.0;
const VERTEX_DOT_RADIUS: f64 = 4.0;
const ARC_STROKE: &str = "#e36209";
const ARC_STROKE_WIDTH: f64 = 3.0;
const ANGLE_LABEL_SIZE: f64 = 14.0;
const ANGLE_LABEL_FILL: &str = "#111";
const NAME_LABEL_SIZE: f64 = 12.0;
const NAME_LABEL_FILL: &str = "#555";

/// Render a complete standalone SVG document for the model.
pub fn document(model: &RenderModel, canvas: Canvas) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#,
        fmt_num(canvas.width()),
        fmt_num(canvas.height()),
    ));
    out.push('\n');

    // Triangle outline.
    let [a, b, c] = model.polygon;
    out.push_str(&format!(
        r#"<polygon points="{} {} {}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        fmt_point(a),
        fmt_point(b),
        fmt_point(c),
        TRIANGLE_FILL,
        TRIANGLE_STROKE,
        fmt_num(TRIANGLE_STROKE_WIDTH),
    ));
    out.push('\n');

    // Vertex dots.
    for p in model.polygon {
        out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            fmt_num(p.x),
            fmt_num(p.y),
            fmt_num(VERTEX_DOT_RADIUS),
            TRIANGLE_STROKE,
        ));
        out.push('\n');
    }

    // Angle arcs. Large-arc flag is always 0: the model guarantees the
    // minor arc by ordering start/end.
    for arc in &model.arcs {
        out.push_str(&format!(
            r#"<path d="M {} {} A {} {} 0 0 {} {} {}" stroke="{}" stroke-width="{}" fill="none"/>"#,
            fmt_num(arc.start.x),
            fmt_num(arc.start.y),
            fmt_num(arc.radius),
            fmt_num(arc.radius),
            if arc.sweep { 1 } else { 0 },
            fmt_num(arc.end.x),
            fmt_num(arc.end.y),
            ARC_STROKE,
            fmt_num(ARC_STROKE_WIDTH),
        ));
        out.push('\n');
    }

    for label in &model.angle_labels {
        out.push_str(&text_element(
            label.pos,
            &label.text,
            ANGLE_LABEL_SIZE,
            ANGLE_LABEL_FILL,
        ));
        out.push('\n');
    }
    for label in &model.vertex_labels {
        out.push_str(&text_element(
            label.pos,
            &label.text,
            NAME_LABEL_SIZE,
            NAME_LABEL_FILL,
        ));
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out
}

fn text_element(pos: DVec2, content: &str, size: f64, fill: &str) -> String {
    format!(
        r#"<text x="{}" y="{}" font-size="{}" text-anchor="middle" dominant-baseline="middle" fill="{}">{}</text>"#,
        fmt_num(pos.x),
        fmt_num(pos.y),
        fmt_num(size),
        fill,
        content,
    )
}

fn fmt_point(p: DVec2) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

/// Format a number with 6 significant figures, trailing zeros trimmed
/// (`%g`-style), keeping coordinate attributes compact.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let sig_figs = 6;
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}
