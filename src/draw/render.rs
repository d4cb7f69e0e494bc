//! Cairo-based rendering functions for strokes.

use super::color::Color;
use super::smooth::{self, PathSegment};
use super::stroke::{Point, Stroke};

/// Renders all strokes to a Cairo context.
///
/// Strokes are drawn in the order they appear (first stroke = bottom layer).
/// Eraser strokes remove what is already on the target surface, so the
/// context should target the stroke layer rather than a composited background.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `strokes` - Slice of strokes to render
/// * `tension` - Curve tension, 0.0 draws straight segments between points
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke], tension: f64) {
    for stroke in strokes {
        render_stroke(ctx, stroke, tension);
    }
}

/// Renders a single stroke as a smoothed polyline with round caps and joins.
///
/// Pen strokes draw over existing pixels; eraser strokes use
/// `Operator::DestOut`, clearing alpha along the path.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke, tension: f64) {
    let path = smooth::tension_path(stroke.points(), tension);
    if path.is_empty() {
        return;
    }

    // Save context state so the operator doesn't leak into later strokes
    ctx.save().ok();

    if stroke.is_eraser() {
        ctx.set_operator(cairo::Operator::DestOut);
        // DestOut only looks at source alpha
        ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0);
    } else {
        ctx.set_operator(cairo::Operator::Over);
        set_source_color(ctx, stroke.color);
    }
    ctx.set_line_width(stroke.width.as_f64());
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    trace_path(ctx, &path);
    let _ = ctx.stroke(); // A failed stroke leaves the surface untouched

    ctx.restore().ok();
}

/// Replays path segments onto the context's current path.
///
/// Cairo has no quadratic primitive, so quadratic segments are raised to
/// the equivalent cubic.
fn trace_path(ctx: &cairo::Context, path: &[PathSegment]) {
    let mut current: Point = (0.0, 0.0);

    for segment in path {
        match *segment {
            PathSegment::MoveTo(p) => {
                ctx.move_to(p.0, p.1);
                current = p;
            }
            PathSegment::LineTo(p) => {
                ctx.line_to(p.0, p.1);
                current = p;
            }
            PathSegment::QuadTo { ctrl, to } => {
                let c1 = lerp(current, ctrl, 2.0 / 3.0);
                let c2 = lerp(to, ctrl, 2.0 / 3.0);
                ctx.curve_to(c1.0, c1.1, c2.0, c2.1, to.0, to.1);
                current = to;
            }
            PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                ctx.curve_to(ctrl1.0, ctrl1.1, ctrl2.0, ctrl2.1, to.0, to.1);
                current = to;
            }
        }
    }
}

fn lerp(from: Point, to: Point, t: f64) -> Point {
    (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
}

fn set_source_color(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
}

/// Clears the whole target to transparent.
pub fn clear_surface(ctx: &cairo::Context) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.restore().ok();
}

/// Fills the whole target with an opaque or translucent background color.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Source);
    set_source_color(ctx, color);
    let _ = ctx.paint();
    ctx.restore().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn quadratic_elevation_hits_expected_controls() {
        assert_close(lerp((0.0, 0.0), (3.0, 6.0), 2.0 / 3.0), (2.0, 4.0));
        assert_close(lerp((9.0, 0.0), (3.0, 6.0), 2.0 / 3.0), (5.0, 4.0));
    }
}
