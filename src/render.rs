//! Canvas 2D painting. Purely cosmetic: every context call that can fail is
//! ignored so a broken paint never blocks page interactivity.

use crate::constants::{DOT_COLOR, GLOW_COLOR, LINE_COLOR, LINE_WIDTH, SHADOW_BLUR};
use crate::core::field::{reveal_limit, PointField, SamplePoint};
use crate::core::scatter::ScatterField;
use web_sys as web;

/// Full animated pass: scatter dots, then the glowing curve through the
/// points' current positions, clipped by the reveal ratio.
pub fn draw_frame(
    ctx: &web::CanvasRenderingContext2d,
    field: &PointField,
    scatter: &ScatterField,
    reveal: f32,
    width: f32,
    height: f32,
) {
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    draw_scatter(ctx, scatter, width, height, false);
    draw_curve(ctx, field.points(), reveal);
}

/// Reduced-motion pass: baseline polyline and resting dots, no physics state.
pub fn draw_static(
    ctx: &web::CanvasRenderingContext2d,
    field: &PointField,
    scatter: &ScatterField,
    width: f32,
    height: f32,
) {
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    draw_scatter(ctx, scatter, width, height, true);

    let points = field.points();
    if points.len() < 2 {
        return;
    }
    ctx.begin_path();
    ctx.set_stroke_style_str(LINE_COLOR);
    ctx.set_line_width(LINE_WIDTH);
    ctx.move_to(points[0].x as f64, points[0].y_base as f64);
    for p in &points[1..] {
        ctx.line_to(p.x as f64, p.y_base as f64);
    }
    ctx.stroke();
}

fn draw_curve(ctx: &web::CanvasRenderingContext2d, points: &[SamplePoint], reveal: f32) {
    let limit = reveal_limit(points.len(), reveal);
    if limit < 2 {
        return;
    }
    ctx.begin_path();
    ctx.set_stroke_style_str(LINE_COLOR);
    ctx.set_line_width(LINE_WIDTH);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_shadow_blur(SHADOW_BLUR);
    ctx.set_shadow_color(GLOW_COLOR);

    ctx.move_to(points[0].x as f64, points[0].y_current as f64);
    // Midpoint quadratics hide polyline corners: control point is point i,
    // endpoint is the midpoint of i and i+1.
    for i in 0..limit - 1 {
        let mid_x = (points[i].x + points[i + 1].x) * 0.5;
        let mid_y = (points[i].y_current + points[i + 1].y_current) * 0.5;
        ctx.quadratic_curve_to(
            points[i].x as f64,
            points[i].y_current as f64,
            mid_x as f64,
            mid_y as f64,
        );
    }
    ctx.stroke();

    // Shadow state would bleed into the next pass
    ctx.set_shadow_blur(0.0);
}

fn draw_scatter(
    ctx: &web::CanvasRenderingContext2d,
    scatter: &ScatterField,
    width: f32,
    height: f32,
    static_pass: bool,
) {
    ctx.set_fill_style_str(DOT_COLOR);
    for i in 0..scatter.len() {
        let sample = if static_pass {
            scatter.sample_static(i, width, height)
        } else {
            scatter.sample(i, width, height)
        };
        let Some(s) = sample else { continue };
        ctx.set_global_alpha(s.alpha as f64);
        ctx.begin_path();
        let _ = ctx.arc(
            s.x as f64,
            s.y as f64,
            s.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}
