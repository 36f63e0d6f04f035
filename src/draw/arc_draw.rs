// src/draw/arc_draw.rs
// Open arc drawing: a circle stroked from angle 0 through a fraction of a
// full turn, clockwise on screen.

use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;

use std::f32::consts::TAU;

use super::ArcStyle;

const ANGLE_TOLERANCE: f32 = 1e-4;

/// Points along the arc in nannou space. `resolution` is the number of
/// segments in a full circle; the final point always lands exactly on the
/// end angle.
pub fn arc_points(center: Point2, radius: f32, scale: f32, resolution: u32) -> Vec<Point2> {
    let scale = scale.clamp(0.0, 1.0);
    let resolution = resolution.max(3);
    let end_angle = TAU * scale;
    let whole_steps = (resolution as f32 * scale).floor() as u32;

    let mut points = Vec::with_capacity(whole_steps as usize + 2);
    let point_at = |angle: f32| pt2(center.x + radius * angle.cos(), center.y - radius * angle.sin());

    for i in 0..=whole_steps {
        points.push(point_at(TAU * i as f32 / resolution as f32));
    }

    let last_angle = TAU * whole_steps as f32 / resolution as f32;
    if end_angle - last_angle > ANGLE_TOLERANCE {
        points.push(point_at(end_angle));
    }
    points
}

pub fn draw_arc(draw: &Draw, center: Point2, scale: f32, style: &ArcStyle) {
    let points = arc_points(center, style.radius, scale, style.resolution);

    // a lone point is an arc with no extent yet
    for window in points.windows(2) {
        if let [p1, p2] = window {
            draw.line()
                .start(*p1)
                .end(*p2)
                .stroke_weight(style.stroke_weight)
                .caps(LineCap::Round)
                .color(style.color);
        }
    }
}
