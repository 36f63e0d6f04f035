// src/draw/mod.rs
// Drawing primitives for circle nodes

pub mod arc_draw;

use nannou::prelude::*;

use crate::config::StyleConfig;
use crate::models::ScreenGeometry;

pub use arc_draw::{arc_points, draw_arc};

/// Per-frame stroke parameters for a node's arc. Radius and stroke weight
/// scale with the smaller window dimension.
#[derive(Debug, Clone)]
pub struct ArcStyle {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
    pub radius: f32,
    pub resolution: u32,
}

impl ArcStyle {
    pub fn from_config(style: &StyleConfig, geometry: &ScreenGeometry) -> Self {
        Self {
            color: style.foreground.0,
            stroke_weight: geometry.stroke_weight(style.stroke_factor),
            radius: geometry.arc_radius(style.size_factor),
            resolution: style.arc_resolution,
        }
    }
}
