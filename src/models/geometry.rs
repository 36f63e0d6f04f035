// src/models/geometry.rs
// Screen space helpers.
//
// Node anchors live in screen space: origin at the top left, y pointing down.
// Nannou draws with the origin at the window centre and y pointing up.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    pub width: f32,
    pub height: f32,
}

impl ScreenGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.w(), rect.h())
    }

    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn to_nannou(&self, point: Point2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    pub fn from_nannou(&self, point: Point2) -> Point2 {
        pt2(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }

    pub fn contains(&self, point: Point2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    pub fn arc_radius(&self, size_factor: f32) -> f32 {
        self.min_dimension() / size_factor
    }

    pub fn stroke_weight(&self, stroke_factor: f32) -> f32 {
        self.min_dimension() / stroke_factor
    }
}
