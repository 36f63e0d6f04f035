// src/models/node.rs
//
// A circle creator: sweeps from a point into a full ring, and later travels
// straight down from its anchor to the bottom edge of the screen.

use nannou::prelude::*;

use crate::animation::{ScalarEvent, ScalarState};
use crate::draw::{arc_draw, ArcStyle};
use crate::models::ScreenGeometry;

#[derive(Debug, Clone, PartialEq)]
pub struct CircleNode {
    anchor: Point2,
    sweep: ScalarState,
    travel: ScalarState,
}

impl CircleNode {
    pub fn new(anchor: Point2, step: f32) -> Self {
        Self {
            anchor,
            sweep: ScalarState::new(step),
            travel: ScalarState::new(step),
        }
    }

    pub fn anchor(&self) -> Point2 {
        self.anchor
    }

    pub fn sweep(&self) -> &ScalarState {
        &self.sweep
    }

    pub fn travel(&self) -> &ScalarState {
        &self.travel
    }

    pub fn start_sweep(&mut self) -> Option<ScalarEvent> {
        self.sweep.begin()
    }

    pub fn start_move(&mut self) -> Option<ScalarEvent> {
        self.travel.begin()
    }

    pub fn sweep_tick(&mut self) -> Option<ScalarEvent> {
        self.sweep.advance()
    }

    pub fn move_tick(&mut self) -> Option<ScalarEvent> {
        self.travel.advance()
    }

    pub fn is_sweeping(&self) -> bool {
        self.sweep.is_animating()
    }

    pub fn is_moving(&self) -> bool {
        self.travel.is_animating()
    }

    /// Current centre in screen space.
    pub fn position(&self, geometry: &ScreenGeometry) -> Point2 {
        let offset = (geometry.height - self.anchor.y) * self.travel.value();
        pt2(self.anchor.x, self.anchor.y + offset)
    }

    /// Drawn arc extent in degrees.
    pub fn arc_extent(&self) -> f32 {
        360.0 * self.sweep.value()
    }

    pub fn draw(&self, draw: &Draw, geometry: &ScreenGeometry, style: &ArcStyle) {
        let center = geometry.to_nannou(self.position(geometry));
        arc_draw::draw_arc(draw, center, self.sweep.value(), style);
    }
}
