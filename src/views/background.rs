// src/views/background.rs
//
// Clears the whole surface each frame so only live circles remain visible.

use nannou::prelude::*;

use crate::config::StyleConfig;

pub struct BackgroundView {
    color: Rgb,
}

impl BackgroundView {
    pub fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub fn from_config(style: &StyleConfig) -> Self {
        Self::new(style.background.0)
    }

    pub fn draw(&self, draw: &Draw) {
        draw.background().color(self.color);
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}
