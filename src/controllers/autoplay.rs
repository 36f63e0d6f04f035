// src/controllers/autoplay.rs
//
// Admits circles at random screen positions on a fixed interval so the loop
// keeps cycling without pointer input.

use nannou::prelude::*;
use rand::Rng;

use crate::config::AutoplayConfig;
use crate::models::ScreenGeometry;

pub struct Autoplay {
    enabled: bool,
    interval: f32,
    timer: f32,
}

impl Autoplay {
    pub fn new(enabled: bool, interval: f32) -> Self {
        Self {
            enabled,
            interval,
            // the first admission happens right away
            timer: interval,
        }
    }

    pub fn from_config(config: &AutoplayConfig) -> Self {
        Self::new(config.enabled, config.interval)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled && !self.enabled {
            self.timer = self.interval;
        }
        self.enabled = enabled;
        log::info!("autoplay {}", if enabled { "on" } else { "off" });
    }

    pub fn toggle(&mut self) {
        self.set_enabled(!self.enabled);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns a screen-space point when the next admission is due. `margin`
    /// keeps the point that far from every edge where the screen allows it.
    /// While `busy` the timer holds at the interval, so the admission fires
    /// on the first frame the ring is free again.
    pub fn update<R: Rng>(
        &mut self,
        dt: f32,
        geometry: &ScreenGeometry,
        margin: f32,
        busy: bool,
        rng: &mut R,
    ) -> Option<Point2> {
        if !self.enabled {
            return None;
        }
        self.timer = (self.timer + dt).min(self.interval);
        if self.timer < self.interval || busy {
            return None;
        }
        self.timer = 0.0;
        Some(random_point(geometry, margin, rng))
    }
}

fn random_point<R: Rng>(geometry: &ScreenGeometry, margin: f32, rng: &mut R) -> Point2 {
    let axis = |length: f32, rng: &mut R| {
        if length > 2.0 * margin {
            rng.gen_range(margin..=length - margin)
        } else {
            length / 2.0
        }
    };
    let x = axis(geometry.width, rng);
    let y = axis(geometry.height, rng);
    pt2(x, y)
}
