// src/controllers/animation_loop.rs
//
// Owns the tick driver and the ring. Admission requests are serialized here:
// a request is only forwarded while the ring is at rest. The driver runs
// from an accepted admission until the ring comes back to rest.

use nannou::prelude::*;

use crate::animation::TickDriver;
use crate::config::AnimationConfig;
use crate::models::{Admission, CircleRing, RingEvent};

pub struct AnimationLoop {
    driver: TickDriver,
    ring: CircleRing,
    paused: bool,
}

impl AnimationLoop {
    pub fn new(driver: TickDriver, ring: CircleRing) -> Self {
        Self {
            driver,
            ring,
            paused: false,
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(
            TickDriver::new(config.tick_period()),
            CircleRing::new(config.capacity, config.step),
        )
    }

    /// Forwards an admission to the ring unless a previous one is still
    /// animating.
    pub fn request_admit(&mut self, point: Point2) -> Admission {
        if self.ring.is_transitioning() {
            log::debug!("tap at {:?} dropped, ring is busy", point);
            return Admission::Ignored;
        }

        let admission = self.ring.admit(point);
        if admission != Admission::Ignored && !self.paused {
            self.driver.start();
        }
        admission
    }

    /// Runs every tick due after `dt` seconds and returns the ring's events.
    pub fn update(&mut self, dt: f32) -> Vec<RingEvent> {
        let due = self.driver.advance(dt);
        let mut events = Vec::new();
        for _ in 0..due {
            events.extend(self.ring.tick());
        }
        self.stop_if_resting();
        events
    }

    /// Runs a single tick regardless of the driver.
    pub fn step(&mut self) -> Vec<RingEvent> {
        let events = self.ring.tick();
        self.stop_if_resting();
        events
    }

    fn stop_if_resting(&mut self) {
        if !self.ring.is_transitioning() {
            self.driver.stop();
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.driver.stop();
    }

    pub fn resume(&mut self) {
        self.paused = false;
        if self.ring.is_transitioning() {
            self.driver.start();
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn ring(&self) -> &CircleRing {
        &self.ring
    }

    pub fn driver(&self) -> &TickDriver {
        &self.driver
    }
}
