// src/views/ring_view.rs
// Draws every resident node of the ring, including one that is exiting.

use nannou::prelude::*;

use crate::draw::ArcStyle;
use crate::models::{CircleRing, ScreenGeometry};

pub fn draw_ring(draw: &Draw, ring: &CircleRing, geometry: &ScreenGeometry, style: &ArcStyle) {
    for node in ring.members() {
        node.draw(draw, geometry, style);
    }
}

/// One-line status for the debug overlay.
pub fn ring_status(ring: &CircleRing, ticks: u64) -> String {
    let phase = if ring.exiting().is_some() {
        "evicting"
    } else if ring.is_transitioning() {
        "sweeping"
    } else {
        "resting"
    };
    format!("{}/{} {} | ticks: {}", ring.len(), ring.capacity(), phase, ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_status() {
        let mut ring = CircleRing::new(1, 0.5);
        assert_eq!(ring_status(&ring, 0), "0/1 resting | ticks: 0");

        ring.admit(pt2(0.0, 0.0));
        assert_eq!(ring_status(&ring, 3), "1/1 sweeping | ticks: 3");

        for _ in 0..3 {
            ring.tick();
        }
        ring.admit(pt2(1.0, 0.0));
        assert_eq!(ring_status(&ring, 7), "1/1 evicting | ticks: 7");
    }
}
