// src/views/mod.rs

pub mod background;
pub mod ring_view;

pub use background::BackgroundView;
pub use ring_view::{draw_ring, ring_status};
