pub mod geometry;
pub mod node;
pub mod ring;

pub use geometry::ScreenGeometry;
pub use node::CircleNode;
pub use ring::{Admission, CircleRing, RingEvent, RingPhase, DEFAULT_CAPACITY};
