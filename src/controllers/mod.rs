pub mod animation_loop;
pub mod autoplay;
pub mod osc;

pub use animation_loop::AnimationLoop;
pub use autoplay::Autoplay;
pub use osc::{LoopCommand, OscController};
