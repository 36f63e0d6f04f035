pub mod scalar_state;
pub mod tick_driver;

pub use scalar_state::{Direction, ScalarEvent, ScalarState, DEFAULT_STEP};
pub use tick_driver::{TickDriver, DEFAULT_TICK_PERIOD};
