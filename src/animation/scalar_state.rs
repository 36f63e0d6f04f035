// src/animation/scalar_state.rs
//
// A single animated scalar that travels one full unit between its two
// resting values (0 and 1) and reports when an excursion starts or settles.

pub const DEFAULT_STEP: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Idle,
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Idle => 0.0,
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    // grow away from 0, shrink away from 1
    fn away_from(settled: f32) -> Self {
        if 1.0 - 2.0 * settled > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

/// Reported by `begin` and `advance` in place of completion callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarEvent {
    Started,
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarState {
    value: f32,
    settled: f32,
    direction: Direction,
    step: f32,
}

impl Default for ScalarState {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl ScalarState {
    pub fn new(step: f32) -> Self {
        debug_assert!(step > 0.0 && step <= 1.0, "step must lie in (0, 1]");
        Self {
            value: 0.0,
            settled: 0.0,
            direction: Direction::Idle,
            step,
        }
    }

    /// Starts an excursion towards the opposite resting value.
    /// Returns `None` if an excursion is already in progress.
    pub fn begin(&mut self) -> Option<ScalarEvent> {
        if self.direction != Direction::Idle {
            return None;
        }
        self.direction = Direction::away_from(self.settled);
        Some(ScalarEvent::Started)
    }

    /// Moves the value one step. Returns `Settled` once a full unit has been
    /// covered, at which point the value is snapped to the new resting value.
    pub fn advance(&mut self) -> Option<ScalarEvent> {
        if self.direction == Direction::Idle {
            return None;
        }
        let sign = self.direction.sign();
        self.value += sign * self.step;
        if (self.value - self.settled).abs() > 1.0 {
            self.value = self.settled + sign;
            self.direction = Direction::Idle;
            self.settled = self.value;
            return Some(ScalarEvent::Settled);
        }
        None
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn settled(&self) -> f32 {
        self.settled
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn is_animating(&self) -> bool {
        self.direction != Direction::Idle
    }
}
