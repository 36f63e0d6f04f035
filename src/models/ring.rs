// src/models/ring.rs
//
// Capacity-bounded FIFO of circle nodes.
//
// New nodes are appended and sweep open. Once the ring is full, admitting
// another node first sends the oldest member down and off the screen; the
// new node is held as `pending` until that exit completes, then it is
// appended and starts its own sweep.

use nannou::prelude::*;
use std::collections::VecDeque;

use crate::animation::ScalarEvent;
use crate::models::CircleNode;

pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum RingPhase {
    /// Nothing animating.
    Resting,
    /// At least one member is still sweeping open.
    Sweeping,
    /// The oldest member is exiting; `pending` joins once it is gone.
    Evicting { pending: CircleNode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Appended,
    Evicting,
    /// Dropped because an eviction is already in flight.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingEvent {
    /// A member finished sweeping into a full ring.
    Admitted { anchor: Point2 },
    /// The oldest member finished its exit and was removed.
    Evicted { anchor: Point2 },
}

#[derive(Debug, Clone)]
pub struct CircleRing {
    members: VecDeque<CircleNode>,
    phase: RingPhase,
    capacity: usize,
    step: f32,
}

impl CircleRing {
    pub fn new(capacity: usize, step: f32) -> Self {
        debug_assert!(capacity > 0, "ring capacity must be at least one");
        let capacity = capacity.max(1);
        Self {
            members: VecDeque::with_capacity(capacity),
            phase: RingPhase::Resting,
            capacity,
            step,
        }
    }

    pub fn admit(&mut self, anchor: Point2) -> Admission {
        if matches!(self.phase, RingPhase::Evicting { .. }) {
            log::debug!("admission at {:?} ignored, eviction in progress", anchor);
            return Admission::Ignored;
        }

        let mut node = CircleNode::new(anchor, self.step);

        if self.members.len() < self.capacity {
            node.start_sweep();
            self.members.push_back(node);
            self.phase = RingPhase::Sweeping;
            log::debug!("admitted node at {:?} ({}/{})", anchor, self.len(), self.capacity);
            return Admission::Appended;
        }

        // full: the head is always the oldest member
        if let Some(head) = self.members.front_mut() {
            head.start_move();
            log::debug!("evicting node at {:?} for {:?}", head.anchor(), anchor);
        }
        self.phase = RingPhase::Evicting { pending: node };
        Admission::Evicting
    }

    /// Advances every active phase by one tick and reports completed phases.
    pub fn tick(&mut self) -> Vec<RingEvent> {
        let mut events = Vec::new();

        for node in self.members.iter_mut() {
            if node.sweep_tick() == Some(ScalarEvent::Settled) {
                events.push(RingEvent::Admitted {
                    anchor: node.anchor(),
                });
            }
        }

        if matches!(self.phase, RingPhase::Evicting { .. }) {
            debug_assert!(!self.members.is_empty(), "evicting from an empty ring");
            let exited = match self.members.front_mut() {
                Some(head) => head.move_tick() == Some(ScalarEvent::Settled),
                None => true,
            };
            if exited {
                if let Some(event) = self.complete_eviction() {
                    events.push(event);
                }
            }
        }

        if self.phase == RingPhase::Sweeping && !self.members.iter().any(CircleNode::is_sweeping) {
            self.phase = RingPhase::Resting;
        }

        events
    }

    // Removes the exited head and hands its slot to the pending node.
    fn complete_eviction(&mut self) -> Option<RingEvent> {
        let RingPhase::Evicting { mut pending } =
            std::mem::replace(&mut self.phase, RingPhase::Sweeping)
        else {
            return None;
        };

        let evicted = self.members.pop_front();
        pending.start_sweep();
        log::debug!("evicted node, admitting pending node at {:?}", pending.anchor());
        self.members.push_back(pending);

        evicted.map(|node| RingEvent::Evicted {
            anchor: node.anchor(),
        })
    }

    pub fn phase(&self) -> &RingPhase {
        &self.phase
    }

    pub fn members(&self) -> impl Iterator<Item = &CircleNode> {
        self.members.iter()
    }

    pub fn pending(&self) -> Option<&CircleNode> {
        match &self.phase {
            RingPhase::Evicting { pending } => Some(pending),
            _ => None,
        }
    }

    pub fn exiting(&self) -> Option<&CircleNode> {
        match self.phase {
            RingPhase::Evicting { .. } => self.members.front(),
            _ => None,
        }
    }

    /// The most recently admitted node, including one still pending.
    pub fn current(&self) -> Option<&CircleNode> {
        self.pending().or_else(|| self.members.back())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != RingPhase::Resting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Direction, DEFAULT_STEP};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn point(i: usize) -> Point2 {
        pt2(10.0 * i as f32, 20.0)
    }

    fn anchors(ring: &CircleRing) -> Vec<Point2> {
        ring.members().map(CircleNode::anchor).collect()
    }

    // Ticks until the ring rests, collecting every event.
    fn run_to_rest(ring: &mut CircleRing) -> Vec<RingEvent> {
        let mut events = Vec::new();
        for _ in 0..1000 {
            events.extend(ring.tick());
            if !ring.is_transitioning() {
                return events;
            }
        }
        panic!("ring never came to rest");
    }

    fn filled_ring() -> CircleRing {
        let mut ring = CircleRing::new(DEFAULT_CAPACITY, DEFAULT_STEP);
        for i in 0..DEFAULT_CAPACITY {
            ring.admit(point(i));
            run_to_rest(&mut ring);
        }
        ring
    }

    #[test]
    fn test_first_admission_appends_and_sweeps() {
        let mut ring = CircleRing::new(DEFAULT_CAPACITY, DEFAULT_STEP);
        assert!(ring.is_empty());
        assert_eq!(ring.admit(point(0)), Admission::Appended);
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.phase(), &RingPhase::Sweeping);
        assert!(ring.current().is_some_and(CircleNode::is_sweeping));

        let events = run_to_rest(&mut ring);
        assert_eq!(events, vec![RingEvent::Admitted { anchor: point(0) }]);
        assert_eq!(ring.phase(), &RingPhase::Resting);
    }

    #[test]
    fn test_five_admissions_without_ticks_all_sweep() {
        let mut ring = CircleRing::new(5, DEFAULT_STEP);
        for i in 0..5 {
            assert_eq!(ring.admit(point(i)), Admission::Appended);
        }
        assert_eq!(ring.len(), 5);
        assert!(ring.pending().is_none());
        assert!(ring.exiting().is_none());
        for node in ring.members() {
            assert_eq!(node.sweep().direction(), Direction::Forward);
            assert!(!node.is_moving());
        }

        // every sweep still completes
        let events = run_to_rest(&mut ring);
        assert_eq!(events.len(), 5);
        assert!(ring.members().all(|node| node.sweep().value() == 1.0));
    }

    #[test]
    fn test_admission_at_capacity_evicts_oldest() {
        let mut ring = filled_ring();
        assert!(ring.is_full());

        assert_eq!(ring.admit(point(5)), Admission::Evicting);
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.exiting().map(CircleNode::anchor), Some(point(0)));
        assert_eq!(ring.pending().map(CircleNode::anchor), Some(point(5)));
        assert_eq!(ring.current().map(CircleNode::anchor), Some(point(5)));
        assert!(ring.exiting().is_some_and(CircleNode::is_moving));

        let events = run_to_rest(&mut ring);
        assert_eq!(
            events,
            vec![
                RingEvent::Evicted { anchor: point(0) },
                RingEvent::Admitted { anchor: point(5) },
            ]
        );
        assert_eq!(ring.len(), 5);
        assert_eq!(anchors(&ring), (1..=5).map(point).collect::<Vec<_>>());
        assert!(ring.pending().is_none());
        assert!(ring.exiting().is_none());
    }

    #[test]
    fn test_pending_node_waits_for_exit() {
        let mut ring = filled_ring();
        ring.admit(point(5));

        let mut ticks = 0;
        while ring.exiting().is_some() {
            // the oldest stays resident while it travels
            assert_eq!(ring.members().next().map(CircleNode::anchor), Some(point(0)));
            assert_eq!(ring.pending().map(|n| n.sweep().value()), Some(0.0));
            ring.tick();
            ticks += 1;
            assert!(ticks < 1000);
        }

        // the new node starts sweeping on the tick after the exit completes
        let newest = ring.current().cloned();
        assert!(newest.as_ref().is_some_and(CircleNode::is_sweeping));
        assert_eq!(newest.map(|n| n.sweep().value()), Some(0.0));
        ring.tick();
        assert!(ring.current().is_some_and(|n| n.sweep().value() > 0.0));
    }

    #[test]
    fn test_admission_during_eviction_is_ignored() {
        let mut ring = filled_ring();
        ring.admit(point(5));
        ring.tick();

        assert_eq!(ring.admit(point(6)), Admission::Ignored);
        assert_eq!(ring.pending().map(CircleNode::anchor), Some(point(5)));
        assert_eq!(ring.exiting().map(CircleNode::anchor), Some(point(0)));

        run_to_rest(&mut ring);
        assert_eq!(anchors(&ring), (1..=5).map(point).collect::<Vec<_>>());
    }

    #[test]
    fn test_eviction_is_fifo_over_many_cycles() {
        let mut ring = filled_ring();
        for i in 5..17 {
            ring.admit(point(i));
            let events = run_to_rest(&mut ring);
            assert_eq!(events[0], RingEvent::Evicted { anchor: point(i - 5) });
            assert_eq!(anchors(&ring), (i - 4..=i).map(point).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_older_members_stay_static() {
        let mut ring = CircleRing::new(3, DEFAULT_STEP);
        ring.admit(point(0));
        run_to_rest(&mut ring);
        ring.admit(point(1));
        ring.tick();

        let oldest = ring.members().next().cloned();
        assert!(oldest.as_ref().is_some_and(|n| !n.is_sweeping() && !n.is_moving()));
        assert_eq!(oldest.map(|n| n.sweep().value()), Some(1.0));
    }

    #[test]
    fn test_capacity_one_replaces_single_member() {
        let mut ring = CircleRing::new(1, 0.5);
        ring.admit(point(0));
        run_to_rest(&mut ring);

        assert_eq!(ring.admit(point(1)), Admission::Evicting);
        run_to_rest(&mut ring);
        assert_eq!(anchors(&ring), vec![point(1)]);
    }

    #[test]
    fn test_head_keeps_sweeping_while_it_exits() {
        let mut ring = CircleRing::new(1, 0.5);
        assert_eq!(ring.admit(point(0)), Admission::Appended);
        assert_eq!(ring.admit(point(1)), Admission::Evicting);

        let head = ring.exiting().cloned();
        assert!(head.as_ref().is_some_and(|n| n.is_sweeping() && n.is_moving()));

        // both phases of the exiting head advance on the same tick
        ring.tick();
        let head = ring.exiting().cloned();
        assert_eq!(head.as_ref().map(|n| n.sweep().value()), Some(0.5));
        assert_eq!(head.as_ref().map(|n| n.travel().value()), Some(0.5));
        assert_eq!(ring.pending().map(|n| n.sweep().value()), Some(0.0));

        let events = run_to_rest(&mut ring);
        assert_eq!(
            events,
            vec![
                RingEvent::Admitted { anchor: point(0) },
                RingEvent::Evicted { anchor: point(0) },
                RingEvent::Admitted { anchor: point(1) },
            ]
        );
        assert_eq!(anchors(&ring), vec![point(1)]);
    }

    #[test]
    fn test_invariants_hold_under_random_traffic() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ring = CircleRing::new(DEFAULT_CAPACITY, 0.1);
        let mut next = 0;

        for _ in 0..5000 {
            if rng.gen_bool(0.1) {
                ring.admit(point(next));
                next += 1;
            } else {
                ring.tick();
            }

            assert!(ring.len() <= ring.capacity());
            if ring.pending().is_some() {
                assert!(ring.exiting().is_some());
            }
            if ring.exiting().is_some() {
                assert!(ring.is_full());
            }
        }
    }
}
