use crate::{Card, Position, Seat};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One card travelling from the shoe to a hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DealTask {
    pub card: Card,
    pub target: Seat,
    pub start: Position,
    pub end: Position,
    pub progress: f32,
}

impl DealTask {
    /// Current on-screen position of the card.
    pub fn position(&self) -> Position {
        Position::lerp(self.start, self.end, self.progress.min(1.0))
    }
}

/// A card that finished its flight this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub card: Card,
    pub target: Seat,
}

/// FIFO of cards waiting to be dealt. Only the head is ever in flight.
#[derive(Debug, Clone, Default)]
pub struct DealAnimator {
    queue: VecDeque<DealTask>,
    in_flight: Option<DealTask>,
}

impl DealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, card: Card, target: Seat, start: Position, end: Position) {
        self.queue.push_back(DealTask {
            card,
            target,
            start,
            end,
            progress: 0.0,
        });
    }

    /// Advance the in-flight card by `delta`, promoting the queue head first if nothing is moving.
    pub fn tick(&mut self, delta: f32) -> Option<Landing> {
        if self.in_flight.is_none() {
            self.in_flight = self.queue.pop_front();
        }

        let task = self.in_flight.as_mut()?;
        task.progress += delta;
        if task.progress < 1.0 {
            return None;
        }

        let task = self.in_flight.take()?;
        Some(Landing {
            card: task.card,
            target: task.target,
        })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some() || !self.queue.is_empty()
    }

    pub fn in_flight(&self) -> Option<&DealTask> {
        self.in_flight.as_ref()
    }

    pub fn queued(&self) -> impl Iterator<Item = &DealTask> {
        self.queue.iter()
    }

    /// Cards still travelling to `seat`, including the one in flight.
    pub fn pending_for(&self, seat: Seat) -> usize {
        self.in_flight
            .iter()
            .chain(self.queue.iter())
            .filter(|task| task.target == seat)
            .count()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.in_flight = None;
    }
}

/// Flip of the dealer's hole card. Below 0.5 the back is showing, from 0.5 the face.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoleCardReveal {
    progress: f32,
    flipping: bool,
    revealed: bool,
}

impl HoleCardReveal {
    /// Returns false if the flip is already running or done.
    pub fn start(&mut self) -> bool {
        if self.flipping || self.revealed {
            return false;
        }
        self.flipping = true;
        self.progress = 0.0;
        true
    }

    /// Returns true on the tick the card finishes turning.
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.flipping {
            return false;
        }
        self.progress += delta;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.flipping = false;
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_flipping(&self) -> bool {
        self.flipping
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn shows_face(&self) -> bool {
        self.revealed || (self.flipping && self.progress >= 0.5)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
