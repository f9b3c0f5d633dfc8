//! Majority-vote smoothing of raw gesture signals.
//!
//! Per-frame classification flickers when the thumb and index tips sit at
//! nearly the same height. The smoother keeps the last N raw signals and
//! only switches the honored signal once a candidate holds a strict
//! majority of the full window. A window of 1 passes every signal through.

use crate::gesture::signal::GestureSignal;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct GestureSmoother {
    window: VecDeque<GestureSignal>,
    capacity: usize,
    honored: GestureSignal,
}

impl GestureSmoother {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
            honored: GestureSignal::None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The currently honored signal.
    pub fn current(&self) -> GestureSignal {
        self.honored
    }

    /// Record a raw signal and return the signal to act on this tick.
    pub fn push(&mut self, raw: GestureSignal) -> GestureSignal {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(raw);

        let majority = [GestureSignal::Up, GestureSignal::Down, GestureSignal::None]
            .into_iter()
            .find(|candidate| {
                let votes = self.window.iter().filter(|s| *s == candidate).count();
                votes * 2 > self.capacity
            });
        if let Some(signal) = majority {
            self.honored = signal;
        }
        self.honored
    }

    pub fn reset(&mut self) {
        self.window.clear();
        self.honored = GestureSignal::None;
    }
}
