//! Reduction of hand landmarks to a per-tick control signal.

use crate::gesture::landmarks::HandObservation;
use serde::Serialize;

/// Control input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GestureSignal {
    /// Thumb tip above the index finger tip: flap.
    Up,
    /// A hand is visible but not signalling a flap.
    Down,
    /// No hand, no frame, or a hand the tracker could not resolve.
    #[default]
    None,
}

impl GestureSignal {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::None => "NONE",
        }
    }
}

/// Classify the first detected hand. Later hands are ignored.
///
/// Image y grows downward, so a thumb tip with a smaller y than the index
/// tip is above it and means UP. A first hand missing either tip yields NONE.
pub fn classify_hands(hands: &[HandObservation]) -> GestureSignal {
    let Some(hand) = hands.first() else {
        return GestureSignal::None;
    };
    match (hand.thumb_tip(), hand.index_tip()) {
        (Some(thumb), Some(index)) if thumb.y < index.y => GestureSignal::Up,
        (Some(_), Some(_)) => GestureSignal::Down,
        _ => GestureSignal::None,
    }
}
