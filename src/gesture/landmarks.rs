//! Hand landmarks as produced by an external hand-tracking model.
//!
//! Uses the common 21-point hand topology: index 0 is the wrist, 4 the
//! thumb tip, 8 the index finger tip. Coordinates are normalized image
//! coordinates with y growing downward.

use serde::{Deserialize, Serialize};

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_FINGER_TIP: usize = 8;
pub const HAND_LANDMARK_COUNT: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// One detected hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    pub landmarks: Vec<Landmark>,
}

impl HandObservation {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    pub fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    pub fn thumb_tip(&self) -> Option<&Landmark> {
        self.landmark(THUMB_TIP)
    }

    pub fn index_tip(&self) -> Option<&Landmark> {
        self.landmark(INDEX_FINGER_TIP)
    }

    /// A full hand with every point at `rest`, except the thumb and index
    /// tips. Used to synthesize poses from non-camera input.
    pub fn with_tips(rest: Landmark, thumb_tip: Landmark, index_tip: Landmark) -> Self {
        let mut landmarks = vec![rest; HAND_LANDMARK_COUNT];
        landmarks[THUMB_TIP] = thumb_tip;
        landmarks[INDEX_FINGER_TIP] = index_tip;
        Self { landmarks }
    }
}

/// Everything the hand tracker reported for one camera frame, in the
/// tracker's own order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    #[serde(default)]
    pub hands: Vec<HandObservation>,
}

impl LandmarkFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(hand: HandObservation) -> Self {
        Self { hands: vec![hand] }
    }
}
