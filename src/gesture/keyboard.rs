//! Keyboard stand-in for the camera.
//!
//! Terminals report key presses but not releases, so a press holds a hand
//! pose for a few ticks; key repeat keeps it alive while the key is held.
//! The synthesized hand goes through the same classification as camera
//! landmarks.

use crate::gesture::input::FrameSource;
use crate::gesture::landmarks::{HandObservation, Landmark, LandmarkFrame};

/// Ticks a single key press keeps its pose (~100ms at 60 ticks/s).
pub const KEY_HOLD_TICKS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPose {
    /// Thumb tip raised above the index tip.
    ThumbUp,
    /// Thumb tip lowered below the index tip.
    ThumbDown,
}

impl HandPose {
    pub fn to_hand(self) -> HandObservation {
        let palm = Landmark::new(0.5, 0.7);
        let (thumb_y, index_y) = match self {
            HandPose::ThumbUp => (0.25, 0.45),
            HandPose::ThumbDown => (0.55, 0.35),
        };
        HandObservation::with_tips(palm, Landmark::new(0.4, thumb_y), Landmark::new(0.6, index_y))
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyboardHand {
    pose: Option<HandPose>,
    hold_ticks: u32,
}

impl KeyboardHand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, pose: HandPose) {
        self.pose = Some(pose);
        self.hold_ticks = KEY_HOLD_TICKS;
    }

    pub fn pose(&self) -> Option<HandPose> {
        self.pose
    }
}

impl FrameSource for KeyboardHand {
    type Frame = LandmarkFrame;

    /// Always delivers a frame; it has a hand only while a pose is held.
    fn try_get_frame(&mut self) -> Option<LandmarkFrame> {
        let Some(pose) = self.pose else {
            return Some(LandmarkFrame::empty());
        };
        self.hold_ticks = self.hold_ticks.saturating_sub(1);
        if self.hold_ticks == 0 {
            self.pose = None;
        }
        Some(LandmarkFrame::single(pose.to_hand()))
    }
}
