//! Gesture control: hand landmarks in, one control signal per tick out.
//!
//! The hand tracker and camera live outside this crate. They reach the
//! game through [`FrameSource`] and [`HandClassifier`]; the game loop only
//! consumes a [`GestureInput`].

pub mod input;
pub mod keyboard;
pub mod landmarks;
pub mod signal;
pub mod smoothing;
pub mod stream;

pub use input::{
    ClassifiedInput, FrameSource, GestureInput, HandClassifier, InputStats, PrecomputedLandmarks,
    ScriptedSource, SignalScript,
};
pub use keyboard::{HandPose, KeyboardHand};
pub use landmarks::{HandObservation, Landmark, LandmarkFrame};
pub use signal::{classify_hands, GestureSignal};
pub use smoothing::GestureSmoother;
pub use stream::LandmarkStream;
