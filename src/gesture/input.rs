//! Seams between frame acquisition, hand classification and the game loop.
//!
//! A [`FrameSource`] may fail to deliver a frame on any tick; a
//! [`HandClassifier`] turns a frame into zero or more hands. The game loop
//! only sees a [`GestureInput`], which yields one [`GestureSignal`] per tick.

use crate::gesture::landmarks::{HandObservation, LandmarkFrame};
use crate::gesture::signal::{classify_hands, GestureSignal};
use crate::gesture::smoothing::GestureSmoother;
use std::collections::VecDeque;

/// Produces the most recent frame, if one is available this tick.
pub trait FrameSource {
    type Frame;

    /// Never blocks. `None` means no frame this tick.
    fn try_get_frame(&mut self) -> Option<Self::Frame>;
}

/// Detects hands in a frame. An empty result means no hand.
pub trait HandClassifier<F> {
    fn classify(&mut self, frame: &F) -> Vec<HandObservation>;
}

/// Per-tick control input consumed by the game loop.
pub trait GestureInput {
    fn next_signal(&mut self) -> GestureSignal;
}

/// Classifier for sources that already deliver landmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecomputedLandmarks;

impl HandClassifier<LandmarkFrame> for PrecomputedLandmarks {
    fn classify(&mut self, frame: &LandmarkFrame) -> Vec<HandObservation> {
        frame.hands.clone()
    }
}

/// What the last tick saw, for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputStats {
    pub frame_received: bool,
    pub hands: usize,
    pub raw: GestureSignal,
    pub honored: GestureSignal,
    pub missing_frames: u64,
}

/// Frame source + classifier + mapping + smoothing.
pub struct ClassifiedInput<S, C> {
    source: S,
    classifier: C,
    smoother: GestureSmoother,
    stats: InputStats,
}

impl<S, C> ClassifiedInput<S, C>
where
    S: FrameSource,
    C: HandClassifier<S::Frame>,
{
    pub fn new(source: S, classifier: C, smoothing_window: usize) -> Self {
        Self {
            source,
            classifier,
            smoother: GestureSmoother::new(smoothing_window),
            stats: InputStats::default(),
        }
    }

    pub fn stats(&self) -> InputStats {
        self.stats
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Clear smoothing history, e.g. when a new session starts.
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.stats = InputStats {
            missing_frames: self.stats.missing_frames,
            ..InputStats::default()
        };
    }
}

impl<S, C> GestureInput for ClassifiedInput<S, C>
where
    S: FrameSource,
    C: HandClassifier<S::Frame>,
{
    fn next_signal(&mut self) -> GestureSignal {
        let (raw, hands, frame_received) = match self.source.try_get_frame() {
            Some(frame) => {
                let hands = self.classifier.classify(&frame);
                (classify_hands(&hands), hands.len(), true)
            }
            None => {
                self.stats.missing_frames += 1;
                (GestureSignal::None, 0, false)
            }
        };
        let honored = self.smoother.push(raw);
        self.stats = InputStats {
            frame_received,
            hands,
            raw,
            honored,
            missing_frames: self.stats.missing_frames,
        };
        honored
    }
}

/// Replays a fixed list of per-tick frames; `None` entries are missing
/// frames. Exhausted scripts deliver nothing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    frames: VecDeque<Option<LandmarkFrame>>,
}

impl ScriptedSource {
    pub fn new(frames: impl IntoIterator<Item = Option<LandmarkFrame>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for ScriptedSource {
    type Frame = LandmarkFrame;

    fn try_get_frame(&mut self) -> Option<LandmarkFrame> {
        self.frames.pop_front().flatten()
    }
}

/// A fixed sequence of signals, then NONE forever.
#[derive(Debug, Clone, Default)]
pub struct SignalScript {
    signals: VecDeque<GestureSignal>,
}

impl SignalScript {
    pub fn new(signals: impl IntoIterator<Item = GestureSignal>) -> Self {
        Self {
            signals: signals.into_iter().collect(),
        }
    }
}

impl GestureInput for SignalScript {
    fn next_signal(&mut self) -> GestureSignal {
        self.signals.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::landmarks::Landmark;

    fn frame(thumb_y: f64, index_y: f64) -> LandmarkFrame {
        LandmarkFrame::single(HandObservation::with_tips(
            Landmark::new(0.5, 0.9),
            Landmark::new(0.4, thumb_y),
            Landmark::new(0.6, index_y),
        ))
    }

    #[test]
    fn test_scripted_frames_classified() {
        let source = ScriptedSource::new([
            Some(frame(0.1, 0.5)),
            Some(frame(0.7, 0.5)),
            Some(LandmarkFrame::empty()),
        ]);
        let mut input = ClassifiedInput::new(source, PrecomputedLandmarks, 1);
        assert_eq!(input.next_signal(), GestureSignal::Up);
        assert_eq!(input.next_signal(), GestureSignal::Down);
        assert_eq!(input.next_signal(), GestureSignal::None);
        assert_eq!(input.stats().hands, 0);
        assert!(input.stats().frame_received);
    }

    #[test]
    fn test_missing_frame_degrades_to_none() {
        let source = ScriptedSource::new([Some(frame(0.1, 0.5)), None, Some(frame(0.1, 0.5))]);
        let mut input = ClassifiedInput::new(source, PrecomputedLandmarks, 1);
        assert_eq!(input.next_signal(), GestureSignal::Up);
        assert_eq!(input.next_signal(), GestureSignal::None);
        let stats = input.stats();
        assert!(!stats.frame_received);
        assert_eq!(stats.missing_frames, 1);
        assert_eq!(input.next_signal(), GestureSignal::Up);
    }

    #[test]
    fn test_exhausted_source_yields_none() {
        let mut input = ClassifiedInput::new(ScriptedSource::default(), PrecomputedLandmarks, 1);
        assert_eq!(input.next_signal(), GestureSignal::None);
        assert_eq!(input.stats().missing_frames, 1);
    }

    #[test]
    fn test_smoothing_applied_after_classification() {
        let source = ScriptedSource::new([
            Some(frame(0.7, 0.5)),
            Some(frame(0.7, 0.5)),
            Some(frame(0.1, 0.5)), // flicker
            Some(frame(0.7, 0.5)),
        ]);
        let mut input = ClassifiedInput::new(source, PrecomputedLandmarks, 3);
        input.next_signal();
        assert_eq!(input.next_signal(), GestureSignal::Down);
        assert_eq!(input.next_signal(), GestureSignal::Down);
        assert_eq!(input.stats().raw, GestureSignal::Up);
        assert_eq!(input.next_signal(), GestureSignal::Down);
    }

    #[test]
    fn test_signal_script_then_none() {
        let mut script = SignalScript::new([GestureSignal::Up]);
        assert_eq!(script.next_signal(), GestureSignal::Up);
        assert_eq!(script.next_signal(), GestureSignal::None);
    }
}
