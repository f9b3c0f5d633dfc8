//! Integration test: gesture pipeline into the game loop
//!
//! Feeds landmark frames (including missing frames and empty detections)
//! through `ClassifiedInput` and checks how the session reacts.

use handflap::gesture::landmarks::{HandObservation, Landmark, LandmarkFrame};
use handflap::gesture::stream::parse_frame_line;
use handflap::gesture::{ClassifiedInput, PrecomputedLandmarks, ScriptedSource};
use handflap::{GameSession, GestureSignal, SessionConfig};

fn hand(thumb_y: f64, index_y: f64) -> HandObservation {
    HandObservation::with_tips(
        Landmark::new(0.5, 0.9),
        Landmark::new(0.45, thumb_y),
        Landmark::new(0.55, index_y),
    )
}

fn up_frame() -> Option<LandmarkFrame> {
    Some(LandmarkFrame::single(hand(0.2, 0.5)))
}

fn down_frame() -> Option<LandmarkFrame> {
    Some(LandmarkFrame::single(hand(0.7, 0.5)))
}

fn new_session(smoothing_window: usize) -> GameSession {
    GameSession::new(SessionConfig {
        seed: Some(8),
        smoothing_window,
        ..Default::default()
    })
    .expect("valid config")
}

#[test]
fn test_thumb_up_frame_flaps() {
    let mut session = new_session(1);
    let mut input = ClassifiedInput::new(
        ScriptedSource::new([down_frame(), up_frame()]),
        PrecomputedLandmarks,
        1,
    );

    assert!(!session.step(&mut input).impulse_applied);
    assert_eq!(session.last_signal(), GestureSignal::Down);

    assert!(session.step(&mut input).impulse_applied);
    assert_eq!(session.agent().velocity(), -10.0);
}

#[test]
fn test_missing_frames_do_not_end_session() {
    let mut session = new_session(1);
    let mut input = ClassifiedInput::new(
        ScriptedSource::new([None, None, up_frame(), None]),
        PrecomputedLandmarks,
        1,
    );

    for _ in 0..4 {
        session.step(&mut input);
    }

    assert!(!session.is_over());
    assert_eq!(session.ticks(), 4);
    assert_eq!(input.stats().missing_frames, 3);
    // Only the third tick flapped: -10 then +0.5 of gravity on the fourth
    assert_eq!(session.agent().velocity(), -9.5);
}

#[test]
fn test_second_hand_is_ignored() {
    let mut session = new_session(1);
    let frame = LandmarkFrame {
        hands: vec![hand(0.7, 0.5), hand(0.1, 0.5)],
    };
    let mut input = ClassifiedInput::new(
        ScriptedSource::new([Some(frame)]),
        PrecomputedLandmarks,
        1,
    );

    assert!(!session.step(&mut input).impulse_applied);
    assert_eq!(input.stats().hands, 2);
}

#[test]
fn test_smoothing_suppresses_single_frame_flicker() {
    let frames = [down_frame(), down_frame(), up_frame(), down_frame()];

    let mut raw_session = new_session(1);
    let mut raw_input =
        ClassifiedInput::new(ScriptedSource::new(frames.clone()), PrecomputedLandmarks, 1);
    let raw_flaps = (0..4)
        .filter(|_| raw_session.step(&mut raw_input).impulse_applied)
        .count();

    let mut smooth_session = new_session(3);
    let mut smooth_input =
        ClassifiedInput::new(ScriptedSource::new(frames), PrecomputedLandmarks, 3);
    let smooth_flaps = (0..4)
        .filter(|_| smooth_session.step(&mut smooth_input).impulse_applied)
        .count();

    assert_eq!(raw_flaps, 1);
    assert_eq!(smooth_flaps, 0);
}

#[test]
fn test_tracker_json_line_drives_session() {
    let mut landmarks = vec![r#"{"x":0.5,"y":0.9}"#; 21];
    landmarks[4] = r#"{"x":0.4,"y":0.1,"z":-0.02}"#;
    landmarks[8] = r#"{"x":0.6,"y":0.3,"z":-0.01}"#;
    let line = format!(r#"{{"hands":[{{"landmarks":[{}]}}]}}"#, landmarks.join(","));

    let frame = parse_frame_line(&line).expect("tracker line parses");
    let mut session = new_session(1);
    let mut input = ClassifiedInput::new(
        ScriptedSource::new([Some(frame)]),
        PrecomputedLandmarks,
        1,
    );

    assert!(session.step(&mut input).impulse_applied);
}
