//! Landmark frames read from an external hand tracker.
//!
//! The tracker writes one JSON [`LandmarkFrame`] per line to a file, FIFO
//! or our stdin. Lines are read on a background thread into a single
//! latest-frame slot; each tick takes whatever is in the slot and never
//! waits. Frames nobody took in time are overwritten, so memory stays flat
//! while the game is paused.

use crate::gesture::input::FrameSource;
use crate::gesture::landmarks::LandmarkFrame;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use tracing::{info, warn};

/// State shared between the reader thread and the game.
#[derive(Debug, Default)]
struct Shared {
    latest: Mutex<Option<LandmarkFrame>>,
    frames_read: AtomicU64,
    closed: AtomicBool,
}

impl Shared {
    fn publish(&self, frame: LandmarkFrame) {
        let mut slot = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(frame);
        self.frames_read.fetch_add(1, Ordering::Relaxed);
    }
}

pub struct LandmarkStream {
    shared: Arc<Shared>,
}

impl LandmarkStream {
    /// Start reading JSON lines from `reader` on a background thread.
    pub fn spawn<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let shared = Arc::new(Shared::default());
        let writer = Arc::downgrade(&shared);
        thread::spawn(move || {
            for (line_no, line) in reader.lines().enumerate() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!(error = %e, "landmark stream read failed");
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                let frame = match parse_frame_line(&line) {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!(line = line_no + 1, error = %e, "skipping bad landmark line");
                        continue;
                    }
                };
                // Stream dropped: the game is gone
                let Some(shared) = writer.upgrade() else {
                    break;
                };
                shared.publish(frame);
            }
            if let Some(shared) = writer.upgrade() {
                shared.closed.store(true, Ordering::Release);
            }
            info!("landmark stream closed");
        });
        Self { shared }
    }

    /// Read from a path, or from stdin when the path is `-`.
    pub fn open(path: &Path) -> io::Result<Self> {
        if path == Path::new("-") {
            return Ok(Self::spawn(BufReader::new(io::stdin())));
        }
        let file = File::open(path)?;
        Ok(Self::spawn(BufReader::new(file)))
    }

    /// True once the tracker's output has ended. A last frame may still
    /// be waiting in the slot.
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }

    /// Frames parsed so far, including ones overwritten before a tick took them.
    pub fn frames_received(&self) -> u64 {
        self.shared.frames_read.load(Ordering::Relaxed)
    }
}

impl FrameSource for LandmarkStream {
    type Frame = LandmarkFrame;

    fn try_get_frame(&mut self) -> Option<LandmarkFrame> {
        self.shared
            .latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

pub fn parse_frame_line(line: &str) -> serde_json::Result<LandmarkFrame> {
    serde_json::from_str(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::{Duration, Instant};

    const UP_LINE: &str = r#"{"hands":[{"landmarks":[{"x":0,"y":0},{"x":0,"y":0},{"x":0,"y":0},{"x":0,"y":0},{"x":0.4,"y":0.1},{"x":0,"y":0},{"x":0,"y":0},{"x":0,"y":0},{"x":0.6,"y":0.5}]}]}"#;

    /// Block until the reader thread has finished, without taking frames.
    fn wait_until_closed(stream: &LandmarkStream) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !stream.is_closed() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(stream.is_closed(), "reader thread did not finish");
    }

    fn numbered_line(i: usize) -> String {
        format!(r#"{{"hands":[{{"landmarks":[{{"x":{},"y":0.5}}]}}]}}"#, i)
    }

    #[test]
    fn test_parse_frame_line() {
        let frame = parse_frame_line(UP_LINE).expect("valid line");
        assert_eq!(frame.hands.len(), 1);
        assert_eq!(frame.hands[0].landmarks.len(), 9);
    }

    #[test]
    fn test_stream_skips_bad_lines() {
        let input = format!("{}\nnot json\n\n{{\"hands\":[]}}\n", UP_LINE);
        let stream = LandmarkStream::spawn(Cursor::new(input));
        wait_until_closed(&stream);
        assert_eq!(stream.frames_received(), 2);
    }

    #[test]
    fn test_latest_frame_wins() {
        const N: usize = 5;
        let input: String = (0..N).map(|i| numbered_line(i) + "\n").collect();
        let mut stream = LandmarkStream::spawn(Cursor::new(input));
        wait_until_closed(&stream);

        assert_eq!(stream.frames_received(), N as u64);
        let frame = stream.try_get_frame().expect("newest frame kept");
        assert_eq!(frame.hands[0].landmarks[0].x, (N - 1) as f64);
        // Older frames were overwritten, not queued
        assert!(stream.try_get_frame().is_none());
    }

    #[test]
    fn test_empty_input_yields_no_frame() {
        let mut stream = LandmarkStream::spawn(Cursor::new(String::new()));
        wait_until_closed(&stream);
        assert_eq!(stream.frames_received(), 0);
        assert!(stream.try_get_frame().is_none());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(LandmarkStream::open(Path::new("/nonexistent/landmarks.jsonl")).is_err());
    }
}
