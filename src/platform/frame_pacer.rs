//=========================================================================
// Frame Pacer
//=========================================================================
//
// Caps the frame loop at a fixed rate by sleeping out the remainder of
// each frame's time slice.
//
//=========================================================================

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps so that consecutive `wait()` calls are at least one frame apart.
pub(crate) struct FramePacer {
    frame_duration: Duration,
    frame_start: Instant,
}

impl FramePacer {
    /// Creates a pacer for `frame_rate` frames per second.
    ///
    /// # Panics
    ///
    /// Panics if `frame_rate == 0`.
    pub fn new(frame_rate: u32) -> Self {
        assert!(frame_rate > 0, "Frame rate must be positive");
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / f64::from(frame_rate)),
            frame_start: Instant::now(),
        }
    }

    /// Blocks until the current frame's slice has elapsed, then starts the
    /// next one.
    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame_duration {
            thread::sleep(self.frame_duration - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_duration_matches_rate() {
        let pacer = FramePacer::new(50);
        assert_eq!(pacer.frame_duration, Duration::from_millis(20));
    }

    #[test]
    #[should_panic(expected = "Frame rate must be positive")]
    fn zero_rate_panics() {
        FramePacer::new(0);
    }

    #[test]
    fn wait_holds_for_a_frame() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(100);

        pacer.wait();
        pacer.wait();

        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
