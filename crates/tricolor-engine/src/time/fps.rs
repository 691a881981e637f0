use std::time::{Duration, Instant};

/// One FPS measurement over a completed window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FpsSample {
    pub fps: f32,
    pub frames: u32,
    pub elapsed: Duration,
}

/// Rolling frames-per-second counter.
///
/// Counts frames until `interval` has elapsed since the window started, then
/// yields `frames / elapsed` and starts a new window at that instant.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: Duration,
    window_start: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            window_start: start,
            frames: 0,
        }
    }

    /// Starts a fresh window at `now`, discarding frames counted so far.
    pub fn restart(&mut self, now: Instant) {
        self.window_start = now;
        self.frames = 0;
    }

    /// Records one frame presented at `now`.
    ///
    /// Returns a sample when the current window is complete.
    pub fn record(&mut self, now: Instant) -> Option<FpsSample> {
        self.frames = self.frames.saturating_add(1);

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.interval || elapsed.is_zero() {
            return None;
        }

        let sample = FpsSample {
            fps: self.frames as f32 / elapsed.as_secs_f32(),
            frames: self.frames,
            elapsed,
        };

        self.window_start = now;
        self.frames = 0;

        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sample_before_interval() {
        let t0 = Instant::now();
        let mut fps = FpsCounter::starting_at(Duration::from_secs(1), t0);
        for i in 1..=59 {
            assert!(fps.record(t0 + Duration::from_millis(i * 16)).is_none());
        }
    }

    #[test]
    fn sample_is_frames_over_elapsed() {
        let t0 = Instant::now();
        let mut fps = FpsCounter::starting_at(Duration::from_secs(1), t0);
        for i in 1..60u64 {
            fps.record(t0 + Duration::from_millis(i * 10));
        }
        let s = fps
            .record(t0 + Duration::from_millis(1200))
            .expect("window complete");
        assert_eq!(s.frames, 60);
        assert!((s.fps - 50.0).abs() < 1e-3);
    }

    #[test]
    fn restart_drops_time_spent_before_it() {
        let t0 = Instant::now();
        let mut fps = FpsCounter::starting_at(Duration::from_secs(1), t0);
        fps.record(t0 + Duration::from_millis(100));

        let t1 = t0 + Duration::from_secs(5);
        fps.restart(t1);
        assert!(fps.record(t1 + Duration::from_millis(500)).is_none());
        let s = fps.record(t1 + Duration::from_secs(1)).expect("window complete");
        assert_eq!(s.frames, 2);
        assert_eq!(s.elapsed, Duration::from_secs(1));
    }

    #[test]
    fn window_resets_after_sample() {
        let t0 = Instant::now();
        let mut fps = FpsCounter::starting_at(Duration::from_secs(1), t0);
        assert!(fps.record(t0 + Duration::from_secs(1)).is_some());
        assert!(fps.record(t0 + Duration::from_millis(1500)).is_none());
        let s = fps.record(t0 + Duration::from_secs(2)).expect("second window");
        assert_eq!(s.frames, 2);
    }
}
