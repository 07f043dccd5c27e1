use web_time::{Duration, Instant};

/// Per-frame clock for the render loop: frame delta and smoothed FPS.
#[derive(Debug)]
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Duration of the most recent frame
    last_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames observed since construction
    frame_count: u64,
}

impl FrameTiming {
    /// Create a new frame timer starting now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a frame timer with an explicit start time (for testing).
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame: start,
            last_delta: Duration::ZERO,
            smoothed_fps: 60.0, // display refresh is the usual driver
            smoothing: 0.05,
            frame_count: 0,
        }
    }

    /// Record a frame ending at `now`.
    pub fn end_frame(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.last_delta = elapsed;
        self.frame_count += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Duration of the last recorded frame.
    #[must_use]
    pub fn delta(&self) -> Duration {
        self.last_delta
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames recorded.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
