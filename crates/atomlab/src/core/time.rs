/// Virtual millisecond clock.
/// Fed with variable frame deltas from the shell's animation loop, or advanced
/// directly by a test harness. Never reads wall-clock time.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    /// Whole milliseconds elapsed since creation.
    now_ms: u64,
    /// Sub-millisecond remainder carried between frames.
    carry_ms: f64,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame delta in seconds. Returns the new time in milliseconds.
    /// Negative or non-finite deltas are ignored.
    pub fn accumulate(&mut self, frame_dt: f32) -> u64 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return self.now_ms;
        }
        let total = self.carry_ms + frame_dt as f64 * 1000.0;
        let whole = total.floor();
        self.carry_ms = total - whole;
        self.now_ms += whole as u64;
        self.now_ms
    }

    /// Advance by an exact number of milliseconds.
    pub fn advance_ms(&mut self, ms: u64) -> u64 {
        self.now_ms += ms;
        self.now_ms
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}
