//! Frame clock: wall-clock timestamps to a clamped simulation delta

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_MS;

/// Converts frame timestamps (ms) into clamped deltas (seconds)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous frame, clamped to [0, 40] ms and returned in
    /// seconds. The first call only records the baseline and yields 0.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 0.0;
        };
        let elapsed = now_ms - last;
        if !elapsed.is_finite() {
            return 0.0;
        }
        (elapsed.clamp(0.0, MAX_FRAME_MS) / 1000.0) as f32
    }

    /// Forget the baseline so the next frame yields 0 (used on session start)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn has_baseline(&self) -> bool {
        self.last_ms.is_some()
    }
}
