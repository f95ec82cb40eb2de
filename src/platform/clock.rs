//! Frame timing for the scheduling callback

use crate::consts::MAX_FRAME_DT;

/// Turns callback timestamps (milliseconds) into frame deltas (seconds)
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous tick. The first tick after a reset yields 0;
    /// stalls and clock jumps are clamped to [0, MAX_FRAME_DT].
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }

        if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        }
    }

    /// Forget the previous timestamp (scheduling was stopped)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
