use crate::types::RepeatConfig;

/// Edge + hold auto-repeat for one direction, sampled once per frame
/// against a monotonic millisecond clock.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RepeatTimer {
    last_edge_ms: u64,
    repeating: bool,
    /// Still inside the initial delay window before fast repeats start.
    in_delay: bool,
}

impl RepeatTimer {
    /// Returns true when a cursor step should fire this frame. A fresh
    /// press fires immediately and arms the timer; while held, the next
    /// step fires after the initial delay, then every repeat interval,
    /// each firing re-arming the reference timestamp. Release disarms.
    pub(crate) fn tick(&mut self, pressed: bool, held: bool, now_ms: u64, cfg: &RepeatConfig) -> bool {
        if pressed {
            self.repeating = true;
            self.in_delay = true;
            self.last_edge_ms = now_ms;
            return true;
        }
        if !held {
            self.repeating = false;
            return false;
        }
        if !self.repeating {
            return false;
        }

        let window = if self.in_delay {
            cfg.initial_delay_ms
        } else {
            cfg.repeat_interval_ms
        };
        if now_ms.saturating_sub(self.last_edge_ms) >= window {
            self.in_delay = false;
            self.last_edge_ms = now_ms;
            return true;
        }
        false
    }
}
