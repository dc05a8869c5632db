use crate::types::Layout;

/// 20% of the remaining distance per frame.
const SMOOTHING_DIVISOR: i32 = 5;

/// Horizontal scroll state for the middle row: a clamped target the
/// selection drives, and a displayed offset that trails it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraState {
    target_offset_x: i32,
    current_offset_x: i32,
}

impl CameraState {
    /// The smoothed offset the renderer subtracts from tile positions.
    pub fn current_offset_x(&self) -> i32 {
        self.current_offset_x
    }

    pub fn target_offset_x(&self) -> i32 {
        self.target_offset_x
    }

    /// Follows the selected middle-row tile: pulls the target left when the
    /// tile's padded left edge leaves the window, pushes it right (with the
    /// configured margin) when the padded right edge passes it, then clamps
    /// to the scrollable range.
    pub(crate) fn follow(&mut self, tile: usize, tile_count: usize, layout: &Layout) {
        let left = layout.tile_left(tile);
        let right = layout.tile_right(tile);

        if left < self.target_offset_x {
            self.target_offset_x = left;
        } else if right > self.target_offset_x + layout.viewport_width {
            self.target_offset_x = right - layout.viewport_width + layout.right_margin;
        }

        self.target_offset_x = self.target_offset_x.clamp(0, layout.max_offset(tile_count));
    }

    /// Exponential smoothing toward the target. Integer truncation would
    /// stall short of the target, so the offset snaps once the step rounds
    /// to zero.
    pub(crate) fn step(&mut self) {
        let delta = self.target_offset_x - self.current_offset_x;
        let step = delta / SMOOTHING_DIVISOR;
        if step == 0 {
            self.current_offset_x = self.target_offset_x;
        } else {
            self.current_offset_x += step;
        }
    }
}
