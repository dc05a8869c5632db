/// Pixel geometry of the carousel. The camera math only needs the middle
/// row's horizontal metrics; defaults match the 1280x720 layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub viewport_width: i32,
    pub viewport_height: i32,
    /// Side length of one square tile.
    pub tile_size: i32,
    /// Horizontal distance between the left edges of adjacent tiles.
    pub tile_separation: i32,
    /// Selection outline padding around a tile; the camera keeps it visible
    /// together with the tile itself.
    pub outline_padding: i32,
    /// Extra space kept between the selected tile's right edge and the
    /// viewport's right edge when scrolling rightward.
    pub right_margin: i32,
    /// Number of quick-launch circles in the bottom row.
    pub bottom_row_count: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 720,
            tile_size: 256,
            tile_separation: 264,
            outline_padding: 6,
            right_margin: 220,
            bottom_row_count: 6,
        }
    }
}

impl Layout {
    /// Left pixel extent of a middle-row tile, outline included.
    pub fn tile_left(&self, index: usize) -> i32 {
        index as i32 * self.tile_separation - self.outline_padding
    }

    /// Right pixel extent of a middle-row tile, outline included.
    pub fn tile_right(&self, index: usize) -> i32 {
        index as i32 * self.tile_separation + self.tile_size + self.outline_padding
    }

    /// Largest useful camera offset for `tile_count` middle-row tiles.
    /// Zero when the whole row fits inside the viewport.
    pub fn max_offset(&self, tile_count: usize) -> i32 {
        (self.tile_separation * tile_count as i32 - self.viewport_width).max(0)
    }
}
