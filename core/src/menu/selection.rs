/// The three selection lanes, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Row {
    /// User/settings circle. Exactly one tile.
    Top,
    /// The application carousel, as wide as the catalog.
    #[default]
    Middle,
    /// Fixed quick-launch circles.
    Bottom,
}

impl Row {
    fn above(self) -> Option<Row> {
        match self {
            Row::Top => None,
            Row::Middle => Some(Row::Top),
            Row::Bottom => Some(Row::Middle),
        }
    }

    fn below(self) -> Option<Row> {
        match self {
            Row::Top => Some(Row::Middle),
            Row::Middle => Some(Row::Bottom),
            Row::Bottom => None,
        }
    }
}

/// Cursor position: which row, which tile within it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    row: Row,
    tile: usize,
}

impl SelectionState {
    pub fn row(&self) -> Row {
        self.row
    }

    pub fn tile(&self) -> usize {
        self.tile
    }

    pub(crate) fn move_up(&mut self) {
        if let Some(row) = self.row.above() {
            self.row = row;
            self.tile = 0;
        }
    }

    pub(crate) fn move_down(&mut self) {
        if let Some(row) = self.row.below() {
            self.row = row;
            self.tile = 0;
        }
    }

    /// Middle wraps, Bottom clamps, Top ignores horizontal movement.
    pub(crate) fn move_left(&mut self, middle_count: usize) {
        match self.row {
            Row::Top => {}
            Row::Middle => {
                if middle_count > 0 {
                    self.tile = (self.tile + middle_count - 1) % middle_count;
                }
            }
            Row::Bottom => {
                if self.tile > 0 {
                    self.tile -= 1;
                }
            }
        }
    }

    pub(crate) fn move_right(&mut self, middle_count: usize, bottom_count: usize) {
        match self.row {
            Row::Top => {}
            Row::Middle => {
                if middle_count > 0 {
                    self.tile = (self.tile + 1) % middle_count;
                }
            }
            Row::Bottom => {
                if self.tile + 1 < bottom_count {
                    self.tile += 1;
                }
            }
        }
    }

    /// Re-applied every cycle, not only on transitions: the row widths can
    /// shrink under the cursor when the catalog is rebuilt.
    pub(crate) fn clamp(&mut self, middle_count: usize, bottom_count: usize) {
        let count = match self.row {
            Row::Top => 1,
            Row::Middle => middle_count,
            Row::Bottom => bottom_count,
        };
        if self.row == Row::Top || count == 0 {
            self.tile = 0;
        } else if self.tile >= count {
            self.tile = count - 1;
        }
    }
}
