//! Selection cursor and camera for the three-row carousel.
//!
//! One [`MenuState::advance`] call per frame consumes the merged input
//! snapshot and the frame clock; the renderer then reads the accessors.

use crate::catalog::Catalog;
use crate::input::{ButtonState, Buttons};
use crate::types::{Layout, RepeatConfig, SourceKind};

pub(crate) mod camera;
pub(crate) mod repeat;
pub(crate) mod selection;

pub use camera::CameraState;
pub use selection::{Row, SelectionState};

use repeat::RepeatTimer;

/// What launching the selected tile means, resolved per source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    /// Filesystem path of the bundle or executable to hand to the loader.
    Homebrew(String),
    /// Title id to hand to the system launcher.
    SystemTitle(u64),
}

/// Long-lived cursor + camera state, owned by the caller and advanced once
/// per input cycle. Holds no catalog data; row bounds come from the catalog
/// passed into [`MenuState::advance`].
#[derive(Debug)]
pub struct MenuState {
    layout: Layout,
    repeat_cfg: RepeatConfig,
    selection: SelectionState,
    camera: CameraState,
    up: RepeatTimer,
    down: RepeatTimer,
    left: RepeatTimer,
    right: RepeatTimer,
}

impl MenuState {
    pub fn new(layout: Layout, repeat_cfg: RepeatConfig) -> Self {
        Self {
            layout,
            repeat_cfg,
            selection: SelectionState::default(),
            camera: CameraState::default(),
            up: RepeatTimer::default(),
            down: RepeatTimer::default(),
            left: RepeatTimer::default(),
            right: RepeatTimer::default(),
        }
    }

    pub fn row(&self) -> Row {
        self.selection.row()
    }

    pub fn tile(&self) -> usize {
        self.selection.tile()
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Advances cursor and camera by one frame. `now_ms` is a monotonic
    /// millisecond clock supplied by the caller; the core never reads wall
    /// time itself.
    pub fn advance(&mut self, catalog: &Catalog, input: ButtonState, now_ms: u64) {
        let middle_count = catalog.len();
        let bottom_count = self.layout.bottom_row_count;

        if self.fire(Buttons::UP, input, now_ms) {
            self.selection.move_up();
        }
        if self.fire(Buttons::DOWN, input, now_ms) {
            self.selection.move_down();
        }
        if self.fire(Buttons::LEFT, input, now_ms) {
            self.selection.move_left(middle_count);
        }
        if self.fire(Buttons::RIGHT, input, now_ms) {
            self.selection.move_right(middle_count, bottom_count);
        }

        self.selection.clamp(middle_count, bottom_count);

        // The target only tracks the middle row; the smoothing runs every
        // frame regardless of input.
        if self.selection.row() == Row::Middle {
            self.camera
                .follow(self.selection.tile(), middle_count, &self.layout);
        }
        self.camera.step();
    }

    /// Resolves the selected middle-row tile into a launch target. `None`
    /// on the other rows or when the catalog is empty.
    pub fn launch_target(&self, catalog: &Catalog) -> Option<LaunchTarget> {
        if self.selection.row() != Row::Middle {
            return None;
        }
        let entry = catalog.get(self.selection.tile())?;
        match entry.source {
            SourceKind::Homebrew => Some(LaunchTarget::Homebrew(entry.launch_path.clone())),
            SourceKind::SystemTitle => entry.title_id.map(LaunchTarget::SystemTitle),
        }
    }

    fn fire(&mut self, button: Buttons, input: ButtonState, now_ms: u64) -> bool {
        let timer = if button == Buttons::UP {
            &mut self.up
        } else if button == Buttons::DOWN {
            &mut self.down
        } else if button == Buttons::LEFT {
            &mut self.left
        } else if button == Buttons::RIGHT {
            &mut self.right
        } else {
            return false;
        };
        timer.tick(
            input.pressed.contains(button),
            input.held.contains(button),
            now_ms,
            &self.repeat_cfg,
        )
    }
}
