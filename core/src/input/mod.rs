//! Per-frame input snapshots merged from heterogeneous controller sources.

use bitflags::bitflags;

bitflags! {
    /// Logical buttons the menu reacts to, already mapped from whatever the
    /// physical controller exposes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const CONFIRM = 1 << 4;
        const CANCEL = 1 << 5;
        const HOME = 1 << 6;
        const RESCAN = 1 << 7;
    }
}

/// One frame's worth of input: edge-triggered presses plus level-triggered
/// holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Buttons that went down this frame.
    pub pressed: Buttons,
    /// Buttons currently down.
    pub held: Buttons,
}

impl ButtonState {
    /// ORs both flag sets of `other` into `self`.
    pub fn merge(&mut self, other: ButtonState) {
        self.pressed |= other.pressed;
        self.held |= other.held;
    }
}

/// One physical input device (gamepad, up to four remotes, ...), polled once
/// per frame.
pub trait InputSource {
    fn poll(&mut self) -> ButtonState;
}

/// Merges every attached source into one logical snapshot by ORing pressed
/// and held flags. A press on any controller counts.
#[derive(Default)]
pub struct CombinedInput {
    sources: Vec<Box<dyn InputSource>>,
}

impl CombinedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, source: Box<dyn InputSource>) {
        self.sources.push(source);
    }
}

impl InputSource for CombinedInput {
    fn poll(&mut self) -> ButtonState {
        let mut merged = ButtonState::default();
        for source in &mut self.sources {
            merged.merge(source.poll());
        }
        merged
    }
}

#[cfg(test)]
mod tests;
