//! Input abstraction shared by every host.

use embedded_graphics::prelude::Point;

/// Logical buttons (keyboard on desktop, scripted in tests)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Confirm,
    Back,
}

/// Input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press(Button),
    /// Pointer released at a display coordinate
    Tap(Point),
}
