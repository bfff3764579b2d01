//! Activity pattern for screen-based navigation.
//!
//! The Activity pattern provides a lifecycle for UI screens. The app owns
//! the timer queue and the clock; activities borrow both through an
//! [`ActivityContext`] when they become visible.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::app::{Tab, UiTimers};
use crate::input::InputEvent;
use crate::timer::Millis;

/// Result of handling an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityResult {
    /// Event consumed, stay on current activity
    Consumed,
    /// Event consumed, request a switch to another tab
    NavigateTo(Tab),
    /// Event not handled, propagate to parent
    Ignored,
}

/// What an activity may touch while it is being shown.
pub struct ActivityContext<'a> {
    /// Host clock at the moment of entering
    pub now: Millis,
    /// The app's one-shot timer queue
    pub timers: &'a mut UiTimers,
}

/// Activity trait for screen-based UI architecture.
///
/// Each screen implements this trait to handle its own lifecycle, input
/// processing and rendering.
///
/// # Example
/// ```
/// use pulse_ui::ui::{Activity, ActivityContext, ActivityResult};
/// use pulse_ui::input::{Button, InputEvent};
/// use embedded_graphics::prelude::*;
/// use embedded_graphics::pixelcolor::BinaryColor;
///
/// struct Splash {
///     shown: u32,
/// }
///
/// impl Activity for Splash {
///     fn on_enter(&mut self, _cx: &mut ActivityContext<'_>) {
///         self.shown += 1;
///     }
///
///     fn on_exit(&mut self) {}
///
///     fn handle_input(&mut self, event: InputEvent) -> ActivityResult {
///         match event {
///             InputEvent::Press(Button::Confirm) => ActivityResult::Consumed,
///             _ => ActivityResult::Ignored,
///         }
///     }
///
///     fn render<D: DrawTarget<Color = BinaryColor>>(
///         &self,
///         display: &mut D,
///     ) -> Result<(), D::Error> {
///         display.clear(BinaryColor::Off)
///     }
/// }
/// ```
pub trait Activity {
    /// Called when the activity becomes visible
    fn on_enter(&mut self, cx: &mut ActivityContext<'_>);

    /// Called when the activity is being replaced
    fn on_exit(&mut self);

    /// Handle input event.
    ///
    /// Returns an ActivityResult indicating how the event was handled
    /// and what navigation action (if any) should occur.
    fn handle_input(&mut self, event: InputEvent) -> ActivityResult;

    /// Advance time-based presentation (transitions).
    ///
    /// Returns true if the activity needs a redraw.
    fn tick(&mut self, _now: Millis) -> bool {
        false
    }

    /// Render the activity to the display.
    fn render<D: DrawTarget<Color = BinaryColor>>(&self, display: &mut D) -> Result<(), D::Error>;
}
