//! Fonts and layout constants for every screen.
//!
//! ## Semantic Font API
//!
//! UI code picks fonts by role, never by name:
//! - `ui_font_large_title()`: screen headers ("Dashboard")
//! - `ui_font_title()`: section titles
//! - `ui_font_body()`: list entries, card values
//! - `ui_font_small()`: card captions, tab labels

use embedded_graphics::mono_font::{ascii, MonoFont};

/// Screen header font.
pub fn ui_font_large_title() -> &'static MonoFont<'static> {
    &ascii::FONT_10X20
}

/// Section title font.
pub fn ui_font_title() -> &'static MonoFont<'static> {
    &ascii::FONT_9X18_BOLD
}

/// Body font for notifications and values.
pub fn ui_font_body() -> &'static MonoFont<'static> {
    &ascii::FONT_9X15
}

/// Small font for captions and tab labels.
pub fn ui_font_small() -> &'static MonoFont<'static> {
    &ascii::FONT_6X10
}

// ── Layout constants ────────────────────────────────────────────────
//
// Single source of truth for every pixel offset in the UI.

/// Layout constants for the 480×800 portrait canvas.
pub mod layout {
    /// Side margin (left/right padding from screen edge).
    pub const MARGIN: i32 = 20;

    /// Inner padding within cards.
    pub const INNER_PAD: i32 = 8;

    // ── Header ──────────────────────────────────────────────────────

    /// Y baseline for the screen header text.
    pub const HEADER_TEXT_Y: i32 = 40;

    // ── Spacing ─────────────────────────────────────────────────────

    /// Small gap (between tight elements).
    pub const GAP_SM: i32 = 8;

    /// Large gap (between sections).
    pub const GAP_LG: i32 = 24;

    /// Distance between consecutive section title baselines on static screens.
    pub const SECTION_STEP: i32 = 48;

    // ── Overview cards ──────────────────────────────────────────────

    /// Cards are square.
    pub const CARD_SIZE: u32 = 120;

    /// Horizontal gap between cards.
    pub const CARD_SPACING: i32 = 16;

    /// Corner radius of cards.
    pub const CARD_RADIUS: u32 = 10;

    /// Top edge of the card row.
    pub const CARDS_TOP: i32 = 64;

    // ── Progress bars ───────────────────────────────────────────────

    /// Height of a progress bar track.
    pub const PROGRESS_H: u32 = 12;

    /// Gap between the track outline and its fill.
    pub const PROGRESS_INSET: i32 = 2;

    // ── Notifications ───────────────────────────────────────────────

    /// Row pitch for stacked notifications.
    pub const NOTIFICATION_ROW_H: i32 = 26;

    // ── Tab bar ─────────────────────────────────────────────────────

    /// Bottom tab bar height.
    pub const TAB_BAR_H: i32 = 80;

    /// Icon box edge length.
    pub const TAB_ICON_SIZE: u32 = 28;

    /// Thickness of the selected-tab indicator.
    pub const TAB_INDICATOR_H: u32 = 4;

    /// Separator line thickness.
    pub const SEP_THICKNESS: u32 = 1;
}
