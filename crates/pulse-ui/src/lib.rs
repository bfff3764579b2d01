//! Shared UI library for the Pulse HR metrics dashboard.
//! Renders through embedded-graphics; runs on the desktop simulator and headless in tests.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

pub mod app;
pub mod config;
pub mod dashboard_activity;
pub mod error;
pub mod input;
pub mod model;
pub mod observable;
pub mod survey_results_activity;
pub mod test_display;
pub mod timer;
pub mod transition;
pub mod ui;

pub use app::{App, Tab, UiTimers};
pub use config::{ConfigBuilder, PulseConfig, RearmPolicy};
pub use dashboard_activity::{
    DashboardActivity, DashboardUpdate, INITIAL_NOTIFICATIONS, NEW_SURVEY_NOTIFICATION,
    OVERVIEW_CARDS,
};
pub use error::ConfigError;
pub use input::{Button, InputEvent};
pub use model::{NotificationList, Ratio};
pub use observable::Observable;
pub use survey_results_activity::{SurveyResultsActivity, SURVEY_RESULT_SECTIONS};
pub use timer::{Millis, TimerId, TimerQueue};
pub use transition::Transition;

/// UI canvas dimensions (portrait).
pub const DISPLAY_WIDTH: u32 = 480;
pub const DISPLAY_HEIGHT: u32 = 800;
