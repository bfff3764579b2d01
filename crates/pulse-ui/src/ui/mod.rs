//! Minimal UI framework for the Pulse dashboard.
//! High contrast, fixed layout, type-safe.

pub mod activity;
pub mod components;
pub mod theme;

pub use activity::{Activity, ActivityContext, ActivityResult};
pub use components::{Header, OverviewCard, ProgressBar, SectionTitle, TabBar, TabIcon, TabItem};
