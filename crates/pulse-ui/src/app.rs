//! Application state with two-tab navigation.
//!
//! The app is the event loop's single owner of UI state: both screens,
//! the one-shot timer queue and the last seen clock value. Hosts feed it
//! input and the current time; it answers whether a redraw is needed.
//! Left/Right or a tap on the tab bar switches tabs.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

use crate::config::PulseConfig;
use crate::dashboard_activity::{DashboardActivity, DashboardUpdate};
use crate::input::{Button, InputEvent};
use crate::survey_results_activity::SurveyResultsActivity;
use crate::timer::{Millis, TimerQueue};
use crate::ui::components::{TabBar, TabIcon, TabItem};
use crate::ui::theme::layout::TAB_BAR_H;
use crate::ui::{Activity, ActivityContext, ActivityResult};
use crate::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Timer queue carrying dashboard updates
pub type UiTimers = TimerQueue<DashboardUpdate>;

/// The two tabs in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard = 0,
    SurveyResults = 1,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Dashboard, Self::SurveyResults];

    const ITEMS: [TabItem; 2] = [
        TabItem {
            label: "Dashboard",
            icon: TabIcon::House,
        },
        TabItem {
            label: "Survey Results",
            icon: TabIcon::BarChart,
        },
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Dashboard),
            1 => Some(Self::SurveyResults),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        Self::ITEMS[self.index()].label
    }

    fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len()).unwrap_or(Self::Dashboard)
    }

    fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::from_index((self.index() + len - 1) % len).unwrap_or(Self::Dashboard)
    }
}

/// Application state: tab container plus event queue.
pub struct App {
    config: PulseConfig,
    dashboard: DashboardActivity,
    survey_results: SurveyResultsActivity,
    current_tab: Tab,
    timers: UiTimers,
    now: Millis,
}

impl App {
    /// Create the app with default configuration. The dashboard appears at t=0.
    pub fn new() -> Self {
        Self::with_config(PulseConfig::default())
    }

    /// Create the app with a custom configuration.
    pub fn with_config(config: PulseConfig) -> Self {
        let mut app = Self {
            config,
            dashboard: DashboardActivity::new(config),
            survey_results: SurveyResultsActivity::new(),
            current_tab: Tab::Dashboard,
            timers: UiTimers::new(),
            now: 0,
        };
        app.enter_current_tab();
        app
    }

    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    pub fn current_tab(&self) -> Tab {
        self.current_tab
    }

    pub fn dashboard(&self) -> &DashboardActivity {
        &self.dashboard
    }

    pub fn survey_results(&self) -> &SurveyResultsActivity {
        &self.survey_results
    }

    /// Last clock value seen by the app
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Number of armed updates that have not fired yet
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// When the next armed update fires, if any
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// True while a transition on the visible screen is still running.
    pub fn is_animating(&self) -> bool {
        self.current_tab == Tab::Dashboard && self.dashboard.is_animating()
    }

    /// Switch to `tab`. Returns true if the visible tab changed.
    pub fn set_tab(&mut self, tab: Tab) -> bool {
        if tab == self.current_tab {
            return false;
        }

        match self.current_tab {
            Tab::Dashboard => self.dashboard.on_exit(),
            Tab::SurveyResults => self.survey_results.on_exit(),
        }

        self.current_tab = tab;
        log::info!("[TABS] switched to {}", tab.label());
        self.enter_current_tab();
        true
    }

    fn enter_current_tab(&mut self) {
        let mut cx = ActivityContext {
            now: self.now,
            timers: &mut self.timers,
        };
        match self.current_tab {
            Tab::Dashboard => self.dashboard.on_enter(&mut cx),
            Tab::SurveyResults => self.survey_results.on_enter(&mut cx),
        }
    }

    fn tab_bar(&self) -> TabBar<'static> {
        TabBar::new(
            &Tab::ITEMS,
            self.current_tab.index(),
            DISPLAY_HEIGHT as i32 - TAB_BAR_H,
            DISPLAY_WIDTH,
        )
    }

    /// Handle input event. Returns true if a redraw is needed.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let result = match event {
            InputEvent::Press(Button::Left) => ActivityResult::NavigateTo(self.current_tab.prev()),
            InputEvent::Press(Button::Right) => {
                ActivityResult::NavigateTo(self.current_tab.next())
            }
            InputEvent::Tap(point) => match self.tab_bar().item_at(point).and_then(Tab::from_index)
            {
                Some(tab) => ActivityResult::NavigateTo(tab),
                None => self.delegate_input(event),
            },
            _ => self.delegate_input(event),
        };
        self.process_result(result)
    }

    /// Delegate input to current tab
    fn delegate_input(&mut self, event: InputEvent) -> ActivityResult {
        match self.current_tab {
            Tab::Dashboard => self.dashboard.handle_input(event),
            Tab::SurveyResults => self.survey_results.handle_input(event),
        }
    }

    /// Process an ActivityResult.
    fn process_result(&mut self, result: ActivityResult) -> bool {
        match result {
            ActivityResult::Consumed => true,
            ActivityResult::NavigateTo(tab) => self.set_tab(tab),
            ActivityResult::Ignored => false,
        }
    }

    /// Advance the clock to `now`: fire due updates, step transitions.
    ///
    /// Returns true if the visible screen needs a redraw. Time never moves
    /// backwards; an older `now` is treated as the last seen value.
    pub fn tick(&mut self, now: Millis) -> bool {
        self.now = self.now.max(now);

        while let Some((deadline, update)) = self.timers.pop_due(self.now) {
            log::debug!(
                "[TIMER] {} due at {}ms fired at {}ms",
                update.label(),
                deadline,
                self.now
            );
            // Transitions start at the deadline so late ticks keep them staggered
            self.dashboard.apply(update, deadline);
        }

        // Drain flags even when hidden so a stale change doesn't linger
        let state_changed = self.dashboard.take_dirty();
        let animating = self.dashboard.tick(self.now);

        match self.current_tab {
            Tab::Dashboard => state_changed || animating,
            Tab::SurveyResults => self.survey_results.tick(self.now),
        }
    }

    /// Render the visible tab and the tab bar to the display.
    pub fn render<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        // Clear display
        Rectangle::new(Point::new(0, 0), Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(display)?;

        match self.current_tab {
            Tab::Dashboard => self.dashboard.render(display)?,
            Tab::SurveyResults => self.survey_results.render(display)?,
        }

        self.tab_bar().render(display)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
