//! Dashboard screen for the Pulse HR mock-up.
//!
//! Shows three fixed overview cards, two live progress bars (survey
//! progress, well-being index) and the notification list. When the screen
//! becomes visible it arms three one-shot updates on the app timer queue:
//! - +2 units: survey progress 0.4 → 0.8
//! - +3 units: well-being 0.75 → 0.9
//! - +4 units: append "New survey available"
//!
//! Every update is applied immediately to the model and eased into view.

extern crate alloc;

use alloc::format;

use embedded_graphics::{
    mono_font::MonoTextStyle, pixelcolor::BinaryColor, prelude::*, primitives::Rectangle,
    text::Text,
};

use crate::config::{PulseConfig, RearmPolicy};
use crate::input::InputEvent;
use crate::model::{NotificationList, Ratio};
use crate::observable::Observable;
use crate::timer::Millis;
use crate::transition::Transition;
use crate::ui::components::{Header, OverviewCard, ProgressBar, SectionTitle};
use crate::ui::theme::layout::{
    CARDS_TOP, CARD_SIZE, CARD_SPACING, GAP_LG, GAP_SM, MARGIN, NOTIFICATION_ROW_H, PROGRESS_H,
    TAB_BAR_H,
};
use crate::ui::theme::{ui_font_body, ui_font_title};
use crate::ui::{Activity, ActivityContext, ActivityResult};
use crate::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Overview cards as (title, value). These never change.
pub const OVERVIEW_CARDS: [(&str, &str); 3] = [
    ("Employee Satisfaction", "85%"),
    ("Average Work Hours", "40"),
    ("Completed Surveys", "150"),
];

pub const INITIAL_SURVEY_PROGRESS: f32 = 0.4;
pub const UPDATED_SURVEY_PROGRESS: f32 = 0.8;
pub const INITIAL_WELL_BEING: f32 = 0.75;
pub const UPDATED_WELL_BEING: f32 = 0.9;

pub const INITIAL_NOTIFICATIONS: [&str; 2] = [
    "Reminder: Complete the survey",
    "New update on company policies",
];
pub const NEW_SURVEY_NOTIFICATION: &str = "New survey available";

/// One-shot mutations armed when the dashboard becomes visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardUpdate {
    SurveyProgress,
    WellBeing,
    NewSurveyNotification,
}

impl DashboardUpdate {
    pub const ALL: [Self; 3] = [
        Self::SurveyProgress,
        Self::WellBeing,
        Self::NewSurveyNotification,
    ];

    /// Delay after the dashboard appears, in time units.
    pub const fn delay_units(self) -> u32 {
        match self {
            Self::SurveyProgress => 2,
            Self::WellBeing => 3,
            Self::NewSurveyNotification => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SurveyProgress => "survey progress",
            Self::WellBeing => "well-being index",
            Self::NewSurveyNotification => "new survey notification",
        }
    }
}

/// Dashboard activity owning the three observable state slots
pub struct DashboardActivity {
    config: PulseConfig,
    survey_progress: Observable<Ratio>,
    well_being: Observable<Ratio>,
    notifications: Observable<NotificationList>,
    survey_transition: Transition,
    well_being_transition: Transition,
    /// Slide-in of the newest notification (0 = off-screen, 1 = in place)
    incoming: Option<Transition>,
    times_armed: u32,
    now: Millis,
    was_animating: bool,
}

impl DashboardActivity {
    const BAR_WIDTH: u32 = DISPLAY_WIDTH - 2 * MARGIN as u32;
    const TITLE_H: i32 = 18;
    const SURVEY_TITLE_Y: i32 = CARDS_TOP + CARD_SIZE as i32 + GAP_LG + Self::TITLE_H;
    const SURVEY_BAR_Y: i32 = Self::SURVEY_TITLE_Y + GAP_SM + 4;
    const WELL_BEING_TITLE_Y: i32 = Self::SURVEY_BAR_Y + PROGRESS_H as i32 + GAP_LG + Self::TITLE_H;
    const WELL_BEING_BAR_Y: i32 = Self::WELL_BEING_TITLE_Y + GAP_SM + 4;
    const NOTIFICATIONS_TITLE_Y: i32 =
        Self::WELL_BEING_BAR_Y + PROGRESS_H as i32 + GAP_LG + Self::TITLE_H;
    const NOTIFICATIONS_FIRST_Y: i32 = Self::NOTIFICATIONS_TITLE_Y + GAP_SM + 20;
    const CONTENT_BOTTOM: i32 = DISPLAY_HEIGHT as i32 - TAB_BAR_H;
    /// Rows whose baseline fits between the notifications title and the tab bar
    pub const MAX_VISIBLE_NOTIFICATIONS: usize =
        ((Self::CONTENT_BOTTOM - Self::NOTIFICATIONS_FIRST_Y) / NOTIFICATION_ROW_H + 1) as usize;

    /// Create the dashboard with its initial values.
    pub fn new(config: PulseConfig) -> Self {
        Self {
            config,
            survey_progress: Observable::new(Ratio::new(INITIAL_SURVEY_PROGRESS)),
            well_being: Observable::new(Ratio::new(INITIAL_WELL_BEING)),
            notifications: Observable::new(INITIAL_NOTIFICATIONS.into_iter().collect()),
            survey_transition: Transition::settled(INITIAL_SURVEY_PROGRESS),
            well_being_transition: Transition::settled(INITIAL_WELL_BEING),
            incoming: None,
            times_armed: 0,
            now: 0,
            was_animating: false,
        }
    }

    pub fn survey_progress(&self) -> Ratio {
        *self.survey_progress.get()
    }

    pub fn well_being(&self) -> Ratio {
        *self.well_being.get()
    }

    pub fn notifications(&self) -> &NotificationList {
        self.notifications.get()
    }

    /// How many times the timed updates have been armed.
    pub fn times_armed(&self) -> u32 {
        self.times_armed
    }

    /// Arm the three timed updates, honouring the re-arm policy.
    ///
    /// Returns false if the policy suppressed arming.
    pub fn arm_updates(&mut self, cx: &mut ActivityContext<'_>) -> bool {
        if self.config.rearm_policy == RearmPolicy::OncePerProcess && self.times_armed > 0 {
            log::debug!("[DASH] updates already armed once, skipping");
            return false;
        }

        for update in DashboardUpdate::ALL {
            let delay = self.config.units_to_ms(update.delay_units());
            let id = cx.timers.schedule_after(cx.now, delay, update);
            log::debug!(
                "[TIMER] armed {:?} for {} at +{}ms",
                id,
                update.label(),
                delay
            );
        }
        self.times_armed += 1;
        true
    }

    /// Apply a fired update at `now` and start its transition.
    pub fn apply(&mut self, update: DashboardUpdate, now: Millis) {
        self.now = self.now.max(now);
        let duration = self.config.animation_ms as Millis;

        match update {
            DashboardUpdate::SurveyProgress => {
                let from = self.survey_transition.value_at(now);
                if self.survey_progress.set(Ratio::new(UPDATED_SURVEY_PROGRESS)) {
                    self.survey_transition =
                        Transition::new(from, UPDATED_SURVEY_PROGRESS, now, duration);
                    log::info!(
                        "[DASH] survey progress {:.2} -> {:.2}",
                        from,
                        UPDATED_SURVEY_PROGRESS
                    );
                }
            }
            DashboardUpdate::WellBeing => {
                let from = self.well_being_transition.value_at(now);
                if self.well_being.set(Ratio::new(UPDATED_WELL_BEING)) {
                    self.well_being_transition =
                        Transition::new(from, UPDATED_WELL_BEING, now, duration);
                    log::info!(
                        "[DASH] well-being index {:.2} -> {:.2}",
                        from,
                        UPDATED_WELL_BEING
                    );
                }
            }
            DashboardUpdate::NewSurveyNotification => {
                self.notifications
                    .update(|list| list.push(NEW_SURVEY_NOTIFICATION));
                self.incoming = Some(Transition::new(0.0, 1.0, now, duration));
                log::info!(
                    "[DASH] notification appended ({} total)",
                    self.notifications.get().len()
                );
            }
        }
    }

    /// Survey progress as currently drawn (mid-transition values included).
    pub fn displayed_survey_progress(&self) -> Ratio {
        Ratio::new(self.survey_transition.value_at(self.now))
    }

    /// Well-being index as currently drawn.
    pub fn displayed_well_being(&self) -> Ratio {
        Ratio::new(self.well_being_transition.value_at(self.now))
    }

    /// Horizontal offset of the newest notification while it slides in.
    pub fn incoming_offset(&self) -> i32 {
        match self.incoming {
            Some(slide) => {
                let remaining = 1.0 - slide.value_at(self.now);
                (remaining * (DISPLAY_WIDTH as i32 - MARGIN) as f32) as i32
            }
            None => 0,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.survey_transition.is_active(self.now)
            || self.well_being_transition.is_active(self.now)
            || self.incoming.is_some_and(|slide| slide.is_active(self.now))
    }

    /// Oldest entries folded into the "+N earlier" row when the list overflows.
    ///
    /// The newest entries always stay on screen.
    pub fn hidden_notifications(&self) -> usize {
        let len = self.notifications.get().len();
        if len > Self::MAX_VISIBLE_NOTIFICATIONS {
            len - (Self::MAX_VISIBLE_NOTIFICATIONS - 1)
        } else {
            0
        }
    }

    /// Drain change flags from all state slots. True if any changed.
    pub fn take_dirty(&mut self) -> bool {
        let survey = self.survey_progress.take_dirty();
        let well_being = self.well_being.take_dirty();
        let notifications = self.notifications.take_dirty();
        survey || well_being || notifications
    }

    fn card_origin(index: usize) -> Point {
        let row_width = 3 * CARD_SIZE as i32 + 2 * CARD_SPACING;
        let left = (DISPLAY_WIDTH as i32 - row_width) / 2;
        Point::new(
            left + index as i32 * (CARD_SIZE as i32 + CARD_SPACING),
            CARDS_TOP,
        )
    }

    /// Screen area covered by the overview cards.
    pub fn cards_area() -> Rectangle {
        let first = Self::card_origin(0);
        let row_width = 3 * CARD_SIZE + 2 * CARD_SPACING as u32;
        Rectangle::new(first, Size::new(row_width, CARD_SIZE))
    }

    fn notification_baseline(row: usize) -> i32 {
        Self::NOTIFICATIONS_FIRST_Y + row as i32 * NOTIFICATION_ROW_H
    }

    fn render_notifications<D: DrawTarget<Color = BinaryColor>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let top = Self::NOTIFICATIONS_TITLE_Y + GAP_SM;
        let area = Rectangle::new(
            Point::new(0, top),
            Size::new(DISPLAY_WIDTH, (Self::CONTENT_BOTTOM - top) as u32),
        );
        let mut clipped = display.clipped(&area);
        let style = MonoTextStyle::new(ui_font_body(), BinaryColor::On);

        let list = self.notifications.get();
        let hidden = self.hidden_notifications();
        let newest = list.len().saturating_sub(1);
        let mut row = 0;

        if hidden > 0 {
            let earlier = format!("+{} earlier", hidden);
            let earlier_style = MonoTextStyle::new(ui_font_title(), BinaryColor::On);
            Text::new(
                &earlier,
                Point::new(MARGIN, Self::notification_baseline(row)),
                earlier_style,
            )
            .draw(&mut clipped)?;
            row += 1;
        }

        for (i, message) in list.iter().enumerate().skip(hidden) {
            let offset = if i == newest { self.incoming_offset() } else { 0 };
            Text::new(
                message,
                Point::new(MARGIN + offset, Self::notification_baseline(row)),
                style,
            )
            .draw(&mut clipped)?;
            row += 1;
        }

        Ok(())
    }
}

impl Activity for DashboardActivity {
    fn on_enter(&mut self, cx: &mut ActivityContext<'_>) {
        self.now = self.now.max(cx.now);
        self.arm_updates(cx);
    }

    fn on_exit(&mut self) {
        log::debug!("[DASH] hidden, pending updates keep running");
    }

    fn handle_input(&mut self, _event: InputEvent) -> ActivityResult {
        ActivityResult::Ignored
    }

    fn tick(&mut self, now: Millis) -> bool {
        self.now = self.now.max(now);
        let animating = self.is_animating();
        // One more frame after the last transition settles
        let redraw = animating || self.was_animating;
        self.was_animating = animating;
        redraw
    }

    fn render<D: DrawTarget<Color = BinaryColor>>(&self, display: &mut D) -> Result<(), D::Error> {
        Header::new("Dashboard").render(display)?;

        for (i, (title, value)) in OVERVIEW_CARDS.iter().enumerate() {
            OverviewCard::new(title, value, Self::card_origin(i)).render(display)?;
        }

        SectionTitle::new("Survey Progress", Self::SURVEY_TITLE_Y).render(display)?;
        ProgressBar::new(
            Point::new(MARGIN, Self::SURVEY_BAR_Y),
            Self::BAR_WIDTH,
            self.displayed_survey_progress(),
        )
        .render(display)?;

        SectionTitle::new("Well-being Index", Self::WELL_BEING_TITLE_Y).render(display)?;
        ProgressBar::new(
            Point::new(MARGIN, Self::WELL_BEING_BAR_Y),
            Self::BAR_WIDTH,
            self.displayed_well_being(),
        )
        .render(display)?;

        SectionTitle::new("Notifications", Self::NOTIFICATIONS_TITLE_Y).render(display)?;
        self.render_notifications(display)
    }
}
