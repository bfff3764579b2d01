//! Survey results placeholder screen.
//!
//! Static layout only: a header and four section titles, no bound data.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::input::InputEvent;
use crate::ui::components::{Header, SectionTitle};
use crate::ui::theme::layout::{GAP_LG, HEADER_TEXT_Y, SECTION_STEP};
use crate::ui::{Activity, ActivityContext, ActivityResult};

/// Section titles in display order
pub const SURVEY_RESULT_SECTIONS: [&str; 4] = [
    "Survey Selection",
    "Survey Overview",
    "Analytics",
    "Individual Responses",
];

/// Stateless survey results activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurveyResultsActivity;

impl SurveyResultsActivity {
    const FIRST_SECTION_Y: i32 = HEADER_TEXT_Y + GAP_LG + SECTION_STEP / 2;

    pub fn new() -> Self {
        Self
    }

    pub fn sections(&self) -> &'static [&'static str] {
        &SURVEY_RESULT_SECTIONS
    }
}

impl Activity for SurveyResultsActivity {
    fn on_enter(&mut self, _cx: &mut ActivityContext<'_>) {}

    fn on_exit(&mut self) {}

    fn handle_input(&mut self, _event: InputEvent) -> ActivityResult {
        ActivityResult::Ignored
    }

    fn render<D: DrawTarget<Color = BinaryColor>>(&self, display: &mut D) -> Result<(), D::Error> {
        Header::new("Survey Results").render(display)?;

        for (i, section) in self.sections().iter().enumerate() {
            SectionTitle::new(section, Self::FIRST_SECTION_Y + i as i32 * SECTION_STEP)
                .render(display)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_display::TestDisplay;
    use embedded_graphics::primitives::Rectangle;

    #[test]
    fn lists_four_sections_in_order() {
        let screen = SurveyResultsActivity::new();
        assert_eq!(
            screen.sections(),
            [
                "Survey Selection",
                "Survey Overview",
                "Analytics",
                "Individual Responses"
            ]
        );
    }

    #[test]
    fn content_stays_in_upper_half() {
        let screen = SurveyResultsActivity::new();
        let mut display = TestDisplay::default_size();
        screen.render(&mut display).unwrap();

        assert!(display.black_pixel_count() > 0);
        let lower = Rectangle::new(Point::new(0, 400), Size::new(480, 400));
        assert_eq!(display.black_pixels_in(lower), 0);
    }

    #[test]
    fn ignores_input() {
        let mut screen = SurveyResultsActivity::new();
        let result = screen.handle_input(InputEvent::Press(crate::input::Button::Confirm));
        assert_eq!(result, ActivityResult::Ignored);
    }
}
