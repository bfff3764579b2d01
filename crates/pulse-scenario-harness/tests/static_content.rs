use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use pulse_scenario_harness::ScenarioHarness;
use pulse_ui::{DashboardActivity, Tab, OVERVIEW_CARDS};

#[test]
fn overview_cards_are_fixed() {
    assert_eq!(
        OVERVIEW_CARDS,
        [
            ("Employee Satisfaction", "85%"),
            ("Average Work Hours", "40"),
            ("Completed Surveys", "150"),
        ]
    );
}

#[test]
fn overview_cards_render_identically_over_time() {
    let cards = DashboardActivity::cards_area();
    let mut harness = ScenarioHarness::default();

    harness.render();
    let initial = harness.display().region(cards);
    assert!(harness.display().black_pixels_in(cards) > 0);

    for _ in 0..5 {
        harness.advance_units(1);
        harness.settle();
        harness.render();
        assert_eq!(harness.display().region(cards), initial);
    }
}

#[test]
fn survey_results_sections_are_fixed() {
    let mut harness = ScenarioHarness::default();
    harness.advance_units(5);
    harness.app_mut().set_tab(Tab::SurveyResults);

    assert_eq!(
        harness.app().survey_results().sections(),
        [
            "Survey Selection",
            "Survey Overview",
            "Analytics",
            "Individual Responses",
        ]
    );
}

#[test]
fn survey_results_screen_ignores_dashboard_state() {
    let full_screen = Rectangle::new(Point::zero(), Size::new(480, 800));

    let mut fresh = ScenarioHarness::default();
    fresh.app_mut().set_tab(Tab::SurveyResults);
    fresh.render();
    let before = fresh.display().region(full_screen);

    let mut aged = ScenarioHarness::default();
    aged.advance_units(5);
    aged.settle();
    aged.app_mut().set_tab(Tab::SurveyResults);
    aged.render();

    assert_eq!(aged.display().region(full_screen), before);
}

#[test]
fn survey_results_screen_differs_from_dashboard() {
    let content = Rectangle::new(Point::zero(), Size::new(480, 700));
    let mut harness = ScenarioHarness::default();

    harness.render();
    let dashboard = harness.display().region(content);

    harness.app_mut().set_tab(Tab::SurveyResults);
    harness.render();
    assert_ne!(harness.display().region(content), dashboard);
    assert!(
        harness.display().black_pixels_in(content)
            < harness.display().black_pixel_count()
    );
}
