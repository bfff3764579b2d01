use pulse_scenario_harness::ScenarioHarness;
use pulse_ui::{Button, PulseConfig, RearmPolicy, Tab, NEW_SURVEY_NOTIFICATION};

const TAB_BAR_Y: i32 = 760;

fn instant_harness(policy: RearmPolicy) -> ScenarioHarness {
    let config = PulseConfig::builder()
        .animation_ms(0)
        .rearm_policy(policy)
        .build()
        .unwrap();
    ScenarioHarness::with_config(config)
}

#[test]
fn tap_and_keys_switch_tabs() {
    let mut harness = ScenarioHarness::default();
    harness.render();

    assert!(harness.tap(360, TAB_BAR_Y));
    assert_eq!(harness.app().current_tab(), Tab::SurveyResults);
    harness.render();
    assert!(harness.display().black_pixel_count() > 0);

    assert!(harness.press(Button::Left));
    assert_eq!(harness.app().current_tab(), Tab::Dashboard);

    assert!(harness.press(Button::Right));
    assert_eq!(harness.app().current_tab(), Tab::SurveyResults);

    assert!(harness.tap(120, TAB_BAR_Y));
    assert_eq!(harness.app().current_tab(), Tab::Dashboard);
}

#[test]
fn confirm_and_back_do_nothing() {
    let mut harness = ScenarioHarness::default();
    assert!(!harness.press(Button::Confirm));
    assert!(!harness.press(Button::Back));
    assert_eq!(harness.app().current_tab(), Tab::Dashboard);
}

#[test]
fn updates_keep_firing_on_hidden_dashboard() {
    let mut harness = instant_harness(RearmPolicy::OnEveryEnter);

    harness.advance_by(1000);
    assert!(harness.press(Button::Right));

    // Survey results screen has nothing to redraw when the dashboard changes
    assert!(!harness.advance_units(4));
    let dashboard = harness.app().dashboard();
    assert_eq!(dashboard.survey_progress().get(), 0.8);
    assert_eq!(dashboard.well_being().get(), 0.9);
    assert_eq!(dashboard.notifications().len(), 3);
}

#[test]
fn state_survives_tab_switches() {
    let mut harness = instant_harness(RearmPolicy::OnEveryEnter);

    harness.advance_units(3);
    harness.press(Button::Right);
    harness.press(Button::Left);

    let dashboard = harness.app().dashboard();
    assert_eq!(dashboard.survey_progress().get(), 0.8);
    assert_eq!(dashboard.well_being().get(), 0.9);
}

#[test]
fn reentering_dashboard_rearms_and_duplicates_notification() {
    let mut harness = instant_harness(RearmPolicy::OnEveryEnter);

    harness.advance_units(4);
    assert_eq!(harness.app().dashboard().notifications().len(), 3);

    harness.press(Button::Right);
    harness.press(Button::Left);
    assert_eq!(harness.app().dashboard().times_armed(), 2);
    assert_eq!(harness.app().pending_timers(), 3);

    harness.advance_units(4);
    let list = harness.app().dashboard().notifications();
    assert_eq!(list.len(), 4);
    assert_eq!(list.get(2), Some(NEW_SURVEY_NOTIFICATION));
    assert_eq!(list.get(3), Some(NEW_SURVEY_NOTIFICATION));
}

#[test]
fn quick_toggle_arms_overlapping_timers() {
    let mut harness = instant_harness(RearmPolicy::OnEveryEnter);

    harness.advance_by(500);
    harness.press(Button::Right);
    harness.press(Button::Right);
    assert_eq!(harness.app().pending_timers(), 6);

    harness.advance_units(5);
    assert_eq!(harness.app().dashboard().notifications().len(), 4);
}

#[test]
fn once_per_process_policy_never_duplicates() {
    let mut harness = instant_harness(RearmPolicy::OncePerProcess);

    harness.advance_units(4);
    for _ in 0..3 {
        harness.press(Button::Right);
        harness.press(Button::Right);
    }
    assert_eq!(harness.app().pending_timers(), 0);

    harness.advance_units(10);
    assert_eq!(harness.app().dashboard().notifications().len(), 3);
    assert_eq!(harness.app().dashboard().times_armed(), 1);
}
