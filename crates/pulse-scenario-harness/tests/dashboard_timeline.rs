use pulse_scenario_harness::ScenarioHarness;
use pulse_ui::{PulseConfig, INITIAL_NOTIFICATIONS, NEW_SURVEY_NOTIFICATION};

fn notifications(harness: &ScenarioHarness) -> Vec<String> {
    harness
        .app()
        .dashboard()
        .notifications()
        .iter()
        .map(String::from)
        .collect()
}

#[test]
fn initial_state_before_any_time_passes() {
    let harness = ScenarioHarness::default();
    let dashboard = harness.app().dashboard();

    assert_eq!(dashboard.survey_progress().get(), 0.4);
    assert_eq!(dashboard.well_being().get(), 0.75);
    assert_eq!(
        notifications(&harness),
        [
            "Reminder: Complete the survey",
            "New update on company policies"
        ]
    );
}

#[test]
fn survey_progress_updates_alone_at_two_units() {
    let mut harness = ScenarioHarness::default();

    harness.advance_by(1999);
    assert_eq!(harness.app().dashboard().survey_progress().get(), 0.4);

    assert!(harness.advance_by(1));
    let dashboard = harness.app().dashboard();
    assert_eq!(dashboard.survey_progress().get(), 0.8);
    assert_eq!(dashboard.well_being().get(), 0.75);
    assert_eq!(notifications(&harness), INITIAL_NOTIFICATIONS);
}

#[test]
fn well_being_updates_at_three_units() {
    let mut harness = ScenarioHarness::default();

    harness.advance_units(3);
    let dashboard = harness.app().dashboard();
    assert_eq!(dashboard.survey_progress().get(), 0.8);
    assert_eq!(dashboard.well_being().get(), 0.9);
    assert_eq!(dashboard.notifications().len(), 2);
}

#[test]
fn notification_appended_at_four_units() {
    let mut harness = ScenarioHarness::default();

    harness.advance_units(4);
    let list = notifications(&harness);
    assert_eq!(list.len(), 3);
    assert_eq!(list[..2], INITIAL_NOTIFICATIONS);
    assert_eq!(list[2], NEW_SURVEY_NOTIFICATION);
    assert_eq!(harness.app().pending_timers(), 0);
}

#[test]
fn nothing_changes_after_all_updates_fired() {
    let mut harness = ScenarioHarness::default();
    harness.advance_units(4);
    harness.settle();

    assert!(!harness.advance_units(60));
    assert_eq!(notifications(&harness).len(), 3);
}

#[test]
fn one_large_step_fires_every_update_once() {
    let config = PulseConfig::builder().animation_ms(0).build().unwrap();
    let mut harness = ScenarioHarness::with_config(config);

    assert!(harness.advance_by(10_000));
    assert_eq!(harness.now(), 10_000);
    assert_eq!(notifications(&harness).len(), 3);
}

#[test]
fn shorter_time_unit_scales_every_deadline() {
    let config = PulseConfig::builder()
        .time_unit_ms(100)
        .animation_ms(50)
        .build()
        .unwrap();
    let mut harness = ScenarioHarness::with_config(config);

    harness.advance_by(200);
    assert_eq!(harness.app().dashboard().survey_progress().get(), 0.8);
    harness.advance_by(100);
    assert_eq!(harness.app().dashboard().well_being().get(), 0.9);
    harness.advance_by(100);
    assert_eq!(notifications(&harness).len(), 3);
}

#[test]
fn transition_frames_are_requested_until_settled() {
    let mut harness = ScenarioHarness::default();
    harness.advance_units(2);
    assert!(harness.app().is_animating());

    let mut frames = 0;
    while harness.app().is_animating() {
        harness.advance_by(16);
        harness.render();
        frames += 1;
        assert!(frames < 100, "transition never settled");
    }
    assert!(frames > 1);
}
