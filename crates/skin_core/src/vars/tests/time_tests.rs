use super::*;

use crate::{test_support::RecordingEngine, vars::Variable};

fn playing(position: f32, time: u64, length: u64) -> Arc<RecordingEngine> {
    let engine = Arc::new(RecordingEngine::default());
    *engine.position.lock() = Some(position);
    *engine.time.lock() = Duration::from_secs(time);
    *engine.length.lock() = Duration::from_secs(length);
    engine
}

#[test]
fn short_format_switches_to_hours_at_one_hour() {
    assert_eq!(format_time(Duration::from_secs(3599), true), "59:59");
    assert_eq!(format_time(Duration::from_secs(3600), true), "1:00:00");
    assert_eq!(format_time(Duration::from_secs(65), true), "01:05");
}

#[test]
fn long_format_always_shows_hours() {
    assert_eq!(format_time(Duration::from_secs(65), false), "0:01:05");
    assert_eq!(format_time(Duration::from_secs(36_061), false), "10:01:01");
}

#[test]
fn times_are_placeholders_without_a_position() {
    let engine = Arc::new(RecordingEngine::default());
    let time = StreamTime::new(engine.clone());
    assert_eq!(time.as_string_curr_time(true), "-:--:--");
    assert_eq!(time.as_string_time_left(false), "-:--:--");
    assert_eq!(time.as_string_duration(true), "-:--:--");

    // Loaded but still at the very start counts as no position.
    *engine.position.lock() = Some(0.0);
    *engine.length.lock() = Duration::from_secs(90);
    assert_eq!(time.as_string_duration(true), "-:--:--");
}

#[test]
fn reports_elapsed_left_and_total() {
    let time = StreamTime::new(playing(0.25, 75, 300));
    assert_eq!(time.as_string_curr_time(true), "01:15");
    assert_eq!(time.as_string_time_left(true), "03:45");
    assert_eq!(time.as_string_duration(false), "0:05:00");
}

#[test]
fn time_left_never_goes_negative() {
    let time = StreamTime::new(playing(1.0, 310, 300));
    assert_eq!(time.as_string_time_left(true), "00:00");
}

#[test]
fn percent_string_truncates() {
    let time = StreamTime::new(Arc::new(RecordingEngine::default()));
    time.set(0.426, false);
    assert_eq!(time.as_string_percent(), "42");
    time.set(1.0, false);
    assert_eq!(time.as_string_percent(), "100");
}

#[test]
fn only_user_seeks_reach_the_engine() {
    let engine = Arc::new(RecordingEngine::default());
    let time = StreamTime::new(engine.clone());

    time.set(0.5, false);
    assert!(engine.calls().is_empty());

    time.set(0.75, true);
    assert_eq!(engine.calls(), vec!["position 0.75"]);
    assert_eq!(time.percent().get(), 0.75);
}

#[test]
fn is_a_percent_variable() {
    let time = StreamTime::new(Arc::new(RecordingEngine::default()));
    assert_eq!(time.var_type(), "percent");
}
