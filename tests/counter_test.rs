//! Counter animation from stepping through to the surface

mod common;

use std::time::{Duration, Instant};

use delegate_dash::app::App;
use delegate_dash::core::{format_count, CounterAnimation};
use delegate_dash::infrastructure::{RuntimeBridge, RuntimeCommand, RuntimeEvent};

#[test]
fn test_zero_to_twelve_ends_exactly_at_twelve() {
    let values: Vec<i64> = CounterAnimation::new(0, 12, 1000).collect();
    assert_eq!(values.last(), Some(&12));
    assert_eq!(values.iter().filter(|v| **v == 12).count(), 1);
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_counting_down_is_monotone() {
    let values: Vec<i64> = CounterAnimation::new(847, 0, 1500).collect();
    assert_eq!(values.last(), Some(&0));
    assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_stops_after_end() {
    let mut animation = CounterAnimation::new(0, 43, 1200);
    while animation.tick().is_some() {}
    assert!(animation.is_done());
    assert_eq!(animation.tick(), None);
}

#[test]
fn test_format_count() {
    assert_eq!(format_count(847), "847");
    assert_eq!(format_count(12_345), "12,345");
    assert_eq!(format_count(-1_000_000), "-1,000,000");
}

#[test]
fn test_bridge_drives_app_counter_to_end() {
    let catalog = common::fixture_catalog();
    let mut app = App::new(catalog);
    app.start_counters(true);
    assert_eq!(app.surface.counter("stat-meetings"), Some(0));

    let bridge = RuntimeBridge::new(Duration::from_millis(1)).unwrap();
    for request in app.take_animation_requests() {
        bridge.send(RuntimeCommand::Animate(request)).unwrap();
    }

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut finished = false;
    while !finished && Instant::now() < deadline {
        for event in bridge.poll_events() {
            if matches!(event, RuntimeEvent::CounterFinished { .. }) {
                finished = true;
            }
            app.apply_runtime_event(event);
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    assert!(finished);
    assert_eq!(app.surface.counter("stat-meetings"), Some(12));

    std::thread::sleep(Duration::from_millis(20));
    assert!(bridge.poll_events().is_empty());
}

#[test]
fn test_missing_target_is_a_no_op() {
    let mut app = App::new(common::fixture_catalog());
    app.animate("stat-unknown", 0, 5, 100);
    assert!(app.take_animation_requests().is_empty());
    assert_eq!(app.surface.counter("stat-unknown"), None);

    app.apply_runtime_event(RuntimeEvent::CounterValue {
        target: "stat-unknown".to_string(),
        value: 3,
    });
    assert_eq!(app.surface.counter("stat-unknown"), None);
}
