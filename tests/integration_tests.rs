//! Integration tests for `snapping-stepper`
//!
//! Drive the public API the way a host widget would: configure, feed updates,
//! listen for changes and read the label.

use snapping_stepper::{
    ValueController,
    config::{ConfigManager, StepperConfig},
    error::{StepperError, get_user_friendly_error},
    input::{DragMode, DragSession},
    script::{ScriptRunner, parse_script},
};
use std::cell::RefCell;
use std::rc::Rc;

fn recording_stepper() -> (ValueController, Rc<RefCell<Vec<f64>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let mut stepper = ValueController::new();
    stepper.set_value_changed_block(move |value| sink.borrow_mut().push(value));
    (stepper, changes)
}

/// A fresh stepper matches the documented defaults
#[test]
fn test_defaults() {
    let stepper = ValueController::default();
    assert!(stepper.continuous());
    assert!(stepper.autorepeat());
    assert!(!stepper.wraps());
    assert_eq!(stepper.minimum_value(), 0.0);
    assert_eq!(stepper.maximum_value(), 100.0);
    assert_eq!(stepper.step_value(), 1.0);
    assert_eq!(stepper.value(), 0.0);
}

/// Setting one bound past the other drags the other one along
#[test]
fn test_bound_drag() {
    let mut stepper = ValueController::new();
    stepper.set_maximum_value(50.0);
    stepper.set_minimum_value(50.0);
    stepper.set_maximum_value(-10.0);
    assert_eq!(stepper.minimum_value(), -10.0);
    assert_eq!(stepper.maximum_value(), -10.0);

    stepper.set_minimum_value(200.0);
    assert_eq!(stepper.maximum_value(), 200.0);
    assert_eq!(stepper.value(), 200.0);
}

/// Continuous mode: a repeated assignment does not re-notify
#[test]
fn test_continuous_notification_count() {
    let (mut stepper, changes) = recording_stepper();
    stepper.set_continuous(true);

    stepper.set_value(10.0);
    stepper.set_value(10.0);
    stepper.set_value(11.0);

    assert_eq!(changes.borrow().len(), 2);
}

/// Non-continuous mode: start of the first streak and end of the second
#[test]
fn test_non_continuous_notification_count() {
    let (mut stepper, changes) = recording_stepper();
    stepper.set_continuous(false);

    stepper.update_value(10.0, false);
    stepper.update_value(10.0, true);
    stepper.update_value(11.0, false);
    stepper.update_value(12.0, false);
    stepper.update_value(13.0, false);
    stepper.update_value(14.0, true);

    assert_eq!(*changes.borrow(), vec![10.0, 14.0]);
}

/// Notifications are delivered before the mutating call returns
#[test]
fn test_notification_is_synchronous() {
    let (mut stepper, changes) = recording_stepper();
    stepper.set_value(42.0);
    assert_eq!(changes.borrow().last(), Some(&42.0));
}

/// Label text follows the value until an override is set
#[test]
fn test_display_text() {
    let mut stepper = ValueController::new();
    stepper.set_thumb_text(None);

    for (value, expected) in [(100.0, "100"), (50.0, "50"), (50.2, "50.2"), (150.0, "100")] {
        stepper.set_value(value);
        assert_eq!(stepper.display_text(), expected);
    }

    stepper.set_thumb_text(Some("Move Me!".to_string()));
    stepper.set_value(50.0);
    assert_eq!(stepper.display_text(), "Move Me!");

    stepper.set_thumb_text(None);
    assert_eq!(stepper.display_text(), "50");
}

/// A whole snapping drag in non-continuous mode reports start and release only
#[test]
fn test_snapping_drag_session() {
    let (mut stepper, changes) = recording_stepper();
    stepper.set_autorepeat(false);
    stepper.set_continuous(false);
    stepper.set_value(20.0);
    changes.borrow_mut().clear();

    let mut drag = DragSession::begin(&stepper);
    assert_eq!(drag.mode(), DragMode::Snapping);
    for offset in [0.1, 0.2, 0.3, 0.4] {
        drag.drag_to(&mut stepper, offset);
    }
    drag.end(&mut stepper);

    assert_eq!(stepper.value(), 24.0);
    assert_eq!(*changes.borrow(), vec![21.0, 24.0]);
}

/// Held autorepeat drag with wrapping cycles through the range ends
#[test]
fn test_autorepeat_drag_wraps() {
    let mut stepper = ValueController::new();
    stepper.set_wraps(true);
    stepper.set_maximum_value(3.0);
    stepper.set_value(2.0);

    let mut drag = DragSession::begin(&stepper);
    drag.drag_to(&mut stepper, 1.0);
    let mut seen = Vec::new();
    for _ in 0..3 {
        assert!(drag.tick(&mut stepper));
        seen.push(stepper.value());
    }
    drag.end(&mut stepper);

    assert_eq!(seen, vec![3.0, 0.0, 1.0]);
}

/// Configuration loaded from disk builds the matching controller
#[test]
fn test_config_file_to_controller() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stepper.json");
    std::fs::write(
        &path,
        r#"{
            "minimumValue": -1,
            "maximumValue": 1,
            "stepValue": 0.25,
            "value": 0.5,
            "wraps": true,
            "continuous": false,
            "autorepeat": false,
            "thumbText": null
        }"#,
    )
    .unwrap();

    let config = ConfigManager::load(&path).unwrap();
    let mut stepper = ValueController::from_config(&config);

    assert_eq!(stepper.value(), 0.5);
    assert_eq!(stepper.display_text(), "0.5");
    assert!(stepper.wraps());
    assert!(!stepper.continuous());

    stepper.increment(true);
    stepper.increment(true);
    stepper.increment(true);
    assert_eq!(stepper.value(), -1.0);

    assert_eq!(stepper.config().step_value, 0.25);
}

/// Invalid configuration surfaces a readable error
#[test]
fn test_invalid_config_error() {
    let error = ConfigManager::from_json_str(r#"{ "stepValue": -3 }"#).unwrap_err();
    assert!(matches!(error, StepperError::InvalidConfig(_)));
    assert!(get_user_friendly_error(&error).contains("must not be negative"));

    let default = ConfigManager::from_json_str("{}").unwrap();
    assert_eq!(default, StepperConfig::default());
}

/// Scripts replay against a controller and report labels
#[test]
fn test_script_replay() {
    let script = "\
        # clamp then wrap\n\
        text-clear\n\
        value 105\n\
        show\n\
        wraps true\n\
        value -4\n\
        show\n\
        text Move Me!\n\
        value 3\n\
        show\n";

    let mut runner = ScriptRunner::default();
    let mut labels = Vec::new();
    for (index, command) in parse_script(script).unwrap().iter().enumerate() {
        if let Some(label) = runner.apply(index + 1, command).unwrap() {
            labels.push(label);
        }
    }

    assert_eq!(labels, vec!["100", "100", "Move Me!"]);
    assert_eq!(runner.controller().value(), 3.0);
}
