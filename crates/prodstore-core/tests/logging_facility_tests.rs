#![allow(clippy::unwrap_used, clippy::expect_used)]

use prodstore_core::errors::{ExError, ExErrorKind, RepositoryError};
use prodstore_core::logging_facility::test_capture::init_test_capture;
use prodstore_core::{log_op_end, log_op_error, log_op_start};
use prodstore_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = RepositoryError::WriteFailed { op: op_name };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(event.level, tracing::Level::ERROR);
    assert_eq!(event.field("err.code"), Some("ERR_WRITE_FAILED"));
    assert_eq!(event.field("err.kind"), Some("WriteFailed"));
}

#[test]
fn test_log_op_error_accepts_ex_error_and_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = ExError::new(ExErrorKind::Persistence).with_op(op_name);
    log_op_error!(op_name, err, duration_ms = 1, err.detail = "disk I/O error");

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("err.code"), Some("ERR_PERSISTENCE"));
    assert_eq!(events[0].field("err.detail"), Some("disk I/O error"));
}

#[test]
fn test_start_and_end_are_paired() {
    let capture = init_test_capture();
    let op_name = "test_boundary_pairing_unique_5";

    log_op_start!(op_name, product_id = 7);
    log_op_end!(op_name, duration_ms = 2, rows_affected = 1);

    let events = capture.events_for_op(op_name);
    let starts = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .count();
    let ends = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .count();

    assert_eq!(starts, 1);
    assert_eq!(ends, 1);
    assert_eq!(events[0].field("product_id"), Some("7"));
    assert_eq!(events[1].field("rows_affected"), Some("1"));
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_6";

    log_op_start!(op_name);

    let events = capture.events_for_op(op_name);
    assert_eq!(
        events[0].component.as_deref(),
        Some("logging_facility_tests")
    );
}
