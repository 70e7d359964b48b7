use super::*;

fn valid() -> Result<NewLeaveRequest, &'static str> {
    validate_request("Alice", "2026-03-02T09:00", "2026-03-02T18:00", "8", "ANNUAL")
}

#[test]
fn valid_form_builds_request_payload() {
    let request = valid().expect("valid form");
    assert_eq!(request.english_name, "Alice");
    assert_eq!(request.kind, "ANNUAL");
    assert!((request.hours - 8.0).abs() < f64::EPSILON);
}

#[test]
fn employee_and_type_are_required() {
    assert_eq!(
        validate_request("", "2026-03-02T09:00", "2026-03-02T18:00", "8", "ANNUAL"),
        Err("Choose an employee.")
    );
    assert_eq!(
        validate_request("Alice", "2026-03-02T09:00", "2026-03-02T18:00", "8", ""),
        Err("Choose a leave type.")
    );
}

#[test]
fn both_times_are_required() {
    assert_eq!(
        validate_request("Alice", "", "2026-03-02T18:00", "8", "SICK"),
        Err("Enter both start and end times.")
    );
}

#[test]
fn end_must_come_after_start() {
    assert_eq!(
        validate_request("Alice", "2026-03-02T18:00", "2026-03-02T09:00", "8", "SICK"),
        Err("End time must be after the start time.")
    );
    assert_eq!(
        validate_request("Alice", "2026-03-02T09:00", "2026-03-02T09:00", "8", "SICK"),
        Err("End time must be after the start time.")
    );
}

#[test]
fn hours_must_parse_and_reach_one() {
    assert_eq!(
        validate_request("Alice", "2026-03-02T09:00", "2026-03-02T18:00", "", "OTHER"),
        Err("Enter the leave hours.")
    );
    assert_eq!(
        validate_request("Alice", "2026-03-02T09:00", "2026-03-02T18:00", "0.5", "OTHER"),
        Err("Hours must be at least 1.")
    );
}
