use chrono::{Duration, FixedOffset, TimeZone};
use wh::errors::AppError;
use wh::utils::format_duration;
use wh::utils::time::{local_midnight, parse_go_duration, parse_time_expr, truncate_to_minute};

mod common;
use common::local;

fn offset_now() -> chrono::DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .expect("valid offset")
        .with_ymd_and_hms(2023, 8, 13, 14, 27, 45)
        .single()
        .expect("valid time")
}

#[test]
fn test_empty_expression_is_now() {
    let now = offset_now();
    assert_eq!(parse_time_expr("", &now).unwrap(), now);
}

#[test]
fn test_exact_times_are_relative_to_midnight() {
    let now = offset_now();
    let midnight = local_midnight(&now);

    let cases = [
        ("09:30", Duration::hours(9) + Duration::minutes(30)),
        ("13:00", Duration::hours(13)),
        ("00:00", Duration::zero()),
        ("23:59", Duration::hours(23) + Duration::minutes(59)),
    ];

    for (input, offset) in cases {
        assert_eq!(
            parse_time_expr(input, &now).unwrap(),
            midnight + offset,
            "input {input}"
        );
    }
}

#[test]
fn test_exact_time_does_not_depend_on_current_time() {
    let morning = local(2023, 9, 1, 6, 0, 0);
    let evening = local(2023, 9, 1, 22, 45, 10);

    assert_eq!(
        parse_time_expr("09:00", &morning).unwrap(),
        parse_time_expr("09:00", &evening).unwrap()
    );
    assert_eq!(
        parse_time_expr("09:00", &morning).unwrap(),
        local(2023, 9, 1, 9, 0, 0)
    );
}

#[test]
fn test_exact_time_is_not_range_checked() {
    let now = offset_now();
    let got = parse_time_expr("99:99", &now).unwrap();
    assert_eq!(got, local_midnight(&now) + Duration::minutes(99 * 60 + 99));
}

#[test]
fn test_relative_times_offset_now() {
    let now = offset_now();

    let cases = [
        ("1h30m", Duration::minutes(90)),
        ("30m", Duration::minutes(30)),
        ("2h", Duration::hours(2)),
        ("-30m", Duration::minutes(-30)),
        ("-1h30m", Duration::minutes(-90)),
        ("0m", Duration::zero()),
    ];

    for (input, offset) in cases {
        assert_eq!(
            parse_time_expr(input, &now).unwrap(),
            now + offset,
            "input {input}"
        );
    }
}

#[test]
fn test_unrecognised_expressions_are_rejected() {
    let now = offset_now();

    for input in ["abc", "9:30", "09:3", "1h30", "10s", "1.5h", "h", " 09:30", "09:30 ", "--1h"] {
        match parse_time_expr(input, &now) {
            Err(AppError::InvalidTime(s)) => assert_eq!(s, input),
            other => panic!("expected InvalidTime for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_go_durations() {
    let cases = [
        ("4h30m", Duration::minutes(270)),
        ("90m", Duration::minutes(90)),
        ("1.5h", Duration::minutes(90)),
        ("-1h", Duration::hours(-1)),
        ("+15m", Duration::minutes(15)),
        ("0", Duration::zero()),
        ("1h0m30s", Duration::seconds(3630)),
        ("300ms", Duration::milliseconds(300)),
        ("2us", Duration::microseconds(2)),
        ("2µs", Duration::microseconds(2)),
        (".5m", Duration::seconds(30)),
    ];

    for (input, want) in cases {
        assert_eq!(parse_go_duration(input).unwrap(), want, "input {input}");
    }
}

#[test]
fn test_go_duration_errors() {
    for input in ["", "-", "h", "4x", "1h30", "12", "1..5h", ".h", "4h 30m"] {
        assert!(
            matches!(parse_go_duration(input), Err(AppError::InvalidDuration(_))),
            "input {input:?} should be rejected"
        );
    }
}

#[test]
fn test_truncate_to_minute() {
    let now = offset_now();
    let got = truncate_to_minute(&now);
    assert_eq!(got, now - Duration::seconds(45));
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::minutes(450)), "7h30m");
    assert_eq!(format_duration(Duration::minutes(360)), "6h0m");
    assert_eq!(format_duration(Duration::minutes(45)), "45m");
    assert_eq!(format_duration(Duration::zero()), "0m");
    assert_eq!(format_duration(Duration::seconds(59)), "0m");
    assert_eq!(format_duration(Duration::minutes(-75)), "-1h15m");
    assert_eq!(format_duration(Duration::minutes(-30)), "-30m");
}
