use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use tsgrid::core::comparator::{TimestampComparator, ordering_sign};
use tsgrid::core::date_value::{DateValue, strip_utc_marker};
use tsgrid::core::timezone::TimezonePolicy;
use tsgrid::errors::AppError;

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn utc() -> TimestampComparator {
    TimestampComparator::new(TimezonePolicy::Utc)
}

fn text(s: &str) -> DateValue {
    DateValue::from(s)
}

#[test]
fn test_marker_stripped_row_compares_in_local_time() {
    let cmp = TimestampComparator::new(TimezonePolicy::Local);
    let boundary = DateValue::from(dt(2021, 3, 1, 9, 0, 0));

    let row1 = cmp.compare(&boundary, &text("2021-03-01T10:00:00Z")).unwrap();
    let row2 = cmp.compare(&boundary, &text("2021-03-01T09:00:00")).unwrap();

    assert_eq!(row1, Ordering::Greater);
    assert_eq!(ordering_sign(row1), 1);
    assert_eq!(row2, Ordering::Equal);
    assert_eq!(ordering_sign(row2), 0);
}

#[test]
fn test_cell_earlier_than_boundary_is_less() {
    let ord = utc()
        .compare(&text("2021-03-01T09:00:00"), &text("2021-03-01T08:59:59"))
        .unwrap();
    assert_eq!(ord, Ordering::Less);
    assert_eq!(ordering_sign(ord), -1);
}

#[test]
fn test_equal_iff_same_millisecond() {
    let cmp = utc();
    let boundary = text("2021-03-01T09:00:00");

    assert_eq!(
        cmp.compare(&boundary, &text("2021-03-01T09:00:00.000")).unwrap(),
        Ordering::Equal
    );
    assert_eq!(
        cmp.compare(&boundary, &text("2021-03-01 09:00:00")).unwrap(),
        Ordering::Equal
    );
    assert_eq!(
        cmp.compare(&boundary, &text("2021-03-01T09:00:00.001")).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        cmp.compare(&boundary, &text("2021-03-01T08:59:59.999")).unwrap(),
        Ordering::Less
    );
}

#[test]
fn test_reversing_operands_flips_sign() {
    let cmp = utc();
    let values = [
        "2021-03-01T09:00:00",
        "2021-03-01T09:00:00.250",
        "2020-12-31T23:59:59",
        "2021-03-01T09:00",
        "2022-06-15",
    ];

    for a in values {
        for b in values {
            let ab = cmp.compare(&text(a), &text(b)).unwrap();
            let ba = cmp.compare(&text(b), &text(a)).unwrap();
            assert_eq!(ab, ba.reverse(), "{a} vs {b}");
            assert_eq!(ordering_sign(ab), -ordering_sign(ba));
        }
    }
}

#[test]
fn test_marker_stripping_matches_stripped_form() {
    let cmp = TimestampComparator::new(TimezonePolicy::Local);
    let boundaries = [dt(2021, 3, 1, 9, 0, 0), dt(2021, 3, 1, 10, 0, 0), dt(2030, 1, 1, 0, 0, 0)];
    let cells = [
        "2021-03-01T10:00:00Z",
        "2021-03-01T09:00:00.500Z",
        "2021-03-01T09:00:00z",
        "2021-03-01T10:00Z",
    ];

    for b in boundaries {
        let boundary = DateValue::from(b);
        for c in cells {
            let stripped = strip_utc_marker(c);
            assert!(!stripped.ends_with(['Z', 'z']));
            assert_eq!(
                cmp.compare(&boundary, &text(c)).unwrap(),
                cmp.compare(&boundary, &text(stripped)).unwrap(),
                "{c}"
            );
        }
    }
}

#[test]
fn test_strip_utc_marker_only_removes_one_trailing_marker() {
    assert_eq!(strip_utc_marker("2021-03-01T10:00:00Z"), "2021-03-01T10:00:00");
    assert_eq!(strip_utc_marker("2021-03-01T10:00:00"), "2021-03-01T10:00:00");
    assert_eq!(strip_utc_marker("2021-03-01T10:00:00z "), "2021-03-01T10:00:00");
}

#[test]
fn test_cell_with_explicit_offset_is_absolute() {
    // 10:00+02:00 is 08:00 UTC
    let ord = utc()
        .compare(&text("2021-03-01T09:00:00"), &text("2021-03-01T10:00:00+02:00"))
        .unwrap();
    assert_eq!(ord, Ordering::Less);
}

#[test]
fn test_fixed_offset_policy() {
    let tz: TimezonePolicy = "+02:00".parse().unwrap();
    let cmp = TimestampComparator::new(tz);

    // 09:00 at +02:00 is 07:00 UTC
    let boundary = DateValue::from(dt(2021, 3, 1, 9, 0, 0));
    assert_eq!(
        cmp.compare(&boundary, &text("2021-03-01T07:00:00+00:00")).unwrap(),
        Ordering::Equal
    );
    // Stripped markers read in the same zone as the boundary
    assert_eq!(
        cmp.compare(&boundary, &text("2021-03-01T09:00:00Z")).unwrap(),
        Ordering::Equal
    );
}

#[test]
fn test_date_only_cell_is_midnight() {
    let ord = utc()
        .compare(&DateValue::from(dt(2021, 3, 1, 0, 0, 0)), &text("2021-03-01"))
        .unwrap();
    assert_eq!(ord, Ordering::Equal);
}

#[test]
fn test_invalid_cell_is_typed_error() {
    let err = utc()
        .compare(&text("2021-03-01T09:00:00"), &text("not a date"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(ref s) if s == "not a date"));
}

#[test]
fn test_invalid_boundary_is_typed_error() {
    let err = utc()
        .compare(&text("2021-13-01T09:00:00"), &text("2021-03-01T09:00:00"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(_)));

    let err = utc().compare(&text(""), &text("2021-03-01")).unwrap_err();
    assert!(matches!(err, AppError::InvalidTimestamp(_)));
}

#[test]
fn test_boundary_keeps_utc_meaning_of_marker() {
    let tz: TimezonePolicy = "+01:00".parse().unwrap();
    let cmp = TimestampComparator::new(tz);

    // Boundary 09:00Z is 10:00 at +01:00; the cell reads 10:00 at +01:00
    let ord = cmp
        .compare(&text("2021-03-01T09:00:00Z"), &text("2021-03-01T10:00:00"))
        .unwrap();
    assert_eq!(ord, Ordering::Equal);
}

#[test]
fn test_timezone_policy_parsing() {
    assert_eq!("local".parse::<TimezonePolicy>().unwrap(), TimezonePolicy::Local);
    assert_eq!("UTC".parse::<TimezonePolicy>().unwrap(), TimezonePolicy::Utc);

    let fixed: TimezonePolicy = "-0530".parse().unwrap();
    assert_eq!(fixed.to_string(), "-05:30");
    assert_eq!(fixed.to_string().parse::<TimezonePolicy>().unwrap(), fixed);

    for bad in ["", "Europe/Rome", "+2", "+24:00", "+01:60", "0200"] {
        let err = bad.parse::<TimezonePolicy>().unwrap_err();
        assert!(matches!(err, AppError::InvalidTimezone(_)), "{bad}");
    }
}

#[test]
fn test_timezone_policy_wall_clock_round_trip() {
    let naive = dt(2021, 3, 1, 9, 30, 15);
    for tz in [
        TimezonePolicy::Local,
        TimezonePolicy::Utc,
        "+09:00".parse().unwrap(),
    ] {
        let ms = tz.to_epoch_millis(&naive);
        assert_eq!(tz.to_wall_clock(ms), Some(naive), "{tz}");
    }
}

#[test]
fn test_comparator_is_deterministic() {
    let cmp = utc();
    let a = text("2021-03-01T09:00:00");
    let b = text("2021-03-01T10:00:00Z");
    let first = cmp.compare(&a, &b).unwrap();
    for _ in 0..10 {
        assert_eq!(cmp.compare(&a, &b).unwrap(), first);
    }
}
