use crate::calendar::{
  CalendarError, CalendarToken, Date, DateTime, Duration, FixedClock, OffsetDateTime, Time,
  UtcOffset, misc::calendar_error,
};
use core::hash::BuildHasher;
use std::{hash::RandomState, string::ToString};

fn _plus_05_30() -> UtcOffset {
  UtcOffset::from_hours_minutes(true, 5, 30).unwrap()
}

fn _2024_06_15_14_30_45_123456789_plus_05_30() -> OffsetDateTime {
  OffsetDateTime::from_local(
    Date::from_ymd(2024, 6, 15).unwrap(),
    Time::from_hms_ns(14, 30, 45, 123_456_789).unwrap(),
    _plus_05_30(),
  )
  .unwrap()
}

#[test]
fn accessors() {
  let instance = _2024_06_15_14_30_45_123456789_plus_05_30();
  assert_eq!(instance.date(), Date::from_ymd(2024, 6, 15).unwrap());
  assert_eq!(instance.time(), Time::from_hms_ns(14, 30, 45, 123_456_789).unwrap());
  assert_eq!(instance.offset(), _plus_05_30());
  assert_eq!(instance.to_local(), DateTime::new(instance.date(), instance.time()));
  assert_eq!(instance.utc().iso_8601().as_str(), "2024-06-15T09:00:45.123456789Z");
  assert_eq!(instance.unix_timestamp(), 1_718_442_045);
  assert_eq!(instance.unix_timestamp_nanos(), 1_718_442_045_123_456_789);
  assert_eq!(OffsetDateTime::default(), OffsetDateTime::UNIX_EPOCH);
}

#[test]
fn add_and_sub_duration() {
  let instance = _2024_06_15_14_30_45_123456789_plus_05_30();
  let shifted = instance.add_duration(Duration::from_hours(10).unwrap()).unwrap();
  assert_eq!(shifted.offset(), _plus_05_30());
  assert_eq!(shifted.to_string(), "2024-06-16T00:30:45.123456789+05:30");
  assert_eq!(shifted.difference(instance), Duration::from_hours(10).unwrap());
  assert_eq!(shifted.sub_duration(Duration::from_hours(10).unwrap()).unwrap(), instance);
  assert!(
    shifted.sub_duration(Duration::from_hours(10).unwrap()).unwrap().is_identical(&instance)
  );
}

#[test]
fn constructors_converge() {
  let instance = _2024_06_15_14_30_45_123456789_plus_05_30();
  let from_utc = OffsetDateTime::from_utc(instance.utc(), _plus_05_30()).unwrap();
  let from_unix_timestamp =
    OffsetDateTime::from_unix_timestamp(1_718_442_045, 123_456_789, _plus_05_30()).unwrap();
  let and_offset = instance.to_local().and_offset(_plus_05_30()).unwrap();
  for elem in [from_utc, from_unix_timestamp, and_offset] {
    assert!(elem.is_identical(&instance));
  }
}

#[test]
fn equality_by_instant() {
  let lhs = OffsetDateTime::from_iso_8601(b"2024-06-15T12:00:00-05:00").unwrap();
  let rhs = OffsetDateTime::from_iso_8601(b"2024-06-15T17:00:00Z").unwrap();
  assert_eq!(lhs, rhs);
  assert!(!lhs.is_identical(&rhs));
  assert!(lhs.is_identical(&lhs));
  let state = RandomState::new();
  assert_eq!(state.hash_one(lhs), state.hash_one(rhs));
  let later = OffsetDateTime::from_iso_8601(b"2024-06-15T12:00:01-05:00").unwrap();
  assert!(rhs < later);
  assert!(lhs.to_local() < rhs.to_local());
}

#[test]
fn from_iso_8601() {
  let text = "2024-06-15T14:30:45.123456789+05:30";
  let instance = text.parse::<OffsetDateTime>().unwrap();
  assert!(instance.is_identical(&_2024_06_15_14_30_45_123456789_plus_05_30()));
  assert_eq!(instance.iso_8601().as_str(), text);
  let negative_zero = OffsetDateTime::from_iso_8601(b"2024-06-15T14:30:45-00:00").unwrap();
  assert!(negative_zero.offset().is_utc());
  assert_eq!(negative_zero.to_string(), "2024-06-15T14:30:45Z");
  assert_eq!(
    calendar_error(OffsetDateTime::from_iso_8601(b"2024-06-15T14:30:45")),
    CalendarError::InvalidParsingTimezone { position: 19 }
  );
  assert_eq!(
    calendar_error(OffsetDateTime::from_iso_8601(b"2024-06-15T14:30:45+05:60")),
    CalendarError::InvalidParsingField { field: CalendarToken::UtcOffset, position: 19 }
  );
  assert_eq!(
    calendar_error(OffsetDateTime::from_iso_8601(b"2024-06-15T14:30:45+0530")),
    CalendarError::InvalidParsingTimezone { position: 19 }
  );
  assert_eq!(
    calendar_error(OffsetDateTime::from_iso_8601(b"2024-06-15T14:30:45.Z")),
    CalendarError::InvalidParsingFraction { position: 19 }
  );
}

#[test]
fn iso_8601_with_offset_seconds() {
  let offset = UtcOffset::from_seconds(3_661).unwrap();
  let instance = OffsetDateTime::from_unix_timestamp(1_700_000_000, 0, offset).unwrap();
  assert_eq!(instance.iso_8601().as_str(), "2023-11-14T23:14:21+01:01:01");
  let parsed = OffsetDateTime::from_iso_8601(instance.iso_8601().as_bytes()).unwrap();
  assert!(parsed.is_identical(&instance));
  assert_eq!(parsed.offset().as_seconds(), 3_661);
  let west = instance.to_offset(UtcOffset::MIN).unwrap();
  assert_eq!(west.to_string(), "2023-11-13T22:13:21-23:59:59");
  assert!(west.to_string().parse::<OffsetDateTime>().unwrap().is_identical(&west));
}

#[test]
fn now() {
  let clock = FixedClock::new(Duration::from_seconds(1_718_461_845).unwrap());
  let instance = OffsetDateTime::now(clock, UtcOffset::from_hours_minutes(false, 5, 0).unwrap());
  assert_eq!(instance.unwrap().to_string(), "2024-06-15T09:30:45-05:00");
}

#[test]
fn overflow_at_the_edges() {
  let west = UtcOffset::from_hours_minutes(false, 1, 0).unwrap();
  assert_eq!(
    OffsetDateTime::from_local(Date::MAX, Time::MAX, west),
    Err(CalendarError::ArithmeticOverflow)
  );
  assert_eq!(
    OffsetDateTime::from_utc(DateTime::MIN, west),
    Err(CalendarError::ArithmeticOverflow)
  );
  let instance = OffsetDateTime::from_utc(DateTime::MAX, UtcOffset::UTC).unwrap();
  assert_eq!(instance.to_offset(_plus_05_30()), Err(CalendarError::ArithmeticOverflow));
}

#[test]
fn to_offset() {
  let instance = _2024_06_15_14_30_45_123456789_plus_05_30();
  let west = instance.to_offset(UtcOffset::from_hours_minutes(false, 5, 0).unwrap()).unwrap();
  assert_eq!(west, instance);
  assert_eq!(west.to_string(), "2024-06-15T04:00:45.123456789-05:00");
  assert_eq!(
    west.to_offset(UtcOffset::UTC).unwrap().to_string(),
    "2024-06-15T09:00:45.123456789Z"
  );
  let odd = instance.to_offset(UtcOffset::from_seconds(-34_262).unwrap()).unwrap();
  assert_eq!(odd.to_string(), "2024-06-14T23:29:43.123456789-09:31:02");
}

#[cfg(feature = "serde")]
#[test]
fn serde() {
  let instance = _2024_06_15_14_30_45_123456789_plus_05_30();
  let json = serde_json::to_string(&instance).unwrap();
  assert_eq!(json, "\"2024-06-15T14:30:45.123456789+05:30\"");
  assert!(serde_json::from_str::<OffsetDateTime>(&json).unwrap().is_identical(&instance));
  let odd = instance.to_offset(UtcOffset::from_seconds(-34_262).unwrap()).unwrap();
  let json = serde_json::to_string(&odd).unwrap();
  assert!(serde_json::from_str::<OffsetDateTime>(&json).unwrap().is_identical(&odd));
}
