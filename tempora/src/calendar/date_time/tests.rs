use crate::calendar::{
  CalendarError, CalendarErrorKind, CalendarToken, Date, DateTime, Duration, FixedClock, Time,
  UtcOffset, misc::calendar_error,
};
use std::string::ToString;

fn _2024_06_15_14_30_45() -> DateTime {
  DateTime::new(Date::from_ymd(2024, 6, 15).unwrap(), Time::from_hms(14, 30, 45).unwrap())
}

#[test]
fn add_and_sub_duration() {
  let date_time = DateTime::from_iso_8601(b"2024-01-01T00:00:00Z").unwrap();
  let shifted = date_time.add_duration(Duration::from_seconds(3_600).unwrap()).unwrap();
  assert_eq!(shifted.time().hour(), 1);
  assert_eq!(shifted.date(), date_time.date());

  let before_midnight =
    DateTime::new(Date::from_ymd(2023, 12, 31).unwrap(), Time::from_hms(23, 59, 59).unwrap());
  assert_eq!(
    before_midnight.add_duration(Duration::from_seconds(1).unwrap()).unwrap(),
    date_time
  );
  assert_eq!(
    date_time.sub_duration(Duration::from_nanoseconds(1).unwrap()).unwrap(),
    DateTime::new(Date::from_ymd(2023, 12, 31).unwrap(), Time::MAX)
  );
  assert_eq!(
    date_time.add_duration(Duration::from_days(-365).unwrap()).unwrap(),
    DateTime::new(Date::from_ymd(2023, 1, 1).unwrap(), Time::MIDNIGHT)
  );
  assert_eq!(
    date_time.add_duration(Duration::from_days(366 + 365 * 3 + 1).unwrap()).unwrap(),
    DateTime::new(Date::from_ymd(2028, 1, 2).unwrap(), Time::MIDNIGHT)
  );
  let leap = DateTime::new(Date::from_ymd(2000, 2, 28).unwrap(), Time::from_hms(23, 0, 0).unwrap());
  assert_eq!(
    leap.add_duration(Duration::from_hours(2).unwrap()).unwrap(),
    DateTime::new(Date::from_ymd(2000, 2, 29).unwrap(), Time::from_hms(1, 0, 0).unwrap())
  );
  assert_eq!(
    DateTime::MAX.add_duration(Duration::from_nanoseconds(1).unwrap()),
    Err(CalendarError::ArithmeticOverflow)
  );
  assert_eq!(
    DateTime::MIN.sub_duration(Duration::from_nanoseconds(1).unwrap()),
    Err(CalendarError::ArithmeticOverflow)
  );
  assert_eq!(DateTime::EPOCH.add_duration(Duration::MAX), Err(CalendarError::ArithmeticOverflow));
}

#[test]
fn and_offset() {
  let offset_date_time =
    _2024_06_15_14_30_45().and_offset(UtcOffset::from_hours_minutes(true, 5, 30).unwrap()).unwrap();
  assert_eq!(offset_date_time.to_local(), _2024_06_15_14_30_45());
  assert_eq!(offset_date_time.utc().time(), Time::from_hms(9, 0, 45).unwrap());
}

#[test]
fn difference() {
  let date_time = _2024_06_15_14_30_45();
  assert_eq!(date_time.difference(DateTime::EPOCH), Duration::from_seconds(1_718_461_845).unwrap());
  assert_eq!(
    DateTime::EPOCH.difference(date_time),
    Duration::from_seconds(-1_718_461_845).unwrap()
  );
  assert_eq!(date_time.difference(date_time), Duration::ZERO);
  let max_span = DateTime::MAX.difference(DateTime::MIN);
  assert_eq!(DateTime::MIN.add_duration(max_span).unwrap(), DateTime::MAX);
  assert_eq!(DateTime::MAX.add_duration(max_span.neg()).unwrap(), DateTime::MIN);
  for duration in [
    Duration::new(-1, -1).unwrap(),
    Duration::from_days(100_000).unwrap(),
    Duration::new(86_399, 999_999_999).unwrap(),
  ] {
    assert_eq!(date_time.add_duration(duration).unwrap().difference(date_time), duration);
  }
}

#[test]
fn from_iso_8601() {
  assert_eq!(DateTime::from_iso_8601(b"2024-06-15T14:30:45Z").unwrap(), _2024_06_15_14_30_45());
  assert_eq!(
    "2024-06-15T14:30:45.5Z".parse::<DateTime>().unwrap().time().nanosecond(),
    500_000_000
  );
  assert_eq!(
    calendar_error(DateTime::from_iso_8601(b"2024-06-15T14:30:45")),
    CalendarError::InvalidParsingLiteral { expected: b'Z', position: 19 }
  );
  assert_eq!(
    calendar_error(DateTime::from_iso_8601(b"2024-06-15T14:30:45+00:00")),
    CalendarError::InvalidParsingLiteral { expected: b'Z', position: 19 }
  );
  assert_eq!(
    calendar_error(DateTime::from_iso_8601(b"2024-06-15t14:30:45Z")),
    CalendarError::InvalidParsingLiteral { expected: b'T', position: 10 }
  );
  assert_eq!(
    calendar_error(DateTime::from_iso_8601(b"2024-06-15 14:30:45Z")),
    CalendarError::InvalidParsingLiteral { expected: b'T', position: 10 }
  );
  assert_eq!(
    calendar_error(DateTime::from_iso_8601(b"2024-06-15T25:30:45Z")),
    CalendarError::InvalidParsingField { field: CalendarToken::TwoDigitHour, position: 11 }
  );
  assert_eq!(
    DateTime::from_iso_8601(b"2024-06-15T14:30:45z").unwrap_err().calendar_kind(),
    Some(CalendarErrorKind::Parse)
  );
}

#[test]
fn iso_8601() {
  assert_eq!(_2024_06_15_14_30_45().iso_8601().as_str(), "2024-06-15T14:30:45Z");
  assert_eq!(DateTime::EPOCH.to_string(), "1970-01-01T00:00:00Z");
  assert_eq!(DateTime::MAX.iso_8601().as_str(), "+2147483647-12-31T23:59:59.999999999Z");
  assert_eq!(DateTime::MIN.iso_8601().as_str(), "-2147483648-01-01T00:00:00Z");
  assert_eq!(DateTime::default(), DateTime::EPOCH);
}

#[test]
fn now_utc() {
  let clock = FixedClock::new(Duration::new(1_718_461_845, 1).unwrap());
  let now = DateTime::now_utc(clock).unwrap();
  assert_eq!(now.unix_timestamp(), 1_718_461_845);
  assert_eq!(now.time().nanosecond(), 1);
  assert_eq!(DateTime::now_utc(&clock).unwrap(), now);
  let pre_epoch = FixedClock::new(Duration::from_milliseconds(-1));
  assert_eq!(
    DateTime::now_utc(pre_epoch).unwrap().iso_8601().as_str(),
    "1969-12-31T23:59:59.999Z"
  );
  let far = FixedClock::new(Duration::MAX);
  assert_eq!(DateTime::now_utc(far), Err(CalendarError::ArithmeticOverflow));
}

#[test]
fn unix_timestamp() {
  assert_eq!(
    DateTime::from_unix_timestamp(-86_400, 0).unwrap().date(),
    Date::from_ymd(1969, 12, 31).unwrap()
  );
  assert_eq!(DateTime::from_unix_timestamp(1_718_461_845, 0).unwrap(), _2024_06_15_14_30_45());
  assert_eq!(_2024_06_15_14_30_45().unix_timestamp(), 1_718_461_845);
  assert_eq!(_2024_06_15_14_30_45().unix_timestamp_nanos(), 1_718_461_845_000_000_000);

  let before_epoch = DateTime::from_unix_timestamp(-1, 500_000_000).unwrap();
  assert_eq!(before_epoch.iso_8601().as_str(), "1969-12-31T23:59:59.5Z");
  assert_eq!(before_epoch.unix_timestamp(), -1);
  assert_eq!(before_epoch.unix_timestamp_nanos(), -500_000_000);
  assert_eq!(DateTime::from_unix_timestamp_nanos(-500_000_000).unwrap(), before_epoch);
  assert_eq!(DateTime::from_unix_timestamp_nanos(-1).unwrap().time(), Time::MAX);

  assert_eq!(
    DateTime::from_unix_timestamp(0, 1_000_000_000),
    Err(CalendarError::InvalidNanosecond { received: 1_000_000_000 })
  );
  assert_eq!(DateTime::from_unix_timestamp(i64::MAX, 0), Err(CalendarError::ArithmeticOverflow));
  assert_eq!(DateTime::from_unix_timestamp(i64::MIN, 0), Err(CalendarError::ArithmeticOverflow));
  assert_eq!(
    DateTime::from_unix_timestamp_nanos(DateTime::MAX.unix_timestamp_nanos()).unwrap(),
    DateTime::MAX
  );
  assert_eq!(
    DateTime::from_unix_timestamp(DateTime::MIN.unix_timestamp(), 0).unwrap(),
    DateTime::MIN
  );
}

#[cfg(feature = "serde")]
#[test]
fn serde() {
  let json = serde_json::to_string(&_2024_06_15_14_30_45()).unwrap();
  assert_eq!(json, "\"2024-06-15T14:30:45Z\"");
  assert_eq!(serde_json::from_str::<DateTime>(&json).unwrap(), _2024_06_15_14_30_45());
  assert!(serde_json::from_str::<DateTime>("\"2024-06-15T14:30:45\"").is_err());
}
