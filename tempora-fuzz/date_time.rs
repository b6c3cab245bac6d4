//! Date and time parsers

#![no_main]

use tempora::calendar::{Date, DateTime, OffsetDateTime, Time, UtcOffset};

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
  if let Ok(elem) = Date::from_iso_8601(data) {
    assert_eq!(Date::from_iso_8601(elem.iso_8601().as_bytes()).ok(), Some(elem));
  }
  if let Ok(elem) = DateTime::from_iso_8601(data) {
    assert_eq!(DateTime::from_iso_8601(elem.iso_8601().as_bytes()).ok(), Some(elem));
  }
  if let Ok(elem) = OffsetDateTime::from_iso_8601(data) {
    let rslt = OffsetDateTime::from_iso_8601(elem.iso_8601().as_bytes());
    assert!(rslt.is_ok_and(|parsed| parsed.is_identical(&elem)));
  }
  if let Ok(elem) = Time::from_iso_8601(data) {
    assert_eq!(Time::from_iso_8601(elem.iso_8601().as_bytes()).ok(), Some(elem));
  }
  let _rslt = UtcOffset::from_iso_8601(data);
});
