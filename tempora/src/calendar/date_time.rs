#![allow(
  clippy::cast_possible_truncation,
  reason = "absolute nanoseconds are range checked before being reduced"
)]

#[cfg(test)]
mod tests;

use crate::calendar::{
  CalendarError, CalendarToken, Clock, Date, Duration, NANOSECONDS_PER_DAY,
  NANOSECONDS_PER_SECOND, OffsetDateTime, SECONDS_PER_DAY, Time, UtcOffset,
  format::{parsed_data::ParsedData, push::push_date_time},
  misc::{i64i128, u32i64, u64i128},
};
use arrayvec::ArrayString;
use core::{
  fmt::{Debug, Display, Formatter, Write},
  str::FromStr,
};

/// Civil date and time without an attached offset.
///
/// When an instant is needed, for example in UNIX timestamps, the civil values are interpreted
/// as UTC.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DateTime {
  date: Date,
  time: Time,
}

impl DateTime {
  /// Instance that refers the UNIX epoch (1970-01-01T00:00:00Z).
  pub const EPOCH: Self = Self::new(Date::EPOCH, Time::MIDNIGHT);
  /// Instance with the maximum allowed value.
  pub const MAX: Self = Self::new(Date::MAX, Time::MAX);
  /// Instance with the minimum allowed value.
  pub const MIN: Self = Self::new(Date::MIN, Time::MIDNIGHT);

  /// Creates a new instance based on the `YYYY-MM-DDTHH:MM:SS[.fffffffff]Z` representation.
  ///
  /// The trailing `Z` is mandatory.
  #[inline]
  pub fn from_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    static TOKENS: &[CalendarToken] = &[
      CalendarToken::FourDigitYear,
      CalendarToken::Dash,
      CalendarToken::TwoDigitMonth,
      CalendarToken::Dash,
      CalendarToken::TwoDigitDay,
      CalendarToken::Separator,
      CalendarToken::TwoDigitHour,
      CalendarToken::Colon,
      CalendarToken::TwoDigitMinute,
      CalendarToken::Colon,
      CalendarToken::TwoDigitSecond,
      CalendarToken::DotNano,
      CalendarToken::Utc,
    ];
    let ParsedData::DateTime(elem) = ParsedData::new(bytes, TOKENS)? else {
      return Err(CalendarError::IncompleteParsingParams.into());
    };
    Ok(elem)
  }

  /// Creates a new instance from the number of seconds since the UNIX epoch and an additional
  /// nanosecond. Negative numbers refer instants before the epoch.
  #[inline]
  pub const fn from_unix_timestamp(seconds: i64, nanosecond: u32) -> Result<Self, CalendarError> {
    if nanosecond >= NANOSECONDS_PER_SECOND {
      return Err(CalendarError::InvalidNanosecond { received: nanosecond });
    }
    let nanos = i64i128(seconds)
      .wrapping_mul(NANOSECONDS_PER_SECOND as i128)
      .wrapping_add(nanosecond as i128);
    Self::from_unix_timestamp_nanos(nanos)
  }

  /// Creates a new instance from the number of nanoseconds since the UNIX epoch.
  #[inline]
  pub const fn from_unix_timestamp_nanos(nanos: i128) -> Result<Self, CalendarError> {
    let nanos_per_day = u64i128(NANOSECONDS_PER_DAY);
    let epoch_days = nanos.div_euclid(nanos_per_day);
    if epoch_days < i64i128(Date::MIN.to_epoch_days())
      || epoch_days > i64i128(Date::MAX.to_epoch_days())
    {
      return Err(CalendarError::ArithmeticOverflow);
    }
    let date = match Date::from_epoch_days(epoch_days as i64) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    let time = match Time::from_nanos_of_day(nanos.rem_euclid(nanos_per_day) as u64) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Ok(Self::new(date, time))
  }

  /// Pairs a date with a time.
  #[inline]
  pub const fn new(date: Date, time: Time) -> Self {
    Self { date, time }
  }

  /// Current UTC instant according to `clock`.
  #[inline]
  pub fn now_utc(clock: impl Clock) -> Result<Self, CalendarError> {
    let since_unix_epoch = clock.since_unix_epoch()?;
    Self::from_unix_timestamp_nanos(since_unix_epoch.total_nanos())
  }

  /// Computes `self + duration`. Carries into the date are handled for spans of any size.
  ///
  /// Fails if the result is outside the range of [`DateTime::MIN`] and [`DateTime::MAX`].
  #[inline]
  pub const fn add_duration(self, duration: Duration) -> Result<Self, CalendarError> {
    let nanos = self.unix_timestamp_nanos().wrapping_add(duration.total_nanos());
    Self::from_unix_timestamp_nanos(nanos)
  }

  /// Interprets this instance as the local time of `offset`.
  #[inline]
  pub const fn and_offset(self, offset: UtcOffset) -> Result<OffsetDateTime, CalendarError> {
    OffsetDateTime::from_local(self.date, self.time, offset)
  }

  /// Date
  #[inline]
  pub const fn date(self) -> Date {
    self.date
  }

  /// Signed span from `other` to `self`, i.e., `self - other`.
  #[inline]
  pub const fn difference(self, other: Self) -> Duration {
    let nanos = self.unix_timestamp_nanos().wrapping_sub(other.unix_timestamp_nanos());
    // At most `2 * 784_353_015_834` days, or about `1.4e17` seconds.
    Duration::from_nanoseconds_in_range(nanos)
  }

  /// ISO-8601 string representation
  #[inline]
  pub fn iso_8601(self) -> ArrayString<40> {
    let mut string = ArrayString::new();
    let _rslt = push_date_time(self, &mut string).and_then(|()| string.write_char('Z'));
    string
  }

  /// Computes `self - duration`.
  #[inline]
  pub const fn sub_duration(self, duration: Duration) -> Result<Self, CalendarError> {
    let nanos = self.unix_timestamp_nanos().wrapping_sub(duration.total_nanos());
    Self::from_unix_timestamp_nanos(nanos)
  }

  /// Time
  #[inline]
  pub const fn time(self) -> Time {
    self.time
  }

  /// Number of whole seconds since the UNIX epoch, rounded toward negative infinity.
  #[inline]
  pub const fn unix_timestamp(self) -> i64 {
    let seconds_of_day = u32i64(self.time.seconds_since_midnight());
    self.date.to_epoch_days().wrapping_mul(u32i64(SECONDS_PER_DAY)).wrapping_add(seconds_of_day)
  }

  /// Number of nanoseconds since the UNIX epoch.
  #[inline]
  pub const fn unix_timestamp_nanos(self) -> i128 {
    i64i128(self.date.to_epoch_days())
      .wrapping_mul(u64i128(NANOSECONDS_PER_DAY))
      .wrapping_add(u64i128(self.time.nanos_since_midnight()))
  }
}

impl Debug for DateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl Default for DateTime {
  #[inline]
  fn default() -> Self {
    Self::EPOCH
  }
}

impl Display for DateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl FromStr for DateTime {
  type Err = crate::Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_iso_8601(s.as_bytes())
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::calendar::DateTime;
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for DateTime {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = DateTime;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted date and time string")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          DateTime::from_iso_8601(value.as_bytes()).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for DateTime {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.iso_8601())
    }
  }
}

#[cfg(feature = "_proptest")]
#[cfg(test)]
mod proptest {
  use crate::calendar::{DateTime, Duration};
  use chrono::{Datelike, Timelike};

  #[test_strategy::proptest]
  fn duration_laws(
    #[strategy(-300_000_000_000i64..300_000_000_000)] seconds: i64,
    #[strategy(0u32..1_000_000_000)] nanosecond: u32,
    #[strategy(-300_000_000_000_000_000_000i128..300_000_000_000_000_000_000)] nanos: i128,
  ) {
    let date_time = DateTime::from_unix_timestamp(seconds, nanosecond).unwrap();
    let duration = Duration::from_nanoseconds(nanos).unwrap();
    let shifted = date_time.add_duration(duration).unwrap();
    assert_eq!(shifted.difference(date_time), duration);
    assert_eq!(date_time.add_duration(shifted.difference(date_time)).unwrap(), shifted);
    assert_eq!(shifted.sub_duration(duration).unwrap(), date_time);
  }

  #[test_strategy::proptest]
  fn matches_chrono(
    #[strategy(-8_000_000_000_000i64..8_000_000_000_000)] seconds: i64,
    #[strategy(0u32..1_000_000_000)] nanosecond: u32,
  ) {
    let date_time = DateTime::from_unix_timestamp(seconds, nanosecond).unwrap();
    let reference = chrono::DateTime::from_timestamp(seconds, nanosecond).unwrap();
    assert_eq!(date_time.date().year(), reference.year());
    assert_eq!(u32::from(date_time.date().month()), reference.month());
    assert_eq!(u32::from(date_time.date().day()), reference.day());
    assert_eq!(u32::from(date_time.time().hour()), reference.hour());
    assert_eq!(u32::from(date_time.time().minute()), reference.minute());
    assert_eq!(u32::from(date_time.time().second()), reference.second());
    assert_eq!(date_time.time().nanosecond(), reference.nanosecond());
    assert_eq!(date_time.unix_timestamp(), reference.timestamp());
  }
}
