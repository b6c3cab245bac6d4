#![allow(
  clippy::cast_possible_truncation,
  reason = "components extracted from nanoseconds of a day fit their narrower types"
)]


use crate::calendar::{
  CalendarError, CalendarToken, MINUTES_PER_HOUR, NANOSECONDS_PER_DAY, NANOSECONDS_PER_HOUR,
  NANOSECONDS_PER_MINUTE, NANOSECONDS_PER_SECOND, NANOSECONDS_PER_SECOND_U64, SECONDS_PER_DAY,
  SECONDS_PER_MINUTE,
  format::{parsed_data::ParsedData, push::push_time},
  misc::{u8u64, u32u64},
};
use arrayvec::ArrayString;
use core::{
  fmt::{Debug, Display, Formatter},
  str::FromStr,
};

/// Clock time with nanosecond precision stored as the number of nanoseconds since midnight.
///
/// Leap seconds are not supported.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Time {
  nanos_of_day: u64,
}

impl Time {
  /// Instance with the maximum allowed value of `23:59:59.999_999_999`
  pub const MAX: Self = Self { nanos_of_day: NANOSECONDS_PER_DAY - 1 };
  /// Instance with the minimum allowed value of `00:00:00.000_000_000`
  pub const MIDNIGHT: Self = Self { nanos_of_day: 0 };

  /// New instance without nanosecond precision.
  #[inline]
  pub const fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
    Self::from_hms_ns(hour, minute, second, 0)
  }

  /// New instance with nanosecond precision.
  #[inline]
  pub const fn from_hms_ns(
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
  ) -> Result<Self, CalendarError> {
    if hour > 23 {
      return Err(CalendarError::InvalidHour { received: hour });
    }
    if minute >= MINUTES_PER_HOUR {
      return Err(CalendarError::InvalidMinute { received: minute });
    }
    if second >= SECONDS_PER_MINUTE {
      return Err(CalendarError::InvalidSecond { received: second });
    }
    if nanosecond >= NANOSECONDS_PER_SECOND {
      return Err(CalendarError::InvalidNanosecond { received: nanosecond });
    }
    let nanos_of_day = u8u64(hour)
      .wrapping_mul(NANOSECONDS_PER_HOUR)
      .wrapping_add(u8u64(minute).wrapping_mul(NANOSECONDS_PER_MINUTE))
      .wrapping_add(u8u64(second).wrapping_mul(NANOSECONDS_PER_SECOND_U64))
      .wrapping_add(u32u64(nanosecond));
    Ok(Self { nanos_of_day })
  }

  /// Creates a new instance based on the `HH:MM:SS[.fffffffff]` representation.
  #[inline]
  pub fn from_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    static TOKENS: &[CalendarToken] = &[
      CalendarToken::TwoDigitHour,
      CalendarToken::Colon,
      CalendarToken::TwoDigitMinute,
      CalendarToken::Colon,
      CalendarToken::TwoDigitSecond,
      CalendarToken::DotNano,
    ];
    let ParsedData::Time(elem) = ParsedData::new(bytes, TOKENS)? else {
      return Err(CalendarError::IncompleteParsingParams.into());
    };
    Ok(elem)
  }

  /// New instance from the number of nanoseconds since midnight.
  #[inline]
  pub const fn from_nanos_of_day(nanos_of_day: u64) -> Result<Self, CalendarError> {
    if nanos_of_day >= NANOSECONDS_PER_DAY {
      return Err(CalendarError::InvalidNanosOfDay { received: nanos_of_day });
    }
    Ok(Self { nanos_of_day })
  }

  /// New instance from the number of seconds since midnight and an additional nanosecond.
  #[inline]
  pub const fn from_seconds_and_nanos(
    seconds: u32,
    nanosecond: u32,
  ) -> Result<Self, CalendarError> {
    if nanosecond >= NANOSECONDS_PER_SECOND {
      return Err(CalendarError::InvalidNanosecond { received: nanosecond });
    }
    if seconds >= SECONDS_PER_DAY {
      let received = u32u64(seconds).saturating_mul(NANOSECONDS_PER_SECOND_U64);
      return Err(CalendarError::InvalidNanosOfDay { received });
    }
    Self::from_nanos_of_day(
      u32u64(seconds).wrapping_mul(NANOSECONDS_PER_SECOND_U64).wrapping_add(u32u64(nanosecond)),
    )
  }

  /// Hours of a day
  #[inline]
  pub const fn hour(self) -> u8 {
    (self.nanos_of_day / NANOSECONDS_PER_HOUR) as u8
  }

  /// ISO-8601 string representation
  #[inline]
  pub fn iso_8601(self) -> ArrayString<18> {
    let mut string = ArrayString::new();
    let _rslt = push_time(self, &mut string);
    string
  }

  /// Minutes of a hour.
  #[inline]
  pub const fn minute(self) -> u8 {
    (self.nanos_of_day % NANOSECONDS_PER_HOUR / NANOSECONDS_PER_MINUTE) as u8
  }

  /// Nanosecond of a second
  #[inline]
  pub const fn nanosecond(self) -> u32 {
    (self.nanos_of_day % NANOSECONDS_PER_SECOND_U64) as u32
  }

  /// The total number of nanoseconds since midnight (00:00:00).
  #[inline]
  pub const fn nanos_since_midnight(self) -> u64 {
    self.nanos_of_day
  }

  /// Seconds of a minute
  #[inline]
  pub const fn second(self) -> u8 {
    (self.nanos_of_day % NANOSECONDS_PER_MINUTE / NANOSECONDS_PER_SECOND_U64) as u8
  }

  /// The total number of whole seconds since midnight (00:00:00).
  #[inline]
  pub const fn seconds_since_midnight(self) -> u32 {
    (self.nanos_of_day / NANOSECONDS_PER_SECOND_U64) as u32
  }
}

impl Debug for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl Default for Time {
  #[inline]
  fn default() -> Self {
    Self::MIDNIGHT
  }
}

impl Display for Time {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl FromStr for Time {
  type Err = crate::Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_iso_8601(s.as_bytes())
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::calendar::Time;
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for Time {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = Time;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted time string")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          Time::from_iso_8601(value.as_bytes()).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for Time {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.iso_8601())
    }
  }
}
