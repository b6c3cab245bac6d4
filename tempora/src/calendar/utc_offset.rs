#![allow(
  clippy::cast_possible_truncation,
  reason = "components of an offset bounded by a day fit in an `i8`"
)]


use crate::calendar::{
  CalendarError, CalendarToken, Duration, MINUTES_PER_HOUR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
  SECONDS_PER_MINUTE,
  format::{parsed_data::ParsedData, push::push_offset},
  misc::{u8i32, u16i32},
};
use arrayvec::ArrayString;
use core::{
  fmt::{Debug, Display, Formatter},
  str::FromStr,
};

/// Fixed displacement from UTC in seconds. Positive values are ahead of UTC.
///
/// Only fixed numeric offsets are supported, there are no time zone rules.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UtcOffset {
  seconds: i32,
}

impl UtcOffset {
  /// `+23:59:59`
  pub const MAX: Self = Self { seconds: MAX_SECONDS };
  /// `-23:59:59`
  pub const MIN: Self = Self { seconds: -MAX_SECONDS };
  /// `Z`
  pub const UTC: Self = Self { seconds: 0 };

  /// Creates an instance from a sign and the number of hours and minutes.
  ///
  /// The sign is applied explicitly, which means that `-00:00` and `+00:00` both refer to UTC.
  #[inline]
  pub const fn from_hours_minutes(
    is_positive: bool,
    hours: u8,
    minutes: u8,
  ) -> Result<Self, CalendarError> {
    if hours > 23 {
      return Err(CalendarError::InvalidOffsetHour { received: hours });
    }
    if minutes >= MINUTES_PER_HOUR {
      return Err(CalendarError::InvalidOffsetMinute { received: minutes });
    }
    let seconds = u8i32(hours)
      .wrapping_mul(u16i32(SECONDS_PER_HOUR))
      .wrapping_add(u8i32(minutes).wrapping_mul(u8i32(SECONDS_PER_MINUTE)));
    Ok(Self { seconds: if is_positive { seconds } else { seconds.wrapping_neg() } })
  }

  /// Creates a new instance based on the `Z` or `±HH:MM[:SS]` representations.
  #[inline]
  pub fn from_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    static TOKENS: &[CalendarToken] = &[CalendarToken::UtcOffset];
    let ParsedData::UtcOffset(elem) = ParsedData::new(bytes, TOKENS)? else {
      return Err(CalendarError::IncompleteParsingParams.into());
    };
    Ok(elem)
  }

  /// Creates an instance from a signed number of seconds.
  #[inline]
  pub const fn from_seconds(seconds: i32) -> Result<Self, CalendarError> {
    if seconds > MAX_SECONDS || seconds < -MAX_SECONDS {
      return Err(CalendarError::InvalidOffsetSeconds { received: seconds });
    }
    Ok(Self { seconds })
  }

  /// Signed number of seconds.
  #[inline]
  pub const fn as_seconds(self) -> i32 {
    self.seconds
  }

  /// This offset as a span of time.
  #[inline]
  pub const fn duration(self) -> Duration {
    Duration::from_offset_seconds(self.seconds)
  }

  /// If this instance is behind UTC.
  #[inline]
  pub const fn is_negative(self) -> bool {
    self.seconds < 0
  }

  /// If this instance has no displacement.
  #[inline]
  pub const fn is_utc(self) -> bool {
    self.seconds == 0
  }

  /// ISO-8601 string representation
  #[inline]
  pub fn iso_8601(self) -> ArrayString<9> {
    let mut string = ArrayString::new();
    let _rslt = push_offset(self, false, &mut string);
    string
  }

  /// Minutes past the whole hours, with the same sign of the offset.
  #[inline]
  pub const fn minutes_past_hour(self) -> i8 {
    (self.seconds % u16i32(SECONDS_PER_HOUR) / u8i32(SECONDS_PER_MINUTE)) as i8
  }

  /// Seconds past the whole minutes, with the same sign of the offset.
  #[inline]
  pub const fn seconds_past_minute(self) -> i8 {
    (self.seconds % u8i32(SECONDS_PER_MINUTE)) as i8
  }

  /// Whole hours, with the same sign of the offset.
  #[inline]
  pub const fn whole_hours(self) -> i8 {
    (self.seconds / u16i32(SECONDS_PER_HOUR)) as i8
  }
}

const MAX_SECONDS: i32 = SECONDS_PER_DAY.cast_signed() - 1;

impl Debug for UtcOffset {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl Display for UtcOffset {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl FromStr for UtcOffset {
  type Err = crate::Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_iso_8601(s.as_bytes())
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::calendar::UtcOffset;
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for UtcOffset {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = UtcOffset;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted UTC offset string")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          UtcOffset::from_iso_8601(value.as_bytes()).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for UtcOffset {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.iso_8601())
    }
  }
}
