#[cfg(test)]
mod tests;

use crate::calendar::{
  CalendarError, CalendarToken, Clock, Date, DateTime, Duration, Time, UtcOffset,
  format::{
    parsed_data::ParsedData,
    push::{push_date_time, push_offset},
  },
};
use arrayvec::ArrayString;
use core::{
  cmp::Ordering,
  fmt::{Debug, Display, Formatter},
  hash::{Hash, Hasher},
  str::FromStr,
};

/// Local date and time of a fixed [`UtcOffset`].
///
/// The equivalent UTC instant is computed once at construction. Equality, ordering and hashing
/// only consider this instant, which means that `2024-06-15T12:00:00-05:00` and
/// `2024-06-15T17:00:00Z` are equal. Use [`OffsetDateTime::is_identical`] to also compare
/// offsets.
#[derive(Clone, Copy)]
pub struct OffsetDateTime {
  local: DateTime,
  offset: UtcOffset,
  utc: DateTime,
}

impl OffsetDateTime {
  /// Instance that refers the UNIX epoch (1970-01-01T00:00:00Z).
  pub const UNIX_EPOCH: Self =
    Self { local: DateTime::EPOCH, offset: UtcOffset::UTC, utc: DateTime::EPOCH };

  /// Creates a new instance based on the `YYYY-MM-DDTHH:MM:SS[.fffffffff](Z|±HH:MM[:SS])`
  /// representation.
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
      CalendarToken::UtcOffset,
    ];
    let ParsedData::OffsetDateTime(elem) = ParsedData::new(bytes, TOKENS)? else {
      return Err(CalendarError::IncompleteParsingParams.into());
    };
    Ok(elem)
  }

  /// Interprets `date` and `time` as the local time of `offset`. The UTC instant is
  /// `local - offset`.
  ///
  /// Fails if the UTC instant is outside the range of [`DateTime`].
  #[inline]
  pub const fn from_local(
    date: Date,
    time: Time,
    offset: UtcOffset,
  ) -> Result<Self, CalendarError> {
    let local = DateTime::new(date, time);
    let utc = match local.sub_duration(offset.duration()) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Ok(Self { local, offset, utc })
  }

  /// Creates a new instance from the number of seconds since the UNIX epoch and an additional
  /// nanosecond, displayed in `offset`.
  #[inline]
  pub const fn from_unix_timestamp(
    seconds: i64,
    nanosecond: u32,
    offset: UtcOffset,
  ) -> Result<Self, CalendarError> {
    match DateTime::from_unix_timestamp(seconds, nanosecond) {
      Ok(elem) => Self::from_utc(elem, offset),
      Err(err) => Err(err),
    }
  }

  /// Displays `utc` in `offset`. The local time is `utc + offset`.
  ///
  /// Fails if the local time is outside the range of [`DateTime`].
  #[inline]
  pub const fn from_utc(utc: DateTime, offset: UtcOffset) -> Result<Self, CalendarError> {
    let local = match utc.add_duration(offset.duration()) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    Ok(Self { local, offset, utc })
  }

  /// Current instant according to `clock`, displayed in `offset`.
  #[inline]
  pub fn now(clock: impl Clock, offset: UtcOffset) -> Result<Self, CalendarError> {
    Self::from_utc(DateTime::now_utc(clock)?, offset)
  }

  /// Computes `self + duration` over the UTC instant. The offset is preserved.
  #[inline]
  pub const fn add_duration(self, duration: Duration) -> Result<Self, CalendarError> {
    match self.utc.add_duration(duration) {
      Ok(elem) => Self::from_utc(elem, self.offset),
      Err(err) => Err(err),
    }
  }

  /// Local date
  #[inline]
  pub const fn date(self) -> Date {
    self.local.date()
  }

  /// Signed span between the UTC instants of `other` and `self`, i.e., `self - other`.
  #[inline]
  pub const fn difference(self, other: Self) -> Duration {
    self.utc.difference(other.utc)
  }

  /// If both the local time and the offset are equal.
  #[inline]
  pub fn is_identical(&self, other: &Self) -> bool {
    self.local == other.local && self.offset == other.offset
  }

  /// ISO-8601 string representation. UTC is rendered as `Z`.
  #[inline]
  pub fn iso_8601(self) -> ArrayString<48> {
    let mut string = ArrayString::new();
    let _rslt = push_date_time(self.local, &mut string)
      .and_then(|()| push_offset(self.offset, true, &mut string));
    string
  }

  /// Offset
  #[inline]
  pub const fn offset(self) -> UtcOffset {
    self.offset
  }

  /// Computes `self - duration` over the UTC instant. The offset is preserved.
  #[inline]
  pub const fn sub_duration(self, duration: Duration) -> Result<Self, CalendarError> {
    match self.utc.sub_duration(duration) {
      Ok(elem) => Self::from_utc(elem, self.offset),
      Err(err) => Err(err),
    }
  }

  /// Local time
  #[inline]
  pub const fn time(self) -> Time {
    self.local.time()
  }

  /// Stored local date and time.
  #[inline]
  pub const fn to_local(self) -> DateTime {
    self.local
  }

  /// Same instant displayed in another offset.
  #[inline]
  pub const fn to_offset(self, offset: UtcOffset) -> Result<Self, CalendarError> {
    Self::from_utc(self.utc, offset)
  }

  /// Number of whole seconds since the UNIX epoch. Independent of the offset.
  #[inline]
  pub const fn unix_timestamp(self) -> i64 {
    self.utc.unix_timestamp()
  }

  /// Number of nanoseconds since the UNIX epoch. Independent of the offset.
  #[inline]
  pub const fn unix_timestamp_nanos(self) -> i128 {
    self.utc.unix_timestamp_nanos()
  }

  /// Equivalent UTC date and time.
  #[inline]
  pub const fn utc(self) -> DateTime {
    self.utc
  }
}

impl Debug for OffsetDateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl Default for OffsetDateTime {
  #[inline]
  fn default() -> Self {
    Self::UNIX_EPOCH
  }
}

impl Display for OffsetDateTime {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl Eq for OffsetDateTime {}

impl FromStr for OffsetDateTime {
  type Err = crate::Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_iso_8601(s.as_bytes())
  }
}

impl Hash for OffsetDateTime {
  #[inline]
  fn hash<H>(&self, state: &mut H)
  where
    H: Hasher,
  {
    self.utc.hash(state);
  }
}

impl Ord for OffsetDateTime {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.utc.cmp(&other.utc)
  }
}

impl PartialEq for OffsetDateTime {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.utc == other.utc
  }
}

impl PartialOrd for OffsetDateTime {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

#[cfg(feature = "serde")]
mod serde {
  use crate::calendar::OffsetDateTime;
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for OffsetDateTime {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = OffsetDateTime;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted date and time string with an UTC offset")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          OffsetDateTime::from_iso_8601(value.as_bytes()).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for OffsetDateTime {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_str(&self.iso_8601())
    }
  }
}
