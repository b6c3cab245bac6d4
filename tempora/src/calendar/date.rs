#![allow(
  clippy::cast_possible_truncation,
  reason = "civil fields derived from bounded day counts fit their narrower types"
)]


use crate::calendar::{
  CalendarError, CalendarToken, DAYS_OF_MONTHS, DAYS_PER_QUADCENTURY, EPOCH_SHIFTED_DAYS, Weekday,
  format::{parsed_data::ParsedData, push::push_date},
  misc::{booli64, boolusize, i32i64, u8i64, u8u16, u8usize},
};
use arrayvec::ArrayString;
use core::{
  fmt::{Debug, Display, Formatter},
  str::FromStr,
};

static DAYS_IN_MONTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Proleptic Gregorian calendar date stored as the number of days since the UNIX epoch
/// (1970-01-01).
///
/// Can represent every year of the `i32` range. Year, month and day are computed on demand.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Date {
  epoch_days: i64,
}

impl Date {
  /// Instance that refers the UNIX epoch (1970-01-01).
  pub const EPOCH: Self = Self { epoch_days: 0 };
  /// Instance with the maximum allowed value of `+2147483647-12-31`
  pub const MAX: Self = Self { epoch_days: days_from_civil(i32::MAX, 12, 31) };
  /// Instance with the minimum allowed value of `-2147483648-01-01`
  pub const MIN: Self = Self { epoch_days: days_from_civil(i32::MIN, 1, 1) };

  /// Creates a new instance from the number of days since the UNIX epoch. Negative numbers
  /// refer days before 1970-01-01.
  #[inline]
  pub const fn from_epoch_days(epoch_days: i64) -> Result<Self, CalendarError> {
    if epoch_days < Self::MIN.epoch_days || epoch_days > Self::MAX.epoch_days {
      return Err(CalendarError::InvalidEpochDays { received: epoch_days });
    }
    Ok(Self { epoch_days })
  }

  /// Creates a new instance based on the `YYYY-MM-DD` representation.
  #[inline]
  pub fn from_iso_8601(bytes: &[u8]) -> crate::Result<Self> {
    static TOKENS: &[CalendarToken] = &[
      CalendarToken::FourDigitYear,
      CalendarToken::Dash,
      CalendarToken::TwoDigitMonth,
      CalendarToken::Dash,
      CalendarToken::TwoDigitDay,
    ];
    let ParsedData::Date(elem) = ParsedData::new(bytes, TOKENS)? else {
      return Err(CalendarError::IncompleteParsingParams.into());
    };
    Ok(elem)
  }

  /// Constructs a new instance that automatically deals with leap years.
  #[inline]
  pub const fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
    let max = match days_in_month(year, month) {
      Ok(elem) => elem,
      Err(err) => return Err(err),
    };
    if day == 0 || day > max {
      return Err(CalendarError::InvalidMonthDay { max, received: day });
    }
    Ok(Self { epoch_days: days_from_civil(year, month, day) })
  }

  /// Moves the date by the given number of days.
  #[inline]
  pub const fn add_days(self, days: i64) -> Result<Self, CalendarError> {
    let Some(epoch_days) = self.epoch_days.checked_add(days) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    match Self::from_epoch_days(epoch_days) {
      Ok(elem) => Ok(elem),
      Err(_) => Err(CalendarError::ArithmeticOverflow),
    }
  }

  /// Day of the month.
  #[inline]
  pub const fn day(self) -> u8 {
    self.ymd().2
  }

  /// Number of days of the current month.
  #[inline]
  pub const fn days_in_month(self) -> u8 {
    let (year, month, _) = self.ymd();
    days_in_valid_month(year, month)
  }

  /// Signed number of days from `self` to `other`.
  #[inline]
  pub const fn days_until(self, other: Self) -> i64 {
    other.epoch_days.wrapping_sub(self.epoch_days)
  }

  /// If the year of this date has 366 days.
  #[inline]
  pub const fn is_leap_year(self) -> bool {
    is_leap_year(self.year())
  }

  /// ISO-8601 string representation
  #[inline]
  pub fn iso_8601(self) -> ArrayString<20> {
    let mut string = ArrayString::new();
    let _rslt = push_date(self, &mut string);
    string
  }

  /// Month of the year, from `1` to `12`.
  #[inline]
  pub const fn month(self) -> u8 {
    self.ymd().1
  }

  /// Day of the year, from `1` to `366`.
  #[inline]
  pub const fn ordinal(self) -> u16 {
    let (year, month, day) = self.ymd();
    #[allow(clippy::indexing_slicing, reason = "zero or one are valid indices for a 2 len array")]
    let months = &DAYS_OF_MONTHS[boolusize(is_leap_year(year))];
    #[allow(clippy::indexing_slicing, reason = "month only goes up to 12")]
    let days_before = months[u8usize(month).wrapping_sub(1)];
    days_before.wrapping_add(u8u16(day))
  }

  /// Subtracts the given number of days.
  #[inline]
  pub const fn sub_days(self, days: i64) -> Result<Self, CalendarError> {
    let Some(epoch_days) = self.epoch_days.checked_sub(days) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    match Self::from_epoch_days(epoch_days) {
      Ok(elem) => Ok(elem),
      Err(_) => Err(CalendarError::ArithmeticOverflow),
    }
  }

  /// Number of days since the UNIX epoch.
  #[inline]
  pub const fn to_epoch_days(self) -> i64 {
    self.epoch_days
  }

  /// Day of week.
  #[inline]
  pub const fn weekday(self) -> Weekday {
    // 1970-01-01 is a Thursday
    match self.epoch_days.wrapping_add(3).rem_euclid(7) {
      0 => Weekday::Monday,
      1 => Weekday::Tuesday,
      2 => Weekday::Wednesday,
      3 => Weekday::Thursday,
      4 => Weekday::Friday,
      5 => Weekday::Saturday,
      _ => Weekday::Sunday,
    }
  }

  /// Year
  #[inline]
  pub const fn year(self) -> i32 {
    self.ymd().0
  }

  /// Year, month and day computed at once.
  //
  // Credits to https://howardhinnant.github.io/date_algorithms.html#civil_from_days
  #[inline]
  pub const fn ymd(self) -> (i32, u8, u8) {
    let shifted = self.epoch_days.wrapping_add(EPOCH_SHIFTED_DAYS);
    let era = shifted.div_euclid(DAYS_PER_QUADCENTURY);
    let day_of_era = shifted.rem_euclid(DAYS_PER_QUADCENTURY);
    let year_of_era = (day_of_era - day_of_era / 1_460 + day_of_era / 36_524
      - day_of_era / 146_096)
      / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
    let month = if month_from_march < 10 { month_from_march + 3 } else { month_from_march - 9 };
    let year = year_of_era + era * 400 + booli64(month <= 2);
    (year as i32, month as u8, day as u8)
  }
}

impl Debug for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl Default for Date {
  #[inline]
  fn default() -> Self {
    Self::EPOCH
  }
}

impl Display for Date {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.iso_8601())
  }
}

impl FromStr for Date {
  type Err = crate::Error;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_iso_8601(s.as_bytes())
  }
}

pub(crate) const fn is_leap_year(year: i32) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

// Credits to https://howardhinnant.github.io/date_algorithms.html#days_from_civil
const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
  let shifted_year = i32i64(year) - booli64(month <= 2);
  let era = shifted_year.div_euclid(400);
  let year_of_era = shifted_year.rem_euclid(400);
  let month_from_march = if month > 2 { u8i64(month) - 3 } else { u8i64(month) + 9 };
  let day_of_year = (153 * month_from_march + 2) / 5 + u8i64(day) - 1;
  let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
  era * DAYS_PER_QUADCENTURY + day_of_era - EPOCH_SHIFTED_DAYS
}

const fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
  if month == 0 || month > 12 {
    return Err(CalendarError::InvalidMonth { received: month });
  }
  Ok(days_in_valid_month(year, month))
}

const fn days_in_valid_month(year: i32, month: u8) -> u8 {
  if month == 2 && is_leap_year(year) {
    return 29;
  }
  #[allow(clippy::indexing_slicing, reason = "month only goes up to 12")]
  DAYS_IN_MONTHS[u8usize(month).wrapping_sub(1)]
}

#[cfg(feature = "serde")]
mod serde {
  use crate::calendar::Date;
  use core::fmt;
  use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Visitor},
  };

  impl<'de> Deserialize<'de> for Date {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      struct LocalVisitor;

      impl Visitor<'_> for LocalVisitor {
        type Value = Date;

        #[inline]
        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
          formatter.write_str("a formatted date string")
        }

        #[inline]
        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
          E: Error,
        {
          Date::from_iso_8601(value.as_bytes()).map_err(E::custom)
        }
      }

      deserializer.deserialize_str(LocalVisitor)
    }
  }

  impl Serialize for Date {
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
  use crate::calendar::{Date, Weekday};
  use chrono::{Datelike, NaiveDate};

  // Days between 0001-01-01 and 1970-01-01 according to `chrono`.
  const CE_EPOCH_DAYS: i64 = 719_163;

  #[test_strategy::proptest]
  fn epoch_days_round_trip(
    #[strategy(Date::MIN.to_epoch_days()..=Date::MAX.to_epoch_days())] epoch_days: i64,
  ) {
    let date = Date::from_epoch_days(epoch_days).unwrap();
    let (year, month, day) = date.ymd();
    assert_eq!(Date::from_ymd(year, month, day).unwrap().to_epoch_days(), epoch_days);
    assert!(date.ordinal() >= 1 && date.ordinal() <= 366);
  }

  #[test_strategy::proptest]
  fn matches_chrono(#[strategy(-90_000_000i64..90_000_000)] epoch_days: i64) {
    let date = Date::from_epoch_days(epoch_days).unwrap();
    let ce_days = i32::try_from(epoch_days + CE_EPOCH_DAYS).unwrap();
    let reference = NaiveDate::from_num_days_from_ce_opt(ce_days).unwrap();
    assert_eq!(date.year(), reference.year());
    assert_eq!(u32::from(date.month()), reference.month());
    assert_eq!(u32::from(date.day()), reference.day());
    assert_eq!(u32::from(date.ordinal()), reference.ordinal());
    assert_eq!(
      Weekday::from_number_from_monday(
        u8::try_from(reference.weekday().number_from_monday()).unwrap()
      )
      .unwrap(),
      date.weekday()
    );
  }
}
