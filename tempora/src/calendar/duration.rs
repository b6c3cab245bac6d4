
use crate::calendar::{
  CalendarError, MICROSECONDS_PER_SECOND, MILLISECONDS_PER_SECOND, NANOSECONDS_PER_MICROSECOND,
  NANOSECONDS_PER_MILLISECOND, NANOSECONDS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR,
  SECONDS_PER_MINUTE,
  format::push::push_fraction,
  misc::{i32i64, i64i128, u8i64, u16i64, u32i64},
};
use core::{
  fmt::{Display, Formatter, Write},
  ops::Neg,
};

/// A span of time with nanosecond precision.
///
/// Differently from [`core::time::Duration`], this structure allows negative durations. Whole
/// seconds and the nanosecond remainder always share the same sign, which makes the derived
/// ordering match the ordering of [`Duration::total_nanos`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Duration {
  seconds: i64,
  nanosecond: i32,
}

impl Duration {
  /// Instance with the minimum allowed value. Equals the negation of [`Duration::MAX`].
  pub const MIN: Self = Self { seconds: -i64::MAX, nanosecond: -999_999_999 };
  /// Instance with the maximum allowed value.
  pub const MAX: Self = Self { seconds: i64::MAX, nanosecond: 999_999_999 };
  /// Instance without intervals.
  pub const ZERO: Self = Self { seconds: 0, nanosecond: 0 };

  /// Creates a new instance from the specified number of days.
  #[inline]
  pub const fn from_days(days: i64) -> Result<Self, CalendarError> {
    let Some(seconds) = days.checked_mul(u32i64(SECONDS_PER_DAY)) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Self::from_seconds(seconds)
  }

  /// Creates a new instance from the specified number of hours.
  #[inline]
  pub const fn from_hours(hours: i64) -> Result<Self, CalendarError> {
    let Some(seconds) = hours.checked_mul(u16i64(SECONDS_PER_HOUR)) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Self::from_seconds(seconds)
  }

  /// Creates a new instance from the specified number of microseconds.
  #[allow(
    clippy::cast_possible_truncation,
    reason = "remainders of divisions by a million fit in an `i32`"
  )]
  #[inline]
  pub const fn from_microseconds(microseconds: i64) -> Self {
    let divisor = u32i64(MICROSECONDS_PER_SECOND);
    Self {
      seconds: microseconds.wrapping_div(divisor),
      nanosecond: {
        let rest = microseconds.wrapping_rem(divisor) as i32;
        rest.wrapping_mul(NANOSECONDS_PER_MICROSECOND.cast_signed())
      },
    }
  }

  /// Creates a new instance from the specified number of milliseconds.
  #[allow(
    clippy::cast_possible_truncation,
    reason = "remainders of divisions by a thousand fit in an `i32`"
  )]
  #[inline]
  pub const fn from_milliseconds(milliseconds: i64) -> Self {
    let divisor = u16i64(MILLISECONDS_PER_SECOND);
    Self {
      seconds: milliseconds.wrapping_div(divisor),
      nanosecond: {
        let rest = milliseconds.wrapping_rem(divisor) as i32;
        rest.wrapping_mul(NANOSECONDS_PER_MILLISECOND.cast_signed())
      },
    }
  }

  /// Creates a new instance from the specified number of minutes.
  #[inline]
  pub const fn from_minutes(minutes: i64) -> Result<Self, CalendarError> {
    let Some(seconds) = minutes.checked_mul(u8i64(SECONDS_PER_MINUTE)) else {
      return Err(CalendarError::ArithmeticOverflow);
    };
    Self::from_seconds(seconds)
  }

  /// Creates a new instance from the specified number of nanoseconds.
  ///
  /// Fails if the number of whole seconds can not be held by the range of [`Duration::MIN`] and
  /// [`Duration::MAX`].
  #[inline]
  pub const fn from_nanoseconds(nanoseconds: i128) -> Result<Self, CalendarError> {
    let seconds = nanoseconds.wrapping_div(NANOSECONDS_PER_SECOND as i128);
    if seconds > i64i128(i64::MAX) || seconds < i64i128(-i64::MAX) {
      return Err(CalendarError::ArithmeticOverflow);
    }
    Ok(Self::from_nanoseconds_in_range(nanoseconds))
  }

  /// Creates a new instance from the specified number of whole seconds.
  #[inline]
  pub const fn from_seconds(seconds: i64) -> Result<Self, CalendarError> {
    if seconds == i64::MIN {
      return Err(CalendarError::ArithmeticOverflow);
    }
    Ok(Self { seconds, nanosecond: 0 })
  }

  /// Creates a new instance from the specified number of whole seconds and additional
  /// nanoseconds.
  ///
  /// If the number of nanoseconds is greater than 1 billion (the number of nanoseconds in a
  /// second), then it will carry over into the seconds provided. Components of different signs
  /// are normalized.
  #[inline]
  pub const fn new(mut seconds: i64, mut nanosecond: i32) -> Result<Self, CalendarError> {
    let divisor = NANOSECONDS_PER_SECOND.cast_signed();
    match seconds.checked_add(i32i64(nanosecond.wrapping_div(divisor))) {
      Some(elem) => {
        seconds = elem;
      }
      None => return Err(CalendarError::ArithmeticOverflow),
    }
    nanosecond = nanosecond.wrapping_rem(divisor);
    if seconds > 0 && nanosecond < 0 {
      seconds = seconds.wrapping_sub(1);
      nanosecond = nanosecond.wrapping_add(divisor);
    } else if seconds < 0 && nanosecond > 0 {
      seconds = seconds.wrapping_add(1);
      nanosecond = nanosecond.wrapping_sub(divisor);
    } else {
    }
    Self::from_seconds_and_nanos(seconds, nanosecond)
  }

  /// Absolute value. Always representable because [`Duration::MIN`] is the negation of
  /// [`Duration::MAX`].
  #[inline]
  #[must_use]
  pub const fn abs(self) -> Self {
    if self.is_negative() { self.neg() } else { self }
  }

  /// Computes `self + other`, failing on overflow.
  #[inline]
  pub const fn checked_add(self, other: Self) -> Result<Self, CalendarError> {
    Self::from_nanoseconds(self.total_nanos().wrapping_add(other.total_nanos()))
  }

  /// Computes `self - other`, failing on overflow.
  #[inline]
  pub const fn checked_sub(self, other: Self) -> Result<Self, CalendarError> {
    Self::from_nanoseconds(self.total_nanos().wrapping_sub(other.total_nanos()))
  }

  /// If this instance is lesser than zero.
  #[inline]
  pub const fn is_negative(self) -> bool {
    self.seconds < 0 || self.nanosecond < 0
  }

  /// Returns `true` if the number of seconds and nanoseconds are zero
  #[inline]
  pub const fn is_zero(self) -> bool {
    self.seconds == 0 && self.nanosecond == 0
  }

  /// Computes `-self`.
  #[inline]
  #[must_use]
  pub const fn neg(self) -> Self {
    Self { seconds: self.seconds.wrapping_neg(), nanosecond: self.nanosecond.wrapping_neg() }
  }

  /// Returns the number of nanoseconds past the number of whole seconds. Has the same sign of
  /// the whole duration.
  #[inline]
  pub const fn subsec_nanoseconds(self) -> i32 {
    self.nanosecond
  }

  /// Exact number of nanoseconds.
  #[inline]
  pub const fn total_nanos(self) -> i128 {
    i64i128(self.seconds)
      .wrapping_mul(NANOSECONDS_PER_SECOND as i128)
      .wrapping_add(self.nanosecond as i128)
  }

  /// Number of seconds, including the fractional part.
  ///
  /// Large durations can lose sub-second precision because of the `f64` mantissa. Use
  /// [`Duration::total_nanos`] for exact computations.
  #[allow(clippy::cast_precision_loss, reason = "documented precision loss")]
  #[inline]
  pub const fn total_seconds(self) -> f64 {
    self.seconds as f64 + self.nanosecond as f64 / NANOSECONDS_PER_SECOND as f64
  }

  /// Returns the number of _whole_ days contained in this instance.
  #[inline]
  pub const fn whole_days(self) -> i64 {
    self.seconds.wrapping_div(u32i64(SECONDS_PER_DAY))
  }

  /// Returns the number of _whole_ hours contained in this instance.
  #[inline]
  pub const fn whole_hours(self) -> i64 {
    self.seconds.wrapping_div(u16i64(SECONDS_PER_HOUR))
  }

  /// Returns the number of _whole_ minutes contained in this instance.
  #[inline]
  pub const fn whole_minutes(self) -> i64 {
    self.seconds.wrapping_div(u8i64(SECONDS_PER_MINUTE))
  }

  /// Returns the number of _whole_ seconds contained in this instance. Rounds toward zero.
  #[inline]
  pub const fn whole_seconds(self) -> i64 {
    self.seconds
  }

  /// Whole seconds of `nanoseconds` must be within `-i64::MAX..=i64::MAX`.
  #[allow(
    clippy::cast_possible_truncation,
    reason = "remainders of divisions by a billion fit in an `i32`"
  )]
  pub(crate) const fn from_nanoseconds_in_range(nanoseconds: i128) -> Self {
    let divisor = NANOSECONDS_PER_SECOND as i128;
    Self {
      seconds: nanoseconds.wrapping_div(divisor) as i64,
      nanosecond: nanoseconds.wrapping_rem(divisor) as i32,
    }
  }

  pub(crate) const fn from_offset_seconds(seconds: i32) -> Self {
    Self { seconds: i32i64(seconds), nanosecond: 0 }
  }

  const fn from_seconds_and_nanos(seconds: i64, nanosecond: i32) -> Result<Self, CalendarError> {
    if seconds == i64::MIN {
      return Err(CalendarError::ArithmeticOverflow);
    }
    Ok(Self { seconds, nanosecond })
  }
}

/// Signed number of seconds followed by the minimum amount of fractional digits and `s`, e.g.,
/// `-1.5s`.
impl Display for Duration {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    if self.is_negative() {
      f.write_char('-')?;
    }
    write!(f, "{}", self.seconds.unsigned_abs())?;
    push_fraction(self.nanosecond.unsigned_abs(), f)?;
    f.write_char('s')
  }
}

impl Neg for Duration {
  type Output = Self;

  #[inline]
  fn neg(self) -> Self::Output {
    Duration::neg(self)
  }
}

impl TryFrom<core::time::Duration> for Duration {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: core::time::Duration) -> crate::Result<Self> {
    Ok(Self::new(from.as_secs().try_into()?, from.subsec_nanos().cast_signed())?)
  }
}

impl TryFrom<Duration> for core::time::Duration {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: Duration) -> crate::Result<Self> {
    Ok(Self::new(from.seconds.try_into()?, from.nanosecond.try_into()?))
  }
}
