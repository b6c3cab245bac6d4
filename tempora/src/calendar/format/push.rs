#![allow(
  clippy::cast_possible_truncation,
  reason = "remainders of divisions by ten always fit in a single byte"
)]

use crate::calendar::{Date, DateTime, Time, UtcOffset};
use core::fmt::{self, Write};

pub(crate) fn push_date(date: Date, w: &mut impl Write) -> fmt::Result {
  let (year, month, day) = date.ymd();
  push_year(year, w)?;
  w.write_char('-')?;
  push_two_digits(month, w)?;
  w.write_char('-')?;
  push_two_digits(day, w)
}

/// `<Date>T<Time>` without any offset designator.
pub(crate) fn push_date_time(date_time: DateTime, w: &mut impl Write) -> fmt::Result {
  push_date(date_time.date(), w)?;
  w.write_char('T')?;
  push_time(date_time.time(), w)
}

/// Writes a dot followed by the minimum amount of digits that represent `nanosecond`. Writes
/// nothing if `nanosecond` is zero.
pub(crate) fn push_fraction(nanosecond: u32, w: &mut impl Write) -> fmt::Result {
  if nanosecond == 0 {
    return Ok(());
  }
  let mut digits = [b'0'; 9];
  let mut num = nanosecond;
  for elem in digits.iter_mut().rev() {
    *elem = b'0'.wrapping_add((num % 10) as u8);
    num /= 10;
  }
  let len = digits.iter().rposition(|elem| *elem != b'0').map_or(0, |idx| idx.wrapping_add(1));
  w.write_char('.')?;
  for elem in digits.iter().take(len) {
    w.write_char(char::from(*elem))?;
  }
  Ok(())
}

/// `±HH:MM`, `±HH:MM:SS` when there are remaining seconds or `Z` if `zero_as_z` is set.
pub(crate) fn push_offset(offset: UtcOffset, zero_as_z: bool, w: &mut impl Write) -> fmt::Result {
  if zero_as_z && offset.is_utc() {
    return w.write_char('Z');
  }
  w.write_char(if offset.is_negative() { '-' } else { '+' })?;
  push_two_digits(offset.whole_hours().unsigned_abs(), w)?;
  w.write_char(':')?;
  push_two_digits(offset.minutes_past_hour().unsigned_abs(), w)?;
  let seconds = offset.seconds_past_minute().unsigned_abs();
  if seconds > 0 {
    w.write_char(':')?;
    push_two_digits(seconds, w)?;
  }
  Ok(())
}

pub(crate) fn push_time(time: Time, w: &mut impl Write) -> fmt::Result {
  push_two_digits(time.hour(), w)?;
  w.write_char(':')?;
  push_two_digits(time.minute(), w)?;
  w.write_char(':')?;
  push_two_digits(time.second(), w)?;
  push_fraction(time.nanosecond(), w)
}

pub(crate) fn push_two_digits(num: u8, w: &mut impl Write) -> fmt::Result {
  w.write_char(char::from(b'0'.wrapping_add(num / 10)))?;
  w.write_char(char::from(b'0'.wrapping_add(num % 10)))
}

/// At least four zero-padded digits. Years before `0000` are prefixed with `-` and years after
/// `9999` are prefixed with `+`.
pub(crate) fn push_year(year: i32, w: &mut impl Write) -> fmt::Result {
  if year < 0 {
    w.write_char('-')?;
  } else if year > 9999 {
    w.write_char('+')?;
  } else {
  }
  let mut digits = [b'0'; 10];
  let mut num = year.unsigned_abs();
  for elem in digits.iter_mut().rev() {
    *elem = b'0'.wrapping_add((num % 10) as u8);
    num /= 10;
  }
  let first = digits.iter().position(|elem| *elem != b'0').unwrap_or(digits.len()).min(6);
  for elem in digits.iter().skip(first) {
    w.write_char(char::from(*elem))?;
  }
  Ok(())
}
