use crate::calendar::CalendarError;
use core::fmt::{Display, Formatter};

/// Day of the week.
///
/// The derived ordering starts on Monday. Sunday-first orderings can be obtained through
/// [`Weekday::days_from_sunday`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Weekday {
  /// Monday
  Monday,
  /// Tuesday
  Tuesday,
  /// Wednesday
  Wednesday,
  /// Thursday
  Thursday,
  /// Friday
  Friday,
  /// Saturday
  Saturday,
  /// Sunday
  Sunday,
}

impl Weekday {
  /// Creates a new instance from a number where Monday is `1` and Sunday is `7`.
  #[inline]
  pub const fn from_number_from_monday(number: u8) -> Result<Self, CalendarError> {
    Ok(match number {
      1 => Self::Monday,
      2 => Self::Tuesday,
      3 => Self::Wednesday,
      4 => Self::Thursday,
      5 => Self::Friday,
      6 => Self::Saturday,
      7 => Self::Sunday,
      _ => return Err(CalendarError::InvalidWeekday { received: number }),
    })
  }

  /// Number of days since the previous Monday, from `0` to `6`.
  #[inline]
  pub const fn days_from_monday(self) -> u8 {
    match self {
      Self::Monday => 0,
      Self::Tuesday => 1,
      Self::Wednesday => 2,
      Self::Thursday => 3,
      Self::Friday => 4,
      Self::Saturday => 5,
      Self::Sunday => 6,
    }
  }

  /// Number of days since the previous Sunday, from `0` to `6`.
  #[inline]
  pub const fn days_from_sunday(self) -> u8 {
    match self {
      Self::Sunday => 0,
      _ => self.days_from_monday().wrapping_add(1),
    }
  }

  /// Full name
  #[inline]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Monday => "Monday",
      Self::Tuesday => "Tuesday",
      Self::Wednesday => "Wednesday",
      Self::Thursday => "Thursday",
      Self::Friday => "Friday",
      Self::Saturday => "Saturday",
      Self::Sunday => "Sunday",
    }
  }

  /// Following day.
  #[inline]
  #[must_use]
  pub const fn next(self) -> Self {
    match self {
      Self::Monday => Self::Tuesday,
      Self::Tuesday => Self::Wednesday,
      Self::Wednesday => Self::Thursday,
      Self::Thursday => Self::Friday,
      Self::Friday => Self::Saturday,
      Self::Saturday => Self::Sunday,
      Self::Sunday => Self::Monday,
    }
  }

  /// ISO-8601 number where Monday is `1` and Sunday is `7`.
  #[inline]
  pub const fn number_from_monday(self) -> u8 {
    self.days_from_monday().wrapping_add(1)
  }

  /// Number where Sunday is `1` and Saturday is `7`.
  #[inline]
  pub const fn number_from_sunday(self) -> u8 {
    self.days_from_sunday().wrapping_add(1)
  }

  /// Preceding day.
  #[inline]
  #[must_use]
  pub const fn previous(self) -> Self {
    match self {
      Self::Monday => Self::Sunday,
      Self::Tuesday => Self::Monday,
      Self::Wednesday => Self::Tuesday,
      Self::Thursday => Self::Wednesday,
      Self::Friday => Self::Thursday,
      Self::Saturday => Self::Friday,
      Self::Sunday => Self::Saturday,
    }
  }

  /// Abbreviated name
  #[inline]
  pub const fn short_name(self) -> &'static str {
    match self {
      Self::Monday => "Mon",
      Self::Tuesday => "Tue",
      Self::Wednesday => "Wed",
      Self::Thursday => "Thu",
      Self::Friday => "Fri",
      Self::Saturday => "Sat",
      Self::Sunday => "Sun",
    }
  }
}

impl Display for Weekday {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod tests {
  use crate::calendar::{CalendarError, Weekday};

  #[test]
  fn numbering() {
    assert_eq!(Weekday::Monday.number_from_monday(), 1);
    assert_eq!(Weekday::Sunday.number_from_monday(), 7);
    assert_eq!(Weekday::Sunday.number_from_sunday(), 1);
    assert_eq!(Weekday::Saturday.number_from_sunday(), 7);
    assert_eq!(Weekday::Wednesday.days_from_sunday(), 3);
    for number in 1..=7 {
      let weekday = Weekday::from_number_from_monday(number).unwrap();
      assert_eq!(weekday.number_from_monday(), number);
    }
    assert_eq!(
      Weekday::from_number_from_monday(0),
      Err(CalendarError::InvalidWeekday { received: 0 })
    );
    assert_eq!(
      Weekday::from_number_from_monday(8),
      Err(CalendarError::InvalidWeekday { received: 8 })
    );
  }

  #[test]
  fn succession() {
    let mut weekday = Weekday::Thursday;
    for _ in 0..7 {
      assert_eq!(weekday.next().previous(), weekday);
      weekday = weekday.next();
    }
    assert_eq!(weekday, Weekday::Thursday);
    assert_eq!(Weekday::Sunday.next(), Weekday::Monday);
    assert_eq!(Weekday::Monday.previous(), Weekday::Sunday);
  }
}
