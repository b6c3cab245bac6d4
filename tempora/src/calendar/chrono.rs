use crate::calendar::{CalendarError, Date, DateTime, OffsetDateTime, Time, UtcOffset};
use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

impl TryFrom<NaiveDate> for Date {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: NaiveDate) -> crate::Result<Self> {
    Ok(Date::from_ymd(from.year(), from.month().try_into()?, from.day().try_into()?)?)
  }
}

impl TryFrom<Date> for NaiveDate {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: Date) -> crate::Result<Self> {
    let (year, month, day) = from.ymd();
    Ok(
      NaiveDate::from_ymd_opt(year, month.into(), day.into())
        .ok_or(CalendarError::ArithmeticOverflow)?,
    )
  }
}

impl TryFrom<NaiveTime> for Time {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: NaiveTime) -> crate::Result<Self> {
    Ok(Time::from_hms_ns(
      from.hour().try_into()?,
      from.minute().try_into()?,
      from.second().try_into()?,
      from.nanosecond(),
    )?)
  }
}

impl TryFrom<Time> for NaiveTime {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: Time) -> crate::Result<Self> {
    Ok(
      NaiveTime::from_hms_nano_opt(
        from.hour().into(),
        from.minute().into(),
        from.second().into(),
        from.nanosecond(),
      )
      .ok_or(CalendarError::ArithmeticOverflow)?,
    )
  }
}

impl TryFrom<NaiveDateTime> for DateTime {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: NaiveDateTime) -> crate::Result<Self> {
    Ok(DateTime::new(from.date().try_into()?, from.time().try_into()?))
  }
}

impl TryFrom<DateTime> for NaiveDateTime {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: DateTime) -> crate::Result<Self> {
    Ok(NaiveDateTime::new(from.date().try_into()?, from.time().try_into()?))
  }
}

impl TryFrom<chrono::DateTime<FixedOffset>> for OffsetDateTime {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: chrono::DateTime<FixedOffset>) -> crate::Result<Self> {
    let local = DateTime::try_from(from.naive_local())?;
    let offset = UtcOffset::from_seconds(from.offset().local_minus_utc())?;
    Ok(local.and_offset(offset)?)
  }
}

impl TryFrom<OffsetDateTime> for chrono::DateTime<FixedOffset> {
  type Error = crate::Error;

  #[inline]
  fn try_from(from: OffsetDateTime) -> crate::Result<Self> {
    let offset =
      FixedOffset::east_opt(from.offset().as_seconds()).ok_or(CalendarError::ArithmeticOverflow)?;
    let utc = NaiveDateTime::try_from(from.utc())?;
    Ok(chrono::DateTime::from_naive_utc_and_offset(utc, offset))
  }
}
