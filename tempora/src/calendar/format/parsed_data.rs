use crate::calendar::{
  CalendarError, CalendarToken, Date, DateTime, OffsetDateTime, SECONDS_PER_MINUTE, Time,
  UtcOffset, misc::u8i32,
};
use atoi::FromRadix10;

pub(crate) enum ParsedData {
  Date(Date),
  DateTime(DateTime),
  OffsetDateTime(OffsetDateTime),
  Time(Time),
  UtcOffset(UtcOffset),
}

impl ParsedData {
  /// Walks `tokens` over `bytes`, validating each field as soon as it is consumed.
  #[inline]
  pub(crate) fn new(bytes: &[u8], tokens: &[CalendarToken]) -> crate::Result<Self> {
    let rslt = Self::manage(bytes, tokens);
    if let Err(_err) = &rslt {
      _debug!(error = ?_err, "Unable to parse calendar data");
    }
    rslt
  }

  #[allow(clippy::too_many_lines, reason = "enum is exhaustive")]
  fn manage(mut bytes: &[u8], tokens: &[CalendarToken]) -> crate::Result<Self> {
    let len = bytes.len();
    let mut day_opt: Option<(u8, usize)> = None;
    let mut hour_opt = None;
    let mut is_utc_only = false;
    let mut minute_opt = None;
    let mut month_opt = None;
    let mut nanos_opt = None;
    let mut offset_opt = None;
    let mut second_opt = None;
    let mut year_opt = None;
    for token in tokens.iter().copied() {
      let position = len.wrapping_sub(bytes.len());
      let rhs = match token {
        CalendarToken::Colon => parse_token_literal(b':', bytes, position)?,
        CalendarToken::Dash => parse_token_literal(b'-', bytes, position)?,
        CalendarToken::DotNano => {
          let [b'.', rest @ ..] = bytes else {
            continue;
          };
          let digits = rest.iter().take_while(|elem| elem.is_ascii_digit()).count();
          if !(1..=9).contains(&digits) {
            return Err(CalendarError::InvalidParsingFraction { position }.into());
          }
          let (num, rhs) = rest.split_at(digits);
          let mut nanos = u32::from_radix_10(num).0;
          for _ in digits..9 {
            nanos = nanos.wrapping_mul(10);
          }
          nanos_opt = Some(nanos);
          rhs
        }
        CalendarToken::FourDigitYear => {
          let (year, rhs) = number::<u16>(bytes, 4, position)?;
          year_opt = Some(year);
          rhs
        }
        CalendarToken::Separator => parse_token_literal(b'T', bytes, position)?,
        CalendarToken::TwoDigitDay => {
          let (day, rhs) = bounded_field(bytes, token, position, 1, 31)?;
          day_opt = Some((day, position));
          rhs
        }
        CalendarToken::TwoDigitHour => {
          let (hour, rhs) = bounded_field(bytes, token, position, 0, 23)?;
          hour_opt = Some(hour);
          rhs
        }
        CalendarToken::TwoDigitMinute => {
          let (minute, rhs) = bounded_field(bytes, token, position, 0, 59)?;
          minute_opt = Some(minute);
          rhs
        }
        CalendarToken::TwoDigitMonth => {
          let (month, rhs) = bounded_field(bytes, token, position, 1, 12)?;
          month_opt = Some(month);
          rhs
        }
        CalendarToken::TwoDigitSecond => {
          let (second, rhs) = bounded_field(bytes, token, position, 0, 59)?;
          second_opt = Some(second);
          rhs
        }
        CalendarToken::Utc => {
          is_utc_only = true;
          offset_opt = Some(UtcOffset::UTC);
          parse_token_literal(b'Z', bytes, position)?
        }
        CalendarToken::UtcOffset => {
          let (offset, rhs) = utc_offset(bytes, position)?;
          offset_opt = Some(offset);
          rhs
        }
      };
      bytes = rhs;
    }
    if !bytes.is_empty() {
      let position = len.wrapping_sub(bytes.len());
      return Err(CalendarError::TrailingParsingBytes { position }.into());
    }
    let date_opt = match (year_opt, month_opt, day_opt) {
      (Some(year), Some(month), Some((day, position))) => {
        let Ok(date) = Date::from_ymd(year.into(), month, day) else {
          return Err(
            CalendarError::InvalidParsingField { field: CalendarToken::TwoDigitDay, position }
              .into(),
          );
        };
        Some(date)
      }
      (None, None, None) => None,
      _ => return Err(CalendarError::IncompleteParsingParams.into()),
    };
    let time_opt = match (hour_opt, minute_opt, second_opt) {
      (Some(hour), Some(minute), Some(second)) => {
        Some(Time::from_hms_ns(hour, minute, second, nanos_opt.unwrap_or(0))?)
      }
      (None, None, None) => None,
      _ => return Err(CalendarError::IncompleteParsingParams.into()),
    };
    Ok(match (date_opt, time_opt, offset_opt) {
      (Some(date), None, None) => Self::Date(date),
      (None, Some(time), None) => Self::Time(time),
      (None, None, Some(offset)) => Self::UtcOffset(offset),
      (Some(date), Some(time), Some(_)) if is_utc_only => {
        Self::DateTime(DateTime::new(date, time))
      }
      (Some(date), Some(time), Some(offset)) => {
        Self::OffsetDateTime(OffsetDateTime::from_local(date, time, offset)?)
      }
      _ => return Err(CalendarError::IncompleteParsingParams.into()),
    })
  }
}

fn bounded_field(
  bytes: &[u8],
  field: CalendarToken,
  position: usize,
  min: u8,
  max: u8,
) -> crate::Result<(u8, &[u8])> {
  let (num, rhs) = number::<u8>(bytes, 2, position)?;
  if num < min || num > max {
    return Err(CalendarError::InvalidParsingField { field, position }.into());
  }
  Ok((num, rhs))
}

/// Fixed-width unsigned number composed only by ASCII digits.
fn number<T>(bytes: &[u8], width: usize, position: usize) -> crate::Result<(T, &[u8])>
where
  T: FromRadix10,
{
  let Some((lhs, rhs)) = bytes.split_at_checked(width) else {
    return Err(CalendarError::InvalidParsingBytes { position }.into());
  };
  let (num, read) = T::from_radix_10(lhs);
  if read != width {
    return Err(CalendarError::InvalidParsingBytes { position }.into());
  }
  Ok((num, rhs))
}

fn parse_token_literal(lit: u8, bytes: &[u8], position: usize) -> crate::Result<&[u8]> {
  let [first, rest @ ..] = bytes else {
    return Err(CalendarError::InvalidParsingLiteral { expected: lit, position }.into());
  };
  if *first != lit {
    return Err(CalendarError::InvalidParsingLiteral { expected: lit, position }.into());
  }
  Ok(rest)
}

fn utc_offset(bytes: &[u8], position: usize) -> crate::Result<(UtcOffset, &[u8])> {
  let (is_positive, after_sign) = match bytes {
    [b'Z', rest @ ..] => return Ok((UtcOffset::UTC, rest)),
    [b'+', rest @ ..] => (true, rest),
    [b'-', rest @ ..] => (false, rest),
    _ => return Err(CalendarError::InvalidParsingTimezone { position }.into()),
  };
  let invalid = || CalendarError::InvalidParsingTimezone { position };
  let (hours, after_hours) = number::<u8>(after_sign, 2, position).map_err(|_err| invalid())?;
  let after_colon = parse_token_literal(b':', after_hours, position).map_err(|_err| invalid())?;
  let (minutes, after_minutes) =
    number::<u8>(after_colon, 2, position).map_err(|_err| invalid())?;
  let (seconds, rest) = match after_minutes {
    [b':', after_seconds_colon @ ..] => {
      number::<u8>(after_seconds_colon, 2, position).map_err(|_err| invalid())?
    }
    _ => (0, after_minutes),
  };
  let field_err =
    || CalendarError::InvalidParsingField { field: CalendarToken::UtcOffset, position };
  if seconds >= SECONDS_PER_MINUTE {
    return Err(field_err().into());
  }
  let Ok(offset) = UtcOffset::from_hours_minutes(is_positive, hours, minutes) else {
    return Err(field_err().into());
  };
  let extra = if is_positive { u8i32(seconds) } else { u8i32(seconds).wrapping_neg() };
  let Ok(offset) = UtcOffset::from_seconds(offset.as_seconds().wrapping_add(extra)) else {
    return Err(field_err().into());
  };
  Ok((offset, rest))
}
