use std::fmt::Write;
use tempora::calendar::{Duration, OffsetDateTime, SystemClock, UtcOffset};

pub(crate) fn convert(text: &str, offset: &str) -> tempora::Result<String> {
  let instance = text.parse::<OffsetDateTime>()?;
  Ok(instance.to_offset(offset.parse()?)?.to_string())
}

pub(crate) fn diff(lhs: &str, rhs: &str) -> tempora::Result<String> {
  let lhs = lhs.parse::<OffsetDateTime>()?;
  let rhs = rhs.parse::<OffsetDateTime>()?;
  Ok(lhs.difference(rhs).to_string())
}

pub(crate) fn from_unix(
  seconds: i64,
  nanoseconds: u32,
  offset: Option<&str>,
) -> tempora::Result<String> {
  let instance = OffsetDateTime::from_unix_timestamp(seconds, nanoseconds, utc_offset(offset)?)?;
  Ok(instance.to_string())
}

pub(crate) fn now(offset: Option<&str>) -> tempora::Result<String> {
  Ok(OffsetDateTime::now(SystemClock, utc_offset(offset)?)?.to_string())
}

pub(crate) fn parse(text: &str) -> tempora::Result<String> {
  let instance = text.parse::<OffsetDateTime>()?;
  let date = instance.date();
  let mut string = String::new();
  string.write_fmt(format_args!(
    "local: {}\nutc: {}\nweekday: {}\nordinal: {}\nunix_timestamp: {}\nunix_timestamp_nanos: {}",
    instance,
    instance.utc(),
    date.weekday().name(),
    date.ordinal(),
    instance.unix_timestamp(),
    instance.unix_timestamp_nanos(),
  ))?;
  Ok(string)
}

pub(crate) fn shift(text: &str, seconds: i64, nanoseconds: i32) -> tempora::Result<String> {
  let instance = text.parse::<OffsetDateTime>()?;
  Ok(instance.add_duration(Duration::new(seconds, nanoseconds)?)?.to_string())
}

fn utc_offset(offset: Option<&str>) -> tempora::Result<UtcOffset> {
  offset.map_or(Ok(UtcOffset::UTC), str::parse)
}
