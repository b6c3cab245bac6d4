use crate::calendar::{CalendarError, DateTime, Duration};

/// Source of the current instant.
///
/// Implementations must sample whole seconds and sub-second nanoseconds at once.
pub trait Clock {
  /// Signed span of time elapsed since the UNIX epoch (1970-01-01T00:00:00Z).
  fn since_unix_epoch(&self) -> Result<Duration, CalendarError>;
}

impl<T> Clock for &T
where
  T: Clock + ?Sized,
{
  #[inline]
  fn since_unix_epoch(&self) -> Result<Duration, CalendarError> {
    (*self).since_unix_epoch()
  }
}

/// Always returns the same instant. Useful for deterministic outputs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock {
  since_unix_epoch: Duration,
}

impl FixedClock {
  /// Clock stopped at the given span since the UNIX epoch.
  #[inline]
  pub const fn new(since_unix_epoch: Duration) -> Self {
    Self { since_unix_epoch }
  }

  /// Clock stopped at the given UTC instant.
  #[inline]
  pub const fn from_date_time(utc: DateTime) -> Self {
    Self { since_unix_epoch: utc.difference(DateTime::EPOCH) }
  }
}

impl Clock for FixedClock {
  #[inline]
  fn since_unix_epoch(&self) -> Result<Duration, CalendarError> {
    Ok(self.since_unix_epoch)
  }
}

/// Reads [`std::time::SystemTime`]. Instants before the UNIX epoch are returned as negative
/// spans.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
  #[inline]
  fn since_unix_epoch(&self) -> Result<Duration, CalendarError> {
    let rslt = match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
      Ok(elem) => std_duration(elem),
      Err(err) => std_duration(err.duration()).map(Duration::neg),
    };
    if let Ok(_elem) = &rslt {
      _trace!(since_unix_epoch = %_elem, "Sampled system clock");
    }
    rslt
  }
}

#[cfg(feature = "std")]
fn std_duration(from: core::time::Duration) -> Result<Duration, CalendarError> {
  let Ok(seconds) = i64::try_from(from.as_secs()) else {
    return Err(CalendarError::ArithmeticOverflow);
  };
  Duration::new(seconds, from.subsec_nanos().cast_signed())
}
