use crate::calendar::{CalendarError, CalendarErrorKind};
use core::fmt::{Debug, Display, Formatter};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  // External
  //
  /// See [`core::fmt::Error`].
  FmtError(core::fmt::Error),
  /// See [`std::io::Error`].
  #[cfg(feature = "std")]
  IoError(std::io::Error),
  /// See [`tracing_subscriber::util::TryInitError`].
  #[cfg(feature = "_tracing-tree")]
  TryInitError(tracing_subscriber::util::TryInitError),
  /// See [`core::num::TryFromIntError`].
  TryFromIntError(core::num::TryFromIntError),

  // Internal
  //
  /// See [`CalendarError`].
  CalendarError(CalendarError),
}

impl Error {
  /// Classification of the inner [`CalendarError`], if any.
  #[inline]
  pub const fn calendar_kind(&self) -> Option<CalendarErrorKind> {
    match self {
      Self::CalendarError(elem) => Some(elem.kind()),
      _ => None,
    }
  }
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl From<CalendarError> for Error {
  #[inline]
  fn from(from: CalendarError) -> Self {
    Self::CalendarError(from)
  }
}

impl From<core::fmt::Error> for Error {
  #[inline]
  fn from(from: core::fmt::Error) -> Self {
    Self::FmtError(from)
  }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
  #[inline]
  fn from(from: std::io::Error) -> Self {
    Self::IoError(from)
  }
}

#[cfg(feature = "_tracing-tree")]
impl From<tracing_subscriber::util::TryInitError> for Error {
  #[inline]
  fn from(from: tracing_subscriber::util::TryInitError) -> Self {
    Self::TryInitError(from)
  }
}

impl From<core::num::TryFromIntError> for Error {
  #[inline]
  fn from(from: core::num::TryFromIntError) -> Self {
    Self::TryFromIntError(from)
  }
}
