use crate::calendar::CalendarToken;
use core::fmt::{Debug, Display, Formatter};

/// Calendar error
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CalendarError {
  // Generic
  //
  /// Underlying time structure couldn't hold the value generated during an arithmetic operation.
  ArithmeticOverflow,
  /// Epoch days must be within the range covered by [`crate::calendar::Date::MIN`] and
  /// [`crate::calendar::Date::MAX`].
  InvalidEpochDays {
    /// Invalid received number
    received: i64,
  },
  /// A day can only have up to 24 hours
  InvalidHour {
    /// Invalid received number
    received: u8,
  },
  /// A hour can only have up to 60 minutes
  InvalidMinute {
    /// Invalid received number
    received: u8,
  },
  /// A year can only have up to 12 months
  InvalidMonth {
    /// Invalid received number
    received: u8,
  },
  /// The day does not exist in the associated month
  InvalidMonthDay {
    /// Number of days of the associated month
    max: u8,
    /// Invalid received number
    received: u8,
  },
  /// A second can only have up to `999_999_999` nanoseconds
  InvalidNanosecond {
    /// Invalid received number
    received: u32,
  },
  /// A day can only have up to `86_399_999_999_999` nanoseconds
  InvalidNanosOfDay {
    /// Invalid received number
    received: u64,
  },
  /// Offsets can only have up to 23 hours
  InvalidOffsetHour {
    /// Invalid received number
    received: u8,
  },
  /// Offsets can only have up to 59 minutes past the hour
  InvalidOffsetMinute {
    /// Invalid received number
    received: u8,
  },
  /// Offsets must be within the `-23:59:59` ~ `+23:59:59` range
  InvalidOffsetSeconds {
    /// Invalid received number
    received: i32,
  },
  /// A minute can only have up to 60 seconds
  InvalidSecond {
    /// Invalid received number
    received: u8,
  },
  /// Weekdays are numbered from 1 to 7
  InvalidWeekday {
    /// Invalid received number
    received: u8,
  },

  // Parsing
  //
  /// The grammar of the target type doesn't provide all the necessary components
  IncompleteParsingParams,
  /// Provided data ended or didn't contain ASCII digits where a fixed-width number was expected
  InvalidParsingBytes {
    /// Byte index where the number starts
    position: usize,
  },
  /// A field has the right shape but its value is out of bounds
  InvalidParsingField {
    /// Token that describes the field
    field: CalendarToken,
    /// Byte index where the field starts
    position: usize,
  },
  /// Fractional seconds must have between 1 and 9 digits
  InvalidParsingFraction {
    /// Byte index of the dot
    position: usize,
  },
  /// A literal of the grammar does not match the provided data
  InvalidParsingLiteral {
    /// Expected ASCII character
    expected: u8,
    /// Byte index of the literal
    position: usize,
  },
  /// Provided data can not represent an UTC offset
  InvalidParsingTimezone {
    /// Byte index where the offset starts
    position: usize,
  },
  /// Provided data has remaining bytes after a complete value
  TrailingParsingBytes {
    /// Byte index of the first unexpected byte
    position: usize,
  },
}

impl CalendarError {
  /// Broad category of this error.
  #[inline]
  pub const fn kind(&self) -> CalendarErrorKind {
    match self {
      Self::ArithmeticOverflow => CalendarErrorKind::Overflow,
      Self::InvalidEpochDays { .. } | Self::InvalidNanosOfDay { .. } => {
        CalendarErrorKind::OutOfRange
      }
      Self::InvalidHour { .. }
      | Self::InvalidMinute { .. }
      | Self::InvalidMonth { .. }
      | Self::InvalidMonthDay { .. }
      | Self::InvalidNanosecond { .. }
      | Self::InvalidOffsetHour { .. }
      | Self::InvalidOffsetMinute { .. }
      | Self::InvalidSecond { .. }
      | Self::InvalidWeekday { .. } => CalendarErrorKind::InvalidComponent,
      Self::InvalidOffsetSeconds { .. } => CalendarErrorKind::InvalidOffset,
      Self::IncompleteParsingParams
      | Self::InvalidParsingBytes { .. }
      | Self::InvalidParsingField { .. }
      | Self::InvalidParsingFraction { .. }
      | Self::InvalidParsingLiteral { .. }
      | Self::InvalidParsingTimezone { .. }
      | Self::TrailingParsingBytes { .. } => CalendarErrorKind::Parse,
    }
  }
}

impl Display for CalendarError {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for CalendarError {}

/// Broad category of a [`CalendarError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CalendarErrorKind {
  /// A field value is outside its valid domain, e.g. month 13 or hour 25.
  InvalidComponent,
  /// An UTC offset is outside the supported range.
  InvalidOffset,
  /// An arithmetic result exceeds the representable magnitude.
  Overflow,
  /// An aggregate value, e.g. nanoseconds of a day, is outside its domain.
  OutOfRange,
  /// Input text does not match the required grammar.
  Parse,
}
