//! Proleptic Gregorian dates, clock times, signed durations and fixed UTC offsets.
//!
//! Every type is an immutable value. Textual interchange follows the RFC 3339 profile of
//! ISO 8601 and numeric interchange uses UNIX timestamps.

mod calendar_error;
#[cfg(feature = "chrono")]
mod chrono;
mod clock;
mod date;
mod date_time;
mod duration;
mod format;
mod misc;
mod offset_date_time;
mod time;
#[cfg(feature = "_tracing-tree")]
mod tracing_tree_timer;
mod utc_offset;
mod weekday;

pub use calendar_error::{CalendarError, CalendarErrorKind};
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, FixedClock};
pub use date::Date;
pub use date_time::DateTime;
pub use duration::Duration;
pub use format::calendar_token::CalendarToken;
pub use offset_date_time::OffsetDateTime;
pub use time::Time;
#[cfg(feature = "_tracing-tree")]
pub use tracing_tree_timer::TracingTreeTimer;
pub use utc_offset::UtcOffset;
pub use weekday::Weekday;

pub(crate) const DAYS_PER_QUADCENTURY: i64 = 146_097;
/// Number of days between `0000-03-01` and the UNIX epoch.
pub(crate) const EPOCH_SHIFTED_DAYS: i64 = 719_468;
pub(crate) const MILLISECONDS_PER_SECOND: u16 = 1_000;
pub(crate) const MICROSECONDS_PER_SECOND: u32 = 1_000_000;
pub(crate) const MINUTES_PER_HOUR: u8 = 60;
pub(crate) const NANOSECONDS_PER_DAY: u64 =
  misc::u32u64(SECONDS_PER_DAY) * NANOSECONDS_PER_SECOND_U64;
pub(crate) const NANOSECONDS_PER_HOUR: u64 =
  misc::u16u64(SECONDS_PER_HOUR) * NANOSECONDS_PER_SECOND_U64;
pub(crate) const NANOSECONDS_PER_MICROSECOND: u32 = 1_000;
pub(crate) const NANOSECONDS_PER_MILLISECOND: u32 = 1_000_000;
pub(crate) const NANOSECONDS_PER_MINUTE: u64 =
  misc::u8u64(SECONDS_PER_MINUTE) * NANOSECONDS_PER_SECOND_U64;
pub(crate) const NANOSECONDS_PER_SECOND: u32 = 1_000_000_000;
pub(crate) const NANOSECONDS_PER_SECOND_U64: u64 = misc::u32u64(NANOSECONDS_PER_SECOND);
pub(crate) const SECONDS_PER_DAY: u32 = misc::u16u32(SECONDS_PER_HOUR) * 24;
pub(crate) const SECONDS_PER_HOUR: u16 = misc::u8u16(SECONDS_PER_MINUTE) * 60;
pub(crate) const SECONDS_PER_MINUTE: u8 = 60;

/// Cumulative number of days before each month. The second row is used in leap years.
pub(crate) static DAYS_OF_MONTHS: [[u16; 12]; 2] = [
  [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334],
  [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335],
];
