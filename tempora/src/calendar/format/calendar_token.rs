/// Semantical unit of the fixed RFC 3339 grammars understood by this crate.
///
/// # Date
///
/// | Token           | Example | Description                         |
/// | --------------- | ------- | ----------------------------------- |
/// | `FourDigitYear` | `2001`  | Year with four zero-padded digits   |
/// | `TwoDigitMonth` | `07`    | Month with two zero-padded digits   |
/// | `TwoDigitDay`   | `08`    | Day with two zero-padded digits     |
///
/// # Time
///
/// | Token            | Example  | Description                                  |
/// | ---------------- | -------- | -------------------------------------------- |
/// | `TwoDigitHour`   | `00`     | Hour with two zero-padded digits             |
/// | `TwoDigitMinute` | `59`     | Minute with two zero-padded digits           |
/// | `TwoDigitSecond` | `59`     | Second with two zero-padded digits           |
/// | `DotNano`        | `.12345` | Optional dot followed by 1 to 9 digits       |
///
/// # Offset
///
/// | Token       | Example          | Description                    |
/// | ----------- | ---------------- | ------------------------------ |
/// | `Utc`       | `Z`              | Mandatory UTC designator       |
/// | `UtcOffset` | `Z`, `-03:30`    | UTC designator or `±HH:MM`     |
///
/// # Literals
///
/// | Token       | Literal |
/// | ----------- | ------- |
/// | `Colon`     | `:`     |
/// | `Dash`      | `-`     |
/// | `Separator` | `T`     |
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CalendarToken {
  /// Literal `:`
  Colon,
  /// Literal `-`
  Dash,
  /// Optional `.123_456_789`
  DotNano,
  /// `2001`
  FourDigitYear,
  /// Literal `T`
  Separator,
  /// `08`
  TwoDigitDay,
  /// `00`
  TwoDigitHour,
  /// `00`
  TwoDigitMinute,
  /// `07`
  TwoDigitMonth,
  /// `00`
  TwoDigitSecond,
  /// Literal `Z`
  Utc,
  /// `Z` or `±HH:MM`
  UtcOffset,
}
