use clap::Parser;
use std::io::Write;

pub(crate) fn init() -> tempora::Result<()> {
  let args = Cli::parse();
  let line = match args.commands {
    Commands::Convert(elem) => crate::calendar::convert(&elem.text, &elem.offset)?,
    Commands::Diff(elem) => crate::calendar::diff(&elem.lhs, &elem.rhs)?,
    Commands::FromUnix(elem) => {
      crate::calendar::from_unix(elem.seconds, elem.nanoseconds, elem.offset.as_deref())?
    }
    Commands::Now(elem) => crate::calendar::now(elem.offset.as_deref())?,
    Commands::Parse(elem) => crate::calendar::parse(&elem.text)?,
    Commands::Shift(elem) => crate::calendar::shift(&elem.text, elem.seconds, elem.nanoseconds)?,
  };
  writeln!(std::io::stdout().lock(), "{line}")?;
  Ok(())
}

/// Parses, converts and shifts RFC 3339 timestamps
#[derive(Debug, clap::Parser)]
#[command(author, long_about = None, name = "tempora", version)]
struct Cli {
  #[command(subcommand)]
  commands: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
  Convert(Convert),
  Diff(Diff),
  FromUnix(FromUnix),
  Now(Now),
  Parse(Parse),
  Shift(Shift),
}

/// Displays the same instant in another offset
#[derive(Debug, clap::Args)]
struct Convert {
  /// Timestamp with offset, e.g., `2024-06-15T14:30:45+05:30`
  #[arg(allow_hyphen_values = true)]
  text: String,
  /// Target offset, `Z` or `±HH:MM`
  #[arg(allow_hyphen_values = true, long, short = 'o')]
  offset: String,
}

/// Signed span between two timestamps, i.e., `lhs - rhs`
#[derive(Debug, clap::Args)]
struct Diff {
  #[arg(allow_hyphen_values = true)]
  lhs: String,
  #[arg(allow_hyphen_values = true)]
  rhs: String,
}

/// Creates a timestamp from the number of seconds since the UNIX epoch
#[derive(Debug, clap::Args)]
struct FromUnix {
  #[arg(allow_negative_numbers = true)]
  seconds: i64,
  /// Additional nanoseconds
  #[arg(default_value_t = 0, long, short = 'n')]
  nanoseconds: u32,
  /// Displayed offset. Defaults to UTC.
  #[arg(allow_hyphen_values = true, long, short = 'o')]
  offset: Option<String>,
}

/// Current system time
#[derive(Debug, clap::Args)]
struct Now {
  /// Displayed offset. Defaults to UTC.
  #[arg(allow_hyphen_values = true, long, short = 'o')]
  offset: Option<String>,
}

/// Validates a timestamp and prints its components
#[derive(Debug, clap::Args)]
struct Parse {
  #[arg(allow_hyphen_values = true)]
  text: String,
}

/// Adds a signed span to a timestamp, keeping its offset
#[derive(Debug, clap::Args)]
struct Shift {
  #[arg(allow_hyphen_values = true)]
  text: String,
  #[arg(allow_negative_numbers = true, long, short = 's')]
  seconds: i64,
  /// Additional nanoseconds, can be negative
  #[arg(allow_negative_numbers = true, default_value_t = 0, long, short = 'n')]
  nanoseconds: i32,
}
