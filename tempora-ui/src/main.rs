//! Command-line interface for Tempora

mod calendar;
mod clap;

fn main() -> tempora::Result<()> {
  tempora::misc::tracing_tree_init(None)?;
  clap::init()
}
