//! Flags accepted by the `testkit` binary: report depth, colors, output
//! format, and whether the demonstration suite includes failing assertions.

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "testkit",
    version,
    about = "Runs the TestKit demonstration suite and prints its report."
)]
pub struct TestKitArgs {
    /// Nested levels to expand before collapsing segments (-1 for unlimited).
    /// Falls back to TESTKIT_DETAIL_DEPTH.
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    pub detail_depth: Option<i64>,

    /// Disable ANSI colors in the report.
    #[arg(long)]
    pub no_color: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Add deliberately failing assertions to the suite.
    #[arg(long)]
    pub with_failures: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
