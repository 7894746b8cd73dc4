//! Handles all user-facing output for the CLI.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::args::Format;
use crate::errors::Result;
use crate::{report, TestTree};

/// Prints the tree in `format`, followed by a summary line for text output.
pub fn print_report(tree: &TestTree, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", report::to_json(tree.root())?),
        Format::Text => {
            println!("{}", tree.report().trim_end());
            print_summary(tree);
        }
    }
    Ok(())
}

fn print_summary(tree: &TestTree) {
    let choice = if tree.options().use_colors {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let summary = tree.summary();

    println!();
    let color = if summary.has_failures() {
        Color::Red
    } else {
        Color::Green
    };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(
        stdout,
        "{} passed, {} failed, {} not run",
        summary.passed, summary.failed, summary.not_run
    );
    let _ = stdout.reset();
    let _ = writeln!(stdout);
}
