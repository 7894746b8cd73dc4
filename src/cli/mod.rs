//! The TestKit command-line interface.
//!
//! Runs the built-in demonstration suite through the library and prints the
//! report. The exit status is 1 when the suite failed and 2 on usage errors.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::args::TestKitArgs;
use crate::errors::Result;
use crate::options::{DetailDepth, Options};
use crate::{Outcome, TestTree};

pub mod args;
pub mod demo;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = TestKitArgs::parse();
    init_tracing();

    match execute(&args) {
        Ok(Outcome::Failed) => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(2);
        }
    }
}

/// Builds the options, records the suite, prints it and returns the outcome.
pub fn execute(args: &TestKitArgs) -> Result<Outcome> {
    let options = options_from_args(args)?;
    tracing::debug!(?options, "running demonstration suite");

    let mut tree = TestTree::new(options);
    demo::record_suite(&mut tree, args.with_failures);
    output::print_report(&tree, args.format)?;
    Ok(tree.outcome())
}

/// Environment defaults, overridden by flags.
pub fn options_from_args(args: &TestKitArgs) -> Result<Options> {
    let mut options = Options::from_env()?;
    if let Some(depth) = args.detail_depth {
        options.detail_depth = DetailDepth::from_i64(depth)?;
    }
    if args.no_color {
        options.use_colors = false;
    }
    Ok(options)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
