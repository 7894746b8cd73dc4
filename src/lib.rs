//! TestKit: an in-process test tree and reporter.
//!
//! Callers declare nested, named segments, record assertions in the active
//! one, and render the aggregated results as an indented, colorized report.
//!
//! ```
//! use testkit::{require, section, Options, TestTree};
//!
//! let mut tree = TestTree::new(Options::plain());
//! section!(tree, "Math", {
//!     require!(tree, 2 + 2 == 4);
//! });
//! assert_eq!(tree.report(), "Math: [all tests passed]\n  ✓ 2 + 2 == 4\n");
//! ```

pub use crate::context::{Mode, ScopeGuard, TestTree};
pub use crate::errors::TestKitError;
pub use crate::location::SourceLocation;
pub use crate::options::{DetailDepth, Options};
pub use crate::outcome::Outcome;
pub use crate::summary::TestSummary;
pub use crate::tree::{Node, Segment, Task};

pub mod cli;
pub mod context;
pub mod errors;
pub mod location;
mod macros;
pub mod options;
pub mod outcome;
pub mod report;
pub mod summary;
pub mod tree;
