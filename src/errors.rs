//! Recoverable errors raised while configuring TestKit.
//!
//! Assertion failures are not errors: they are recorded outcomes and only show
//! up in the report. Broken internal invariants (such as popping the root off
//! the scope stack) panic instead of returning one of these.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum TestKitError {
    #[error("invalid detail depth {value}")]
    #[diagnostic(
        code(testkit::options::detail_depth),
        help("use -1 for unlimited expansion or a non-negative number of levels")
    )]
    InvalidDetailDepth { value: i64 },

    #[error("could not parse {name}={value:?}")]
    #[diagnostic(code(testkit::options::env))]
    InvalidEnvValue { name: String, value: String },

    #[error("failed to serialize report: {message}")]
    #[diagnostic(code(testkit::report::json))]
    Serialize { message: String },
}

impl From<serde_json::Error> for TestKitError {
    fn from(error: serde_json::Error) -> Self {
        TestKitError::Serialize {
            message: error.to_string(),
        }
    }
}

pub type Result<T, E = TestKitError> = std::result::Result<T, E>;
