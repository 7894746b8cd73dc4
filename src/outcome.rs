//! The tri-state result carried by every node of the test tree.
//!
//! Tasks carry a fixed [`Outcome`]; segments derive theirs from their children
//! through [`Outcome::aggregate`].

use serde::Serialize;
use std::fmt;

/// Result of a task, or the aggregate result of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No informative result: the assertion was skipped, or nothing was recorded.
    NotRun,
    Failed,
    Passed,
}

impl Outcome {
    /// Builds a terminal outcome from an evaluated condition.
    pub fn from_result(result: bool) -> Self {
        if result {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }

    /// Combines child outcomes, in order, into one.
    ///
    /// - no children: `NotRun`
    /// - any `Failed`: `Failed` (stops at the first one)
    /// - otherwise any `Passed`: `Passed`
    /// - otherwise (all `NotRun`): `NotRun`
    ///
    /// A mix of `Passed` and `NotRun` without a failure resolves to `Passed`.
    /// It arises when a passing sibling sits next to an empty segment, and the
    /// empty one contributes nothing either way.
    pub fn aggregate<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome>,
    {
        let mut any_passed = false;
        for outcome in outcomes {
            match outcome {
                Outcome::Failed => return Outcome::Failed,
                Outcome::Passed => any_passed = true,
                Outcome::NotRun => {}
            }
        }

        if any_passed {
            Outcome::Passed
        } else {
            Outcome::NotRun
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::NotRun => "not run",
            Outcome::Failed => "failed",
            Outcome::Passed => "passed",
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_not_run() {
        assert_eq!(Outcome::aggregate(Vec::new()), Outcome::NotRun);
    }

    #[test]
    fn failure_dominates() {
        let outcomes = [Outcome::Passed, Outcome::Failed, Outcome::NotRun];
        assert_eq!(Outcome::aggregate(outcomes), Outcome::Failed);
    }

    #[test]
    fn all_passed_and_all_not_run() {
        assert_eq!(
            Outcome::aggregate([Outcome::Passed, Outcome::Passed]),
            Outcome::Passed
        );
        assert_eq!(
            Outcome::aggregate([Outcome::NotRun, Outcome::NotRun]),
            Outcome::NotRun
        );
    }

    #[test]
    fn passed_next_to_not_run_is_passed() {
        assert_eq!(
            Outcome::aggregate([Outcome::NotRun, Outcome::Passed, Outcome::NotRun]),
            Outcome::Passed
        );
    }

    #[test]
    fn from_result_maps_booleans() {
        assert_eq!(Outcome::from_result(true), Outcome::Passed);
        assert_eq!(Outcome::from_result(false), Outcome::Failed);
    }
}
